//! The shared form type and input fields for creating and editing
//! transactions.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::{Transaction, TransactionKind},
};

/// The form data for creating or editing a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The calendar day the transaction happened.
    pub date: Date,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The amount of money that changed hands.
    pub amount: f64,
    /// A free-text label such as "Groceries". May be empty.
    #[serde(default)]
    pub category: String,
}

impl TransactionForm {
    /// Convert the submitted form data into a ledger row.
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            date: self.date,
            kind: self.kind,
            amount: self.amount,
            category: self.category.trim().to_owned(),
        }
    }
}

/// Renders the input fields shared by the create and edit forms.
///
/// `prefill` supplies the current values when editing; `max_date` caps the
/// date picker at today so transactions cannot be dated in the future.
pub(super) fn form_fields(prefill: Option<&Transaction>, max_date: Date) -> Markup {
    let date = prefill.map_or(max_date, |transaction| transaction.date);
    let kind = prefill.map_or(TransactionKind::Income, |transaction| transaction.kind);
    let category = prefill.map(|transaction| transaction.category.as_str());

    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    required
                    autofocus
                    value=[prefill.map(|transaction| transaction.amount)]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                max=(max_date)
                required
                value=(date)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                div class="flex items-center gap-2"
                {
                    input
                        name="kind"
                        id="kind-income"
                        type="radio"
                        value="income"
                        required
                        checked[kind == TransactionKind::Income]
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="kind-income"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Income"
                    }
                }

                div class="flex items-center gap-2"
                {
                    input
                        name="kind"
                        id="kind-expense"
                        type="radio"
                        value="expense"
                        required
                        checked[kind == TransactionKind::Expense]
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="kind-expense"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Expense"
                    }
                }
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            input
                name="category"
                id="category"
                type="text"
                placeholder="Category"
                value=[category]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
