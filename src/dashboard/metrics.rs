//! Metric cards for the dashboard: running totals, today's activity, and the
//! monthly budget check.

use maud::{Markup, html};
use time::Date;

use crate::{
    aggregation::{BudgetStatus, TodaySummary, Totals},
    dashboard::charts::format_month_labels,
    endpoints,
    html::format_currency,
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

const CARD_LABEL_STYLE: &str = "text-sm text-gray-600 dark:text-gray-400";

fn metric_card(label: &str, value: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class=(CARD_LABEL_STYLE) { (label) }
            div class="text-2xl font-bold" { (value) }
        }
    }
}

/// Renders the running totals over the whole ledger.
pub(super) fn summary_view(totals: &Totals) -> Markup {
    html! {
        section class="w-full mx-auto mb-4"
        {
            h3 class="text-xl font-semibold mb-4" { "Summary" }

            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                (metric_card("Total Income", &format_currency(totals.income)))
                (metric_card("Total Expense", &format_currency(totals.expense)))
                (metric_card("Balance", &format_currency(totals.balance)))
            }
        }
    }
}

/// Renders the summary of transactions dated today.
pub(super) fn today_view(summary: &TodaySummary) -> Markup {
    html! {
        section class="w-full mx-auto mb-4"
        {
            h3 class="text-xl font-semibold mb-4" { "Today" }

            @if summary.count == 0 {
                p class="text-gray-600 dark:text-gray-400"
                {
                    "No transactions recorded today."
                }
            } @else {
                div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4"
                {
                    (metric_card("Income", &format_currency(summary.income)))
                    (metric_card("Expense", &format_currency(summary.expense)))
                    (metric_card("Net", &format_currency(summary.net)))
                    (metric_card("New Transactions", &summary.count.to_string()))
                }
            }
        }
    }
}

/// Renders the budget check for the current month with a form to adjust the
/// limit.
///
/// The form submits via GET so the chosen limit stays in the URL and survives
/// a refresh.
pub(super) fn budget_view(
    month: Date,
    spent: f64,
    limit: f64,
    status: BudgetStatus,
) -> Markup {
    let month_label = format_month_labels(&[month]).remove(0);
    let remaining = limit - spent;

    html! {
        section class="w-full mx-auto mb-4"
        {
            h3 class="text-xl font-semibold mb-4" { "Budget Check" }

            div class=(CARD_STYLE)
            {
                div class="flex flex-wrap items-center justify-between gap-4"
                {
                    div
                    {
                        div class=(CARD_LABEL_STYLE)
                        {
                            "Spent in " (month_label)
                        }

                        div class="text-2xl font-bold" { (format_currency(spent)) }
                    }

                    form
                        method="get"
                        action=(endpoints::DASHBOARD_VIEW)
                        class="flex items-end gap-2"
                    {
                        div
                        {
                            label
                                for="limit"
                                class=(CARD_LABEL_STYLE)
                            {
                                "Monthly budget limit"
                            }

                            div class="input-wrapper"
                            {
                                input
                                    type="number"
                                    id="limit"
                                    name="limit"
                                    step="0.01"
                                    min="0"
                                    value=(limit)
                                    class="block w-36 p-2 rounded text-sm text-gray-900
                                        dark:text-white bg-gray-50 dark:bg-gray-700
                                        border border-gray-300 dark:border-gray-600"
                                ;
                            }
                        }

                        button
                            type="submit"
                            class="px-4 py-2 bg-blue-500 dark:bg-blue-600
                                hover:bg-blue-600 hover:dark:bg-blue-700
                                text-white rounded text-sm"
                        {
                            "Check"
                        }
                    }
                }

                @match status {
                    BudgetStatus::OverBudget => {
                        p class="mt-4 text-sm font-semibold text-red-600 dark:text-red-400"
                        {
                            "You have exceeded your budget for " (month_label) " by "
                            (format_currency(spent - limit)) "!"
                        }
                    }
                    BudgetStatus::WithinBudget => {
                        p class="mt-4 text-sm font-semibold text-green-600 dark:text-green-400"
                        {
                            "You are within your budget for " (month_label) ". "
                            (format_currency(remaining)) " remaining."
                        }
                    }
                }
            }
        }
    }
}
