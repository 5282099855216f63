//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for the ledger:
//! - **Monthly Overview Chart**: Income and expense totals per month
//! - **Expenses by Category Chart**: Pie chart of expense totals per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};
use time::{Date, Month};

use crate::{
    aggregation::{category_breakdown, monthly_totals, sorted_months},
    html::HeadElement,
    ledger::Ledger,
    transaction::TransactionKind,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn monthly_overview_chart(ledger: &Ledger) -> Chart {
    let months = sorted_months(ledger);
    let totals = monthly_totals(ledger);
    let labels = format_month_labels(&months);

    // Missing months within a series show as zero rather than gaps.
    let series_values = |kind: TransactionKind| -> Vec<f64> {
        months
            .iter()
            .map(|month| totals.get(&(*month, kind)).copied().unwrap_or(0.0))
            .collect()
    };

    Chart::new()
        .title(Title::new().text("Monthly Overview"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%").right("4%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color("#22c55e"))
                .data(series_values(TransactionKind::Income)),
        )
        .series(
            Bar::new()
                .name("Expense")
                .item_style(ItemStyle::new().color("#ef4444"))
                .data(series_values(TransactionKind::Expense)),
        )
}

pub(super) fn expenses_by_category_chart(ledger: &Ledger) -> Chart {
    let breakdown = category_breakdown(ledger);
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|(category, amount)| (*amount, category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().top("bottom"))
        .series(Pie::new().name("Expenses").radius("55%").data(data))
}

/// Formats month dates as three-letter abbreviations with the year, e.g.
/// "Mar 2024".
pub(super) fn format_month_labels(months: &[Date]) -> Vec<String> {
    let month_to_str = |date: &Date| {
        let abbreviation = match date.month() {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        };

        format!("{} {}", abbreviation, date.year())
    };

    months.iter().map(month_to_str).collect()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        ledger::Ledger,
        transaction::{Transaction, TransactionKind},
    };

    use super::{expenses_by_category_chart, format_month_labels, monthly_overview_chart};

    fn test_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append(Transaction {
            date: date!(2024 - 01 - 15),
            kind: TransactionKind::Income,
            amount: 1000.0,
            category: "Salary".to_owned(),
        });
        ledger.append(Transaction {
            date: date!(2024 - 03 - 10),
            kind: TransactionKind::Expense,
            amount: 200.0,
            category: "Groceries".to_owned(),
        });
        ledger
    }

    #[test]
    fn month_labels_include_year() {
        let labels = format_month_labels(&[date!(2023 - 12 - 01), date!(2024 - 01 - 01)]);

        assert_eq!(labels, vec!["Dec 2023", "Jan 2024"]);
    }

    #[test]
    fn overview_chart_serializes_both_series() {
        let options = monthly_overview_chart(&test_ledger()).to_string();

        assert!(options.contains("Income"));
        assert!(options.contains("Expense"));
        assert!(options.contains("Jan 2024"));
        assert!(options.contains("Mar 2024"));
    }

    #[test]
    fn category_chart_contains_expense_categories_only() {
        let options = expenses_by_category_chart(&test_ledger()).to_string();

        assert!(options.contains("Groceries"));
        assert!(!options.contains("Salary"));
    }
}
