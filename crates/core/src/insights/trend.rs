//! Trend series and forecast builders.

use rust_decimal::Decimal;

use super::types::{MonthFlow, SavingsForecast, TrendReport};

/// Builds a chart-ready series from per-month flows, preserving input order
/// (callers pass months oldest first).
#[must_use]
pub fn trend(months: &[MonthFlow]) -> TrendReport {
    let mut report = TrendReport {
        labels: Vec::with_capacity(months.len()),
        income: Vec::with_capacity(months.len()),
        expense: Vec::with_capacity(months.len()),
        savings: Vec::with_capacity(months.len()),
    };

    for flow in months {
        report
            .labels
            .push(flow.month.first_day().format("%b %y").to_string());
        report.income.push(flow.income);
        report.expense.push(flow.expense);
        report.savings.push(flow.savings());
    }

    report
}

/// Predicts next month's savings as the mean of the months with activity.
///
/// Months with neither income nor expense are skipped so a sparse history
/// does not drag the average towards zero. With no active months at all the
/// prediction is zero, flagged with a note.
#[must_use]
pub fn forecast(months: &[MonthFlow]) -> SavingsForecast {
    let history: Vec<Decimal> = months
        .iter()
        .filter(|flow| flow.has_activity())
        .map(MonthFlow::savings)
        .collect();

    if history.is_empty() {
        return SavingsForecast {
            next_month_savings: Decimal::ZERO,
            history,
            note: Some("No transactions found in recent months".to_string()),
        };
    }

    let total: Decimal = history.iter().copied().sum();
    let next_month_savings = total / Decimal::from(history.len() as u64);

    SavingsForecast {
        next_month_savings,
        history,
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finplan_shared::types::YearMonth;
    use rust_decimal_macros::dec;

    fn flow(year: i32, month: u32, income: Decimal, expense: Decimal) -> MonthFlow {
        MonthFlow {
            month: YearMonth::new(year, month).unwrap(),
            income,
            expense,
        }
    }

    #[test]
    fn test_trend_series_shape() {
        let months = vec![
            flow(2023, 11, dec!(5000), dec!(4200)),
            flow(2023, 12, dec!(5000), dec!(5600)),
            flow(2024, 1, dec!(5200), dec!(4000)),
        ];

        let report = trend(&months);

        assert_eq!(report.labels, vec!["Nov 23", "Dec 23", "Jan 24"]);
        assert_eq!(report.income.len(), 3);
        assert_eq!(report.savings, vec![dec!(800), dec!(-600), dec!(1200)]);
    }

    #[test]
    fn test_trend_of_empty_input() {
        let report = trend(&[]);
        assert!(report.labels.is_empty());
        assert!(report.savings.is_empty());
    }

    #[test]
    fn test_forecast_is_mean_of_active_months() {
        let months = vec![
            flow(2024, 1, dec!(5000), dec!(4000)),
            flow(2024, 2, dec!(0), dec!(0)), // skipped: no activity
            flow(2024, 3, dec!(5000), dec!(3000)),
        ];

        let result = forecast(&months);

        assert_eq!(result.history, vec![dec!(1000), dec!(2000)]);
        assert_eq!(result.next_month_savings, dec!(1500));
        assert!(result.note.is_none());
    }

    #[test]
    fn test_forecast_without_history() {
        let result = forecast(&[flow(2024, 1, dec!(0), dec!(0))]);

        assert_eq!(result.next_month_savings, Decimal::ZERO);
        assert!(result.history.is_empty());
        assert!(result.note.is_some());
    }

    #[test]
    fn test_forecast_may_be_negative() {
        let months = vec![
            flow(2024, 1, dec!(3000), dec!(4000)),
            flow(2024, 2, dec!(3000), dec!(3500)),
        ];

        let result = forecast(&months);

        assert_eq!(result.next_month_savings, dec!(-750));
    }
}
