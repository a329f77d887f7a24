//! Client-side derivation of the dashboard summary figures.
//!
//! The backend exposes the same aggregate at GET /stats; this reduction is
//! the fallback for when a page already holds the trade collection. It is a
//! pure function of its inputs, so recomputing on identical input yields an
//! identical result.

use chrono::{NaiveDate, TimeZone};
use rust_decimal::Decimal;

use crate::models::{DashboardStats, Trade, TradeStatus};

/// Reduces a trade collection (plus the known signal count) to
/// [`DashboardStats`].
///
/// `today` and `tz` pin down the viewer-local calendar day used for
/// `today_profit`. `success_rate` is profitable-closed over closed in
/// percent, and 0 when there are no closed trades.
pub fn compute_stats<Tz: TimeZone>(
    trades: &[Trade],
    total_signals: u64,
    today: NaiveDate,
    tz: &Tz,
) -> DashboardStats {
    let total_trades = trades.len() as u64;
    let open_trades = trades
        .iter()
        .filter(|t| t.status == TradeStatus::Open)
        .count() as u64;

    let total_profit: Decimal = trades.iter().filter_map(|t| t.profit).sum();

    let today_profit: Decimal = trades
        .iter()
        .filter(|t| {
            t.closed_at
                .map(|ts| ts.with_timezone(tz).date_naive() == today)
                .unwrap_or(false)
        })
        .filter_map(|t| t.profit)
        .sum();

    let closed = trades
        .iter()
        .filter(|t| t.status == TradeStatus::Closed)
        .count();
    let profitable = trades
        .iter()
        .filter(|t| t.status == TradeStatus::Closed && t.is_profitable())
        .count();

    let success_rate = if closed == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(profitable as u64) * Decimal::ONE_HUNDRED / Decimal::from(closed as u64)
    };

    DashboardStats {
        total_signals,
        total_trades,
        open_trades,
        total_profit,
        today_profit,
        success_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Side, Venue};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn trade(status: TradeStatus, profit: Option<Decimal>, closed_day: Option<u32>) -> Trade {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Trade {
            id: Uuid::new_v4(),
            signal_id: Uuid::new_v4(),
            exchange: Venue::Gate,
            symbol: "TESTUSDT".into(),
            side: Side::Buy,
            entry_price: dec!(1.0),
            exit_price: profit.map(|_| dec!(1.1)),
            amount: dec!(100),
            profit,
            spread: dec!(2.5),
            status,
            created_at,
            closed_at: closed_day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn mixed_collection_scenario() {
        let trades = vec![
            trade(TradeStatus::Closed, Some(dec!(12.5)), Some(2)),
            trade(TradeStatus::Closed, Some(dec!(-4.0)), Some(2)),
            trade(TradeStatus::Open, None, None),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let stats = compute_stats(&trades, 10, today, &Utc);

        assert_eq!(stats.total_signals, 10);
        assert_eq!(stats.total_trades, 3);
        assert_eq!(stats.open_trades, 1);
        assert_eq!(stats.total_profit, dec!(8.5));
        assert_eq!(stats.success_rate, dec!(50));
    }

    #[test]
    fn today_profit_excludes_earlier_days() {
        let trades = vec![
            trade(TradeStatus::Closed, Some(dec!(5.0)), Some(1)),
            trade(TradeStatus::Closed, Some(dec!(2.0)), Some(2)),
        ];

        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let stats = compute_stats(&trades, 0, today, &Utc);

        assert_eq!(stats.total_profit, dec!(7.0));
        assert_eq!(stats.today_profit, dec!(2.0));
    }

    #[test]
    fn no_closed_trades_means_zero_success_rate() {
        let trades = vec![trade(TradeStatus::Open, None, None)];
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let stats = compute_stats(&trades, 0, today, &Utc);

        assert_eq!(stats.success_rate, Decimal::ZERO);
    }

    #[test]
    fn failed_trades_do_not_count_toward_success_rate() {
        let mut failed = trade(TradeStatus::Failed, None, Some(2));
        failed.exit_price = None;

        let trades = vec![failed, trade(TradeStatus::Closed, Some(dec!(1.0)), Some(2))];
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let stats = compute_stats(&trades, 0, today, &Utc);

        assert_eq!(stats.success_rate, dec!(100));
        assert_eq!(stats.total_trades, 2);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let trades = vec![
            trade(TradeStatus::Closed, Some(dec!(3.3)), Some(2)),
            trade(TradeStatus::Open, None, None),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

        let a = compute_stats(&trades, 4, today, &Utc);
        let b = compute_stats(&trades, 4, today, &Utc);
        assert_eq!(a, b);
    }
}
