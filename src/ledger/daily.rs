//! Day-level ledger views

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::GeneralLedgerSource;

/// Ending balance of one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// One ending balance per day in `from..=to`.
///
/// `entries` must be sorted by time ascending. A day without postings keeps
/// the previous day's balance; the first day starts from `opening`.
pub fn fold_daily_balances(
    from: NaiveDate,
    to: NaiveDate,
    opening: Decimal,
    entries: &[(DateTime<Utc>, Decimal)],
) -> Vec<DailyBalance> {
    let mut balances = Vec::new();
    let mut running = opening;
    let mut remaining = entries.iter().peekable();

    for date in from.iter_days().take_while(|d| *d <= to) {
        while let Some((at, balance)) = remaining.peek() {
            let day = at.date_naive();
            if day > date {
                break;
            }
            if day == date {
                running = *balance;
            }
            remaining.next();
        }
        balances.push(DailyBalance {
            date,
            balance: running,
        });
    }

    balances
}

/// Teller collection report groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Booking,
    Disbursement,
    Journal,
}

impl CollectionKind {
    pub fn sources(&self) -> &'static [GeneralLedgerSource] {
        match self {
            CollectionKind::Booking => &[GeneralLedgerSource::Payment, GeneralLedgerSource::Deposit],
            CollectionKind::Disbursement => &[
                GeneralLedgerSource::Withdraw,
                GeneralLedgerSource::CheckVoucher,
                GeneralLedgerSource::Loan,
            ],
            CollectionKind::Journal => &[
                GeneralLedgerSource::JournalVoucher,
                GeneralLedgerSource::Adjustment,
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Booking => "booking",
            CollectionKind::Disbursement => "disbursement",
            CollectionKind::Journal => "journal",
        }
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booking" => Ok(CollectionKind::Booking),
            "disbursement" => Ok(CollectionKind::Disbursement),
            "journal" => Ok(CollectionKind::Journal),
            other => Err(format!("unknown collection kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn at(d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_days_without_entries_carry_forward() {
        let entries = vec![(at(2, 9), dec!(150)), (at(2, 17), dec!(175)), (at(4, 8), dec!(90))];

        let balances = fold_daily_balances(day(1), day(5), dec!(100), &entries);

        let values: Vec<Decimal> = balances.iter().map(|b| b.balance).collect();
        assert_eq!(values, vec![dec!(100), dec!(175), dec!(175), dec!(90), dec!(90)]);
        assert_eq!(balances[0].date, day(1));
        assert_eq!(balances[4].date, day(5));
    }

    #[test]
    fn test_single_day_range() {
        let balances = fold_daily_balances(day(3), day(3), dec!(10), &[(at(3, 1), dec!(12))]);
        assert_eq!(balances, vec![DailyBalance { date: day(3), balance: dec!(12) }]);
    }

    #[test]
    fn test_entries_before_range_are_skipped() {
        let entries = vec![(at(1, 1), dec!(999)), (at(3, 1), dec!(30))];
        let balances = fold_daily_balances(day(2), day(3), dec!(5), &entries);
        assert_eq!(balances[0].balance, dec!(5));
        assert_eq!(balances[1].balance, dec!(30));
    }

    #[test]
    fn test_collection_sources() {
        assert_eq!(
            CollectionKind::Booking.sources(),
            &[GeneralLedgerSource::Payment, GeneralLedgerSource::Deposit]
        );
        assert!(CollectionKind::Disbursement
            .sources()
            .contains(&GeneralLedgerSource::Loan));
        assert_eq!("journal".parse::<CollectionKind>().unwrap(), CollectionKind::Journal);
        assert!("weekly".parse::<CollectionKind>().is_err());
    }
}
