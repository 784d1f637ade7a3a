//! Ledger Services
//!
//! Balance-affecting queries over `general_ledgers` and
//! `member_accounting_ledgers`. Locking reads take `FOR UPDATE` row locks
//! inside the caller's transaction; contention is left to PostgreSQL.

mod daily;
mod error;
mod general_ledger;
mod member_accounting_ledger;

pub use daily::{fold_daily_balances, CollectionKind, DailyBalance};
pub use error::LedgerError;
pub use general_ledger::{balance_change, DailyBalanceQuery, GeneralLedgerService};
pub use member_accounting_ledger::{MemberAccountingLedgerService, MemberPosting};
