//! Member Accounting Ledger
//!
//! Running totals of one member on one account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{format_optional_time, AccountResponse, Audit, AuditResponse};

#[derive(Debug, Clone, FromRow)]
pub struct MemberAccountingLedger {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub member_profile_id: Uuid,
    pub account_id: Uuid,

    /// Number of postings folded into this row
    pub count: i32,
    pub balance: Decimal,
    pub interest: Decimal,
    pub fines: Decimal,
    pub due: Decimal,
    pub carried_forward_due: Decimal,
    pub stored_value_facility: Decimal,
    pub principal_due: Decimal,
    pub last_pay: Option<DateTime<Utc>>,
}

impl MemberAccountingLedger {
    /// First row for a member/account pair
    pub fn opening(
        user_id: Option<Uuid>,
        organization_id: Uuid,
        branch_id: Uuid,
        member_profile_id: Uuid,
        account_id: Uuid,
        balance: Decimal,
        last_pay: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit: Audit::stamped(user_id),
            organization_id,
            branch_id,
            member_profile_id,
            account_id,
            count: 1,
            balance,
            interest: Decimal::ZERO,
            fines: Decimal::ZERO,
            due: Decimal::ZERO,
            carried_forward_due: Decimal::ZERO,
            stored_value_facility: Decimal::ZERO,
            principal_due: Decimal::ZERO,
            last_pay: Some(last_pay),
        }
    }

    /// Fold one more posting into the row
    pub fn record_payment(
        &mut self,
        balance: Decimal,
        last_pay: DateTime<Utc>,
        user_id: Option<Uuid>,
    ) {
        self.balance = balance;
        self.last_pay = Some(last_pay);
        self.count += 1;
        self.audit.updated_by_id = user_id;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberAccountingLedgerResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub member_profile_id: Uuid,
    pub account_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountResponse>,
    pub count: i32,
    pub balance: Decimal,
    pub interest: Decimal,
    pub fines: Decimal,
    pub due: Decimal,
    pub carried_forward_due: Decimal,
    pub stored_value_facility: Decimal,
    pub principal_due: Decimal,
    pub last_pay: Option<String>,
}

impl Entity for MemberAccountingLedger {
    const TABLE: &'static str = "member_accounting_ledgers";
    const TOPIC: &'static str = "member_accounting_ledger";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "member_profile_id",
        "account_id",
        "count",
        "balance",
        "interest",
        "fines",
        "due",
        "carried_forward_due",
        "stored_value_facility",
        "principal_due",
        "last_pay",
    ];

    type Response = MemberAccountingLedgerResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.branch_id)
            .push_bind(self.member_profile_id)
            .push_bind(self.account_id)
            .push_bind(self.count)
            .push_bind(self.balance)
            .push_bind(self.interest)
            .push_bind(self.fines)
            .push_bind(self.due)
            .push_bind(self.carried_forward_due)
            .push_bind(self.stored_value_facility)
            .push_bind(self.principal_due)
            .push_bind(self.last_pay);
    }

    fn to_response(&self) -> MemberAccountingLedgerResponse {
        MemberAccountingLedgerResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            member_profile_id: self.member_profile_id,
            account_id: self.account_id,
            account: None,
            count: self.count,
            balance: self.balance,
            interest: self.interest,
            fines: self.fines,
            due: self.due,
            carried_forward_due: self.carried_forward_due,
            stored_value_facility: self.stored_value_facility,
            principal_due: self.principal_due,
            last_pay: format_optional_time(self.last_pay.as_ref()),
        }
    }

    fn topic_scope(&self) -> TopicScope {
        TopicScope::tenant(self.organization_id, self.branch_id)
            .with("member_profile", self.member_profile_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TopicAction;
    use rust_decimal_macros::dec;

    fn opening() -> MemberAccountingLedger {
        MemberAccountingLedger::opening(
            Some(Uuid::new_v4()),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            dec!(500),
            Utc::now(),
        )
    }

    #[test]
    fn test_opening_row_counts_one_posting() {
        let row = opening();
        assert_eq!(row.count, 1);
        assert_eq!(row.balance, dec!(500));
        assert!(row.last_pay.is_some());
    }

    #[test]
    fn test_record_payment_increments_count() {
        let mut row = opening();
        let editor = Uuid::new_v4();
        let paid_at = Utc::now();

        row.record_payment(dec!(750), paid_at, Some(editor));

        assert_eq!(row.count, 2);
        assert_eq!(row.balance, dec!(750));
        assert_eq!(row.last_pay, Some(paid_at));
        assert_eq!(row.audit.updated_by_id, Some(editor));
    }

    #[test]
    fn test_topics_include_member_profile() {
        let row = opening();
        let topics = row.topics(TopicAction::Create);
        assert_eq!(
            topics.last().unwrap(),
            &format!("member_accounting_ledger.create.member_profile.{}", row.member_profile_id)
        );
    }

    #[test]
    fn test_last_pay_is_rfc3339() {
        let row = opening();
        let response = row.to_response();
        let last_pay = response.last_pay.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&last_pay).is_ok());
    }
}
