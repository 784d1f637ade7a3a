//! General Ledger
//!
//! One posting against an account. `balance` is the running balance of the
//! account (or of the member's sub-ledger) after this posting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{format_date, AccountResponse, Audit, AuditResponse, PaymentKind, PaymentTypeResponse};

string_enum! {
    /// Business flow that produced a ledger entry
    pub enum GeneralLedgerSource {
        Withdraw => "withdraw",
        Deposit => "deposit",
        Journal => "journal",
        Payment => "payment",
        Adjustment => "adjustment",
        JournalVoucher => "journal voucher",
        CheckVoucher => "check voucher",
        Loan => "loan",
        SavingsInterest => "savings interest",
        MutualContribution => "mutual contribution",
        Disbursement => "disbursement",
        Blotter => "blotter",
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct GeneralLedger {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub account_id: Option<Uuid>,
    pub transaction_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub member_joint_account_id: Option<Uuid>,
    pub payment_type_id: Option<Uuid>,

    pub transaction_reference_number: Option<String>,
    pub reference_number: Option<String>,
    pub source: GeneralLedgerSource,
    pub journal_voucher_id: Option<Uuid>,
    pub adjustment_entry_id: Option<Uuid>,
    pub type_of_payment_type: Option<PaymentKind>,

    pub credit: Decimal,
    pub debit: Decimal,
    pub balance: Decimal,

    pub signature_media_id: Option<Uuid>,
    pub entry_date: Option<NaiveDate>,
    pub bank_id: Option<Uuid>,
    pub proof_of_payment_media_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub bank_reference_number: Option<String>,
    pub description: Option<String>,
    pub print_number: i32,
}

impl GeneralLedger {
    /// Unposted entry; the ledger service fills in `balance`
    pub fn new(
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        source: GeneralLedgerSource,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit: Audit::by(user_id),
            organization_id,
            branch_id,
            account_id: None,
            transaction_id: None,
            transaction_batch_id: None,
            employee_user_id: Some(user_id),
            member_profile_id: None,
            member_joint_account_id: None,
            payment_type_id: None,
            transaction_reference_number: None,
            reference_number: None,
            source,
            journal_voucher_id: None,
            adjustment_entry_id: None,
            type_of_payment_type: None,
            credit,
            debit,
            balance: Decimal::ZERO,
            signature_media_id: None,
            entry_date: None,
            bank_id: None,
            proof_of_payment_media_id: None,
            currency_id: None,
            bank_reference_number: None,
            description: None,
            print_number: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralLedgerResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub account_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountResponse>,
    pub transaction_id: Option<Uuid>,
    pub transaction_batch_id: Option<Uuid>,
    pub employee_user_id: Option<Uuid>,
    pub member_profile_id: Option<Uuid>,
    pub member_joint_account_id: Option<Uuid>,
    pub payment_type_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentTypeResponse>,
    pub transaction_reference_number: Option<String>,
    pub reference_number: Option<String>,
    pub source: GeneralLedgerSource,
    pub journal_voucher_id: Option<Uuid>,
    pub adjustment_entry_id: Option<Uuid>,
    pub type_of_payment_type: Option<PaymentKind>,
    pub credit: Decimal,
    pub debit: Decimal,
    pub balance: Decimal,
    pub signature_media_id: Option<Uuid>,
    pub entry_date: Option<String>,
    pub bank_id: Option<Uuid>,
    pub proof_of_payment_media_id: Option<Uuid>,
    pub currency_id: Option<Uuid>,
    pub bank_reference_number: Option<String>,
    pub description: Option<String>,
    pub print_number: i32,
}

impl Entity for GeneralLedger {
    const TABLE: &'static str = "general_ledgers";
    const TOPIC: &'static str = "general_ledger";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "account_id",
        "transaction_id",
        "transaction_batch_id",
        "employee_user_id",
        "member_profile_id",
        "member_joint_account_id",
        "payment_type_id",
        "transaction_reference_number",
        "reference_number",
        "source",
        "journal_voucher_id",
        "adjustment_entry_id",
        "type_of_payment_type",
        "credit",
        "debit",
        "balance",
        "signature_media_id",
        "entry_date",
        "bank_id",
        "proof_of_payment_media_id",
        "currency_id",
        "bank_reference_number",
        "description",
        "print_number",
    ];

    type Response = GeneralLedgerResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.branch_id)
            .push_bind(self.account_id)
            .push_bind(self.transaction_id)
            .push_bind(self.transaction_batch_id)
            .push_bind(self.employee_user_id)
            .push_bind(self.member_profile_id)
            .push_bind(self.member_joint_account_id)
            .push_bind(self.payment_type_id)
            .push_bind(self.transaction_reference_number.clone())
            .push_bind(self.reference_number.clone())
            .push_bind(self.source)
            .push_bind(self.journal_voucher_id)
            .push_bind(self.adjustment_entry_id)
            .push_bind(self.type_of_payment_type)
            .push_bind(self.credit)
            .push_bind(self.debit)
            .push_bind(self.balance)
            .push_bind(self.signature_media_id)
            .push_bind(self.entry_date)
            .push_bind(self.bank_id)
            .push_bind(self.proof_of_payment_media_id)
            .push_bind(self.currency_id)
            .push_bind(self.bank_reference_number.clone())
            .push_bind(self.description.clone())
            .push_bind(self.print_number);
    }

    fn to_response(&self) -> GeneralLedgerResponse {
        GeneralLedgerResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            account_id: self.account_id,
            account: None,
            transaction_id: self.transaction_id,
            transaction_batch_id: self.transaction_batch_id,
            employee_user_id: self.employee_user_id,
            member_profile_id: self.member_profile_id,
            member_joint_account_id: self.member_joint_account_id,
            payment_type_id: self.payment_type_id,
            payment_type: None,
            transaction_reference_number: self.transaction_reference_number.clone(),
            reference_number: self.reference_number.clone(),
            source: self.source,
            journal_voucher_id: self.journal_voucher_id,
            adjustment_entry_id: self.adjustment_entry_id,
            type_of_payment_type: self.type_of_payment_type,
            credit: self.credit,
            debit: self.debit,
            balance: self.balance,
            signature_media_id: self.signature_media_id,
            entry_date: self.entry_date.as_ref().map(format_date),
            bank_id: self.bank_id,
            proof_of_payment_media_id: self.proof_of_payment_media_id,
            currency_id: self.currency_id,
            bank_reference_number: self.bank_reference_number.clone(),
            description: self.description.clone(),
            print_number: self.print_number,
        }
    }

    fn topic_scope(&self) -> TopicScope {
        TopicScope::tenant(self.organization_id, self.branch_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_source_strings() {
        assert_eq!(GeneralLedgerSource::JournalVoucher.as_str(), "journal voucher");
        assert_eq!(
            "savings interest".parse::<GeneralLedgerSource>().unwrap(),
            GeneralLedgerSource::SavingsInterest
        );
    }

    #[test]
    fn test_response_formats_entry_date() {
        let mut entry = GeneralLedger::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            GeneralLedgerSource::Deposit,
            dec!(150.25),
            dec!(0),
        );
        entry.entry_date = NaiveDate::from_ymd_opt(2024, 3, 9);

        let json = serde_json::to_value(entry.to_response()).unwrap();

        assert_eq!(json["entry_date"], "2024-03-09");
        assert_eq!(json["source"], "deposit");
        assert!(json.get("account").is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(json["updated_at"].as_str().unwrap()).is_ok());
    }
}
