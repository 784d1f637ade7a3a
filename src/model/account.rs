//! Account
//!
//! Chart-of-accounts row. Ledger entries post against an account, and the
//! account's general-ledger type decides which side increases its balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{validate_length, Audit, AuditResponse, ValidationError};

string_enum! {
    pub enum AccountKind {
        Deposit => "Deposit",
        Loan => "Loan",
        ArLedger => "A/R-Ledger",
        ArAging => "A/R-Aging",
        Fines => "Fines",
        Interest => "Interest",
        SvfLedger => "SVF-Ledger",
        WriteOff => "W-Off",
        ApLedger => "A/P-Ledger",
        Other => "Other",
        TimeDeposit => "Time Deposit",
    }
}

string_enum! {
    pub enum GeneralLedgerType {
        Assets => "Assets",
        Liabilities => "Liabilities",
        Equity => "Equity",
        Revenue => "Revenue",
        Expenses => "Expenses",
    }
}

impl GeneralLedgerType {
    /// Assets and expenses grow on the debit side
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, GeneralLedgerType::Assets | GeneralLedgerType::Expenses)
    }
}

string_enum! {
    pub enum ComputationType {
        Straight => "Straight",
        Diminishing => "Diminishing",
        DiminishingAddOn => "DiminishingAddOn",
        DiminishingYearly => "DiminishingYearly",
        DiminishingStraight => "DiminishingStraight",
        DiminishingQuarterly => "DiminishingQuarterly",
    }
}

string_enum! {
    pub enum OtherAccountInformation {
        None => "None",
        Jewelry => "Jewely",
        Grocery => "Grocery",
        TrackLoanDeduction => "Track Loan Deduction",
        Restructured => "Restructured",
        CashInBank => "Cash in Bank / Cash in Check Account",
        CashOnHand => "Cash on Hand",
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub currency_id: Option<Uuid>,
    pub default_payment_type_id: Option<Uuid>,
    pub loan_account_id: Option<Uuid>,

    pub name: String,
    pub description: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub index: i32,
    #[sqlx(rename = "type")]
    pub kind: AccountKind,
    pub is_internal: bool,
    pub cash_on_hand: bool,
    pub paid_up_share_capital: bool,
    pub computation_type: ComputationType,
    pub interest_standard: Decimal,
    pub interest_secured: Decimal,
    pub fines_amort: Decimal,
    pub fines_maturity: Decimal,
    pub general_ledger_type: Option<GeneralLedgerType>,
    pub cut_off_days: i32,
    pub cut_off_months: i32,
    pub icon: String,

    pub show_in_general_ledger_source_withdraw: bool,
    pub show_in_general_ledger_source_deposit: bool,
    pub show_in_general_ledger_source_journal: bool,
    pub show_in_general_ledger_source_payment: bool,
    pub show_in_general_ledger_source_adjustment: bool,
    pub show_in_general_ledger_source_journal_voucher: bool,
    pub show_in_general_ledger_source_check_voucher: bool,

    pub cash_and_cash_equivalence: bool,
    pub other_information_of_an_account: OtherAccountInformation,
}

impl Account {
    /// New account with the column defaults
    pub fn new(
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: AccountKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit: Audit::by(user_id),
            organization_id,
            branch_id,
            currency_id: None,
            default_payment_type_id: None,
            loan_account_id: None,
            name: name.into(),
            description: description.into(),
            min_amount: Decimal::ZERO,
            max_amount: Decimal::new(50_000, 0),
            index: 0,
            kind,
            is_internal: false,
            cash_on_hand: false,
            paid_up_share_capital: false,
            computation_type: ComputationType::Straight,
            interest_standard: Decimal::ZERO,
            interest_secured: Decimal::ZERO,
            fines_amort: Decimal::ZERO,
            fines_maturity: Decimal::ZERO,
            general_ledger_type: None,
            cut_off_days: 0,
            cut_off_months: 0,
            icon: "account".to_string(),
            show_in_general_ledger_source_withdraw: true,
            show_in_general_ledger_source_deposit: true,
            show_in_general_ledger_source_journal: true,
            show_in_general_ledger_source_payment: true,
            show_in_general_ledger_source_adjustment: true,
            show_in_general_ledger_source_journal_voucher: true,
            show_in_general_ledger_source_check_voucher: true,
            cash_and_cash_equivalence: false,
            other_information_of_an_account: OtherAccountInformation::None,
        }
    }

    pub fn apply(&mut self, request: AccountRequest, user_id: Uuid) {
        self.name = request.name;
        self.description = request.description;
        self.kind = request.kind;
        self.general_ledger_type = request.general_ledger_type;
        self.computation_type = request.computation_type.unwrap_or(ComputationType::Straight);
        self.min_amount = request.min_amount.unwrap_or(Decimal::ZERO);
        self.max_amount = request.max_amount.unwrap_or_else(|| Decimal::new(50_000, 0));
        self.index = request.index.unwrap_or(0);
        self.interest_standard = request.interest_standard.unwrap_or(Decimal::ZERO);
        self.interest_secured = request.interest_secured.unwrap_or(Decimal::ZERO);
        self.fines_amort = request.fines_amort.unwrap_or(Decimal::ZERO);
        self.fines_maturity = request.fines_maturity.unwrap_or(Decimal::ZERO);
        self.cut_off_days = request.cut_off_days.unwrap_or(0);
        self.cut_off_months = request.cut_off_months.unwrap_or(0);
        self.currency_id = request.currency_id;
        self.default_payment_type_id = request.default_payment_type_id;
        self.loan_account_id = request.loan_account_id;
        if let Some(icon) = request.icon {
            self.icon = icon;
        }
        self.audit.touch(user_id);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub default_payment_type_id: Option<Uuid>,
    pub loan_account_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub index: i32,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub is_internal: bool,
    pub cash_on_hand: bool,
    pub paid_up_share_capital: bool,
    pub computation_type: ComputationType,
    pub interest_standard: Decimal,
    pub interest_secured: Decimal,
    pub fines_amort: Decimal,
    pub fines_maturity: Decimal,
    pub general_ledger_type: Option<GeneralLedgerType>,
    pub cut_off_days: i32,
    pub cut_off_months: i32,
    pub icon: String,
    pub show_in_general_ledger_source_withdraw: bool,
    pub show_in_general_ledger_source_deposit: bool,
    pub show_in_general_ledger_source_journal: bool,
    pub show_in_general_ledger_source_payment: bool,
    pub show_in_general_ledger_source_adjustment: bool,
    pub show_in_general_ledger_source_journal_voucher: bool,
    pub show_in_general_ledger_source_check_voucher: bool,
    pub cash_and_cash_equivalence: bool,
    pub other_information_of_an_account: OtherAccountInformation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(default)]
    pub general_ledger_type: Option<GeneralLedgerType>,
    #[serde(default)]
    pub computation_type: Option<ComputationType>,
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    #[serde(default)]
    pub max_amount: Option<Decimal>,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    pub interest_standard: Option<Decimal>,
    #[serde(default)]
    pub interest_secured: Option<Decimal>,
    #[serde(default)]
    pub fines_amort: Option<Decimal>,
    #[serde(default)]
    pub fines_maturity: Option<Decimal>,
    #[serde(default)]
    pub cut_off_days: Option<i32>,
    #[serde(default)]
    pub cut_off_months: Option<i32>,
    #[serde(default)]
    pub currency_id: Option<Uuid>,
    #[serde(default)]
    pub default_payment_type_id: Option<Uuid>,
    #[serde(default)]
    pub loan_account_id: Option<Uuid>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl AccountRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("name", &self.name, 1, 255)?;
        validate_length("description", &self.description, 1, usize::MAX)?;

        let hundred = Decimal::new(100, 0);
        for (field, value) in [("fines_amort", self.fines_amort), ("fines_maturity", self.fines_maturity)] {
            if let Some(v) = value {
                if v < Decimal::ZERO || v > hundred {
                    return Err(ValidationError::new(field, "must be between 0 and 100"));
                }
            }
        }
        if let Some(days) = self.cut_off_days {
            if !(0..=30).contains(&days) {
                return Err(ValidationError::new("cut_off_days", "must be between 0 and 30"));
            }
        }
        if let Some(months) = self.cut_off_months {
            if !(0..=12).contains(&months) {
                return Err(ValidationError::new("cut_off_months", "must be between 0 and 12"));
            }
        }
        if let (Some(min), Some(max)) = (self.min_amount, self.max_amount) {
            if min > max {
                return Err(ValidationError::new("min_amount", "must not exceed max_amount"));
            }
        }
        Ok(())
    }
}

impl Entity for Account {
    const TABLE: &'static str = "accounts";
    const TOPIC: &'static str = "account";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "currency_id",
        "default_payment_type_id",
        "loan_account_id",
        "name",
        "description",
        "min_amount",
        "max_amount",
        "index",
        "type",
        "is_internal",
        "cash_on_hand",
        "paid_up_share_capital",
        "computation_type",
        "interest_standard",
        "interest_secured",
        "fines_amort",
        "fines_maturity",
        "general_ledger_type",
        "cut_off_days",
        "cut_off_months",
        "icon",
        "show_in_general_ledger_source_withdraw",
        "show_in_general_ledger_source_deposit",
        "show_in_general_ledger_source_journal",
        "show_in_general_ledger_source_payment",
        "show_in_general_ledger_source_adjustment",
        "show_in_general_ledger_source_journal_voucher",
        "show_in_general_ledger_source_check_voucher",
        "cash_and_cash_equivalence",
        "other_information_of_an_account",
    ];

    type Response = AccountResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.branch_id)
            .push_bind(self.currency_id)
            .push_bind(self.default_payment_type_id)
            .push_bind(self.loan_account_id)
            .push_bind(self.name.clone())
            .push_bind(self.description.clone())
            .push_bind(self.min_amount)
            .push_bind(self.max_amount)
            .push_bind(self.index)
            .push_bind(self.kind)
            .push_bind(self.is_internal)
            .push_bind(self.cash_on_hand)
            .push_bind(self.paid_up_share_capital)
            .push_bind(self.computation_type)
            .push_bind(self.interest_standard)
            .push_bind(self.interest_secured)
            .push_bind(self.fines_amort)
            .push_bind(self.fines_maturity)
            .push_bind(self.general_ledger_type)
            .push_bind(self.cut_off_days)
            .push_bind(self.cut_off_months)
            .push_bind(self.icon.clone())
            .push_bind(self.show_in_general_ledger_source_withdraw)
            .push_bind(self.show_in_general_ledger_source_deposit)
            .push_bind(self.show_in_general_ledger_source_journal)
            .push_bind(self.show_in_general_ledger_source_payment)
            .push_bind(self.show_in_general_ledger_source_adjustment)
            .push_bind(self.show_in_general_ledger_source_journal_voucher)
            .push_bind(self.show_in_general_ledger_source_check_voucher)
            .push_bind(self.cash_and_cash_equivalence)
            .push_bind(self.other_information_of_an_account);
    }

    fn to_response(&self) -> AccountResponse {
        AccountResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            currency_id: self.currency_id,
            default_payment_type_id: self.default_payment_type_id,
            loan_account_id: self.loan_account_id,
            name: self.name.clone(),
            description: self.description.clone(),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            index: self.index,
            kind: self.kind,
            is_internal: self.is_internal,
            cash_on_hand: self.cash_on_hand,
            paid_up_share_capital: self.paid_up_share_capital,
            computation_type: self.computation_type,
            interest_standard: self.interest_standard,
            interest_secured: self.interest_secured,
            fines_amort: self.fines_amort,
            fines_maturity: self.fines_maturity,
            general_ledger_type: self.general_ledger_type,
            cut_off_days: self.cut_off_days,
            cut_off_months: self.cut_off_months,
            icon: self.icon.clone(),
            show_in_general_ledger_source_withdraw: self.show_in_general_ledger_source_withdraw,
            show_in_general_ledger_source_deposit: self.show_in_general_ledger_source_deposit,
            show_in_general_ledger_source_journal: self.show_in_general_ledger_source_journal,
            show_in_general_ledger_source_payment: self.show_in_general_ledger_source_payment,
            show_in_general_ledger_source_adjustment: self.show_in_general_ledger_source_adjustment,
            show_in_general_ledger_source_journal_voucher: self
                .show_in_general_ledger_source_journal_voucher,
            show_in_general_ledger_source_check_voucher: self
                .show_in_general_ledger_source_check_voucher,
            cash_and_cash_equivalence: self.cash_and_cash_equivalence,
            other_information_of_an_account: self.other_information_of_an_account,
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

    fn request() -> AccountRequest {
        AccountRequest {
            name: "Regular Savings".to_string(),
            description: "Basic savings".to_string(),
            kind: AccountKind::Deposit,
            general_ledger_type: Some(GeneralLedgerType::Liabilities),
            computation_type: None,
            min_amount: Some(dec!(100)),
            max_amount: Some(dec!(1000000)),
            index: Some(1),
            interest_standard: Some(dec!(2.5)),
            interest_secured: None,
            fines_amort: None,
            fines_maturity: None,
            cut_off_days: None,
            cut_off_months: None,
            currency_id: None,
            default_payment_type_id: None,
            loan_account_id: None,
            icon: None,
        }
    }

    #[test]
    fn test_account_kind_strings() {
        assert_eq!(AccountKind::ArLedger.as_str(), "A/R-Ledger");
        assert_eq!("Time Deposit".parse::<AccountKind>().unwrap(), AccountKind::TimeDeposit);
        assert_eq!(AccountKind::ALL.len(), 11);
    }

    #[test]
    fn test_debit_normal_types() {
        assert!(GeneralLedgerType::Assets.is_debit_normal());
        assert!(GeneralLedgerType::Expenses.is_debit_normal());
        assert!(!GeneralLedgerType::Liabilities.is_debit_normal());
        assert!(!GeneralLedgerType::Equity.is_debit_normal());
        assert!(!GeneralLedgerType::Revenue.is_debit_normal());
    }

    #[test]
    fn test_request_validation_bounds() {
        assert!(request().validate().is_ok());

        let fines = AccountRequest {
            fines_amort: Some(dec!(100.01)),
            ..request()
        };
        assert_eq!(fines.validate().unwrap_err().field, "fines_amort");

        let cut_off = AccountRequest {
            cut_off_days: Some(31),
            ..request()
        };
        assert_eq!(cut_off.validate().unwrap_err().field, "cut_off_days");

        let months = AccountRequest {
            cut_off_months: Some(13),
            ..request()
        };
        assert_eq!(months.validate().unwrap_err().field, "cut_off_months");

        let inverted = AccountRequest {
            min_amount: Some(dec!(10)),
            max_amount: Some(dec!(1)),
            ..request()
        };
        assert_eq!(inverted.validate().unwrap_err().field, "min_amount");
    }

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Cash on Hand",
            "Physical cash",
            AccountKind::Other,
        );
        assert_eq!(account.max_amount, dec!(50000));
        assert_eq!(account.computation_type, ComputationType::Straight);
        assert_eq!(account.icon, "account");
        assert!(account.show_in_general_ledger_source_check_voucher);
        assert_eq!(account.other_information_of_an_account, OtherAccountInformation::None);
    }
}
