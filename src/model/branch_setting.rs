//! Branch Setting
//!
//! One row per branch. Holds the designated ledger accounts and the
//! official-receipt numbering series.

use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::repository::Entity;

use super::{Audit, AuditResponse};

#[derive(Debug, Clone, FromRow)]
pub struct BranchSetting {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,

    pub withdraw_prefix: String,
    pub withdraw_or_start: i32,
    pub withdraw_or_current: i32,
    pub withdraw_or_end: i32,
    pub withdraw_or_iteration: i32,
    pub withdraw_use_date_or: bool,
    pub deposit_prefix: String,
    pub deposit_or_start: i32,
    pub deposit_or_current: i32,
    pub deposit_or_end: i32,
    pub deposit_or_iteration: i32,
    pub deposit_use_date_or: bool,
    pub loan_prefix: String,
    pub loan_or_start: i32,
    pub loan_or_current: i32,
    pub loan_or_end: i32,
    pub loan_or_iteration: i32,
    pub loan_use_date_or: bool,
    pub check_voucher_prefix: String,
    pub check_voucher_or_start: i32,
    pub check_voucher_or_current: i32,
    pub check_voucher_or_end: i32,
    pub check_voucher_or_iteration: i32,
    pub check_voucher_use_date_or: bool,

    pub annual_divisor: i32,

    /// Excluded from the "exclude cash on hand" ledger queries
    pub cash_on_hand_account_id: Option<Uuid>,
    pub paid_up_shared_capital_account_id: Option<Uuid>,
    pub compassion_fund_account_id: Option<Uuid>,
}

impl BranchSetting {
    /// Settings row with column defaults for a new branch
    pub fn for_branch(branch_id: Uuid, currency_id: Option<Uuid>, audit: Audit) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit,
            branch_id,
            currency_id,
            withdraw_prefix: "WD".to_string(),
            withdraw_or_start: 1,
            withdraw_or_current: 1,
            withdraw_or_end: 999_999,
            withdraw_or_iteration: 0,
            withdraw_use_date_or: false,
            deposit_prefix: "DP".to_string(),
            deposit_or_start: 1,
            deposit_or_current: 1,
            deposit_or_end: 999_999,
            deposit_or_iteration: 0,
            deposit_use_date_or: false,
            loan_prefix: "LN".to_string(),
            loan_or_start: 1,
            loan_or_current: 1,
            loan_or_end: 999_999,
            loan_or_iteration: 0,
            loan_use_date_or: false,
            check_voucher_prefix: "CV".to_string(),
            check_voucher_or_start: 1,
            check_voucher_or_current: 1,
            check_voucher_or_end: 999_999,
            check_voucher_or_iteration: 0,
            check_voucher_use_date_or: false,
            annual_divisor: 360,
            cash_on_hand_account_id: None,
            paid_up_shared_capital_account_id: None,
            compassion_fund_account_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchSettingResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub withdraw_prefix: String,
    pub withdraw_or_start: i32,
    pub withdraw_or_current: i32,
    pub withdraw_or_end: i32,
    pub withdraw_or_iteration: i32,
    pub withdraw_use_date_or: bool,
    pub deposit_prefix: String,
    pub deposit_or_start: i32,
    pub deposit_or_current: i32,
    pub deposit_or_end: i32,
    pub deposit_or_iteration: i32,
    pub deposit_use_date_or: bool,
    pub loan_prefix: String,
    pub loan_or_start: i32,
    pub loan_or_current: i32,
    pub loan_or_end: i32,
    pub loan_or_iteration: i32,
    pub loan_use_date_or: bool,
    pub check_voucher_prefix: String,
    pub check_voucher_or_start: i32,
    pub check_voucher_or_current: i32,
    pub check_voucher_or_end: i32,
    pub check_voucher_or_iteration: i32,
    pub check_voucher_use_date_or: bool,
    pub annual_divisor: i32,
    pub cash_on_hand_account_id: Option<Uuid>,
    pub paid_up_shared_capital_account_id: Option<Uuid>,
    pub compassion_fund_account_id: Option<Uuid>,
}

impl Entity for BranchSetting {
    const TABLE: &'static str = "branch_settings";
    const TOPIC: &'static str = "branch_setting";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "branch_id",
        "currency_id",
        "withdraw_prefix",
        "withdraw_or_start",
        "withdraw_or_current",
        "withdraw_or_end",
        "withdraw_or_iteration",
        "withdraw_use_date_or",
        "deposit_prefix",
        "deposit_or_start",
        "deposit_or_current",
        "deposit_or_end",
        "deposit_or_iteration",
        "deposit_use_date_or",
        "loan_prefix",
        "loan_or_start",
        "loan_or_current",
        "loan_or_end",
        "loan_or_iteration",
        "loan_use_date_or",
        "check_voucher_prefix",
        "check_voucher_or_start",
        "check_voucher_or_current",
        "check_voucher_or_end",
        "check_voucher_or_iteration",
        "check_voucher_use_date_or",
        "annual_divisor",
        "cash_on_hand_account_id",
        "paid_up_shared_capital_account_id",
        "compassion_fund_account_id",
    ];

    type Response = BranchSettingResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.branch_id)
            .push_bind(self.currency_id)
            .push_bind(self.withdraw_prefix.clone())
            .push_bind(self.withdraw_or_start)
            .push_bind(self.withdraw_or_current)
            .push_bind(self.withdraw_or_end)
            .push_bind(self.withdraw_or_iteration)
            .push_bind(self.withdraw_use_date_or)
            .push_bind(self.deposit_prefix.clone())
            .push_bind(self.deposit_or_start)
            .push_bind(self.deposit_or_current)
            .push_bind(self.deposit_or_end)
            .push_bind(self.deposit_or_iteration)
            .push_bind(self.deposit_use_date_or)
            .push_bind(self.loan_prefix.clone())
            .push_bind(self.loan_or_start)
            .push_bind(self.loan_or_current)
            .push_bind(self.loan_or_end)
            .push_bind(self.loan_or_iteration)
            .push_bind(self.loan_use_date_or)
            .push_bind(self.check_voucher_prefix.clone())
            .push_bind(self.check_voucher_or_start)
            .push_bind(self.check_voucher_or_current)
            .push_bind(self.check_voucher_or_end)
            .push_bind(self.check_voucher_or_iteration)
            .push_bind(self.check_voucher_use_date_or)
            .push_bind(self.annual_divisor)
            .push_bind(self.cash_on_hand_account_id)
            .push_bind(self.paid_up_shared_capital_account_id)
            .push_bind(self.compassion_fund_account_id);
    }

    fn to_response(&self) -> BranchSettingResponse {
        BranchSettingResponse {
            id: self.id,
            audit: self.audit.to_response(),
            branch_id: self.branch_id,
            currency_id: self.currency_id,
            withdraw_prefix: self.withdraw_prefix.clone(),
            withdraw_or_start: self.withdraw_or_start,
            withdraw_or_current: self.withdraw_or_current,
            withdraw_or_end: self.withdraw_or_end,
            withdraw_or_iteration: self.withdraw_or_iteration,
            withdraw_use_date_or: self.withdraw_use_date_or,
            deposit_prefix: self.deposit_prefix.clone(),
            deposit_or_start: self.deposit_or_start,
            deposit_or_current: self.deposit_or_current,
            deposit_or_end: self.deposit_or_end,
            deposit_or_iteration: self.deposit_or_iteration,
            deposit_use_date_or: self.deposit_use_date_or,
            loan_prefix: self.loan_prefix.clone(),
            loan_or_start: self.loan_or_start,
            loan_or_current: self.loan_or_current,
            loan_or_end: self.loan_or_end,
            loan_or_iteration: self.loan_or_iteration,
            loan_use_date_or: self.loan_use_date_or,
            check_voucher_prefix: self.check_voucher_prefix.clone(),
            check_voucher_or_start: self.check_voucher_or_start,
            check_voucher_or_current: self.check_voucher_or_current,
            check_voucher_or_end: self.check_voucher_or_end,
            check_voucher_or_iteration: self.check_voucher_or_iteration,
            check_voucher_use_date_or: self.check_voucher_use_date_or,
            annual_divisor: self.annual_divisor,
            cash_on_hand_account_id: self.cash_on_hand_account_id,
            paid_up_shared_capital_account_id: self.paid_up_shared_capital_account_id,
            compassion_fund_account_id: self.compassion_fund_account_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_branch_setting_defaults() {
        let setting = BranchSetting::for_branch(Uuid::new_v4(), None, Audit::system());

        assert_eq!(setting.withdraw_prefix, "WD");
        assert_eq!(setting.check_voucher_prefix, "CV");
        assert_eq!(setting.loan_or_end, 999_999);
        assert_eq!(setting.annual_divisor, 360);
        assert!(setting.cash_on_hand_account_id.is_none());
    }
}
