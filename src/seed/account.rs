//! Account seed

use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::{
    Account, AccountKind, Audit, BranchSetting, ComputationType, GeneralLedgerType,
    OtherAccountInformation,
};
use crate::repository::Filter;

use super::{OrganizationSeeder, SeedContext, SeedError};

pub(crate) const REGULAR_SAVINGS: &str = "Regular Savings";
pub(crate) const PAID_UP_SHARE_CAPITAL: &str = "Paid Up Share Capital";
pub(crate) const CASH_ON_HAND: &str = "Cash on Hand";

/// Tenant and currency shared by every seeded account
pub(crate) struct AccountSeedContext {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub currency_id: Option<Uuid>,
    pub cash_on_hand_payment_type_id: Option<Uuid>,
}

impl AccountSeedContext {
    fn account(&self, name: &str, description: &str, kind: AccountKind, index: i32) -> Account {
        let mut account = Account::new(
            self.user_id,
            self.organization_id,
            self.branch_id,
            name,
            description,
            kind,
        );
        account.currency_id = self.currency_id;
        account.index = index;
        account
    }
}

fn amount(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

/// Interest and fine rates with one decimal place, e.g. `rate(25)` is 2.5
fn rate(tenths: i64) -> Decimal {
    Decimal::new(tenths, 1)
}

/// The default chart of accounts for a new branch
pub(crate) fn default_accounts(ctx: &AccountSeedContext) -> Vec<Account> {
    let mut regular = ctx.account(
        REGULAR_SAVINGS,
        "Basic savings account for general purpose savings with standard interest rates.",
        AccountKind::Deposit,
        1,
    );
    regular.min_amount = amount(100);
    regular.max_amount = amount(1_000_000);
    regular.interest_standard = rate(25);
    regular.general_ledger_type = Some(GeneralLedgerType::Liabilities);
    regular.computation_type = ComputationType::Diminishing;
    regular.icon = "Savings".to_string();

    let mut premium = ctx.account(
        "Premium Savings",
        "High-yield savings account with better interest rates for higher balances.",
        AccountKind::Deposit,
        2,
    );
    premium.min_amount = amount(5_000);
    premium.max_amount = amount(5_000_000);
    premium.interest_standard = rate(40);
    premium.general_ledger_type = Some(GeneralLedgerType::Liabilities);
    premium.computation_type = ComputationType::DiminishingYearly;
    premium.icon = "Crown".to_string();

    let mut emergency_loan = ctx.account(
        "Emergency Loan",
        "Quick access loan for urgent financial needs and unexpected expenses.",
        AccountKind::Loan,
        3,
    );
    emergency_loan.min_amount = amount(1_000);
    emergency_loan.max_amount = amount(100_000);
    emergency_loan.interest_standard = rate(85);
    emergency_loan.interest_secured = rate(75);
    emergency_loan.fines_amort = rate(10);
    emergency_loan.fines_maturity = rate(20);
    emergency_loan.general_ledger_type = Some(GeneralLedgerType::Assets);
    emergency_loan.computation_type = ComputationType::Diminishing;
    emergency_loan.cut_off_days = 3;
    emergency_loan.icon = "Rocket".to_string();

    let mut business_loan = ctx.account(
        "Business Loan",
        "Capital loan for business expansion, equipment purchase, and working capital needs.",
        AccountKind::Loan,
        4,
    );
    business_loan.min_amount = amount(50_000);
    business_loan.max_amount = amount(5_000_000);
    business_loan.interest_standard = rate(100);
    business_loan.interest_secured = rate(90);
    business_loan.fines_amort = rate(15);
    business_loan.fines_maturity = rate(25);
    business_loan.general_ledger_type = Some(GeneralLedgerType::Assets);
    business_loan.computation_type = ComputationType::DiminishingYearly;
    business_loan.cut_off_days = 7;
    business_loan.icon = "Shop Icon".to_string();

    let mut share_capital = ctx.account(
        PAID_UP_SHARE_CAPITAL,
        "Member's share capital contribution representing ownership stake in the cooperative.",
        AccountKind::Other,
        5,
    );
    share_capital.min_amount = amount(100);
    share_capital.max_amount = amount(1_000_000);
    share_capital.general_ledger_type = Some(GeneralLedgerType::Equity);
    share_capital.paid_up_share_capital = true;
    share_capital.icon = "Star".to_string();
    share_capital.show_in_general_ledger_source_adjustment = false;
    share_capital.show_in_general_ledger_source_journal_voucher = false;
    share_capital.show_in_general_ledger_source_check_voucher = false;

    let mut cash_on_hand = ctx.account(
        CASH_ON_HAND,
        "Physical cash available at the branch for daily operations and transactions.",
        AccountKind::Other,
        6,
    );
    cash_on_hand.default_payment_type_id = ctx.cash_on_hand_payment_type_id;
    cash_on_hand.max_amount = amount(10_000_000);
    cash_on_hand.general_ledger_type = Some(GeneralLedgerType::Assets);
    cash_on_hand.cash_on_hand = true;
    cash_on_hand.cash_and_cash_equivalence = true;
    cash_on_hand.other_information_of_an_account = OtherAccountInformation::CashOnHand;
    cash_on_hand.icon = "Hand Coins".to_string();
    cash_on_hand.show_in_general_ledger_source_withdraw = false;
    cash_on_hand.show_in_general_ledger_source_deposit = false;

    let mut cash_in_bank = ctx.account(
        "Cash in Bank",
        "Funds deposited in bank accounts for secure storage and banking transactions.",
        AccountKind::Other,
        7,
    );
    cash_in_bank.default_payment_type_id = ctx.cash_on_hand_payment_type_id;
    cash_in_bank.max_amount = amount(50_000_000);
    cash_in_bank.general_ledger_type = Some(GeneralLedgerType::Assets);
    cash_in_bank.cash_and_cash_equivalence = true;
    cash_in_bank.other_information_of_an_account = OtherAccountInformation::CashInBank;
    cash_in_bank.icon = "Bank".to_string();

    vec![
        regular,
        premium,
        emergency_loan,
        business_loan,
        share_capital,
        cash_on_hand,
        cash_in_bank,
    ]
}

impl OrganizationSeeder {
    /// Seeds the default accounts, then points the branch setting at the
    /// share capital and cash-on-hand accounts and the user organization's
    /// accounting defaults at Regular Savings.
    pub(super) async fn seed_accounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        cash_on_hand_payment_type_id: Option<Uuid>,
    ) -> Result<Vec<Account>, SeedError> {
        let currency = self
            .branch_currency(tx, branch_id)
            .await?
            .ok_or_else(|| SeedError::MissingData(format!("currency for branch {}", branch_id)))?;

        let ctx = AccountSeedContext {
            user_id,
            organization_id,
            branch_id,
            currency_id: Some(currency.id),
            cash_on_hand_payment_type_id,
        };

        let mut created = Vec::new();
        for account in default_accounts(&ctx) {
            let account = self
                .accounts
                .create_with_tx(tx, &account)
                .await
                .with_context(|| format!("failed to seed account {}", account.name))?;
            created.push(account);
        }

        let find = |name: &str| created.iter().find(|a| a.name == name).map(|a| a.id);

        let setting = self
            .branch_settings
            .find_one_with_tx(tx, &[Filter::eq("branch_id", branch_id)])
            .await
            .context("failed to find branch settings for account seeding")?;
        let mut setting = match setting {
            Some(setting) => setting,
            None => {
                let fresh = BranchSetting::for_branch(branch_id, Some(currency.id), Audit::by(user_id));
                self.branch_settings
                    .create_with_tx(tx, &fresh)
                    .await
                    .context("failed to create branch settings")?
            }
        };
        setting.paid_up_shared_capital_account_id = find(PAID_UP_SHARE_CAPITAL);
        setting.cash_on_hand_account_id = find(CASH_ON_HAND);
        setting.audit.touch(user_id);
        self.branch_settings
            .update_fields_with_tx(tx, &setting)
            .await
            .context("failed to update branch settings with paid up share capital and cash on hand accounts")?;

        let mut membership = self
            .user_organization(tx, user_id, organization_id, branch_id)
            .await
            .context("failed to find user organization for seeding accounting default accounts")?;
        if let Some(regular_savings) = find(REGULAR_SAVINGS) {
            membership.settings_accounting_payment_default_value_id = Some(regular_savings);
            membership.settings_accounting_deposit_default_value_id = Some(regular_savings);
            membership.settings_accounting_withdraw_default_value_id = Some(regular_savings);
            membership.audit.touch(user_id);
            self.user_organizations
                .update_fields_with_tx(tx, &membership)
                .await
                .context("failed to update user organization with accounting default accounts")?;
        }

        tracing::debug!(branch_id = %branch_id, count = created.len(), "Seeded accounts");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AccountSeedContext {
        AccountSeedContext {
            user_id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
            currency_id: Some(Uuid::new_v4()),
            cash_on_hand_payment_type_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_default_accounts() {
        let ctx = ctx();
        let accounts = default_accounts(&ctx);
        assert_eq!(accounts.len(), 7);
        assert!(accounts.iter().all(|a| a.currency_id == ctx.currency_id));
        assert!(accounts.iter().all(|a| a.organization_id == ctx.organization_id));

        let cash = accounts.iter().find(|a| a.name == CASH_ON_HAND).unwrap();
        assert!(cash.cash_on_hand);
        assert_eq!(cash.kind, AccountKind::Other);
        assert_eq!(cash.default_payment_type_id, ctx.cash_on_hand_payment_type_id);

        let capital = accounts.iter().find(|a| a.name == PAID_UP_SHARE_CAPITAL).unwrap();
        assert!(capital.paid_up_share_capital);
        assert_eq!(capital.general_ledger_type, Some(GeneralLedgerType::Equity));
    }

    #[test]
    fn test_default_account_rates() {
        let accounts = default_accounts(&ctx());
        let regular = accounts.iter().find(|a| a.name == REGULAR_SAVINGS).unwrap();
        assert_eq!(regular.interest_standard.to_string(), "2.5");
        assert_eq!(regular.general_ledger_type, Some(GeneralLedgerType::Liabilities));
    }
}
