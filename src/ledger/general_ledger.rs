//! General ledger service

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::events::Broker;
use crate::model::{
    Account, AccountKind, BranchSetting, GeneralLedger, GeneralLedgerResponse, GeneralLedgerSource,
    GeneralLedgerType, PaymentKind, PaymentType,
};
use crate::repository::{Entity, Filter, Repository, RepositoryError, Sort};

use super::{fold_daily_balances, CollectionKind, DailyBalance, LedgerError};
use super::{MemberAccountingLedgerService, MemberPosting};

/// Latest posting first: entry date, then insertion time
const LATEST_ENTRY: [Sort; 2] = [Sort::desc_nulls_last("entry_date"), Sort::desc("created_at")];

/// Signed change a posting makes to an account's balance.
///
/// Debit-normal accounts (assets, expenses, or no account type at all)
/// grow with debits; the rest grow with credits.
pub fn balance_change(
    ledger_type: Option<GeneralLedgerType>,
    debit: Decimal,
    credit: Decimal,
) -> Decimal {
    match ledger_type {
        Some(t) if !t.is_debit_normal() => credit - debit,
        _ => debit - credit,
    }
}

/// Parameters of [`GeneralLedgerService::daily_ending_balances`]
#[derive(Debug, Clone)]
pub struct DailyBalanceQuery {
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub account_id: Uuid,
    pub member_profile_id: Option<Uuid>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct GeneralLedgerService {
    entries: Repository<GeneralLedger>,
    accounts: Repository<Account>,
    payment_types: Repository<PaymentType>,
    settings: Repository<BranchSetting>,
    members: MemberAccountingLedgerService,
}

impl GeneralLedgerService {
    pub fn new(pool: PgPool, broker: Arc<dyn Broker>) -> Self {
        Self {
            entries: Repository::new(pool.clone(), Arc::clone(&broker)),
            accounts: Repository::new(pool.clone(), Arc::clone(&broker)),
            payment_types: Repository::new(pool.clone(), Arc::clone(&broker)),
            settings: Repository::new(pool.clone(), Arc::clone(&broker)),
            members: MemberAccountingLedgerService::new(pool, broker),
        }
    }

    pub fn repository(&self) -> &Repository<GeneralLedger> {
        &self.entries
    }

    pub fn members(&self) -> &MemberAccountingLedgerService {
        &self.members
    }

    pub async fn current_branch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        Ok(self
            .entries
            .find(&Filter::tenant(organization_id, branch_id))
            .await?)
    }

    // =========================================================================
    // Locking reads
    // =========================================================================

    /// Latest entry of a member on an account, locked until `tx` ends
    pub async fn current_member_account_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        member_profile_id: Uuid,
        account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<GeneralLedger>, LedgerError> {
        let filters = [
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
            Filter::eq("account_id", account_id),
            Filter::eq("member_profile_id", member_profile_id),
        ];
        Ok(self
            .entries
            .find_lock_with_tx(tx, &filters, &LATEST_ENTRY)
            .await?)
    }

    /// Latest entry on an account that belongs to no member
    pub async fn current_subsidiary_account_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<GeneralLedger>, LedgerError> {
        let filters = [
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
            Filter::eq("account_id", account_id),
            Filter::is_null("member_profile_id"),
        ];
        Ok(self
            .entries
            .find_lock_with_tx(tx, &filters, &LATEST_ENTRY)
            .await?)
    }

    /// Latest entry on the branch's cash-on-hand account, regardless of member
    pub async fn cash_on_hand_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cash_on_hand_account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<GeneralLedger>, LedgerError> {
        let filters = [
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
            Filter::eq("account_id", cash_on_hand_account_id),
        ];
        Ok(self
            .entries
            .find_lock_with_tx(tx, &filters, &LATEST_ENTRY)
            .await?)
    }

    /// Latest entry of a member on an account, without locking
    pub async fn current_member_account(
        &self,
        member_profile_id: Uuid,
        account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<GeneralLedger>, LedgerError> {
        let filters = [
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
            Filter::eq("account_id", account_id),
            Filter::eq("member_profile_id", member_profile_id),
        ];
        Ok(self.entries.find_one_sorted(&filters, &LATEST_ENTRY).await?)
    }

    // =========================================================================
    // Cash-on-hand exclusion
    // =========================================================================

    /// Entries of a transaction, minus the branch's cash-on-hand postings
    pub async fn exclude_cash_on_hand(
        &self,
        transaction_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        self.exclude_cash_on_hand_with_filters(transaction_id, organization_id, branch_id, Vec::new())
            .await
    }

    pub async fn exclude_cash_on_hand_with_type(
        &self,
        transaction_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        payment_type: PaymentKind,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let extra = vec![Filter::eq("type_of_payment_type", payment_type.as_str())];
        self.exclude_cash_on_hand_with_filters(transaction_id, organization_id, branch_id, extra)
            .await
    }

    pub async fn exclude_cash_on_hand_with_source(
        &self,
        transaction_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        source: GeneralLedgerSource,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let extra = vec![Filter::eq("source", source.as_str())];
        self.exclude_cash_on_hand_with_filters(transaction_id, organization_id, branch_id, extra)
            .await
    }

    /// Transaction/tenant equality plus `extra`, excluding the cash-on-hand
    /// account when the branch has one configured. Fails if the branch has
    /// no settings row.
    pub async fn exclude_cash_on_hand_with_filters(
        &self,
        transaction_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        extra: Vec<Filter>,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let mut filters = vec![
            Filter::eq("transaction_id", transaction_id),
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ];
        filters.extend(extra);

        let setting = self.branch_setting(branch_id).await?;
        if let Some(cash_on_hand) = setting.cash_on_hand_account_id {
            filters.push(Filter::ne("account_id", cash_on_hand));
        }

        Ok(self.entries.find_with_filters(&filters, &[]).await?)
    }

    /// Settings row of a branch; every ledger branch must have one
    pub async fn branch_setting(&self, branch_id: Uuid) -> Result<BranchSetting, LedgerError> {
        self.settings
            .find_one(&[Filter::eq("branch_id", branch_id)])
            .await?
            .ok_or(LedgerError::BranchSettingNotFound(branch_id))
    }

    // =========================================================================
    // Posting
    // =========================================================================

    /// Highest receipt print number used for a member on an account, 0 if none
    pub async fn print_max_number(
        &self,
        member_profile_id: Uuid,
        account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<i32, LedgerError> {
        let max: i32 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(MAX(print_number), 0)
            FROM general_ledgers
            WHERE member_profile_id = $1
              AND account_id = $2
              AND organization_id = $3
              AND branch_id = $4
              AND deleted_at IS NULL
            "#,
        )
        .bind(member_profile_id)
        .bind(account_id)
        .bind(organization_id)
        .bind(branch_id)
        .fetch_one(self.entries.client())
        .await?;

        Ok(max)
    }

    /// Post an entry: lock the previous posting, compute the running
    /// balance, insert, and fold member postings into the member's
    /// accounting ledger.
    pub async fn create_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut entry: GeneralLedger,
    ) -> Result<GeneralLedger, LedgerError> {
        let account = match entry.account_id {
            Some(id) => Some(self.accounts.get_by_id_with_tx(tx, id).await?),
            None => None,
        };

        // Member sub-ledgers only exist for non-"Other" accounts
        let member_id = match &account {
            Some(a) if a.kind != AccountKind::Other => entry.member_profile_id,
            _ => None,
        };

        // An entry without an account has nothing to chain from
        let previous_balance = match entry.account_id {
            Some(account_id) => {
                let mut filters = vec![
                    Filter::eq("organization_id", entry.organization_id),
                    Filter::eq("branch_id", entry.branch_id),
                    Filter::eq("account_id", account_id),
                ];
                if let Some(member_id) = member_id {
                    filters.push(Filter::eq("member_profile_id", member_id));
                }
                self.entries
                    .find_lock_with_tx(tx, &filters, &[Sort::desc("created_at")])
                    .await?
                    .map(|p| p.balance)
                    .unwrap_or(Decimal::ZERO)
            }
            None => Decimal::ZERO,
        };

        let ledger_type = account.as_ref().and_then(|a| a.general_ledger_type);
        entry.balance = previous_balance + balance_change(ledger_type, entry.debit, entry.credit);

        let created = self.entries.create_with_tx(tx, &entry).await?;

        tracing::info!(
            entry_id = %created.id,
            account_id = ?created.account_id,
            member_profile_id = ?created.member_profile_id,
            debit = %created.debit,
            credit = %created.credit,
            balance = %created.balance,
            "General ledger entry posted"
        );

        if let (Some(member_profile_id), Some(account_id)) = (member_id, created.account_id) {
            self.members
                .update_or_create(
                    tx,
                    MemberPosting {
                        user_id: created.audit.created_by_id,
                        organization_id: created.organization_id,
                        branch_id: created.branch_id,
                        member_profile_id,
                        account_id,
                        balance: created.balance,
                        paid_at: created
                            .entry_date
                            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
                            .unwrap_or_else(Utc::now),
                    },
                )
                .await?;
        }

        Ok(created)
    }

    // =========================================================================
    // Member views
    // =========================================================================

    /// A member's postings on one account, newest first
    pub async fn member_account_entries(
        &self,
        member_profile_id: Uuid,
        account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        cash_on_hand_account_id: Option<Uuid>,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let mut filters = vec![
            Filter::eq("member_profile_id", member_profile_id),
            Filter::eq("account_id", account_id),
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ];
        if let Some(cash_on_hand) = cash_on_hand_account_id {
            filters.push(Filter::ne("account_id", cash_on_hand));
        }

        Ok(self.entries.find_with_filters(&filters, &LATEST_ENTRY).await?)
    }

    /// Every posting of a member, cash on hand excluded
    pub async fn member_profile_entries(
        &self,
        member_profile_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        cash_on_hand_account_id: Option<Uuid>,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let filters = member_filters(
            member_profile_id,
            organization_id,
            branch_id,
            cash_on_hand_account_id,
        );
        Ok(self.entries.find_with_filters(&filters, &LATEST_ENTRY).await?)
    }

    pub async fn member_profile_entries_by_payment_type(
        &self,
        member_profile_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        payment_type: PaymentKind,
        cash_on_hand_account_id: Option<Uuid>,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let mut filters = member_filters(
            member_profile_id,
            organization_id,
            branch_id,
            cash_on_hand_account_id,
        );
        filters.push(Filter::eq("type_of_payment_type", payment_type.as_str()));
        Ok(self.entries.find_with_filters(&filters, &LATEST_ENTRY).await?)
    }

    pub async fn member_profile_entries_by_source(
        &self,
        member_profile_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        source: GeneralLedgerSource,
        cash_on_hand_account_id: Option<Uuid>,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let mut filters = member_filters(
            member_profile_id,
            organization_id,
            branch_id,
            cash_on_hand_account_id,
        );
        filters.push(Filter::eq("source", source.as_str()));
        Ok(self.entries.find_with_filters(&filters, &LATEST_ENTRY).await?)
    }

    // =========================================================================
    // Day views
    // =========================================================================

    /// Ending balance of each day in `from..=to` for one member's ledger on
    /// an account, or the account's non-member postings when no member is
    /// given. The account must belong to the tenant.
    pub async fn daily_ending_balances(
        &self,
        query: &DailyBalanceQuery,
    ) -> Result<Vec<DailyBalance>, LedgerError> {
        if query.to < query.from {
            return Err(LedgerError::InvalidRange {
                from: query.from,
                to: query.to,
            });
        }

        let account = self.accounts.get_by_id(query.account_id).await?;
        if account.organization_id != query.organization_id || account.branch_id != query.branch_id {
            return Err(RepositoryError::NotFound {
                table: Account::TABLE,
                id: query.account_id,
            }
            .into());
        }

        let start = query.from.and_time(NaiveTime::MIN).and_utc();
        let end = query
            .to
            .succ_opt()
            .unwrap_or(query.to)
            .and_time(NaiveTime::MIN)
            .and_utc();

        let mut filters = vec![
            Filter::eq("organization_id", query.organization_id),
            Filter::eq("branch_id", query.branch_id),
            Filter::eq("account_id", query.account_id),
        ];
        // Balances run per member; without one, read the subsidiary ledger
        filters.push(match query.member_profile_id {
            Some(member) => Filter::eq("member_profile_id", member),
            None => Filter::is_null("member_profile_id"),
        });

        let mut before = filters.clone();
        before.push(Filter::lt("created_at", start));
        let opening = self
            .entries
            .find_one_sorted(&before, &[Sort::desc("created_at")])
            .await?
            .map(|e| e.balance)
            .unwrap_or(Decimal::ZERO);

        filters.push(Filter::gte("created_at", start));
        filters.push(Filter::lt("created_at", end));
        let entries = self
            .entries
            .find_with_filters(&filters, &[Sort::asc("created_at")])
            .await?;

        let points: Vec<_> = entries.iter().map(|e| (e.audit.created_at, e.balance)).collect();
        Ok(fold_daily_balances(query.from, query.to, opening, &points))
    }

    /// Entries dated `date` whose source belongs to the collection kind
    pub async fn daily_collection(
        &self,
        kind: CollectionKind,
        organization_id: Uuid,
        branch_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<GeneralLedger>, LedgerError> {
        let sources: Vec<String> = kind.sources().iter().map(|s| s.as_str().to_string()).collect();
        let filters = [
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
            Filter::eq("entry_date", date),
            Filter::in_list("source", sources),
        ];
        Ok(self
            .entries
            .find_with_filters(&filters, &[Sort::asc("created_at")])
            .await?)
    }

    // =========================================================================
    // Responses
    // =========================================================================

    /// Response DTOs with `account` and `payment_type` loaded
    pub async fn to_responses(
        &self,
        entries: &[GeneralLedger],
    ) -> Result<Vec<GeneralLedgerResponse>, LedgerError> {
        let account_ids: Vec<Uuid> = entries.iter().filter_map(|e| e.account_id).collect();
        let payment_type_ids: Vec<Uuid> = entries.iter().filter_map(|e| e.payment_type_id).collect();

        let accounts: HashMap<Uuid, Account> = if account_ids.is_empty() {
            HashMap::new()
        } else {
            self.accounts
                .find(&[Filter::in_list("id", account_ids)])
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        };
        let payment_types: HashMap<Uuid, PaymentType> = if payment_type_ids.is_empty() {
            HashMap::new()
        } else {
            self.payment_types
                .find(&[Filter::in_list("id", payment_type_ids)])
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(entries
            .iter()
            .map(|entry| {
                let mut response = entry.to_response();
                response.account = entry
                    .account_id
                    .and_then(|id| accounts.get(&id))
                    .map(Entity::to_response);
                response.payment_type = entry
                    .payment_type_id
                    .and_then(|id| payment_types.get(&id))
                    .map(Entity::to_response);
                response
            })
            .collect())
    }
}

fn member_filters(
    member_profile_id: Uuid,
    organization_id: Uuid,
    branch_id: Uuid,
    cash_on_hand_account_id: Option<Uuid>,
) -> Vec<Filter> {
    let mut filters = vec![
        Filter::eq("member_profile_id", member_profile_id),
        Filter::eq("organization_id", organization_id),
        Filter::eq("branch_id", branch_id),
    ];
    if let Some(cash_on_hand) = cash_on_hand_account_id {
        filters.push(Filter::ne("account_id", cash_on_hand));
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_change_debit_normal() {
        assert_eq!(
            balance_change(Some(GeneralLedgerType::Assets), dec!(100), dec!(30)),
            dec!(70)
        );
        assert_eq!(
            balance_change(Some(GeneralLedgerType::Expenses), dec!(0), dec!(25)),
            dec!(-25)
        );
    }

    #[test]
    fn test_balance_change_credit_normal() {
        for ledger_type in [
            GeneralLedgerType::Liabilities,
            GeneralLedgerType::Equity,
            GeneralLedgerType::Revenue,
        ] {
            assert_eq!(balance_change(Some(ledger_type), dec!(40), dec!(100)), dec!(60));
        }
    }

    #[test]
    fn test_balance_change_without_account_type() {
        assert_eq!(balance_change(None, dec!(10.50), dec!(0.25)), dec!(10.25));
    }

    #[test]
    fn test_member_filters_exclude_cash_on_hand() {
        let cash = Uuid::new_v4();
        let filters = member_filters(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Some(cash));
        assert_eq!(filters.len(), 4);
        assert_eq!(filters[3], Filter::ne("account_id", cash));

        let without = member_filters(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), None);
        assert_eq!(without.len(), 3);
    }
}
