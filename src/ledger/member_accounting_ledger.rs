//! Member accounting ledger service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::events::Broker;
use crate::model::MemberAccountingLedger;
use crate::repository::{Filter, Repository};

use super::LedgerError;

/// A posting folded into a member's running totals
#[derive(Debug, Clone)]
pub struct MemberPosting {
    /// Who posted; `None` for system postings
    pub user_id: Option<Uuid>,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub member_profile_id: Uuid,
    pub account_id: Uuid,
    pub balance: Decimal,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MemberAccountingLedgerService {
    repository: Repository<MemberAccountingLedger>,
}

impl MemberAccountingLedgerService {
    pub fn new(pool: PgPool, broker: Arc<dyn Broker>) -> Self {
        Self {
            repository: Repository::new(pool, broker),
        }
    }

    pub fn repository(&self) -> &Repository<MemberAccountingLedger> {
        &self.repository
    }

    pub async fn current_branch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<MemberAccountingLedger>, LedgerError> {
        Ok(self
            .repository
            .find(&Filter::tenant(organization_id, branch_id))
            .await?)
    }

    pub async fn member_ledgers(
        &self,
        member_profile_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<MemberAccountingLedger>, LedgerError> {
        let filters = [
            Filter::eq("member_profile_id", member_profile_id),
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ];
        Ok(self.repository.find(&filters).await?)
    }

    /// Lock the member/account row. `None` if the member has no row yet.
    pub async fn find_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        member_profile_id: Uuid,
        account_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Option<MemberAccountingLedger>, LedgerError> {
        let filters = [
            Filter::eq("member_profile_id", member_profile_id),
            Filter::eq("account_id", account_id),
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ];
        Ok(self.repository.find_lock_with_tx(tx, &filters, &[]).await?)
    }

    /// Create the member/account row on first posting, otherwise fold the
    /// posting into the locked row.
    pub async fn update_or_create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        posting: MemberPosting,
    ) -> Result<MemberAccountingLedger, LedgerError> {
        let existing = self
            .find_for_update(
                tx,
                posting.member_profile_id,
                posting.account_id,
                posting.organization_id,
                posting.branch_id,
            )
            .await?;

        let row = match existing {
            Some(mut row) => {
                row.record_payment(posting.balance, posting.paid_at, posting.user_id);
                self.repository.update_fields_with_tx(tx, &row).await?
            }
            None => {
                let row = MemberAccountingLedger::opening(
                    posting.user_id,
                    posting.organization_id,
                    posting.branch_id,
                    posting.member_profile_id,
                    posting.account_id,
                    posting.balance,
                    posting.paid_at,
                );
                self.repository.create_with_tx(tx, &row).await?
            }
        };

        tracing::debug!(
            member_profile_id = %row.member_profile_id,
            account_id = %row.account_id,
            count = row.count,
            balance = %row.balance,
            "Member accounting ledger updated"
        );

        Ok(row)
    }
}
