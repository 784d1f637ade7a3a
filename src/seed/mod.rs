//! Seed Data
//!
//! Reference rows written inside the caller's transaction. A failing step
//! is wrapped once with [`SeedError::Context`] and the caller rolls back.

mod account;
mod bank;
mod bank_data;
mod category;
mod company;
mod company_data;
mod currency;
mod currency_data;
mod error;
mod payment_type;
mod tag_template;
mod tag_template_data;

use std::sync::Arc;

use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::events::Broker;
use crate::model::{
    Account, Bank, Branch, BranchSetting, Category, Company, Currency, Organization, PaymentType,
    TagTemplate, UserOrganization,
};
use crate::repository::{Entity, Filter, Repository, RepositoryError};

pub use error::{SeedContext, SeedError};

/// Rows written by [`OrganizationSeeder::seed`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub banks: usize,
    pub payment_types: usize,
    pub accounts: usize,
    pub tag_templates: usize,
    pub companies: usize,
}

/// Rows soft-deleted by [`OrganizationSeeder::destroy`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DestroySummary {
    pub banks: usize,
    pub payment_types: usize,
    pub accounts: usize,
    pub tag_templates: usize,
    pub companies: usize,
}

/// Per-branch reference data for a newly created organization branch
#[derive(Debug, Clone)]
pub struct OrganizationSeeder {
    banks: Repository<Bank>,
    companies: Repository<Company>,
    payment_types: Repository<PaymentType>,
    tag_templates: Repository<TagTemplate>,
    accounts: Repository<Account>,
    branches: Repository<Branch>,
    branch_settings: Repository<BranchSetting>,
    organizations: Repository<Organization>,
    currencies: Repository<Currency>,
    user_organizations: Repository<UserOrganization>,
}

impl OrganizationSeeder {
    pub fn new(pool: PgPool, broker: Arc<dyn Broker>) -> Self {
        Self {
            banks: Repository::new(pool.clone(), Arc::clone(&broker)),
            companies: Repository::new(pool.clone(), Arc::clone(&broker)),
            payment_types: Repository::new(pool.clone(), Arc::clone(&broker)),
            tag_templates: Repository::new(pool.clone(), Arc::clone(&broker)),
            accounts: Repository::new(pool.clone(), Arc::clone(&broker)),
            branches: Repository::new(pool.clone(), Arc::clone(&broker)),
            branch_settings: Repository::new(pool.clone(), Arc::clone(&broker)),
            organizations: Repository::new(pool.clone(), Arc::clone(&broker)),
            currencies: Repository::new(pool.clone(), Arc::clone(&broker)),
            user_organizations: Repository::new(pool, broker),
        }
    }

    /// Seed banks, payment types, accounts and tag templates, mark the
    /// user organization as seeded, then seed companies.
    pub async fn seed(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<SeedSummary, SeedError> {
        tracing::info!(
            user_id = %user_id,
            organization_id = %organization_id,
            branch_id = %branch_id,
            "Seeding organization branch"
        );

        let banks = self.seed_banks(tx, user_id, organization_id, branch_id).await?;

        let cash_on_hand = self
            .seed_payment_types(tx, user_id, organization_id, branch_id)
            .await?;

        let accounts = self
            .seed_accounts(tx, user_id, organization_id, branch_id, Some(cash_on_hand.id))
            .await?;

        let tag_templates = self
            .seed_tag_templates(tx, user_id, organization_id, branch_id)
            .await?;

        let mut membership = self
            .user_organization(tx, user_id, organization_id, branch_id)
            .await
            .context("failed to find user organization")?;
        membership.is_seeded = true;
        membership.audit.touch(user_id);
        self.user_organizations
            .update_fields_with_tx(tx, &membership)
            .await
            .context("failed to mark user organization as seeded")?;

        let companies = self
            .seed_companies(tx, user_id, organization_id, branch_id)
            .await?;

        let summary = SeedSummary {
            banks,
            payment_types: payment_type::PAYMENT_TYPES.len() + 1,
            accounts: accounts.len(),
            tag_templates,
            companies,
        };
        tracing::info!(branch_id = %branch_id, ?summary, "Organization branch seeded");
        Ok(summary)
    }

    /// Soft-delete every seeded row of the tenant
    pub async fn destroy(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<DestroySummary, SeedError> {
        let tenant = Filter::tenant(organization_id, branch_id);
        let deleted_by = Some(user_id);

        let companies = destroy_all(&self.companies, tx, &tenant, deleted_by, "companies", "company", |c| &c.name)
            .await?;
        let tag_templates = destroy_all(
            &self.tag_templates,
            tx,
            &tenant,
            deleted_by,
            "tag templates",
            "tag template",
            |t| &t.name,
        )
        .await?;
        let accounts = destroy_all(&self.accounts, tx, &tenant, deleted_by, "accounts", "account", |a| &a.name)
            .await?;
        let payment_types = destroy_all(
            &self.payment_types,
            tx,
            &tenant,
            deleted_by,
            "payment types",
            "payment type",
            |p| &p.name,
        )
        .await?;
        let banks = destroy_all(&self.banks, tx, &tenant, deleted_by, "banks", "bank", |b| &b.name).await?;

        let summary = DestroySummary {
            banks,
            payment_types,
            accounts,
            tag_templates,
            companies,
        };

        tracing::info!(branch_id = %branch_id, ?summary, "Organization branch seed destroyed");
        Ok(summary)
    }

    /// Currency whose ISO alpha-2 matches the branch's country code
    async fn branch_currency(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        branch_id: Uuid,
    ) -> Result<Option<Currency>, SeedError> {
        let branch = self
            .branches
            .get_by_id_with_tx(tx, branch_id)
            .await
            .with_context(|| format!("failed to get branch {}", branch_id))?;
        let currency = self
            .currencies
            .find_one_with_tx(tx, &[Filter::eq("iso_3166_alpha2", branch.country_code.as_str())])
            .await
            .context("failed to find branch currency")?;
        Ok(currency)
    }

    async fn user_organization(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<UserOrganization, RepositoryError> {
        let filters = [
            Filter::eq("user_id", user_id),
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ];
        self.user_organizations
            .find_one_with_tx(tx, &filters)
            .await?
            .ok_or(RepositoryError::NotFound {
                table: UserOrganization::TABLE,
                id: user_id,
            })
    }
}

async fn destroy_all<E: Entity>(
    repository: &Repository<E>,
    tx: &mut Transaction<'_, Postgres>,
    tenant: &[Filter],
    deleted_by: Option<Uuid>,
    plural: &str,
    singular: &str,
    name: fn(&E) -> &String,
) -> Result<usize, SeedError> {
    let rows = repository
        .find_with_tx(tx, tenant)
        .await
        .with_context(|| format!("failed to get {}", plural))?;

    for row in &rows {
        repository
            .delete_by_id_with_tx(tx, row.id(), deleted_by)
            .await
            .with_context(|| format!("failed to destroy {} {}", singular, name(row)))?;
    }
    Ok(rows.len())
}

/// Rows shared by every tenant
#[derive(Debug, Clone)]
pub struct GlobalSeeder {
    currencies: Repository<Currency>,
    categories: Repository<Category>,
}

/// Rows written by [`GlobalSeeder::seed`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalSeedSummary {
    pub currencies: usize,
    pub categories: usize,
}

impl GlobalSeeder {
    pub fn new(pool: PgPool, broker: Arc<dyn Broker>) -> Self {
        Self {
            currencies: Repository::new(pool.clone(), Arc::clone(&broker)),
            categories: Repository::new(pool, broker),
        }
    }

    /// Currencies, then categories. Only the category step checks for
    /// existing rows.
    pub async fn seed(&self, tx: &mut Transaction<'_, Postgres>) -> Result<GlobalSeedSummary, SeedError> {
        let currencies = self.seed_currencies(tx).await?;
        let categories = self.seed_categories(tx).await?;
        Ok(GlobalSeedSummary {
            currencies,
            categories,
        })
    }

    /// Run [`seed`](Self::seed) in its own transaction on a database that
    /// has no currencies yet. Returns `None` when currencies already exist.
    pub async fn seed_if_empty(&self) -> Result<Option<GlobalSeedSummary>, SeedError> {
        let existing = self
            .currencies
            .count(&[])
            .await
            .context("failed to count currencies")?;
        if existing > 0 {
            tracing::debug!(existing, "Global reference data present, skipping seed");
            return Ok(None);
        }

        let mut tx = self.currencies.client().begin().await?;
        let summary = self.seed(&mut tx).await?;
        tx.commit().await?;

        tracing::info!(
            currencies = summary.currencies,
            categories = summary.categories,
            "Global reference data seeded"
        );
        Ok(Some(summary))
    }
}
