//! Shared handler state

use std::sync::Arc;

use sqlx::PgPool;

use crate::events::Broker;
use crate::ledger::{GeneralLedgerService, MemberAccountingLedgerService};
use crate::model::{Account, Bank, Category, Company, Currency, PaymentType, TagTemplate};
use crate::repository::Repository;
use crate::seed::{GlobalSeeder, OrganizationSeeder};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub broker: Arc<dyn Broker>,

    pub banks: Repository<Bank>,
    pub companies: Repository<Company>,
    pub payment_types: Repository<PaymentType>,
    pub tag_templates: Repository<TagTemplate>,
    pub accounts: Repository<Account>,
    pub currencies: Repository<Currency>,
    pub categories: Repository<Category>,

    pub general_ledger: GeneralLedgerService,
    pub member_ledgers: MemberAccountingLedgerService,

    pub seeder: OrganizationSeeder,
    pub global_seeder: GlobalSeeder,
}

impl AppState {
    pub fn new(pool: PgPool, broker: Arc<dyn Broker>) -> Self {
        let general_ledger = GeneralLedgerService::new(pool.clone(), Arc::clone(&broker));
        let member_ledgers = general_ledger.members().clone();

        Self {
            banks: Repository::new(pool.clone(), Arc::clone(&broker)),
            companies: Repository::new(pool.clone(), Arc::clone(&broker)),
            payment_types: Repository::new(pool.clone(), Arc::clone(&broker)),
            tag_templates: Repository::new(pool.clone(), Arc::clone(&broker)),
            accounts: Repository::new(pool.clone(), Arc::clone(&broker)),
            currencies: Repository::new(pool.clone(), Arc::clone(&broker)),
            categories: Repository::new(pool.clone(), Arc::clone(&broker)),
            general_ledger,
            member_ledgers,
            seeder: OrganizationSeeder::new(pool.clone(), Arc::clone(&broker)),
            global_seeder: GlobalSeeder::new(pool.clone(), Arc::clone(&broker)),
            pool,
            broker,
        }
    }
}
