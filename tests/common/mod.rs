//! Common test utilities
#![allow(dead_code)]

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use coop_core::events::BroadcastBroker;

/// Tests in one binary share the database; each holds this lock while it runs.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestDb {
    pub pool: PgPool,
    pub broker: Arc<BroadcastBroker>,
    _guard: MutexGuard<'static, ()>,
}

/// One user with a membership on one organization branch
#[derive(Debug, Clone, Copy)]
pub struct Tenant {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
}

/// Setup test database - migrate, then truncate every table
pub async fn setup_test_db() -> TestDb {
    let guard = DB_LOCK.lock().await;

    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    coop_core::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    sqlx::query(
        r#"
        TRUNCATE TABLE
            member_accounting_ledgers, general_ledgers, accounts, tag_templates,
            payment_types, companies, banks, user_organizations, branch_settings,
            branches, organizations, categories, currencies, users
        CASCADE
        "#,
    )
    .execute(&mut *tx)
    .await
    .expect("Failed to clean up DB");
    tx.commit().await.expect("Failed to commit transaction");

    TestDb {
        pool,
        broker: Arc::new(BroadcastBroker::new(256)),
        _guard: guard,
    }
}

/// Insert a user, an organization, a branch in `country_code` and the
/// membership linking them
pub async fn create_tenant(pool: &PgPool, country_code: &str) -> Tenant {
    let user_id = create_user(pool).await;
    let organization_id = Uuid::new_v4();
    let branch_id = Uuid::new_v4();

    sqlx::query("INSERT INTO organizations (id, name, created_by_id) VALUES ($1, $2, $3)")
        .bind(organization_id)
        .bind("Lakeside Cooperative")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to insert organization");

    sqlx::query(
        r#"
        INSERT INTO branches (
            id, organization_id, type, name, email, country_code, address,
            province, city, region, barangay, postal_code, is_main_branch
        )
        VALUES ($1, $2, 'cooperative', 'Main Branch', 'main@example.test', $3,
                '12 Rizal Avenue', 'Laguna', 'Calamba', 'IV-A', 'Real', '4027', TRUE)
        "#,
    )
    .bind(branch_id)
    .bind(organization_id)
    .bind(country_code)
    .execute(pool)
    .await
    .expect("Failed to insert branch");

    let tenant = Tenant {
        user_id,
        organization_id,
        branch_id,
    };
    add_membership(pool, user_id, &tenant, "owner", "accepted").await;
    tenant
}

pub async fn create_user(pool: &PgPool) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, user_name, email) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(format!("user_{}", user_id.simple()))
        .bind(format!("{}@example.test", user_id.simple()))
        .execute(pool)
        .await
        .expect("Failed to insert user");
    user_id
}

/// Give `user_id` a membership on the tenant's branch
pub async fn add_membership(
    pool: &PgPool,
    user_id: Uuid,
    tenant: &Tenant,
    user_type: &str,
    application_status: &str,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO user_organizations (
            id, organization_id, branch_id, user_id, user_type,
            application_status, developer_secret_key
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(tenant.organization_id)
    .bind(tenant.branch_id)
    .bind(user_id)
    .bind(user_type)
    .bind(application_status)
    .bind(Uuid::new_v4().to_string())
    .execute(pool)
    .await
    .expect("Failed to insert user organization");
    id
}

/// Insert a single currency row
pub async fn insert_currency(pool: &PgPool, name: &str, code: &str, alpha2: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO currencies (id, name, country, currency_code, iso_3166_alpha2) VALUES ($1, $2, $2, $3, $4)",
    )
    .bind(id)
    .bind(name)
    .bind(code)
    .bind(alpha2)
    .execute(pool)
    .await
    .expect("Failed to insert currency");
    id
}
