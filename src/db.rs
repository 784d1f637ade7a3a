//! Database module
//!
//! Connection, migration and schema checks.

use sqlx::PgPool;

/// Tables every service relies on
pub const REQUIRED_TABLES: &[&str] = &[
    "users",
    "currencies",
    "categories",
    "organizations",
    "branches",
    "branch_settings",
    "user_organizations",
    "banks",
    "companies",
    "payment_types",
    "tag_templates",
    "accounts",
    "general_ledgers",
    "member_accounting_ledgers",
];

/// Apply pending migrations from `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Check if required tables exist
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    for table in REQUIRED_TABLES {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )
            "#,
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    Ok(true)
}
