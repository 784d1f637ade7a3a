//! Organization seeding integration tests

use coop_core::model::{Account, BranchSetting, Company, PaymentType, UserOrganization};
use coop_core::repository::{Filter, Repository};
use coop_core::seed::{OrganizationSeeder, SeedError};

mod common;

#[tokio::test]
async fn test_seed_organization_branch() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let peso = common::insert_currency(&db.pool, "Philippine Peso", "PHP", "PH").await;
    let seeder = OrganizationSeeder::new(db.pool.clone(), db.broker.clone());

    let mut tx = db.pool.begin().await.unwrap();
    let summary = seeder
        .seed(&mut tx, t.user_id, t.organization_id, t.branch_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert!(summary.banks > 0);
    assert_eq!(summary.payment_types, 11);
    assert_eq!(summary.accounts, 7);
    assert_eq!(summary.tag_templates, 60);
    // main company + global list, no peso-specific extras
    assert_eq!(summary.companies, 27);

    let tenant = Filter::tenant(t.organization_id, t.branch_id);

    let companies: Repository<Company> = Repository::new(db.pool.clone(), db.broker.clone());
    let main = companies
        .find_one(&[
            tenant[0].clone(),
            tenant[1].clone(),
            Filter::eq("name", "Lakeside Cooperative - Main Branch"),
        ])
        .await
        .unwrap();
    assert!(main.is_some());

    let accounts: Repository<Account> = Repository::new(db.pool.clone(), db.broker.clone());
    let seeded = accounts.find(&tenant).await.unwrap();
    assert!(seeded.iter().all(|a| a.currency_id == Some(peso)));

    let settings: Repository<BranchSetting> = Repository::new(db.pool.clone(), db.broker.clone());
    let setting = settings
        .find_one(&[Filter::eq("branch_id", t.branch_id)])
        .await
        .unwrap()
        .unwrap();
    let cash_on_hand = seeded.iter().find(|a| a.name == "Cash on Hand").unwrap();
    let share_capital = seeded.iter().find(|a| a.name == "Paid Up Share Capital").unwrap();
    assert_eq!(setting.cash_on_hand_account_id, Some(cash_on_hand.id));
    assert_eq!(setting.paid_up_shared_capital_account_id, Some(share_capital.id));

    let memberships: Repository<UserOrganization> = Repository::new(db.pool.clone(), db.broker.clone());
    let membership = memberships
        .find_one(&[Filter::eq("user_id", t.user_id), Filter::eq("branch_id", t.branch_id)])
        .await
        .unwrap()
        .unwrap();
    let regular_savings = seeded.iter().find(|a| a.name == "Regular Savings").unwrap();
    assert!(membership.is_seeded);
    assert_eq!(membership.settings_accounting_deposit_default_value_id, Some(regular_savings.id));

    let payment_types: Repository<PaymentType> = Repository::new(db.pool.clone(), db.broker.clone());
    let default_payment_type = payment_types
        .get_by_id(membership.settings_payment_type_default_value_id.unwrap())
        .await
        .unwrap();
    assert_eq!(default_payment_type.name, "Cash On Hand");
}

#[tokio::test]
async fn test_seed_requires_branch_currency() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let seeder = OrganizationSeeder::new(db.pool.clone(), db.broker.clone());

    let mut tx = db.pool.begin().await.unwrap();
    let err = seeder
        .seed(&mut tx, t.user_id, t.organization_id, t.branch_id)
        .await
        .unwrap_err();
    assert!(matches!(err, SeedError::MissingData(_)));
}

#[tokio::test]
async fn test_destroy_soft_deletes_seeded_rows() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    common::insert_currency(&db.pool, "Philippine Peso", "PHP", "PH").await;
    let seeder = OrganizationSeeder::new(db.pool.clone(), db.broker.clone());

    let mut tx = db.pool.begin().await.unwrap();
    let seeded = seeder
        .seed(&mut tx, t.user_id, t.organization_id, t.branch_id)
        .await
        .unwrap();
    let destroyed = seeder
        .destroy(&mut tx, t.user_id, t.organization_id, t.branch_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(destroyed.banks, seeded.banks);
    assert_eq!(destroyed.payment_types, seeded.payment_types);
    assert_eq!(destroyed.accounts, seeded.accounts);
    assert_eq!(destroyed.tag_templates, seeded.tag_templates);
    assert_eq!(destroyed.companies, seeded.companies);

    let remaining: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM accounts WHERE branch_id = $1 AND deleted_at IS NULL",
    )
    .bind(t.branch_id)
    .fetch_one(&db.pool)
    .await
    .unwrap();
    assert_eq!(remaining, 0);

    let marked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM banks WHERE branch_id = $1 AND deleted_by_id = $2",
    )
    .bind(t.branch_id)
    .bind(t.user_id)
    .fetch_one(&db.pool)
    .await
    .unwrap();
    assert_eq!(marked as usize, seeded.banks);
}
