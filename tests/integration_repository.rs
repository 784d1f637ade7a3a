//! Repository and global seed integration tests

use std::sync::Arc;

use coop_core::events::{BroadcastBroker, Broker};
use coop_core::model::{Bank, Category, Currency, PaymentKind, PaymentType, UserOrganization, UserType};
use coop_core::repository::{Filter, Repository, RepositoryError, Sort};
use coop_core::seed::GlobalSeeder;
use uuid::Uuid;

mod common;

fn broker(db: &common::TestDb) -> Arc<dyn Broker> {
    db.broker.clone()
}

#[tokio::test]
async fn test_create_and_find_scoped_to_tenant() {
    let db = common::setup_test_db().await;
    let a = common::create_tenant(&db.pool, "PH").await;
    let b = common::create_tenant(&db.pool, "PH").await;
    let banks: Repository<Bank> = Repository::new(db.pool.clone(), broker(&db));

    let created = banks
        .create(&Bank::new(a.user_id, a.organization_id, a.branch_id, "BDO Unibank", "Largest bank"))
        .await
        .unwrap();
    banks
        .create(&Bank::new(b.user_id, b.organization_id, b.branch_id, "Metrobank", "Universal bank"))
        .await
        .unwrap();

    let rows = banks.find(&Filter::tenant(a.organization_id, a.branch_id)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, created.id);
    assert_eq!(rows[0].audit.created_by_id, Some(a.user_id));

    let count = banks.count(&Filter::tenant(b.organization_id, b.branch_id)).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_update_reloads_row() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let payment_types: Repository<PaymentType> = Repository::new(db.pool.clone(), broker(&db));

    let mut row = payment_types
        .create(&PaymentType::new(
            t.user_id,
            t.organization_id,
            t.branch_id,
            "Forward Cheque",
            "Post-dated cheque",
            PaymentKind::Check,
            3,
        ))
        .await
        .unwrap();

    row.number_of_days = 5;
    row.kind = PaymentKind::Online;
    let updated = payment_types.update_fields(&row).await.unwrap();
    assert_eq!(updated.number_of_days, 5);
    assert_eq!(updated.kind, PaymentKind::Online);
    assert!(updated.audit.updated_at >= updated.audit.created_at);

    let reloaded = payment_types.get_by_id(row.id).await.unwrap();
    assert_eq!(reloaded.kind, PaymentKind::Online);
}

#[tokio::test]
async fn test_soft_delete_hides_row() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let banks: Repository<Bank> = Repository::new(db.pool.clone(), broker(&db));

    let bank = banks
        .create(&Bank::new(t.user_id, t.organization_id, t.branch_id, "Landbank", "Government bank"))
        .await
        .unwrap();
    banks.delete_by_id(bank.id, Some(t.user_id)).await.unwrap();

    let err = banks.get_by_id(bank.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(banks.find(&Filter::tenant(t.organization_id, t.branch_id)).await.unwrap().is_empty());

    // row is still there, just marked
    let deleted_by: Option<Uuid> = sqlx::query_scalar("SELECT deleted_by_id FROM banks WHERE id = $1")
        .bind(bank.id)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(deleted_by, Some(t.user_id));

    // deleting again reports the missing row
    let err = banks.delete_by_id(bank.id, Some(t.user_id)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { table: "banks", .. }));
}

#[tokio::test]
async fn test_mutations_publish_topics() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let mut events = db.broker.subscribe();
    let banks: Repository<Bank> = Repository::new(db.pool.clone(), broker(&db));

    let bank = banks
        .create(&Bank::new(t.user_id, t.organization_id, t.branch_id, "PNB", "Philippine National Bank"))
        .await
        .unwrap();

    let mut topics = Vec::new();
    for _ in 0..4 {
        let message = events.recv().await.unwrap();
        assert_eq!(message.payload["name"], "PNB");
        topics.push(message.topic);
    }
    assert_eq!(
        topics,
        vec![
            "bank.create".to_string(),
            format!("bank.create.{}", bank.id),
            format!("bank.create.branch.{}", t.branch_id),
            format!("bank.create.organization.{}", t.organization_id),
        ]
    );
}

#[tokio::test]
async fn test_filter_operators() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let payment_types: Repository<PaymentType> = Repository::new(db.pool.clone(), broker(&db));

    for (name, kind, days) in [
        ("Cash", PaymentKind::Cash, 0),
        ("Cheque", PaymentKind::Check, 3),
        ("GCash", PaymentKind::Online, 1),
    ] {
        payment_types
            .create(&PaymentType::new(t.user_id, t.organization_id, t.branch_id, name, "", kind, days))
            .await
            .unwrap();
    }

    let [org, branch] = Filter::tenant(t.organization_id, t.branch_id);

    let slow = payment_types
        .find_with_filters(
            &[org.clone(), branch.clone(), Filter::gte("number_of_days", 1_i32)],
            &[Sort::asc("number_of_days")],
        )
        .await
        .unwrap();
    let names: Vec<_> = slow.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["GCash", "Cheque"]);

    let listed = payment_types
        .find(&[
            org.clone(),
            branch.clone(),
            Filter::in_list("type", vec!["cash".to_string(), "online".to_string()]),
        ])
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);

    let not_cash = payment_types
        .count(&[org, branch, Filter::ne("type", PaymentKind::Cash.as_str())])
        .await
        .unwrap();
    assert_eq!(not_cash, 2);
}

#[tokio::test]
async fn test_global_seed() {
    let db = common::setup_test_db().await;
    let seeder = GlobalSeeder::new(db.pool.clone(), Arc::new(BroadcastBroker::default()));

    let mut tx = db.pool.begin().await.unwrap();
    let summary = seeder.seed(&mut tx).await.unwrap();
    tx.commit().await.unwrap();
    assert_eq!(summary.categories, 7);
    assert!(summary.currencies > 0);

    let currencies: Repository<Currency> = Repository::new(db.pool.clone(), broker(&db));
    let peso = currencies
        .find_one(&[Filter::eq("currency_code", "PHP")])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(peso.iso_3166_alpha2.as_deref(), Some("PH"));
}

#[tokio::test]
async fn test_category_seed_runs_once() {
    let db = common::setup_test_db().await;
    let seeder = GlobalSeeder::new(db.pool.clone(), broker(&db));

    let mut tx = db.pool.begin().await.unwrap();
    assert_eq!(seeder.seed_categories(&mut tx).await.unwrap(), 7);
    assert_eq!(seeder.seed_categories(&mut tx).await.unwrap(), 0);
    tx.commit().await.unwrap();

    let categories: Repository<Category> = Repository::new(db.pool.clone(), broker(&db));
    assert_eq!(categories.count(&[]).await.unwrap(), 7);
}

#[tokio::test]
async fn test_currency_seed_is_not_idempotent() {
    let db = common::setup_test_db().await;
    let seeder = GlobalSeeder::new(db.pool.clone(), broker(&db));

    let mut tx = db.pool.begin().await.unwrap();
    seeder.seed_currencies(&mut tx).await.unwrap();
    tx.commit().await.unwrap();

    let mut tx = db.pool.begin().await.unwrap();
    assert!(seeder.seed_currencies(&mut tx).await.is_err());
}

#[tokio::test]
async fn test_currency_lookups() {
    let db = common::setup_test_db().await;
    common::insert_currency(&db.pool, "Philippine Peso", "PHP", "PH").await;
    common::insert_currency(&db.pool, "Euro", "EUR", "").await;
    common::insert_currency(&db.pool, "Croatian Euro", "EUR", "HR").await;
    let currencies: Repository<Currency> = Repository::new(db.pool.clone(), broker(&db));

    let peso = currencies.default_currency().await.unwrap().unwrap();
    assert_eq!(peso.currency_code, "PHP");

    let euro = currencies.find_by_code("EUR").await.unwrap().unwrap();
    assert_eq!(euro.name, "Croatian Euro");

    let croatia = currencies.find_by_alpha2("HR").await.unwrap().unwrap();
    assert_eq!(croatia.currency_code, "EUR");
    assert!(currencies.find_by_alpha2("ZZ").await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_organization_helpers() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let memberships: Repository<UserOrganization> = Repository::new(db.pool.clone(), broker(&db));

    let teller = common::create_user(&db.pool).await;
    common::add_membership(&db.pool, teller, &t, "employee", "accepted").await;
    let applicant = common::create_user(&db.pool).await;
    common::add_membership(&db.pool, applicant, &t, "member", "pending").await;

    assert_eq!(memberships.count_per_branch(t.organization_id, t.branch_id).await.unwrap(), 3);

    let pending = memberships
        .by_branch(t.organization_id, t.branch_id, true)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].user_id, applicant);

    let employees = memberships.employees(t.organization_id, t.branch_id).await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].user_type, UserType::Employee);
    assert_eq!(memberships.members(t.organization_id, t.branch_id).await.unwrap().len(), 1);

    assert_eq!(memberships.by_user(teller, false).await.unwrap().len(), 1);
    assert_eq!(memberships.by_organization(t.organization_id, false).await.unwrap().len(), 3);

    // already on the branch
    assert!(!memberships
        .employee_can_join(teller, t.organization_id, t.branch_id)
        .await
        .unwrap());

    // a different organization
    let other_branch = common::create_tenant(&db.pool, "PH").await;
    let newcomer = common::create_user(&db.pool).await;
    assert!(memberships
        .member_can_join(newcomer, t.organization_id, t.branch_id)
        .await
        .unwrap());
    assert!(memberships
        .employee_can_join(teller, other_branch.organization_id, other_branch.branch_id)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_global_seed_if_empty_runs_once() {
    let db = common::setup_test_db().await;
    let seeder = GlobalSeeder::new(db.pool.clone(), broker(&db));

    let first = seeder.seed_if_empty().await.unwrap().unwrap();
    assert_eq!(first.categories, 7);
    assert!(first.currencies > 0);

    assert!(seeder.seed_if_empty().await.unwrap().is_none());

    let currencies: Repository<Currency> = Repository::new(db.pool.clone(), broker(&db));
    assert_eq!(currencies.count(&[]).await.unwrap() as usize, first.currencies);
}

#[tokio::test]
async fn test_topics_are_published_before_commit() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let mut events = db.broker.subscribe();
    let banks: Repository<Bank> = Repository::new(db.pool.clone(), broker(&db));

    let mut tx = db.pool.begin().await.unwrap();
    let bank = banks
        .create_with_tx(
            &mut tx,
            &Bank::new(t.user_id, t.organization_id, t.branch_id, "RCBC", "Rizal Commercial"),
        )
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    // announced even though the row never landed
    assert_eq!(events.recv().await.unwrap().topic, "bank.create");
    assert!(banks.get_by_id(bank.id).await.unwrap_err().is_not_found());
}
