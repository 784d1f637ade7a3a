//! General ledger integration tests

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use coop_core::ledger::{CollectionKind, DailyBalanceQuery, GeneralLedgerService, LedgerError};
use coop_core::model::{
    Account, AccountKind, Audit, BranchSetting, GeneralLedger, GeneralLedgerSource,
    GeneralLedgerType, PaymentKind,
};
use coop_core::repository::{Repository, RepositoryError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

mod common;

struct Fixture {
    db: common::TestDb,
    tenant: common::Tenant,
    ledger: GeneralLedgerService,
    savings: Account,
    cash_on_hand: Account,
}

async fn fixture() -> Fixture {
    let db = common::setup_test_db().await;
    let tenant = common::create_tenant(&db.pool, "PH").await;
    let accounts: Repository<Account> = Repository::new(db.pool.clone(), db.broker.clone());

    let mut savings = Account::new(
        tenant.user_id,
        tenant.organization_id,
        tenant.branch_id,
        "Regular Savings",
        "Member savings",
        AccountKind::Deposit,
    );
    savings.general_ledger_type = Some(GeneralLedgerType::Liabilities);
    let savings = accounts.create(&savings).await.unwrap();

    let mut cash_on_hand = Account::new(
        tenant.user_id,
        tenant.organization_id,
        tenant.branch_id,
        "Cash on Hand",
        "Teller cash",
        AccountKind::Other,
    );
    cash_on_hand.general_ledger_type = Some(GeneralLedgerType::Assets);
    cash_on_hand.cash_on_hand = true;
    let cash_on_hand = accounts.create(&cash_on_hand).await.unwrap();

    let settings: Repository<BranchSetting> = Repository::new(db.pool.clone(), db.broker.clone());
    let mut setting = BranchSetting::for_branch(tenant.branch_id, None, Audit::by(tenant.user_id));
    setting.cash_on_hand_account_id = Some(cash_on_hand.id);
    settings.create(&setting).await.unwrap();

    let ledger = GeneralLedgerService::new(db.pool.clone(), db.broker.clone());
    Fixture {
        db,
        tenant,
        ledger,
        savings,
        cash_on_hand,
    }
}

fn entry(
    f: &Fixture,
    account: &Account,
    source: GeneralLedgerSource,
    debit: Decimal,
    credit: Decimal,
) -> GeneralLedger {
    let mut entry = GeneralLedger::new(
        f.tenant.user_id,
        f.tenant.organization_id,
        f.tenant.branch_id,
        source,
        debit,
        credit,
    );
    entry.account_id = Some(account.id);
    entry.entry_date = Some(Utc::now().date_naive());
    entry
}

async fn post(f: &Fixture, entry: GeneralLedger) -> GeneralLedger {
    let mut tx = f.db.pool.begin().await.unwrap();
    let created = f.ledger.create_entry(&mut tx, entry).await.unwrap();
    tx.commit().await.unwrap();
    created
}

#[tokio::test]
async fn test_running_balance_follows_account_type() {
    let f = fixture().await;
    let member = Uuid::new_v4();

    let mut deposit = entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(100));
    deposit.member_profile_id = Some(member);
    assert_eq!(post(&f, deposit).await.balance, dec!(100));

    let mut withdraw = entry(&f, &f.savings, GeneralLedgerSource::Withdraw, dec!(30), dec!(0));
    withdraw.member_profile_id = Some(member);
    assert_eq!(post(&f, withdraw).await.balance, dec!(70));

    // debit-normal account grows with debits
    let cash_in = entry(&f, &f.cash_on_hand, GeneralLedgerSource::Deposit, dec!(100), dec!(0));
    assert_eq!(post(&f, cash_in).await.balance, dec!(100));

    let rows = f
        .ledger
        .members()
        .member_ledgers(member, f.tenant.organization_id, f.tenant.branch_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].account_id, f.savings.id);
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[0].balance, dec!(70));
}

#[tokio::test]
async fn test_balances_are_kept_per_member() {
    let f = fixture().await;
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

    for (member, amount) in [(alice, dec!(50)), (bob, dec!(20)), (alice, dec!(25))] {
        let mut e = entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), amount);
        e.member_profile_id = Some(member);
        post(&f, e).await;
    }

    let latest = f
        .ledger
        .current_member_account(alice, f.savings.id, f.tenant.organization_id, f.tenant.branch_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.balance, dec!(75));

    let max_print = f
        .ledger
        .print_max_number(bob, f.savings.id, f.tenant.organization_id, f.tenant.branch_id)
        .await
        .unwrap();
    assert_eq!(max_print, 0);
}

#[tokio::test]
async fn test_other_accounts_skip_member_ledger() {
    let f = fixture().await;
    let member = Uuid::new_v4();

    let mut e = entry(&f, &f.cash_on_hand, GeneralLedgerSource::Payment, dec!(10), dec!(0));
    e.member_profile_id = Some(member);
    post(&f, e).await;

    let rows = f
        .ledger
        .members()
        .member_ledgers(member, f.tenant.organization_id, f.tenant.branch_id)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_locked_read_inside_transaction() {
    let f = fixture().await;
    let member = Uuid::new_v4();

    let mut e = entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(40));
    e.member_profile_id = Some(member);
    post(&f, e).await;

    let mut tx = f.db.pool.begin().await.unwrap();
    let locked = f
        .ledger
        .current_member_account_for_update(
            &mut tx,
            member,
            f.savings.id,
            f.tenant.organization_id,
            f.tenant.branch_id,
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(locked.balance, dec!(40));

    // only member postings exist on savings
    let subsidiary = f
        .ledger
        .current_subsidiary_account_for_update(
            &mut tx,
            f.savings.id,
            f.tenant.organization_id,
            f.tenant.branch_id,
        )
        .await
        .unwrap();
    assert!(subsidiary.is_none());

    let coh = f
        .ledger
        .cash_on_hand_for_update(
            &mut tx,
            f.cash_on_hand.id,
            f.tenant.organization_id,
            f.tenant.branch_id,
        )
        .await
        .unwrap();
    assert!(coh.is_none());
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_exclude_cash_on_hand() {
    let f = fixture().await;
    let transaction_id = Uuid::new_v4();

    let mut cash = entry(&f, &f.cash_on_hand, GeneralLedgerSource::Payment, dec!(500), dec!(0));
    cash.transaction_id = Some(transaction_id);
    cash.type_of_payment_type = Some(PaymentKind::Cash);
    post(&f, cash).await;

    let mut savings = entry(&f, &f.savings, GeneralLedgerSource::Payment, dec!(0), dec!(500));
    savings.transaction_id = Some(transaction_id);
    savings.type_of_payment_type = Some(PaymentKind::Cash);
    let savings = post(&f, savings).await;

    let (org, branch) = (f.tenant.organization_id, f.tenant.branch_id);

    let rows = f.ledger.exclude_cash_on_hand(transaction_id, org, branch).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, savings.id);

    let rows = f
        .ledger
        .exclude_cash_on_hand_with_type(transaction_id, org, branch, PaymentKind::Online)
        .await
        .unwrap();
    assert!(rows.is_empty());

    let rows = f
        .ledger
        .exclude_cash_on_hand_with_source(transaction_id, org, branch, GeneralLedgerSource::Payment)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let responses = f.ledger.to_responses(&rows).await.unwrap();
    assert_eq!(
        responses[0].account.as_ref().map(|a| a.name.as_str()),
        Some("Regular Savings")
    );
}

#[tokio::test]
async fn test_exclude_requires_branch_setting() {
    let f = fixture().await;
    let other = common::create_tenant(&f.db.pool, "PH").await;

    let err = f
        .ledger
        .exclude_cash_on_hand(Uuid::new_v4(), other.organization_id, other.branch_id)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::BranchSettingNotFound(id) if id == other.branch_id));
}

#[tokio::test]
async fn test_daily_ending_balances() {
    let f = fixture().await;
    let today = Utc::now().date_naive();

    post(&f, entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(200))).await;
    post(&f, entry(&f, &f.savings, GeneralLedgerSource::Withdraw, dec!(50), dec!(0))).await;

    let query = DailyBalanceQuery {
        organization_id: f.tenant.organization_id,
        branch_id: f.tenant.branch_id,
        account_id: f.savings.id,
        member_profile_id: None,
        from: today - Duration::days(2),
        to: today,
    };
    let days = f.ledger.daily_ending_balances(&query).await.unwrap();

    let balances: Vec<_> = days.iter().map(|d| d.balance).collect();
    assert_eq!(balances, vec![dec!(0), dec!(0), dec!(150)]);
    assert_eq!(days[2].date, today);
}

#[tokio::test]
async fn test_daily_balances_reject_bad_input() {
    let f = fixture().await;
    let today = Utc::now().date_naive();

    let mut query = DailyBalanceQuery {
        organization_id: f.tenant.organization_id,
        branch_id: f.tenant.branch_id,
        account_id: f.savings.id,
        member_profile_id: None,
        from: today,
        to: today - Duration::days(1),
    };
    let err = f.ledger.daily_ending_balances(&query).await.unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRange { .. }));

    // account of another tenant
    let other = common::create_tenant(&f.db.pool, "PH").await;
    query.to = today;
    query.organization_id = other.organization_id;
    query.branch_id = other.branch_id;
    let err = f.ledger.daily_ending_balances(&query).await.unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Repository(RepositoryError::NotFound { table: "accounts", .. })
    ));
}

#[tokio::test]
async fn test_daily_collection_groups_sources() {
    let f = fixture().await;
    let today = Utc::now().date_naive();

    post(&f, entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(10))).await;
    post(&f, entry(&f, &f.savings, GeneralLedgerSource::Withdraw, dec!(5), dec!(0))).await;
    post(&f, entry(&f, &f.savings, GeneralLedgerSource::Payment, dec!(0), dec!(3))).await;

    let (org, branch) = (f.tenant.organization_id, f.tenant.branch_id);
    let booking = f
        .ledger
        .daily_collection(CollectionKind::Booking, org, branch, today)
        .await
        .unwrap();
    assert_eq!(booking.len(), 2);

    let disbursement = f
        .ledger
        .daily_collection(CollectionKind::Disbursement, org, branch, today)
        .await
        .unwrap();
    assert_eq!(disbursement.len(), 1);
    assert_eq!(disbursement[0].source, GeneralLedgerSource::Withdraw);
}

#[tokio::test]
async fn test_entry_without_account_starts_from_zero() {
    let f = fixture().await;

    post(&f, entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(100))).await;

    let mut journal = entry(&f, &f.savings, GeneralLedgerSource::JournalVoucher, dec!(5), dec!(0));
    journal.account_id = None;
    let journal = post(&f, journal).await;
    assert_eq!(journal.balance, dec!(5));

    // savings keeps its own chain
    let next = post(&f, entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(1))).await;
    assert_eq!(next.balance, dec!(101));
}

#[tokio::test]
async fn test_member_ledger_follows_entry_date() {
    let f = fixture().await;
    let member = Uuid::new_v4();
    let entry_date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();

    let mut e = entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(60));
    e.member_profile_id = Some(member);
    e.entry_date = Some(entry_date);
    e.audit = Audit::system();
    post(&f, e).await;

    let (org, branch) = (f.tenant.organization_id, f.tenant.branch_id);
    let rows = f.ledger.members().member_ledgers(member, org, branch).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].last_pay,
        Some(Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap())
    );
    // system postings have no author
    assert_eq!(rows[0].audit.created_by_id, None);

    let mut e = entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), dec!(40));
    e.member_profile_id = Some(member);
    e.entry_date = None;
    post(&f, e).await;

    let rows = f.ledger.members().member_ledgers(member, org, branch).await.unwrap();
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[0].audit.updated_by_id, Some(f.tenant.user_id));
    assert!(rows[0].last_pay.unwrap().date_naive() > entry_date);
}

#[tokio::test]
async fn test_daily_balances_are_per_member() {
    let f = fixture().await;
    let today = Utc::now().date_naive();
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

    for (member, amount) in [(None, dec!(30)), (Some(alice), dec!(100)), (Some(bob), dec!(5))] {
        let mut e = entry(&f, &f.savings, GeneralLedgerSource::Deposit, dec!(0), amount);
        e.member_profile_id = member;
        post(&f, e).await;
    }

    let mut query = DailyBalanceQuery {
        organization_id: f.tenant.organization_id,
        branch_id: f.tenant.branch_id,
        account_id: f.savings.id,
        member_profile_id: Some(alice),
        from: today,
        to: today,
    };
    let days = f.ledger.daily_ending_balances(&query).await.unwrap();
    assert_eq!(days[0].balance, dec!(100));

    // no member: only postings that belong to no member
    query.member_profile_id = None;
    let days = f.ledger.daily_ending_balances(&query).await.unwrap();
    assert_eq!(days[0].balance, dec!(30));
}
