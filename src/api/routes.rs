//! API Routes
//!
//! HTTP endpoint definitions. All routes expect a [`TenantContext`]
//! extension inserted by the tenant middleware.

use axum::{
    extract::{Extension, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::context::TenantContext;
use crate::error::{AppError, AppResult};
use crate::ledger::{CollectionKind, DailyBalance, DailyBalanceQuery};
use crate::model::{
    AccountKind, AccountResponse, CategoryResponse, CurrencyResponse, GeneralLedgerResponse,
    GeneralLedgerSource, MemberAccountingLedgerResponse, PaymentKind,
};
use crate::model::{Account, Bank, Company, PaymentType, TagTemplate};
use crate::repository::{to_models, Filter, Sort};
use crate::seed::{DestroySummary, SeedSummary};

use super::resource::resource_router;
use super::AppState;

// =========================================================================
// Query types
// =========================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LedgerFilterQuery {
    #[serde(default)]
    pub payment_type: Option<PaymentKind>,
    #[serde(default)]
    pub source: Option<GeneralLedgerSource>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberLedgerQuery {
    #[serde(default)]
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub payment_type: Option<PaymentKind>,
    #[serde(default)]
    pub source: Option<GeneralLedgerSource>,
}

#[derive(Debug, Deserialize)]
pub struct DailyBalanceParams {
    pub account_id: Uuid,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub member_profile_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberQuery {
    #[serde(default)]
    pub member_profile_id: Option<Uuid>,
}

// =========================================================================
// Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/banks", resource_router::<Bank>())
        .nest("/companies", resource_router::<Company>())
        .nest("/payment-types", resource_router::<PaymentType>())
        .nest("/tag-templates", resource_router::<TagTemplate>())
        .nest("/accounts", resource_router::<Account>())
        .route("/accounts/loan", get(list_loan_accounts))
        .route("/currencies", get(list_currencies))
        .route("/categories", get(list_categories))
        .route("/seed", post(seed_branch))
        .route("/seed/destroy", post(destroy_seed))
        .route("/general-ledger", get(branch_entries))
        .route(
            "/general-ledger/transactions/:transaction_id",
            get(transaction_entries),
        )
        .route(
            "/general-ledger/members/:member_profile_id",
            get(member_entries),
        )
        .route("/general-ledger/daily-balances", get(daily_balances))
        .route("/general-ledger/collections/:kind", get(daily_collection))
        .route("/member-accounting-ledgers", get(member_accounting_ledgers))
}

// =========================================================================
// Reference data
// =========================================================================

async fn list_loan_accounts(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
) -> AppResult<Json<Vec<AccountResponse>>> {
    let [org, branch] = ctx.filters();
    let filters = [org, branch, Filter::eq("type", AccountKind::Loan.as_str())];
    let accounts = state.accounts.find(&filters).await?;
    Ok(Json(to_models(&accounts)))
}

async fn list_currencies(State(state): State<AppState>) -> AppResult<Json<Vec<CurrencyResponse>>> {
    let currencies = state
        .currencies
        .find_with_filters(&[], &[Sort::asc("name")])
        .await?;
    Ok(Json(to_models(&currencies)))
}

async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state
        .categories
        .find_with_filters(&[], &[Sort::asc("name")])
        .await?;
    Ok(Json(to_models(&categories)))
}

// =========================================================================
// Seeding
// =========================================================================

async fn seed_branch(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
) -> AppResult<Json<SeedSummary>> {
    let mut tx = state.pool.begin().await?;
    let summary = state
        .seeder
        .seed(&mut tx, ctx.user_id, ctx.organization_id, ctx.branch_id)
        .await?;
    tx.commit().await?;
    Ok(Json(summary))
}

async fn destroy_seed(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
) -> AppResult<Json<DestroySummary>> {
    let mut tx = state.pool.begin().await?;
    let summary = state
        .seeder
        .destroy(&mut tx, ctx.user_id, ctx.organization_id, ctx.branch_id)
        .await?;
    tx.commit().await?;
    Ok(Json(summary))
}

// =========================================================================
// General ledger
// =========================================================================

async fn transaction_entries(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Path(transaction_id): Path<Uuid>,
    Query(query): Query<LedgerFilterQuery>,
) -> AppResult<Json<Vec<GeneralLedgerResponse>>> {
    let ledger = &state.general_ledger;
    let (org, branch) = (ctx.organization_id, ctx.branch_id);

    let entries = match (query.payment_type, query.source) {
        (Some(_), Some(_)) => {
            return Err(AppError::InvalidRequest(
                "payment_type and source are mutually exclusive".to_string(),
            ))
        }
        (Some(kind), None) => {
            ledger
                .exclude_cash_on_hand_with_type(transaction_id, org, branch, kind)
                .await?
        }
        (None, Some(source)) => {
            ledger
                .exclude_cash_on_hand_with_source(transaction_id, org, branch, source)
                .await?
        }
        (None, None) => ledger.exclude_cash_on_hand(transaction_id, org, branch).await?,
    };

    Ok(Json(ledger.to_responses(&entries).await?))
}

async fn branch_entries(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
) -> AppResult<Json<Vec<GeneralLedgerResponse>>> {
    let ledger = &state.general_ledger;
    let entries = ledger.current_branch(ctx.organization_id, ctx.branch_id).await?;
    Ok(Json(ledger.to_responses(&entries).await?))
}

async fn member_entries(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Path(member_profile_id): Path<Uuid>,
    Query(query): Query<MemberLedgerQuery>,
) -> AppResult<Json<Vec<GeneralLedgerResponse>>> {
    let ledger = &state.general_ledger;
    let (org, branch) = (ctx.organization_id, ctx.branch_id);
    let cash_on_hand = ledger.branch_setting(branch).await?.cash_on_hand_account_id;

    let entries = match (query.account_id, query.payment_type, query.source) {
        (Some(account_id), None, None) => {
            ledger
                .member_account_entries(member_profile_id, account_id, org, branch, cash_on_hand)
                .await?
        }
        (None, Some(kind), None) => {
            ledger
                .member_profile_entries_by_payment_type(
                    member_profile_id,
                    org,
                    branch,
                    kind,
                    cash_on_hand,
                )
                .await?
        }
        (None, None, Some(source)) => {
            ledger
                .member_profile_entries_by_source(member_profile_id, org, branch, source, cash_on_hand)
                .await?
        }
        (None, None, None) => {
            ledger
                .member_profile_entries(member_profile_id, org, branch, cash_on_hand)
                .await?
        }
        _ => {
            return Err(AppError::InvalidRequest(
                "use at most one of account_id, payment_type, source".to_string(),
            ))
        }
    };

    Ok(Json(ledger.to_responses(&entries).await?))
}

async fn daily_balances(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Query(params): Query<DailyBalanceParams>,
) -> AppResult<Json<Vec<DailyBalance>>> {
    let query = DailyBalanceQuery {
        organization_id: ctx.organization_id,
        branch_id: ctx.branch_id,
        account_id: params.account_id,
        member_profile_id: params.member_profile_id,
        from: params.from,
        to: params.to,
    };
    Ok(Json(state.general_ledger.daily_ending_balances(&query).await?))
}

async fn daily_collection(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Path(kind): Path<String>,
    Query(query): Query<CollectionQuery>,
) -> AppResult<Json<Vec<GeneralLedgerResponse>>> {
    let kind: CollectionKind = kind.parse().map_err(AppError::InvalidRequest)?;
    let ledger = &state.general_ledger;
    let entries = ledger
        .daily_collection(kind, ctx.organization_id, ctx.branch_id, query.date)
        .await?;
    Ok(Json(ledger.to_responses(&entries).await?))
}

async fn member_accounting_ledgers(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Query(query): Query<MemberQuery>,
) -> AppResult<Json<Vec<MemberAccountingLedgerResponse>>> {
    let ledgers = &state.member_ledgers;
    let rows = match query.member_profile_id {
        Some(member) => {
            ledgers
                .member_ledgers(member, ctx.organization_id, ctx.branch_id)
                .await?
        }
        None => ledgers.current_branch(ctx.organization_id, ctx.branch_id).await?,
    };
    Ok(Json(to_models(&rows)))
}
