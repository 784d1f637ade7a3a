//! Tenant-scoped CRUD endpoints
//!
//! Accounts, banks, companies, payment types and tag templates share the
//! same five handlers. Rows of another tenant behave as missing.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::context::TenantContext;
use crate::error::AppResult;
use crate::model::{
    Account, AccountKind, AccountRequest, Audit, Bank, BankRequest, Company, CompanyRequest, PaymentType, PaymentTypeRequest,
    TagTemplate, TagTemplateRequest, ValidationError,
};
use crate::repository::{Entity, Repository, RepositoryError};

use super::AppState;

pub trait TenantResource: Entity + Sync {
    type Request: DeserializeOwned + Send + 'static;

    fn validate(request: &Self::Request) -> Result<(), ValidationError>;

    fn from_request(context: &TenantContext, request: Self::Request) -> Self;

    fn apply_request(&mut self, request: Self::Request, user_id: Uuid);

    /// `(organization_id, branch_id)` of the row
    fn tenant(&self) -> (Uuid, Uuid);

    fn repository(state: &AppState) -> &Repository<Self>;
}

impl TenantResource for Account {
    type Request = AccountRequest;

    fn validate(request: &AccountRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn from_request(ctx: &TenantContext, request: AccountRequest) -> Self {
        let mut account = Account::new(
            ctx.user_id,
            ctx.organization_id,
            ctx.branch_id,
            "",
            "",
            AccountKind::Other,
        );
        account.apply(request, ctx.user_id);
        account
    }

    fn apply_request(&mut self, request: AccountRequest, user_id: Uuid) {
        self.apply(request, user_id);
    }

    fn tenant(&self) -> (Uuid, Uuid) {
        (self.organization_id, self.branch_id)
    }

    fn repository(state: &AppState) -> &Repository<Self> {
        &state.accounts
    }
}

impl TenantResource for Bank {
    type Request = BankRequest;

    fn validate(request: &BankRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn from_request(ctx: &TenantContext, request: BankRequest) -> Self {
        let mut bank = Bank::new(ctx.user_id, ctx.organization_id, ctx.branch_id, "", "");
        bank.apply(request, ctx.user_id);
        bank
    }

    fn apply_request(&mut self, request: BankRequest, user_id: Uuid) {
        self.apply(request, user_id);
    }

    fn tenant(&self) -> (Uuid, Uuid) {
        (self.organization_id, self.branch_id)
    }

    fn repository(state: &AppState) -> &Repository<Self> {
        &state.banks
    }
}

impl TenantResource for Company {
    type Request = CompanyRequest;

    fn validate(request: &CompanyRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn from_request(ctx: &TenantContext, request: CompanyRequest) -> Self {
        let mut company = Company::new(ctx.user_id, ctx.organization_id, ctx.branch_id, "", "");
        company.apply(request, ctx.user_id);
        company
    }

    fn apply_request(&mut self, request: CompanyRequest, user_id: Uuid) {
        self.apply(request, user_id);
    }

    fn tenant(&self) -> (Uuid, Uuid) {
        (self.organization_id, self.branch_id)
    }

    fn repository(state: &AppState) -> &Repository<Self> {
        &state.companies
    }
}

impl TenantResource for PaymentType {
    type Request = PaymentTypeRequest;

    fn validate(request: &PaymentTypeRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn from_request(ctx: &TenantContext, request: PaymentTypeRequest) -> Self {
        let mut payment_type = PaymentType::new(
            ctx.user_id,
            ctx.organization_id,
            ctx.branch_id,
            "",
            "",
            request.kind,
            0,
        );
        payment_type.apply(request, ctx.user_id);
        payment_type
    }

    fn apply_request(&mut self, request: PaymentTypeRequest, user_id: Uuid) {
        self.apply(request, user_id);
    }

    fn tenant(&self) -> (Uuid, Uuid) {
        (self.organization_id, self.branch_id)
    }

    fn repository(state: &AppState) -> &Repository<Self> {
        &state.payment_types
    }
}

impl TenantResource for TagTemplate {
    type Request = TagTemplateRequest;

    fn validate(request: &TagTemplateRequest) -> Result<(), ValidationError> {
        request.validate()
    }

    fn from_request(ctx: &TenantContext, request: TagTemplateRequest) -> Self {
        let mut template = TagTemplate {
            id: Uuid::new_v4(),
            audit: Audit::by(ctx.user_id),
            organization_id: ctx.organization_id,
            branch_id: ctx.branch_id,
            name: String::new(),
            description: None,
            category: None,
            color: None,
            icon: None,
        };
        template.apply(request, ctx.user_id);
        template
    }

    fn apply_request(&mut self, request: TagTemplateRequest, user_id: Uuid) {
        self.apply(request, user_id);
    }

    fn tenant(&self) -> (Uuid, Uuid) {
        (self.organization_id, self.branch_id)
    }

    fn repository(state: &AppState) -> &Repository<Self> {
        &state.tag_templates
    }
}

/// `GET /` + `POST /`, `GET|PUT|DELETE /:id`
pub fn resource_router<R: TenantResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(show::<R>).put(update::<R>).delete(destroy::<R>))
}

/// Row by id, `NotFound` when it belongs to another tenant
async fn load<R: TenantResource>(state: &AppState, ctx: &TenantContext, id: Uuid) -> AppResult<R> {
    let row = R::repository(state).get_by_id(id).await?;
    if row.tenant() != (ctx.organization_id, ctx.branch_id) {
        return Err(RepositoryError::NotFound { table: R::TABLE, id }.into());
    }
    Ok(row)
}

async fn list<R: TenantResource>(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
) -> AppResult<Json<Vec<R::Response>>> {
    let rows = R::repository(&state).find(&ctx.filters()).await?;
    Ok(Json(rows.iter().map(Entity::to_response).collect()))
}

async fn create<R: TenantResource>(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<R::Request>,
) -> AppResult<(StatusCode, Json<R::Response>)> {
    R::validate(&request)?;
    let row = R::from_request(&ctx, request);
    let created = R::repository(&state).create(&row).await?;

    tracing::info!(table = R::TABLE, id = %created.id(), user_id = %ctx.user_id, "Created");
    Ok((StatusCode::CREATED, Json(created.to_response())))
}

async fn show<R: TenantResource>(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<R::Response>> {
    let row: R = load(&state, &ctx, id).await?;
    Ok(Json(row.to_response()))
}

async fn update<R: TenantResource>(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<R::Request>,
) -> AppResult<Json<R::Response>> {
    R::validate(&request)?;
    let mut row: R = load(&state, &ctx, id).await?;
    row.apply_request(request, ctx.user_id);
    let updated = R::repository(&state).update_fields(&row).await?;
    Ok(Json(updated.to_response()))
}

async fn destroy<R: TenantResource>(
    State(state): State<AppState>,
    Extension(ctx): Extension<TenantContext>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let _: R = load(&state, &ctx, id).await?;
    R::repository(&state)
        .delete_by_id(id, Some(ctx.user_id))
        .await?;

    tracing::info!(table = R::TABLE, id = %id, user_id = %ctx.user_id, "Deleted");
    Ok(StatusCode::NO_CONTENT)
}
