//! Currency
//!
//! Global reference table, not tenant-scoped.

use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::repository::{Entity, Filter, Repository, RepositoryError, Sort};

use super::{Audit, AuditResponse};

/// Code of the currency used when a branch has none configured
pub const DEFAULT_CURRENCY_CODE: &str = "PHP";

#[derive(Debug, Clone, FromRow)]
pub struct Currency {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub name: String,
    pub country: String,
    pub currency_code: String,
    pub symbol: Option<String>,
    pub emoji: Option<String>,
    pub iso_3166_alpha2: Option<String>,
    pub iso_3166_alpha3: Option<String>,
    pub iso_3166_numeric: Option<String>,
    pub phone_code: Option<String>,
    pub domain: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub name: String,
    pub country: String,
    pub currency_code: String,
    pub symbol: Option<String>,
    pub emoji: Option<String>,
    pub iso_3166_alpha2: Option<String>,
    pub iso_3166_alpha3: Option<String>,
    pub iso_3166_numeric: Option<String>,
    pub phone_code: Option<String>,
    pub domain: Option<String>,
    pub locale: Option<String>,
}

impl Entity for Currency {
    const TABLE: &'static str = "currencies";
    const TOPIC: &'static str = "currency";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "name",
        "country",
        "currency_code",
        "symbol",
        "emoji",
        "iso_3166_alpha2",
        "iso_3166_alpha3",
        "iso_3166_numeric",
        "phone_code",
        "domain",
        "locale",
    ];

    type Response = CurrencyResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.name.clone())
            .push_bind(self.country.clone())
            .push_bind(self.currency_code.clone())
            .push_bind(self.symbol.clone())
            .push_bind(self.emoji.clone())
            .push_bind(self.iso_3166_alpha2.clone())
            .push_bind(self.iso_3166_alpha3.clone())
            .push_bind(self.iso_3166_numeric.clone())
            .push_bind(self.phone_code.clone())
            .push_bind(self.domain.clone())
            .push_bind(self.locale.clone());
    }

    fn to_response(&self) -> CurrencyResponse {
        CurrencyResponse {
            id: self.id,
            audit: self.audit.to_response(),
            name: self.name.clone(),
            country: self.country.clone(),
            currency_code: self.currency_code.clone(),
            symbol: self.symbol.clone(),
            emoji: self.emoji.clone(),
            iso_3166_alpha2: self.iso_3166_alpha2.clone(),
            iso_3166_alpha3: self.iso_3166_alpha3.clone(),
            iso_3166_numeric: self.iso_3166_numeric.clone(),
            phone_code: self.phone_code.clone(),
            domain: self.domain.clone(),
            locale: self.locale.clone(),
        }
    }
}

impl Repository<Currency> {
    pub async fn find_by_alpha2(&self, alpha2: &str) -> Result<Option<Currency>, RepositoryError> {
        self.find_one(&[Filter::eq("iso_3166_alpha2", alpha2)]).await
    }

    /// Several countries share a code; the first by name wins
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, RepositoryError> {
        self.find_one_sorted(&[Filter::eq("currency_code", code)], &[Sort::asc("name")])
            .await
    }

    pub async fn default_currency(&self) -> Result<Option<Currency>, RepositoryError> {
        self.find_by_code(DEFAULT_CURRENCY_CODE).await
    }
}
