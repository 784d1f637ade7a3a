//! Branch

use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{Audit, AuditResponse};

#[derive(Debug, Clone, FromRow)]
pub struct Branch {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub media_id: Option<Uuid>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    /// ISO 3166 alpha-2, used to pick the branch currency
    pub country_code: String,
    pub contact_number: Option<String>,
    pub address: String,
    pub province: String,
    pub city: String,
    pub region: String,
    pub barangay: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_main_branch: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub media_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub country_code: String,
    pub contact_number: Option<String>,
    pub address: String,
    pub province: String,
    pub city: String,
    pub region: String,
    pub barangay: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_main_branch: bool,
}

impl Entity for Branch {
    const TABLE: &'static str = "branches";
    const TOPIC: &'static str = "branch";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "media_id",
        "type",
        "name",
        "email",
        "description",
        "country_code",
        "contact_number",
        "address",
        "province",
        "city",
        "region",
        "barangay",
        "postal_code",
        "latitude",
        "longitude",
        "is_main_branch",
    ];

    type Response = BranchResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.media_id)
            .push_bind(self.kind.clone())
            .push_bind(self.name.clone())
            .push_bind(self.email.clone())
            .push_bind(self.description.clone())
            .push_bind(self.country_code.clone())
            .push_bind(self.contact_number.clone())
            .push_bind(self.address.clone())
            .push_bind(self.province.clone())
            .push_bind(self.city.clone())
            .push_bind(self.region.clone())
            .push_bind(self.barangay.clone())
            .push_bind(self.postal_code.clone())
            .push_bind(self.latitude)
            .push_bind(self.longitude)
            .push_bind(self.is_main_branch);
    }

    fn to_response(&self) -> BranchResponse {
        BranchResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            media_id: self.media_id,
            kind: self.kind.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            description: self.description.clone(),
            country_code: self.country_code.clone(),
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            province: self.province.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            barangay: self.barangay.clone(),
            postal_code: self.postal_code.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            is_main_branch: self.is_main_branch,
        }
    }

    fn topic_scope(&self) -> TopicScope {
        TopicScope {
            organization_id: Some(self.organization_id),
            ..TopicScope::default()
        }
    }
}
