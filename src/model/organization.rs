//! Organization

use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::repository::Entity;

use super::{Audit, AuditResponse};

/// Top-level tenant. Branches and every tenant-scoped row hang off it.
#[derive(Debug, Clone, FromRow)]
pub struct Organization {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_private: bool,
    pub media_id: Option<Uuid>,
    pub subscription_plan_max_branches: i32,
    pub subscription_plan_max_employees: i32,
    pub subscription_plan_max_members_per_branch: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_private: bool,
    pub media_id: Option<Uuid>,
    pub subscription_plan_max_branches: i32,
    pub subscription_plan_max_employees: i32,
    pub subscription_plan_max_members_per_branch: i32,
}

impl Entity for Organization {
    const TABLE: &'static str = "organizations";
    const TOPIC: &'static str = "organization";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "name",
        "address",
        "email",
        "contact_number",
        "description",
        "color",
        "is_private",
        "media_id",
        "subscription_plan_max_branches",
        "subscription_plan_max_employees",
        "subscription_plan_max_members_per_branch",
    ];

    type Response = OrganizationResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.name.clone())
            .push_bind(self.address.clone())
            .push_bind(self.email.clone())
            .push_bind(self.contact_number.clone())
            .push_bind(self.description.clone())
            .push_bind(self.color.clone())
            .push_bind(self.is_private)
            .push_bind(self.media_id)
            .push_bind(self.subscription_plan_max_branches)
            .push_bind(self.subscription_plan_max_employees)
            .push_bind(self.subscription_plan_max_members_per_branch);
    }

    fn to_response(&self) -> OrganizationResponse {
        OrganizationResponse {
            id: self.id,
            audit: self.audit.to_response(),
            name: self.name.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            is_private: self.is_private,
            media_id: self.media_id,
            subscription_plan_max_branches: self.subscription_plan_max_branches,
            subscription_plan_max_employees: self.subscription_plan_max_employees,
            subscription_plan_max_members_per_branch: self.subscription_plan_max_members_per_branch,
        }
    }
}
