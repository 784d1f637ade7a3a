//! Category

use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::repository::Entity;

use super::{Audit, AuditResponse};

#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl Entity for Category {
    const TABLE: &'static str = "categories";
    const TOPIC: &'static str = "category";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "name",
        "description",
        "color",
        "icon",
    ];

    type Response = CategoryResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.name.clone())
            .push_bind(self.description.clone())
            .push_bind(self.color.clone())
            .push_bind(self.icon.clone());
    }

    fn to_response(&self) -> CategoryResponse {
        CategoryResponse {
            id: self.id,
            audit: self.audit.to_response(),
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            icon: self.icon.clone(),
        }
    }
}
