//! Company

use serde::{Deserialize, Serialize};
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{validate_length, Audit, AuditResponse, ValidationError};

#[derive(Debug, Clone, FromRow)]
pub struct Company {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub media_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

impl Company {
    pub fn new(
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit: Audit::by(user_id),
            organization_id,
            branch_id,
            media_id: None,
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Apply a validated request on top of the stored row
    pub fn apply(&mut self, request: CompanyRequest, user_id: Uuid) {
        self.name = request.name;
        self.description = request.description;
        self.media_id = request.media_id;
        self.audit.touch(user_id);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub media_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_id: Option<Uuid>,
}

impl CompanyRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("name", &self.name, 1, 255)
    }
}

impl Entity for Company {
    const TABLE: &'static str = "companies";
    const TOPIC: &'static str = "company";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "media_id",
        "name",
        "description",
    ];

    type Response = CompanyResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.branch_id)
            .push_bind(self.media_id)
            .push_bind(self.name.clone())
            .push_bind(self.description.clone());
    }

    fn to_response(&self) -> CompanyResponse {
        CompanyResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            media_id: self.media_id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn topic_scope(&self) -> TopicScope {
        TopicScope::tenant(self.organization_id, self.branch_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_request_updates_fields() {
        let owner = Uuid::new_v4();
        let editor = Uuid::new_v4();
        let mut company = Company::new(owner, Uuid::new_v4(), Uuid::new_v4(), "Acme", "Old");

        company.apply(
            CompanyRequest {
                name: "Acme Corp".to_string(),
                description: Some("New".to_string()),
                media_id: None,
            },
            editor,
        );

        assert_eq!(company.name, "Acme Corp");
        assert_eq!(company.description.as_deref(), Some("New"));
        assert_eq!(company.audit.created_by_id, Some(owner));
        assert_eq!(company.audit.updated_by_id, Some(editor));
    }

    #[test]
    fn test_response_timestamps_are_rfc3339() {
        let company = Company::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "Acme", "Desc");
        let json = serde_json::to_value(company.to_response()).unwrap();

        let created_at = json["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
        assert_eq!(json["name"], "Acme");
    }
}
