//! Tag Template

use serde::{Deserialize, Serialize};
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{validate_length, validate_optional_length, Audit, AuditResponse, ValidationError};

string_enum! {
    pub enum TagCategory {
        Status => "status",
        Alert => "alert",
        Priority => "priority",
        TransactionType => "transaction type",
        AccountType => "account type",
        Special => "special",
        Calculation => "calculation",
        Cooperative => "cooperative",
        Loan => "loan",
        Community => "community",
        Insurance => "insurance",
        Governance => "governance",
        Reserves => "reserves",
        Digital => "digital",
        Membership => "membership",
        Security => "security",
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TagTemplate {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub name: String,
    pub description: Option<String>,
    pub category: Option<TagCategory>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl TagTemplate {
    pub fn apply(&mut self, request: TagTemplateRequest, user_id: Uuid) {
        self.name = request.name;
        self.description = request.description;
        self.category = request.category;
        self.color = request.color;
        self.icon = request.icon;
        self.audit.touch(user_id);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagTemplateResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<TagCategory>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagTemplateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<TagCategory>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl TagTemplateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("name", &self.name, 1, 50)?;
        validate_optional_length("color", self.color.as_deref(), 20)?;
        validate_optional_length("icon", self.icon.as_deref(), 20)
    }
}

impl Entity for TagTemplate {
    const TABLE: &'static str = "tag_templates";
    const TOPIC: &'static str = "tag_template";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "name",
        "description",
        "category",
        "color",
        "icon",
    ];

    type Response = TagTemplateResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.branch_id)
            .push_bind(self.name.clone())
            .push_bind(self.description.clone())
            .push_bind(self.category)
            .push_bind(self.color.clone())
            .push_bind(self.icon.clone());
    }

    fn to_response(&self) -> TagTemplateResponse {
        TagTemplateResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            color: self.color.clone(),
            icon: self.icon.clone(),
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
    fn test_tag_category_strings() {
        assert_eq!(TagCategory::ALL.len(), 16);
        assert_eq!("account type".parse::<TagCategory>().unwrap(), TagCategory::AccountType);
        assert!("Account Type".parse::<TagCategory>().is_err());
    }

    #[test]
    fn test_request_length_limits() {
        let request = TagTemplateRequest {
            name: "Pending".to_string(),
            description: None,
            category: Some(TagCategory::Status),
            color: Some("#F59E0B".to_string()),
            icon: Some("Clock".to_string()),
        };
        assert!(request.validate().is_ok());

        let long_name = TagTemplateRequest {
            name: "n".repeat(51),
            ..request.clone()
        };
        assert_eq!(long_name.validate().unwrap_err().field, "name");

        let long_icon = TagTemplateRequest {
            icon: Some("i".repeat(21)),
            ..request
        };
        assert_eq!(long_icon.validate().unwrap_err().field, "icon");
    }
}
