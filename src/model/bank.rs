//! Bank

use serde::{Deserialize, Serialize};
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{validate_length, Audit, AuditResponse, ValidationError};

/// A bank or payment provider members can transact through
#[derive(Debug, Clone, FromRow)]
pub struct Bank {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub media_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

impl Bank {
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
    pub fn apply(&mut self, request: BankRequest, user_id: Uuid) {
        self.name = request.name;
        self.description = request.description;
        self.media_id = request.media_id;
        self.audit.touch(user_id);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BankResponse {
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
pub struct BankRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_id: Option<Uuid>,
}

impl BankRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("name", &self.name, 1, 255)
    }
}

impl Entity for Bank {
    const TABLE: &'static str = "banks";
    const TOPIC: &'static str = "bank";
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

    type Response = BankResponse;

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

    fn to_response(&self) -> BankResponse {
        BankResponse {
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
    use crate::events::TopicAction;

    #[test]
    fn test_bank_request_validation() {
        let valid = BankRequest {
            name: "BDO Unibank".to_string(),
            description: None,
            media_id: None,
        };
        assert!(valid.validate().is_ok());

        let empty = BankRequest {
            name: String::new(),
            ..valid.clone()
        };
        assert_eq!(empty.validate().unwrap_err().field, "name");

        let long = BankRequest {
            name: "b".repeat(256),
            ..valid
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_bank_delete_topics() {
        let bank = Bank::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "HSBC", "Global bank");
        let topics = bank.topics(TopicAction::Delete);

        assert_eq!(topics[0], "bank.delete");
        assert_eq!(topics[1], format!("bank.delete.{}", bank.id));
        assert_eq!(topics[2], format!("bank.delete.branch.{}", bank.branch_id));
        assert_eq!(topics[3], format!("bank.delete.organization.{}", bank.organization_id));
    }
}
