//! Payment Type

use serde::{Deserialize, Serialize};
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::Entity;

use super::{validate_length, Audit, AuditResponse, ValidationError};

string_enum! {
    /// How money moves for a payment type
    pub enum PaymentKind {
        Cash => "cash",
        Check => "check",
        Online => "online",
        Adjustment => "adjustment",
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PaymentType {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Uuid,

    pub name: String,
    pub description: Option<String>,
    /// Clearing days before funds are considered available
    pub number_of_days: i32,
    #[sqlx(rename = "type")]
    pub kind: PaymentKind,
}

impl PaymentType {
    pub fn new(
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: PaymentKind,
        number_of_days: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit: Audit::by(user_id),
            organization_id,
            branch_id,
            name: name.into(),
            description: Some(description.into()),
            number_of_days,
            kind,
        }
    }

    pub fn apply(&mut self, request: PaymentTypeRequest, user_id: Uuid) {
        self.name = request.name;
        self.description = request.description;
        self.number_of_days = request.number_of_days.unwrap_or(0);
        self.kind = request.kind;
        self.audit.touch(user_id);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentTypeResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub number_of_days: i32,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTypeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_of_days: Option<i32>,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
}

impl PaymentTypeRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("name", &self.name, 1, 255)?;
        if matches!(self.number_of_days, Some(days) if days < 0) {
            return Err(ValidationError::new("number_of_days", "must not be negative"));
        }
        Ok(())
    }
}

impl Entity for PaymentType {
    const TABLE: &'static str = "payment_types";
    const TOPIC: &'static str = "payment_type";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "name",
        "description",
        "number_of_days",
        "type",
    ];

    type Response = PaymentTypeResponse;

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
            .push_bind(self.number_of_days)
            .push_bind(self.kind);
    }

    fn to_response(&self) -> PaymentTypeResponse {
        PaymentTypeResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            name: self.name.clone(),
            description: self.description.clone(),
            number_of_days: self.number_of_days,
            kind: self.kind,
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
    fn test_request_rejects_unknown_type() {
        let parsed: Result<PaymentTypeRequest, _> =
            serde_json::from_str(r#"{"name":"Barter","type":"barter"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_request_accepts_known_type() {
        let request: PaymentTypeRequest =
            serde_json::from_str(r#"{"name":"GCash","type":"online"}"#).unwrap();
        assert_eq!(request.kind, PaymentKind::Online);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_days_rejected() {
        let request = PaymentTypeRequest {
            name: "Cheque".to_string(),
            description: None,
            number_of_days: Some(-1),
            kind: PaymentKind::Check,
        };
        assert_eq!(request.validate().unwrap_err().field, "number_of_days");
    }

    #[test]
    fn test_response_uses_type_key() {
        let payment = PaymentType::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Cheque",
            "Payment via cheque/check.",
            PaymentKind::Check,
            3,
        );
        let json = serde_json::to_value(payment.to_response()).unwrap();
        assert_eq!(json["type"], "check");
        assert_eq!(json["number_of_days"], 3);
    }
}
