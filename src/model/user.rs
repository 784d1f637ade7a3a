//! User

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::repository::Entity;

use super::{format_date, Audit, AuditResponse};

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub user_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub is_email_verified: bool,
    pub is_contact_verified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub user_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub birthdate: Option<String>,
    pub is_email_verified: bool,
    pub is_contact_verified: bool,
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const TOPIC: &'static str = "user";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "user_name",
        "email",
        "contact_number",
        "first_name",
        "middle_name",
        "last_name",
        "full_name",
        "birthdate",
        "is_email_verified",
        "is_contact_verified",
    ];

    type Response = UserResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.user_name.clone())
            .push_bind(self.email.clone())
            .push_bind(self.contact_number.clone())
            .push_bind(self.first_name.clone())
            .push_bind(self.middle_name.clone())
            .push_bind(self.last_name.clone())
            .push_bind(self.full_name.clone())
            .push_bind(self.birthdate)
            .push_bind(self.is_email_verified)
            .push_bind(self.is_contact_verified);
    }

    fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            audit: self.audit.to_response(),
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            full_name: self.full_name.clone(),
            birthdate: self.birthdate.as_ref().map(format_date),
            is_email_verified: self.is_email_verified,
            is_contact_verified: self.is_contact_verified,
        }
    }
}
