//! Data Model
//!
//! Row structs, response/request DTOs and the string-backed enums stored in
//! VARCHAR columns. Each submodule implements [`crate::repository::Entity`]
//! for its row type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use thiserror::Error;
use uuid::Uuid;

/// Generates a fieldless enum persisted and serialized as its string value.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::model::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode(self.as_str(), buf)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
                Ok(raw.parse()?)
            }
        }
    };
}

pub mod account;
pub mod bank;
pub mod branch;
pub mod branch_setting;
pub mod category;
pub mod company;
pub mod currency;
pub mod general_ledger;
pub mod member_accounting_ledger;
pub mod organization;
pub mod payment_type;
pub mod tag_template;
pub mod user;
pub mod user_organization;

pub use account::{
    Account, AccountKind, AccountRequest, AccountResponse, ComputationType, GeneralLedgerType,
    OtherAccountInformation,
};
pub use bank::{Bank, BankRequest, BankResponse};
pub use branch::{Branch, BranchResponse};
pub use branch_setting::{BranchSetting, BranchSettingResponse};
pub use category::{Category, CategoryResponse};
pub use company::{Company, CompanyRequest, CompanyResponse};
pub use currency::{Currency, CurrencyResponse};
pub use general_ledger::{GeneralLedger, GeneralLedgerResponse, GeneralLedgerSource};
pub use member_accounting_ledger::{MemberAccountingLedger, MemberAccountingLedgerResponse};
pub use organization::{Organization, OrganizationResponse};
pub use payment_type::{PaymentKind, PaymentType, PaymentTypeRequest, PaymentTypeResponse};
pub use tag_template::{TagCategory, TagTemplate, TagTemplateRequest, TagTemplateResponse};
pub use user::{User, UserResponse};
pub use user_organization::{
    ApplicationStatus, UserOrganization, UserOrganizationResponse, UserOrganizationStatus, UserType,
};

// =========================================================================
// Shared columns
// =========================================================================

/// Audit columns carried by every table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Audit {
    pub created_at: DateTime<Utc>,
    pub created_by_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
    pub updated_by_id: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by_id: Option<Uuid>,
}

impl Audit {
    /// Fresh audit block for a row written by `user_id`
    pub fn by(user_id: Uuid) -> Self {
        Self::stamped(Some(user_id))
    }

    /// Fresh audit block for rows written without a user (global seeds)
    pub fn system() -> Self {
        Self::stamped(None)
    }

    /// Fresh audit block for an optional author
    pub fn stamped(user_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            created_by_id: user_id,
            updated_at: now,
            updated_by_id: user_id,
            deleted_at: None,
            deleted_by_id: None,
        }
    }

    /// Mark as touched by `user_id`; the repository sets `updated_at`
    pub fn touch(&mut self, user_id: Uuid) {
        self.updated_by_id = Some(user_id);
    }

    /// Push `created_by_id, updated_by_id` in column order
    pub(crate) fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.created_by_id);
        row.push_bind(self.updated_by_id);
    }

    pub fn to_response(&self) -> AuditResponse {
        AuditResponse {
            created_at: format_time(&self.created_at),
            created_by_id: self.created_by_id,
            updated_at: format_time(&self.updated_at),
            updated_by_id: self.updated_by_id,
        }
    }
}

/// Audit fields as rendered in every response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResponse {
    pub created_at: String,
    pub created_by_id: Option<Uuid>,
    pub updated_at: String,
    pub updated_by_id: Option<Uuid>,
}

/// RFC3339 rendering used by all response DTOs
pub fn format_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub fn format_optional_time(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(format_time)
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

// =========================================================================
// Errors
// =========================================================================

/// A stored or submitted string did not match any enum variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Request DTO rejected before reaching the database
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Character-count bounds, inclusive
pub(crate) fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ValidationError::new(field, format!("must be at least {} characters", min)));
    }
    if len > max {
        return Err(ValidationError::new(field, format!("must be at most {} characters", max)));
    }
    Ok(())
}

pub(crate) fn validate_optional_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => validate_length(field, v, 0, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::to_model;

    #[test]
    fn test_to_model_none_is_none_for_every_entity() {
        assert!(to_model::<Account>(None).is_none());
        assert!(to_model::<Bank>(None).is_none());
        assert!(to_model::<Branch>(None).is_none());
        assert!(to_model::<BranchSetting>(None).is_none());
        assert!(to_model::<Category>(None).is_none());
        assert!(to_model::<Company>(None).is_none());
        assert!(to_model::<Currency>(None).is_none());
        assert!(to_model::<GeneralLedger>(None).is_none());
        assert!(to_model::<MemberAccountingLedger>(None).is_none());
        assert!(to_model::<Organization>(None).is_none());
        assert!(to_model::<PaymentType>(None).is_none());
        assert!(to_model::<TagTemplate>(None).is_none());
        assert!(to_model::<User>(None).is_none());
        assert!(to_model::<UserOrganization>(None).is_none());
    }

    #[test]
    fn test_audit_response_is_rfc3339() {
        let audit = Audit::by(Uuid::new_v4());
        let response = audit.to_response();

        let parsed = DateTime::parse_from_rfc3339(&response.created_at).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), audit.created_at);
        assert!(DateTime::parse_from_rfc3339(&response.updated_at).is_ok());
    }

    #[test]
    fn test_system_audit_has_no_user() {
        let audit = Audit::system();
        assert!(audit.created_by_id.is_none());
        assert!(audit.deleted_at.is_none());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("name", "HSBC", 1, 255).is_ok());
        assert!(validate_length("name", "   ", 1, 255).is_err());

        let err = validate_length("name", &"x".repeat(256), 1, 255).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "must be at most 255 characters");
    }

    #[test]
    fn test_string_enum_round_trip() {
        for kind in PaymentKind::ALL {
            assert_eq!(kind.as_str().parse::<PaymentKind>().unwrap(), *kind);
        }

        let err = "barter".parse::<PaymentKind>().unwrap_err();
        assert_eq!(err.kind, "PaymentKind");

        let json = serde_json::to_string(&TagCategory::TransactionType).unwrap();
        assert_eq!(json, "\"transaction type\"");
    }
}
