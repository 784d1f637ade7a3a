//! User Organization
//!
//! Membership of a user in an organization, optionally pinned to a branch.
//! Also carries the per-user default accounts used by the cashier screens.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::TopicScope;
use crate::repository::{Entity, Filter, Repository, RepositoryError};

use super::{format_time, Audit, AuditResponse};

string_enum! {
    pub enum UserType {
        Owner => "owner",
        Employee => "employee",
        Member => "member",
    }
}

string_enum! {
    pub enum ApplicationStatus {
        Pending => "pending",
        Reported => "reported",
        Accepted => "accepted",
        Ban => "ban",
        NotAllowed => "not-allowed",
    }
}

string_enum! {
    pub enum UserOrganizationStatus {
        Online => "online",
        Offline => "offline",
        Busy => "busy",
        Vacation => "vacation",
        Commuting => "commuting",
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UserOrganization {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,

    pub organization_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub user_id: Uuid,

    pub user_type: UserType,
    pub description: Option<String>,
    pub application_description: Option<String>,
    pub application_status: ApplicationStatus,
    pub developer_secret_key: String,
    pub permission_name: String,
    pub permission_description: String,
    pub permissions: Vec<String>,
    /// Set once the organization seeder has run for this membership
    pub is_seeded: bool,
    pub status: UserOrganizationStatus,
    pub last_online_at: DateTime<Utc>,

    pub settings_accounting_payment_default_value_id: Option<Uuid>,
    pub settings_accounting_deposit_default_value_id: Option<Uuid>,
    pub settings_accounting_withdraw_default_value_id: Option<Uuid>,
    pub settings_payment_type_default_value_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserOrganizationResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub organization_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub user_id: Uuid,
    pub user_type: UserType,
    pub description: Option<String>,
    pub application_description: Option<String>,
    pub application_status: ApplicationStatus,
    pub permission_name: String,
    pub permission_description: String,
    pub permissions: Vec<String>,
    pub is_seeded: bool,
    pub status: UserOrganizationStatus,
    pub last_online_at: String,
    pub settings_accounting_payment_default_value_id: Option<Uuid>,
    pub settings_accounting_deposit_default_value_id: Option<Uuid>,
    pub settings_accounting_withdraw_default_value_id: Option<Uuid>,
    pub settings_payment_type_default_value_id: Option<Uuid>,
}

impl Entity for UserOrganization {
    const TABLE: &'static str = "user_organizations";
    const TOPIC: &'static str = "user_organization";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_by_id",
        "updated_by_id",
        "organization_id",
        "branch_id",
        "user_id",
        "user_type",
        "description",
        "application_description",
        "application_status",
        "developer_secret_key",
        "permission_name",
        "permission_description",
        "permissions",
        "is_seeded",
        "status",
        "last_online_at",
        "settings_accounting_payment_default_value_id",
        "settings_accounting_deposit_default_value_id",
        "settings_accounting_withdraw_default_value_id",
        "settings_payment_type_default_value_id",
    ];

    type Response = UserOrganizationResponse;

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.id);
        self.audit.bind(row);
        row.push_bind(self.organization_id)
            .push_bind(self.branch_id)
            .push_bind(self.user_id)
            .push_bind(self.user_type)
            .push_bind(self.description.clone())
            .push_bind(self.application_description.clone())
            .push_bind(self.application_status)
            .push_bind(self.developer_secret_key.clone())
            .push_bind(self.permission_name.clone())
            .push_bind(self.permission_description.clone())
            .push_bind(self.permissions.clone())
            .push_bind(self.is_seeded)
            .push_bind(self.status)
            .push_bind(self.last_online_at)
            .push_bind(self.settings_accounting_payment_default_value_id)
            .push_bind(self.settings_accounting_deposit_default_value_id)
            .push_bind(self.settings_accounting_withdraw_default_value_id)
            .push_bind(self.settings_payment_type_default_value_id);
    }

    /// The secret key never leaves the server
    fn to_response(&self) -> UserOrganizationResponse {
        UserOrganizationResponse {
            id: self.id,
            audit: self.audit.to_response(),
            organization_id: self.organization_id,
            branch_id: self.branch_id,
            user_id: self.user_id,
            user_type: self.user_type,
            description: self.description.clone(),
            application_description: self.application_description.clone(),
            application_status: self.application_status,
            permission_name: self.permission_name.clone(),
            permission_description: self.permission_description.clone(),
            permissions: self.permissions.clone(),
            is_seeded: self.is_seeded,
            status: self.status,
            last_online_at: format_time(&self.last_online_at),
            settings_accounting_payment_default_value_id: self
                .settings_accounting_payment_default_value_id,
            settings_accounting_deposit_default_value_id: self
                .settings_accounting_deposit_default_value_id,
            settings_accounting_withdraw_default_value_id: self
                .settings_accounting_withdraw_default_value_id,
            settings_payment_type_default_value_id: self.settings_payment_type_default_value_id,
        }
    }

    fn topic_scope(&self) -> TopicScope {
        TopicScope {
            branch_id: self.branch_id,
            organization_id: Some(self.organization_id),
            extra: vec![("user", self.user_id)],
        }
    }
}

/// Membership filters, narrowed to pending applications when asked
fn scoped(mut filters: Vec<Filter>, pending_only: bool) -> Vec<Filter> {
    if pending_only {
        filters.push(Filter::eq("application_status", ApplicationStatus::Pending.as_str()));
    }
    filters
}

impl Repository<UserOrganization> {
    pub async fn by_user(
        &self,
        user_id: Uuid,
        pending_only: bool,
    ) -> Result<Vec<UserOrganization>, RepositoryError> {
        self.find(&scoped(vec![Filter::eq("user_id", user_id)], pending_only))
            .await
    }

    pub async fn by_organization(
        &self,
        organization_id: Uuid,
        pending_only: bool,
    ) -> Result<Vec<UserOrganization>, RepositoryError> {
        let filters = scoped(vec![Filter::eq("organization_id", organization_id)], pending_only);
        self.find(&filters).await
    }

    pub async fn by_branch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
        pending_only: bool,
    ) -> Result<Vec<UserOrganization>, RepositoryError> {
        let filters = scoped(Filter::tenant(organization_id, branch_id).to_vec(), pending_only);
        self.find(&filters).await
    }

    pub async fn count_per_branch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<i64, RepositoryError> {
        self.count(&Filter::tenant(organization_id, branch_id)).await
    }

    /// Memberships `user_id` already holds on the branch
    pub async fn count_user_in_branch(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<i64, RepositoryError> {
        let [org, branch] = Filter::tenant(organization_id, branch_id);
        self.count(&[org, branch, Filter::eq("user_id", user_id)]).await
    }

    /// An employee may join a branch they have no membership on
    pub async fn employee_can_join(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let existing = self
            .count_user_in_branch(user_id, organization_id, branch_id)
            .await?;
        Ok(existing == 0)
    }

    /// A member may join only if they belong to no branch of the organization
    pub async fn member_can_join(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        if !self.employee_can_join(user_id, organization_id, branch_id).await? {
            return Ok(false);
        }
        let in_organization = self
            .count(&[
                Filter::eq("user_id", user_id),
                Filter::eq("organization_id", organization_id),
            ])
            .await?;
        Ok(in_organization == 0)
    }

    pub async fn employees(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<UserOrganization>, RepositoryError> {
        let [org, branch] = Filter::tenant(organization_id, branch_id);
        self.find(&[org, branch, Filter::eq("user_type", UserType::Employee.as_str())])
            .await
    }

    pub async fn members(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<UserOrganization>, RepositoryError> {
        let [org, branch] = Filter::tenant(organization_id, branch_id);
        self.find(&[org, branch, Filter::eq("user_type", UserType::Member.as_str())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TopicAction;

    fn membership(branch_id: Option<Uuid>) -> UserOrganization {
        let user_id = Uuid::new_v4();
        UserOrganization {
            id: Uuid::new_v4(),
            audit: Audit::by(user_id),
            organization_id: Uuid::new_v4(),
            branch_id,
            user_id,
            user_type: UserType::Employee,
            description: None,
            application_description: None,
            application_status: ApplicationStatus::Accepted,
            developer_secret_key: "secret".to_string(),
            permission_name: String::new(),
            permission_description: String::new(),
            permissions: vec!["read".to_string()],
            is_seeded: false,
            status: UserOrganizationStatus::Offline,
            last_online_at: Utc::now(),
            settings_accounting_payment_default_value_id: None,
            settings_accounting_deposit_default_value_id: None,
            settings_accounting_withdraw_default_value_id: None,
            settings_payment_type_default_value_id: None,
        }
    }

    #[test]
    fn test_topics_include_user() {
        let branch = Uuid::new_v4();
        let membership = membership(Some(branch));

        let topics = membership.topics(TopicAction::Update);

        assert_eq!(topics.len(), 5);
        assert!(topics.contains(&format!("user_organization.update.branch.{}", branch)));
        assert_eq!(
            topics.last().unwrap(),
            &format!("user_organization.update.user.{}", membership.user_id)
        );
    }

    #[test]
    fn test_topics_without_branch() {
        let topics = membership(None).topics(TopicAction::Create);
        assert_eq!(topics.len(), 4);
        assert!(!topics.iter().any(|t| t.contains(".branch.")));
    }

    #[test]
    fn test_response_hides_secret_key() {
        let json = serde_json::to_value(membership(None).to_response()).unwrap();
        assert!(json.get("developer_secret_key").is_none());
        assert_eq!(json["user_type"], "employee");
        assert_eq!(json["status"], "offline");
    }

    #[test]
    fn test_pending_scope() {
        let user = Uuid::new_v4();
        assert_eq!(scoped(vec![Filter::eq("user_id", user)], false).len(), 1);

        let filters = scoped(vec![Filter::eq("user_id", user)], true);
        assert_eq!(filters[1], Filter::eq("application_status", "pending"));
    }
}
