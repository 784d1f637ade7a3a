//! Tenant Context
//!
//! Who is acting and on which organization/branch partition. Built by
//! [`crate::api::middleware::tenant_middleware`] from request headers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub branch_id: Uuid,

    /// Correlation ID for request tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl TenantContext {
    pub fn new(user_id: Uuid, organization_id: Uuid, branch_id: Uuid) -> Self {
        Self {
            user_id,
            organization_id,
            branch_id,
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }

    /// Equality filters on this tenant's partition
    pub fn filters(&self) -> [Filter; 2] {
        Filter::tenant(self.organization_id, self.branch_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let user = Uuid::new_v4();
        let org = Uuid::new_v4();
        let branch = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();

        let context = TenantContext::new(user, org, branch).with_correlation_id(correlation_id);

        assert_eq!(context.user_id, user);
        assert_eq!(context.correlation_id, Some(correlation_id));
        assert_eq!(context.filters(), Filter::tenant(org, branch));
    }

    #[test]
    fn test_ensure_correlation_id() {
        let mut context = TenantContext::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert!(context.correlation_id.is_none());

        let id = context.ensure_correlation_id();
        assert_eq!(context.correlation_id, Some(id));
        assert_eq!(context.ensure_correlation_id(), id);
    }
}
