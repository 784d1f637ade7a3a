//! Topic naming

use uuid::Uuid;

/// Mutation kind carried in every topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicAction {
    Create,
    Update,
    Delete,
}

impl TopicAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicAction::Create => "create",
            TopicAction::Update => "update",
            TopicAction::Delete => "delete",
        }
    }
}

impl std::fmt::Display for TopicAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partitions an entity publishes to besides its own id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicScope {
    pub branch_id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
    /// Extra `<label>.<id>` suffixes, e.g. `member_profile`
    pub extra: Vec<(&'static str, Uuid)>,
}

impl TopicScope {
    pub fn tenant(organization_id: Uuid, branch_id: Uuid) -> Self {
        Self {
            branch_id: Some(branch_id),
            organization_id: Some(organization_id),
            extra: Vec::new(),
        }
    }

    pub fn with(mut self, label: &'static str, id: Uuid) -> Self {
        self.extra.push((label, id));
        self
    }
}

/// Build the topic list for one mutation.
///
/// `payment_type` created in branch B of organization O yields
/// `payment_type.create`, `payment_type.create.<id>`,
/// `payment_type.create.branch.<B>` and `payment_type.create.organization.<O>`.
pub fn topics_for(entity: &str, action: TopicAction, id: Uuid, scope: &TopicScope) -> Vec<String> {
    let prefix = format!("{}.{}", entity, action);

    let mut topics = vec![prefix.clone(), format!("{}.{}", prefix, id)];
    if let Some(branch_id) = scope.branch_id {
        topics.push(format!("{}.branch.{}", prefix, branch_id));
    }
    if let Some(organization_id) = scope.organization_id {
        topics.push(format!("{}.organization.{}", prefix, organization_id));
    }
    for (label, value) in &scope.extra {
        topics.push(format!("{}.{}.{}", prefix, label, value));
    }

    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_topics() {
        let id = Uuid::new_v4();
        let org = Uuid::new_v4();
        let branch = Uuid::new_v4();

        let topics = topics_for("bank", TopicAction::Create, id, &TopicScope::tenant(org, branch));

        assert_eq!(
            topics,
            vec![
                "bank.create".to_string(),
                format!("bank.create.{}", id),
                format!("bank.create.branch.{}", branch),
                format!("bank.create.organization.{}", org),
            ]
        );
    }

    #[test]
    fn test_global_topics() {
        let id = Uuid::new_v4();
        let topics = topics_for("currency", TopicAction::Delete, id, &TopicScope::default());
        assert_eq!(topics, vec!["currency.delete".to_string(), format!("currency.delete.{}", id)]);
    }

    #[test]
    fn test_extra_scope_is_appended_last() {
        let member = Uuid::new_v4();
        let scope = TopicScope::tenant(Uuid::new_v4(), Uuid::new_v4()).with("member_profile", member);

        let topics = topics_for("member_accounting_ledger", TopicAction::Update, Uuid::new_v4(), &scope);

        assert_eq!(topics.len(), 5);
        assert_eq!(
            topics[4],
            format!("member_accounting_ledger.update.member_profile.{}", member)
        );
    }
}
