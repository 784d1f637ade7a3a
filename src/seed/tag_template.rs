//! Tag template seed

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::{Audit, TagTemplate};

use super::tag_template_data::TAG_TEMPLATES;
use super::{OrganizationSeeder, SeedContext, SeedError};

impl OrganizationSeeder {
    pub(super) async fn seed_tag_templates(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<usize, SeedError> {
        for seed in TAG_TEMPLATES {
            let template = TagTemplate {
                id: Uuid::new_v4(),
                audit: Audit::by(user_id),
                organization_id,
                branch_id,
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                category: Some(seed.category),
                color: Some(seed.color.to_string()),
                icon: Some(seed.icon.to_string()),
            };
            self.tag_templates
                .create_with_tx(tx, &template)
                .await
                .with_context(|| format!("failed to seed tag template {}", seed.name))?;
        }

        tracing::debug!(branch_id = %branch_id, count = TAG_TEMPLATES.len(), "Seeded tag templates");
        Ok(TAG_TEMPLATES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagTemplateRequest;

    #[test]
    fn test_tag_templates_pass_request_validation() {
        assert_eq!(TAG_TEMPLATES.len(), 60);
        for seed in TAG_TEMPLATES {
            let request = TagTemplateRequest {
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                category: Some(seed.category),
                color: Some(seed.color.to_string()),
                icon: Some(seed.icon.to_string()),
            };
            assert!(request.validate().is_ok(), "{} failed validation", seed.name);
        }
    }
}
