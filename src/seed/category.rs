//! Category seed

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::{Audit, Category};

use super::{GlobalSeeder, SeedContext, SeedError};

/// name, description, color, icon
pub(crate) const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Loaning", "Loan-related cooperative services", "#FF5733", "loan"),
    ("Membership", "Member registration and benefits", "#33C1FF", "user-group"),
    ("Team Building", "Events and programs to strengthen teamwork", "#33FF6F", "team"),
    ("Farming", "Agricultural and farming initiatives", "#A3D633", "tractor"),
    ("Technology", "Tech support and infrastructure", "#8E44AD", "chip"),
    ("Education", "Training and educational programs", "#FFC300", "book-open"),
    ("Livelihood", "Community livelihood support", "#2ECC71", "briefcase"),
];

impl GlobalSeeder {
    /// Inserts the categories unless any already exist. Returns the number
    /// of rows written.
    pub async fn seed_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<usize, SeedError> {
        let existing = self
            .categories
            .count_with_tx(tx, &[])
            .await
            .context("failed to count categories")?;
        if existing > 0 {
            tracing::debug!(existing, "Categories already seeded, skipping");
            return Ok(0);
        }

        for (name, description, color, icon) in CATEGORIES {
            let category = Category {
                id: Uuid::new_v4(),
                audit: Audit::system(),
                name: name.to_string(),
                description: Some(description.to_string()),
                color: Some(color.to_string()),
                icon: Some(icon.to_string()),
            };
            self.categories
                .create_with_tx(tx, &category)
                .await
                .with_context(|| format!("failed to seed category {}", name))?;
        }

        tracing::debug!(count = CATEGORIES.len(), "Seeded categories");
        Ok(CATEGORIES.len())
    }
}
