//! Bank seed

use std::collections::HashSet;

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::Bank;

use super::bank_data::{country_banks, GLOBAL_BANKS};
use super::{OrganizationSeeder, SeedContext, SeedError};

/// Lowercased name with spaces and `-.'()` removed
pub(crate) fn normalize_bank_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '\'' | '(' | ')'))
        .collect()
}

/// Global banks followed by the country's, keeping the first row of each
/// normalized name
pub(crate) fn bank_rows(alpha3: Option<&str>) -> Vec<(&'static str, &'static str)> {
    let local = alpha3.map(country_banks).unwrap_or(&[]);
    let mut seen = HashSet::new();

    GLOBAL_BANKS
        .iter()
        .chain(local.iter())
        .filter(|(name, _)| seen.insert(normalize_bank_name(name)))
        .copied()
        .collect()
}

impl OrganizationSeeder {
    pub(super) async fn seed_banks(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<usize, SeedError> {
        let currency = self.branch_currency(tx, branch_id).await?;
        let alpha3 = currency.as_ref().and_then(|c| c.iso_3166_alpha3.as_deref());
        let rows = bank_rows(alpha3);

        for (name, description) in &rows {
            let bank = Bank::new(user_id, organization_id, branch_id, *name, *description);
            self.banks
                .create_with_tx(tx, &bank)
                .await
                .with_context(|| format!("failed to seed bank {}", name))?;
        }

        tracing::debug!(branch_id = %branch_id, count = rows.len(), "Seeded banks");
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bank_name() {
        assert_eq!(normalize_bank_name(" U.S. Bank "), "usbank");
        assert_eq!(normalize_bank_name("Royal Bank of Canada (RBC)"), "royalbankofcanadarbc");
        assert_eq!(normalize_bank_name("Manager's-Bank"), "managersbank");
    }

    #[test]
    fn test_bank_rows_dedupe_keeps_first_position() {
        let rows = bank_rows(Some("USA"));

        // "CitiBank" in the US list collapses into the global "Citibank"
        let citi: Vec<_> = rows
            .iter()
            .filter(|(name, _)| normalize_bank_name(name) == "citibank")
            .collect();
        assert_eq!(citi.len(), 1);
        assert_eq!(citi[0].0, "Citibank");

        assert_eq!(rows[0].0, "HSBC");
        assert!(rows.iter().any(|(name, _)| *name == "Chase Bank"));
    }

    #[test]
    fn test_bank_rows_without_country() {
        assert_eq!(bank_rows(None).len(), GLOBAL_BANKS.len());
        assert_eq!(bank_rows(Some("XXX")).len(), GLOBAL_BANKS.len());
    }
}
