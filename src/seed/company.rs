//! Company seed

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::{Branch, Company, Organization};

use super::company_data::{currency_companies, GLOBAL_COMPANIES};
use super::{OrganizationSeeder, SeedContext, SeedError};

/// The branch's own company row
pub(crate) fn main_company(organization: &Organization, branch: &Branch) -> (String, String) {
    (
        format!("{} - {}", organization.name, branch.name),
        format!(
            "The main company of {} located at {}, {}",
            organization.name, branch.address, branch.city
        ),
    )
}

impl OrganizationSeeder {
    pub(super) async fn seed_companies(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<usize, SeedError> {
        let branch = self
            .branches
            .get_by_id_with_tx(tx, branch_id)
            .await
            .with_context(|| format!("failed to get branch by ID: {}", branch_id))?;
        let organization = self
            .organizations
            .get_by_id_with_tx(tx, organization_id)
            .await
            .with_context(|| format!("failed to get organization by ID: {}", organization_id))?;

        let (main_name, main_description) = main_company(&organization, &branch);
        let mut rows: Vec<(String, String)> = vec![(main_name, main_description)];
        rows.extend(
            GLOBAL_COMPANIES
                .iter()
                .map(|(n, d)| (n.to_string(), d.to_string())),
        );
        if let Some(currency) = self.branch_currency(tx, branch_id).await? {
            rows.extend(
                currency_companies(&currency.currency_code)
                    .iter()
                    .map(|(n, d)| (n.to_string(), d.to_string())),
            );
        }

        for (name, description) in &rows {
            let company = Company::new(user_id, organization_id, branch_id, name.as_str(), description.as_str());
            self.companies
                .create_with_tx(tx, &company)
                .await
                .with_context(|| format!("failed to seed company {}", name))?;
        }

        tracing::debug!(branch_id = %branch_id, count = rows.len(), "Seeded companies");
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_companies() {
        assert!(!currency_companies("USD").is_empty());
        assert!(!currency_companies("CAD").is_empty());
        assert!(currency_companies("PHP").is_empty());
        assert_eq!(GLOBAL_COMPANIES.len(), 26);
    }
}
