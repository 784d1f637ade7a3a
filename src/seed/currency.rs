//! Currency seed

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::{Audit, Currency};

use super::currency_data::{CurrencySeed, CURRENCIES};
use super::{GlobalSeeder, SeedContext, SeedError};

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl From<&CurrencySeed> for Currency {
    fn from(seed: &CurrencySeed) -> Self {
        Currency {
            id: Uuid::new_v4(),
            audit: Audit::system(),
            name: seed.name.to_string(),
            country: seed.country.to_string(),
            currency_code: seed.currency_code.to_string(),
            symbol: optional(seed.symbol),
            emoji: optional(seed.emoji),
            iso_3166_alpha2: optional(seed.iso_3166_alpha2),
            iso_3166_alpha3: optional(seed.iso_3166_alpha3),
            iso_3166_numeric: optional(seed.iso_3166_numeric),
            phone_code: optional(seed.phone_code),
            domain: optional(seed.domain),
            locale: optional(seed.locale),
        }
    }
}

impl GlobalSeeder {
    pub async fn seed_currencies(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<usize, SeedError> {
        for seed in CURRENCIES {
            self.currencies
                .create_with_tx(tx, &Currency::from(seed))
                .await
                .with_context(|| format!("failed to seed currency {}", seed.currency_code))?;
        }

        tracing::debug!(count = CURRENCIES.len(), "Seeded currencies");
        Ok(CURRENCIES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::currency::DEFAULT_CURRENCY_CODE;
    use std::collections::HashSet;

    #[test]
    fn test_currency_names_are_unique() {
        let names: HashSet<_> = CURRENCIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CURRENCIES.len());
        assert_eq!(CURRENCIES.len(), 81);
    }

    #[test]
    fn test_default_currency_is_seeded() {
        let php = CURRENCIES
            .iter()
            .find(|c| c.currency_code == DEFAULT_CURRENCY_CODE)
            .unwrap();
        assert_eq!(php.iso_3166_alpha2, "PH");
    }

    #[test]
    fn test_empty_fields_become_none() {
        let euro = CURRENCIES.iter().find(|c| c.name == "Euro").unwrap();
        let currency = Currency::from(euro);
        assert!(currency.phone_code.is_none());
        assert_eq!(currency.domain.as_deref(), Some(".eu"));
        assert!(currency.audit.created_by_id.is_none());
    }
}
