//! Payment type seed

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::{PaymentKind, PaymentType};

use super::{OrganizationSeeder, SeedContext, SeedError};

pub(crate) const CASH_ON_HAND: (&str, &str) = ("Cash On Hand", "Cash available at the branch for immediate use.");

/// Seeded after "Cash On Hand": name, description, kind, clearing days
pub(crate) const PAYMENT_TYPES: &[(&str, &str, PaymentKind, i32)] = &[
    ("Forward Cash On Hand", "Physical cash received and forwarded for transactions.", PaymentKind::Cash, 0),
    ("Petty Cash", "Small amount of cash for minor expenses.", PaymentKind::Cash, 0),
    ("E-Wallet", "Digital wallet for online payments.", PaymentKind::Online, 0),
    ("E-Bank", "Online banking transfer.", PaymentKind::Online, 0),
    ("GCash", "GCash mobile wallet payment.", PaymentKind::Online, 0),
    ("Cheque", "Payment via cheque/check.", PaymentKind::Check, 3),
    ("Bank Transfer", "Direct bank-to-bank transfer.", PaymentKind::Check, 1),
    ("Manager's Check", "Bank-issued check for secure payments.", PaymentKind::Check, 2),
    ("Manual Adjustment", "Manual adjustments for corrections and reconciliation.", PaymentKind::Adjustment, 0),
    ("Adjustment Entry", "Manual adjustments for corrections and reconciliation.", PaymentKind::Adjustment, 0),
];

impl OrganizationSeeder {
    /// Seeds "Cash On Hand" and makes it the user organization's default
    /// payment type before the rest. Returns the cash-on-hand row.
    pub(super) async fn seed_payment_types(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<PaymentType, SeedError> {
        let (name, description) = CASH_ON_HAND;
        let cash_on_hand = PaymentType::new(
            user_id,
            organization_id,
            branch_id,
            name,
            description,
            PaymentKind::Cash,
            0,
        );
        let cash_on_hand = self
            .payment_types
            .create_with_tx(tx, &cash_on_hand)
            .await
            .context("failed to seed cash on hand payment type")?;

        let mut membership = self
            .user_organization(tx, user_id, organization_id, branch_id)
            .await
            .context("failed to find user organization for seeding payment types")?;
        membership.settings_payment_type_default_value_id = Some(cash_on_hand.id);
        membership.audit.touch(user_id);
        self.user_organizations
            .update_fields_with_tx(tx, &membership)
            .await
            .context("failed to update user organization with default payment type")?;

        for (name, description, kind, days) in PAYMENT_TYPES {
            let payment_type = PaymentType::new(
                user_id,
                organization_id,
                branch_id,
                *name,
                *description,
                *kind,
                *days,
            );
            self.payment_types
                .create_with_tx(tx, &payment_type)
                .await
                .with_context(|| format!("failed to seed payment type {}", name))?;
        }

        tracing::debug!(
            branch_id = %branch_id,
            count = PAYMENT_TYPES.len() + 1,
            "Seeded payment types"
        );
        Ok(cash_on_hand)
    }
}
