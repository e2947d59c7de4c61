use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::charges::core::charge::Charge;
use crate::shared::core::errors::LedgerError;
use crate::shared::core::money::require_positive;

/// Which downstream expense ledger a posting targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "bureau")]
    Office,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Client => write!(f, "client"),
            Origin::Office => write!(f, "bureau"),
        }
    }
}

/// Bracketed tag embedded in office-posting descriptions. Historical
/// postings without a `charge_id` link are matched back to their charge
/// partly through this literal.
pub const OFFICE_TAG: &str = "[CGM]";

/// Record written to a downstream expense ledger. `(charge_id, origin)`
/// is unique: the store rejects a second posting for the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePosting {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "beneficiaire")]
    pub beneficiary: String,
    #[serde(rename = "montant", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    #[serde(rename = "type")]
    pub origin: Origin,
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub charge_id: Option<Uuid>,
}

impl ExpensePosting {
    /// Posting document for a charge. New postings always carry the
    /// explicit `charge_id` link; the description still embeds the
    /// office tag so legacy viewers keep recognizing office rows.
    pub fn for_charge(charge: &Charge, origin: Origin, client_name: &str, amount: Decimal) -> Self {
        let description = match origin {
            Origin::Office => format!("{OFFICE_TAG} {}", charge.label),
            Origin::Client => charge.label.clone(),
        };
        Self {
            id: Uuid::now_v7(),
            date: charge.date,
            beneficiary: client_name.to_string(),
            amount,
            description,
            origin,
            client_id: Some(charge.client_id),
            charge_id: Some(charge.id),
        }
    }
}

/// Amount a posting for this charge would carry. Carry-forward rows and
/// charges whose active field is zero are not postable.
pub fn postable_amount(charge: &Charge) -> Result<Decimal, LedgerError> {
    if charge.carry_forward {
        return Err(LedgerError::InvalidAmount(format!(
            "charge {} is a carry-forward row and cannot be posted",
            charge.id
        )));
    }
    require_positive("montant", charge.active_amount())
}
