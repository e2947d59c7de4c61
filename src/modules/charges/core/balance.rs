// Running balance over a client's charges for one year.
//
// The authoritative period of a charge is its month: rows are stable
// sorted by (year, month) and same-month rows keep their storage order.
// Day or time components never reorder the fold.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::charges::core::charge::Charge;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("more than one carry-forward row in the input")]
    MultipleCarryForward,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    pub charge_id: Uuid,
    /// Cumulative balance including this row; the carry-forward row
    /// holds the opening balance unchanged. Signed, never clamped.
    #[serde(rename = "solde", with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(rename = "report")]
    pub carry_forward: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    #[serde(rename = "solde_initial", with = "rust_decimal::serde::float")]
    pub opening: Decimal,
    #[serde(rename = "soldes")]
    pub rows: Vec<BalanceRow>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Opening balance carried by the synthetic prior-year row: its
/// `credit - debit` (a negative close is stored on the debit side).
pub fn opening_balance_of(charges: &[Charge]) -> Decimal {
    charges
        .iter()
        .find(|charge| charge.carry_forward)
        .map(|charge| charge.credit - charge.debit)
        .unwrap_or(Decimal::ZERO)
}

/// Folds `credit - debit` over the regular rows in chronological order,
/// starting from `opening`. One row per regular charge, plus one
/// synthetic row for the carry-forward charge when present.
pub fn compute_running_balances(
    charges: &[Charge],
    opening: Decimal,
) -> Result<BalanceReport, BalanceError> {
    let carry: Vec<&Charge> = charges.iter().filter(|c| c.carry_forward).collect();
    if carry.len() > 1 {
        return Err(BalanceError::MultipleCarryForward);
    }

    let mut regular: Vec<&Charge> = charges.iter().filter(|c| !c.carry_forward).collect();
    for charge in &regular {
        if charge.debit < Decimal::ZERO || charge.credit < Decimal::ZERO {
            return Err(BalanceError::InvalidAmount(format!(
                "charge {} carries a negative amount",
                charge.id
            )));
        }
    }
    regular.sort_by_key(|charge| (charge.date.year(), charge.date.month()));

    let mut rows = Vec::with_capacity(regular.len() + carry.len());
    if let Some(carry_row) = carry.first() {
        rows.push(BalanceRow {
            charge_id: carry_row.id,
            balance: opening,
            carry_forward: true,
        });
    }

    let mut running = opening;
    for charge in regular {
        running += charge.credit - charge.debit;
        rows.push(BalanceRow {
            charge_id: charge.id,
            balance: running,
            carry_forward: false,
        });
    }

    Ok(BalanceReport {
        opening,
        rows,
        total: running,
    })
}
