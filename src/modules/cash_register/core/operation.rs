// Cash register operations and the derived balance.
//
// The balance is a pure fold over the full operation list in creation
// order, recomputed on every read. Edits and deletes therefore show up
// on the next read without any counter to keep in sync.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "retrait")]
    Withdrawal,
    #[serde(rename = "depot")]
    Deposit,
    #[serde(rename = "autre")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationSign {
    #[serde(rename = "plus")]
    Plus,
    #[serde(rename = "minus")]
    Minus,
}

/// Deposits are always Plus and withdrawals always Minus; only `autre`
/// keeps the operator's choice (defaulting to Minus when absent).
pub fn resolve_sign(kind: OperationKind, requested: Option<OperationSign>) -> OperationSign {
    match kind {
        OperationKind::Deposit => OperationSign::Plus,
        OperationKind::Withdrawal => OperationSign::Minus,
        OperationKind::Other => requested.unwrap_or(OperationSign::Minus),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashOperation {
    pub id: Uuid,
    #[serde(rename = "type_operation")]
    pub kind: OperationKind,
    #[serde(rename = "operation_sign")]
    pub sign: OperationSign,
    #[serde(rename = "montant", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "commentaire", default)]
    pub comment: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub charge_id: Option<Uuid>,
}

impl CashOperation {
    pub fn signed_amount(&self) -> Decimal {
        match self.sign {
            OperationSign::Plus => self.amount,
            OperationSign::Minus => -self.amount,
        }
    }
}

/// Current balance of the register: sum of signed amounts in creation
/// order.
pub fn balance(operations: &[CashOperation]) -> Decimal {
    operations
        .iter()
        .fold(Decimal::ZERO, |total, op| total + op.signed_amount())
}
