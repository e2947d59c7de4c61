use rust_decimal::Decimal;
use uuid::Uuid;

pub use crate::tests::fixtures::charges::amt;

use crate::modules::cash_register::core::operation::{
    CashOperation, OperationKind, OperationSign, resolve_sign,
};

pub struct CashOperationBuilder {
    operation: CashOperation,
    explicit_sign: Option<OperationSign>,
}

impl CashOperationBuilder {
    pub fn new() -> Self {
        Self {
            operation: CashOperation {
                id: Uuid::now_v7(),
                kind: OperationKind::Other,
                sign: OperationSign::Minus,
                amount: amt("10.000"),
                comment: String::new(),
                created_at: 1_700_000_000_000,
                client_id: None,
                charge_id: None,
            },
            explicit_sign: None,
        }
    }

    pub fn kind(mut self, kind: OperationKind) -> Self {
        self.operation.kind = kind;
        self
    }

    pub fn sign(mut self, sign: OperationSign) -> Self {
        self.explicit_sign = Some(sign);
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.operation.amount = amount;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.operation.comment = comment.into();
        self
    }

    pub fn build(mut self) -> CashOperation {
        self.operation.sign = resolve_sign(self.operation.kind, self.explicit_sign);
        self.operation
    }
}
