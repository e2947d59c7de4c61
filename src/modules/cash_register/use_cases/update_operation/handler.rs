use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cash_register::adapters::outbound::register_store::RegisterStore;
use crate::modules::cash_register::core::operation::{
    CashOperation, OperationKind, OperationSign, resolve_sign,
};
use crate::shared::core::errors::LedgerError;
use crate::shared::core::money::require_positive;

/// Partial edit of an operation. Absent fields keep their stored value;
/// the sign is re-resolved against the (possibly new) kind, so a kind
/// change to deposit or withdrawal re-forces it.
#[derive(Debug, Clone, Default)]
pub struct UpdateOperation {
    pub kind: Option<OperationKind>,
    pub sign: Option<OperationSign>,
    pub amount: Option<Decimal>,
    pub comment: Option<String>,
}

pub struct UpdateOperationHandler {
    register: Arc<dyn RegisterStore>,
}

impl UpdateOperationHandler {
    pub fn new(register: Arc<dyn RegisterStore>) -> Self {
        Self { register }
    }

    pub async fn handle(
        &self,
        id: Uuid,
        fields: UpdateOperation,
    ) -> Result<CashOperation, LedgerError> {
        let mut operation = self.register.get(id).await?;
        if let Some(amount) = fields.amount {
            operation.amount = require_positive("montant", amount)?;
        }
        if let Some(kind) = fields.kind {
            operation.kind = kind;
        }
        if let Some(comment) = fields.comment {
            operation.comment = comment;
        }
        operation.sign = resolve_sign(operation.kind, fields.sign.or(Some(operation.sign)));
        self.register.update(operation.clone()).await?;
        Ok(operation)
    }
}

#[cfg(test)]
mod update_operation_handler_tests {
    use super::*;
    use crate::modules::cash_register::adapters::outbound::register_store_in_memory::InMemoryRegisterStore;
    use crate::modules::cash_register::core::operation::balance;
    use crate::tests::fixtures::operations::{CashOperationBuilder, amt};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryRegisterStore>, UpdateOperationHandler) {
        let store = Arc::new(InMemoryRegisterStore::new());
        let handler = UpdateOperationHandler::new(store.clone());
        (store, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_change_the_balance_by_the_amount_delta(
        before_each: (Arc<InMemoryRegisterStore>, UpdateOperationHandler),
    ) {
        let (store, handler) = before_each;
        let operation = CashOperationBuilder::new()
            .kind(OperationKind::Deposit)
            .amount(amt("100.000"))
            .build();
        store.insert(operation.clone()).await.expect("seed");
        let before = balance(&store.list().await.expect("list"));

        handler
            .handle(
                operation.id,
                UpdateOperation {
                    amount: Some(amt("130.000")),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        let after = balance(&store.list().await.expect("list"));
        assert_eq!(after - before, amt("30.000"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reforce_the_sign_when_the_kind_changes(
        before_each: (Arc<InMemoryRegisterStore>, UpdateOperationHandler),
    ) {
        let (store, handler) = before_each;
        let operation = CashOperationBuilder::new()
            .kind(OperationKind::Deposit)
            .amount(amt("50.000"))
            .build();
        store.insert(operation.clone()).await.expect("seed");

        let updated = handler
            .handle(
                operation.id,
                UpdateOperation {
                    kind: Some(OperationKind::Withdrawal),
                    ..Default::default()
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.sign, OperationSign::Minus);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_edit_to_a_non_positive_amount(
        before_each: (Arc<InMemoryRegisterStore>, UpdateOperationHandler),
    ) {
        let (store, handler) = before_each;
        let operation = CashOperationBuilder::new()
            .kind(OperationKind::Deposit)
            .amount(amt("50.000"))
            .build();
        store.insert(operation.clone()).await.expect("seed");

        let result = handler
            .handle(
                operation.id,
                UpdateOperation {
                    amount: Some(amt("0.000")),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
        assert_eq!(
            store.get(operation.id).await.expect("get").amount,
            amt("50.000")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_with_not_found_for_an_unknown_operation(
        before_each: (Arc<InMemoryRegisterStore>, UpdateOperationHandler),
    ) {
        let (_, handler) = before_each;
        let result = handler.handle(Uuid::now_v7(), UpdateOperation::default()).await;
        assert!(matches!(result, Err(LedgerError::NotFound(_))));
    }
}
