use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::charges::core::labels::{self, LabelClass};

/// One dated ledger line of a client. Exactly one of `debit`/`credit`
/// carries a value, selected by the label classification; the other side
/// is stored as zero. Carry-forward rows are synthetic opening-balance
/// lines and take part in neither classification nor posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: Uuid,
    pub client_id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "libelle")]
    pub label: String,
    #[serde(rename = "montant", with = "rust_decimal::serde::float")]
    pub debit: Decimal,
    #[serde(rename = "avance", with = "rust_decimal::serde::float")]
    pub credit: Decimal,
    #[serde(rename = "report", default)]
    pub carry_forward: bool,
    #[serde(rename = "retrait_effectue", default)]
    pub cash_withdrawal_processed: bool,
}

impl Charge {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Value of the field the label classification marks active.
    pub fn active_amount(&self) -> Decimal {
        match labels::classify_stored(&self.label) {
            LabelClass::Credit => self.credit,
            LabelClass::Debit => self.debit,
        }
    }

    /// A charge can be withdrawn from the cash register only when it is
    /// a pure expense line: debit strictly positive and credit exactly
    /// zero. Rows that carry both sides (pre-classification imports)
    /// never qualify.
    pub fn withdrawal_eligible(&self) -> bool {
        !self.carry_forward && self.debit > Decimal::ZERO && self.credit == Decimal::ZERO
    }
}

#[cfg(test)]
mod charge_tests {
    use super::*;
    use crate::tests::fixtures::charges::{ChargeBuilder, amt};
    use rstest::rstest;

    #[rstest]
    fn it_should_take_the_credit_field_for_a_credit_class_label() {
        let charge = ChargeBuilder::new()
            .label("Fees received")
            .credit(amt("500.000"))
            .build();
        assert_eq!(charge.active_amount(), amt("500.000"));
    }

    #[rstest]
    fn it_should_take_the_debit_field_for_a_debit_class_label() {
        let charge = ChargeBuilder::new()
            .label("CNSS")
            .debit(amt("120.000"))
            .build();
        assert_eq!(charge.active_amount(), amt("120.000"));
    }

    #[rstest]
    fn it_should_be_withdrawal_eligible_only_with_debit_and_no_credit() {
        let eligible = ChargeBuilder::new().label("CNSS").debit(amt("120.000")).build();
        assert!(eligible.withdrawal_eligible());

        let with_credit = ChargeBuilder::new()
            .label("CNSS")
            .debit(amt("120.000"))
            .credit(amt("10.000"))
            .build();
        assert!(!with_credit.withdrawal_eligible());

        let zero_debit = ChargeBuilder::new().label("CNSS").build();
        assert!(!zero_debit.withdrawal_eligible());

        let carry = ChargeBuilder::new()
            .carry_forward()
            .debit(amt("120.000"))
            .build();
        assert!(!carry.withdrawal_eligible());
    }

    #[rstest]
    fn it_should_serialize_with_the_wire_field_names() {
        let charge = ChargeBuilder::new()
            .label("CNSS")
            .debit(amt("120.500"))
            .build();
        let json = serde_json::to_value(&charge).expect("serialize charge");
        assert_eq!(json["libelle"], "CNSS");
        assert_eq!(json["montant"], serde_json::json!(120.5));
        assert_eq!(json["avance"], serde_json::json!(0.0));
        assert_eq!(json["report"], serde_json::json!(false));
    }
}
