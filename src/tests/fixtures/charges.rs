use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::charges::core::charge::Charge;

pub fn amt(s: &str) -> Decimal {
    s.parse().expect("amount literal")
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("calendar date")
}

pub struct ChargeBuilder {
    charge: Charge,
}

impl ChargeBuilder {
    pub fn new() -> Self {
        Self {
            charge: Charge {
                id: Uuid::now_v7(),
                client_id: Uuid::now_v7(),
                date: day(2025, 1, 15),
                label: "CNSS".to_string(),
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
                carry_forward: false,
                cash_withdrawal_processed: false,
            },
        }
    }

    pub fn client_id(mut self, client_id: Uuid) -> Self {
        self.charge.client_id = client_id;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.charge.date = date;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.charge.label = label.into();
        self
    }

    pub fn debit(mut self, debit: Decimal) -> Self {
        self.charge.debit = debit;
        self
    }

    pub fn credit(mut self, credit: Decimal) -> Self {
        self.charge.credit = credit;
        self
    }

    pub fn carry_forward(mut self) -> Self {
        self.charge.carry_forward = true;
        self
    }

    pub fn withdrawal_processed(mut self) -> Self {
        self.charge.cash_withdrawal_processed = true;
        self
    }

    pub fn build(self) -> Charge {
        self.charge
    }
}
