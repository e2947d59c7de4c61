use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::postings::core::posting::{ExpensePosting, OFFICE_TAG, Origin};
use crate::tests::fixtures::charges::{amt, day};

pub struct ExpensePostingBuilder {
    posting: ExpensePosting,
}

impl ExpensePostingBuilder {
    pub fn new() -> Self {
        Self {
            posting: ExpensePosting {
                id: Uuid::now_v7(),
                date: day(2025, 1, 15),
                beneficiary: "Slim Trading".to_string(),
                amount: amt("120.000"),
                description: format!("{OFFICE_TAG} CNSS"),
                origin: Origin::Client,
                client_id: Some(Uuid::now_v7()),
                charge_id: Some(Uuid::now_v7()),
            },
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.posting.date = date;
        self
    }

    pub fn beneficiary(mut self, beneficiary: impl Into<String>) -> Self {
        self.posting.beneficiary = beneficiary.into();
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.posting.amount = amount;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.posting.description = description.into();
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.posting.origin = origin;
        self
    }

    pub fn charge_id(mut self, charge_id: Uuid) -> Self {
        self.posting.charge_id = Some(charge_id);
        self
    }

    pub fn unlinked(mut self) -> Self {
        self.posting.charge_id = None;
        self
    }

    pub fn build(self) -> ExpensePosting {
        self.posting
    }
}
