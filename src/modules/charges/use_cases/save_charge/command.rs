use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Write request for a charge. `base_label` is the dropdown selection
/// (a vocabulary entry or the free-text sentinel) and `detail` the free
/// text; the stored label is built server-side so classification always
/// sees the same string the store keeps.
#[derive(Debug, Clone)]
pub struct SaveCharge {
    pub client_id: Uuid,
    pub date: NaiveDate,
    pub base_label: String,
    pub detail: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
}
