use uuid::Uuid;

use crate::modules::postings::core::posting::Origin;

/// Request to post one charge into one or more expense ledgers. The
/// combined client+office posting is the two-element case; each origin
/// succeeds or is skipped independently.
#[derive(Debug, Clone)]
pub struct PostCharge {
    pub charge_id: Uuid,
    pub origins: Vec<Origin>,
}
