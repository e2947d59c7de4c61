// Compatibility matching for postings that predate the explicit
// charge_id link. A posting belongs to a charge only when all four
// conditions hold; one mismatch means no match, since a false positive
// would defeat the duplicate-prevention guarantee. New postings always
// carry the link and never go through this path.

use crate::modules::charges::core::charge::Charge;
use crate::modules::postings::core::posting::{ExpensePosting, OFFICE_TAG};
use crate::shared::core::money::within_match_tolerance;

pub fn matches_charge(posting: &ExpensePosting, charge: &Charge, client_name: &str) -> bool {
    let same_day = posting.date == charge.date;
    let same_amount = within_match_tolerance(posting.amount, charge.active_amount());
    let same_beneficiary = posting.beneficiary.trim() == client_name.trim();
    let description_matches = posting.description.contains(OFFICE_TAG)
        && posting.description.contains(charge.label.trim());
    same_day && same_amount && same_beneficiary && description_matches
}
