// Label vocabulary and classification.
//
// The vocabulary is closed: each base label belongs to exactly one
// class, and the class decides which monetary field is editable. Free
// text (the `Autre` sentinel, or any unrecognized label) classifies as
// debit. Classification must be re-derivable from a stored label alone,
// so edit flows never need the original dropdown selection.

use rust_decimal::Decimal;

use crate::shared::core::errors::LedgerError;
use crate::shared::core::money::require_non_negative;

/// Dropdown sentinel for a fully free-text label.
pub const FREE_TEXT_SENTINEL: &str = "Autre";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelClass {
    /// `avance` is editable, `montant` is forced to zero.
    Credit,
    /// `montant` is editable, `avance` is forced to zero.
    Debit,
}

#[derive(Debug, Clone, Copy)]
pub struct VocabularyEntry {
    pub base: &'static str,
    pub class: LabelClass,
}

/// Declaration order is the tie-break for prefix matching; no entry is
/// a prefix of another.
pub const VOCABULARY: &[VocabularyEntry] = &[
    VocabularyEntry { base: "Fees received", class: LabelClass::Credit },
    VocabularyEntry { base: "Declaration advance", class: LabelClass::Credit },
    VocabularyEntry { base: "CNSS", class: LabelClass::Debit },
    VocabularyEntry { base: "Income tax", class: LabelClass::Debit },
    VocabularyEntry { base: "Stamp duty", class: LabelClass::Debit },
    VocabularyEntry { base: "Trade register", class: LabelClass::Debit },
    VocabularyEntry { base: "Training fund", class: LabelClass::Debit },
];

/// Class of a selected base label. Unknown labels are debit-class.
pub fn classify(base: &str) -> LabelClass {
    VOCABULARY
        .iter()
        .find(|entry| entry.base.eq_ignore_ascii_case(base.trim()))
        .map(|entry| entry.class)
        .unwrap_or(LabelClass::Debit)
}

/// Stored label from a dropdown selection plus optional free text. The
/// sentinel stores the free text verbatim; a vocabulary base keeps its
/// class and may carry the free text as an annotation suffix.
pub fn build_stored_label(base: &str, detail: Option<&str>) -> String {
    let detail = detail.map(str::trim).filter(|d| !d.is_empty());
    if base.trim().eq_ignore_ascii_case(FREE_TEXT_SENTINEL) {
        return detail.unwrap_or_default().to_string();
    }
    match detail {
        Some(detail) => format!("{} {}", base.trim(), detail),
        None => base.trim().to_string(),
    }
}

/// Re-derives the vocabulary entry of a stored label: first entry, in
/// declaration order, that is a case-insensitive prefix. `None` means
/// free text.
pub fn base_of_stored(stored: &str) -> Option<&'static VocabularyEntry> {
    let stored = stored.trim();
    VOCABULARY.iter().find(|entry| {
        stored
            .get(..entry.base.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(entry.base))
    })
}

pub fn classify_stored(stored: &str) -> LabelClass {
    base_of_stored(stored)
        .map(|entry| entry.class)
        .unwrap_or(LabelClass::Debit)
}

/// Write-time validation: amounts must be non-negative, and the field
/// the classification forces to zero must actually be zero. A non-zero
/// forced field is rejected, never silently zeroed.
pub fn validate_amounts(
    label: &str,
    montant: Decimal,
    avance: Decimal,
) -> Result<LabelClass, LedgerError> {
    let montant = require_non_negative("montant", montant)?;
    let avance = require_non_negative("avance", avance)?;
    let class = classify_stored(label);
    match class {
        LabelClass::Credit if montant != Decimal::ZERO => Err(LedgerError::ConflictingAmount {
            label: label.to_string(),
            field: "montant",
        }),
        LabelClass::Debit if avance != Decimal::ZERO => Err(LedgerError::ConflictingAmount {
            label: label.to_string(),
            field: "avance",
        }),
        _ => Ok(class),
    }
}
