// ==========================================
// Text normalization
// ==========================================
// NFKC composition + trim for the logical form; Unicode
// bidirectional reordering of the logical form for the visual form.
// ==========================================

use unicode_bidi::BidiInfo;
use unicode_normalization::UnicodeNormalization;

/// Both representations of one normalized text.
///
/// `logical` keeps the original directional encoding and is what the
/// log channel persists; `visual` is reordered for a left-to-right
/// rendering surface and is what the console shows. Sinks pick their
/// field; nothing re-derives one form from the other ad hoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForm {
    pub logical: String,
    pub visual: String,
}

/// Normalize a text field.
///
/// Empty input passes through unchanged. Idempotent over the logical
/// form: `normalize(normalize(x).logical) == normalize(x)`.
pub fn normalize(text: &str) -> NormalForm {
    let logical: String = text.trim().nfkc().collect();
    let visual = reorder_visual(&logical);
    NormalForm { logical, visual }
}

/// Reorder a logical string into display order for an LTR surface.
fn reorder_visual(logical: &str) -> String {
    if logical.is_empty() {
        return String::new();
    }

    let bidi = BidiInfo::new(logical, None);
    let mut visual = String::with_capacity(logical.len());
    for paragraph in &bidi.paragraphs {
        visual.push_str(&bidi.reorder_line(paragraph, paragraph.range.clone()));
    }
    visual
}
