//! Batch application of diagnostic fixes.
//!
//! Each fix replaces only its own token's range, so fixes from different
//! tokens never conflict; overlap removal is still performed as a guard
//! for hosts that merge diagnostics from several passes.

use blocklint_diagnostics::{Diagnostic, Edit};

/// Apply every available fix in `diagnostics` to `source` in one batch.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut edits: Vec<Edit> = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .flat_map(|fix| fix.edits().iter().cloned())
        .collect();

    // Sort descending by start so edits can be applied back to front.
    edits.sort_by_key(|edit| std::cmp::Reverse(edit.start()));
    let edits = remove_overlapping_edits(edits);
    apply_edits(source, &edits)
}

/// Remove overlapping edits, keeping the first one (highest start position).
fn remove_overlapping_edits(edits: Vec<Edit>) -> Vec<Edit> {
    let mut result: Vec<Edit> = Vec::new();

    for edit in edits {
        // Edits are sorted descending by start, so accepted edits have
        // higher starts; an overlap occurs if edit.end > existing.start.
        let overlaps = result
            .iter()
            .any(|existing| edit.end() > existing.start());
        if !overlaps {
            result.push(edit);
        }
    }

    result
}

/// Apply edits sorted descending by start position.
pub fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let mut result = source.to_string();

    for edit in edits {
        let start = usize::from(edit.start());
        let end = usize::from(edit.end());
        let content = edit.content().unwrap_or("");
        result.replace_range(start..end, content);
    }

    result
}
