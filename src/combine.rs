//! Flatten resolved layer lists into the final ordered sequence

use crate::layer::Layer;

/// Flatten the resolved lists, then any caller-supplied extra lists, into
/// one ordered sequence.
///
/// Relative order is preserved both across and within lists. No
/// deduplication and no rule merging happen here: a later layer with the
/// same scope simply appears later, and precedence is the consuming tool's
/// last-applicable-wins interpretation of the sequence.
pub fn combine(resolved: Vec<Vec<Layer>>, extra: Vec<Vec<Layer>>) -> Vec<Layer> {
    let total = resolved.iter().map(Vec::len).sum::<usize>()
        + extra.iter().map(Vec::len).sum::<usize>();

    let mut sequence = Vec::with_capacity(total);
    for list in resolved.into_iter().chain(extra) {
        sequence.extend(list);
    }
    sequence
}
