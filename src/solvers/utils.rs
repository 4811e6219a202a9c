use super::Item;
use itertools::FoldWhile::{Continue, Done};
use itertools::Itertools;

/// Upper bound on the value reachable from a partial state, items taken from
/// density position `depth` onwards. `items` must be in density order.
///
/// Whole items are added greedily while they fit, the first one which does
/// not fit contributes the fraction that still fits. This is the LP
/// relaxation of the remaining subproblem, so it never undercounts.
pub fn relaxation_bound(items: &[Item], capacity: u32, depth: usize, value: u64, weight: u64) -> f64 {
    let capacity = capacity as u64;
    if weight >= capacity {
        return 0.0;
    }
    #[allow(deprecated)]
    let (_, whole, fraction) = items
        .iter()
        .skip(depth)
        .fold_while((weight, value, 0.0), |(weight, whole, _), item| {
            let item_weight = item.weight as u64;
            if weight + item_weight <= capacity {
                Continue((weight + item_weight, whole + item.value as u64, 0.0))
            } else {
                let rem = (capacity - weight) as f64;
                Done((weight, whole, rem * item.value as f64 / item.weight as f64))
            }
        })
        .into_inner();
    whole as f64 + fraction
}

/// Maps a selection given as density positions back to an inclusion vector in
/// input order.
pub fn selection_in_input_order(
    sorted: &[Item],
    positions: impl IntoIterator<Item = usize>,
    size: usize,
) -> Vec<bool> {
    positions
        .into_iter()
        .fold(vec![false; size], |mut acc, position| {
            if let Some(item) = sorted.get(position) {
                acc[item.index] = true;
            }
            acc
        })
}
