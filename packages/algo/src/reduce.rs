//! Consensus Reducers
//!
//! The two merge algorithms shared by every classification axis. Both fold
//! an ordered symbol sequence into a single consensus value, treating every
//! failure mode (empty input, out-of-range identifier, feature mismatch) as
//! the `None` data outcome rather than an error.

use crate::types::Hier;

/// Fold a symbol sequence over a single-level axis.
///
/// The consensus is the first symbol's label; every later symbol must map
/// to an equal label. A lookup miss or a mismatch aborts the scan.
pub fn reduce_flat<L, F>(symbols: &[u8], lookup: F) -> Option<L>
where
    L: Copy + PartialEq,
    F: Fn(u8) -> Option<L>,
{
    let mut ids = symbols.iter();
    let consensus = lookup(*ids.next()?)?;
    for &id in ids {
        if lookup(id)? != consensus {
            return None;
        }
    }
    Some(consensus)
}

/// Fold a symbol sequence over a two-level (general, specific) axis.
///
/// Each step compares the running consensus against the next symbol's value
/// with a one-hop compatibility ladder (see [`merge`]). The returned label
/// is the general component of the final consensus; a specific refinement
/// never survives a merge, so a sequence like nasal, nasal, stop can fail
/// where stop, nasal, nasal succeeds. That order sensitivity is documented
/// behavior and is kept as-is.
pub fn reduce_hierarchical<L, F>(symbols: &[u8], lookup: F) -> Option<L>
where
    L: Copy + PartialEq,
    F: Fn(u8) -> Option<Hier<L>>,
{
    let mut ids = symbols.iter();
    let mut consensus = lookup(*ids.next()?)?;
    for &id in ids {
        consensus = merge(consensus, lookup(id)?)?;
    }
    Some(consensus.general)
}

/// One merge step of the hierarchical ladder.
///
/// The ladder is asymmetric and deliberately not transitively closed: each
/// arm is terminal, so when both sides carry a specific label and those
/// labels differ, the step fails without trying the cross-level arms. Every
/// successful merge clears the specific component: agreement is only ever
/// recorded at the coarser level, because a later symbol may match there
/// and nowhere finer.
fn merge<L>(current: Hier<L>, next: Hier<L>) -> Option<Hier<L>>
where
    L: Copy + PartialEq,
{
    if next.general == current.general {
        return Some(Hier::new(current.general));
    }
    match (current.specific, next.specific) {
        (Some(cs), Some(ns)) => {
            if cs == ns {
                Some(Hier::new(cs))
            } else {
                None
            }
        }
        (Some(cs), None) => {
            if next.general == cs {
                Some(Hier::new(next.general))
            } else {
                None
            }
        }
        (None, Some(ns)) => {
            if ns == current.general {
                Some(Hier::new(ns))
            } else {
                None
            }
        }
        (None, None) => None,
    }
}

// ==================== Tests ====================
