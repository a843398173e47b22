//! Cyclic traversal of a resolved turn order.
//!
//! The caller holds the current turn index as external state and advances
//! it with these helpers. All three functions are pure; a zero-length
//! order is a caller contract violation and is not guarded here.

use tb_core::Actor;

/// Step to the next slot in the cycle: `(current + 1) % len`.
///
/// The order must be non-empty.
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Step to the next slot whose actor can still act, skipping dead monsters
/// and summons and exhausted characters, wrapping at the end.
///
/// When every *other* slot is ineligible the scan gives up and returns the
/// immediate next index, `(current + 1) % len`, eligible or not — the
/// signal that nobody else can act. Callers must re-check the returned
/// actor's eligibility before acting on it instead of trusting the return
/// value as proof of eligibility.
pub fn next_ready_index(current: usize, order: &[Actor]) -> usize {
    let len = order.len();
    for step in 1..len {
        let index = (current + step) % len;
        if order[index].can_act() {
            return index;
        }
    }
    next_index(current, len)
}

/// True when `current` is the last slot of the order, i.e. the next
/// advance wraps to the start and begins a new round. Always true for a
/// length-1 order.
pub fn is_round_end(current: usize, len: usize) -> bool {
    current + 1 == len
}
