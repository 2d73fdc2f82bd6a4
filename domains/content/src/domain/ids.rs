//! Entry id generation
//!
//! Ids are millisecond timestamps rendered as decimal strings. Within one
//! process every issued id is strictly greater than the one before, even
//! when several are issued in the same millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Issue the next id
pub fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED.load(Ordering::Acquire);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ISSUED.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

/// Issue the next id not rejected by `taken`.
///
/// Stored ids may come from another clock (hand edits, a restored backup).
pub fn next_free_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = next_id();
        if !taken(&id) {
            return id;
        }
    }
}
