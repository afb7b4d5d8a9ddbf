//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start well above zero so they are valid Discord snowflakes.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    1_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
