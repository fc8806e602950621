//! Unit tests for the Temporal module
//!
//! Tests cover the clock implementations used to stamp policy records.

use chrono::{Duration, TimeZone, Utc};
use core_kernel::{Clock, FixedClock, SharedClock, SystemClock};
use std::sync::Arc;

#[test]
fn test_fixed_clock_set_overrides_instant() {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let later = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();

    clock.set(later);

    assert_eq!(clock.now(), later);
}

#[test]
fn test_fixed_clock_shared_across_handles() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let clock = Arc::new(FixedClock::new(start));
    let shared: SharedClock = clock.clone();

    clock.advance(Duration::seconds(30));

    assert_eq!(shared.now(), start + Duration::seconds(30));
}

#[test]
fn test_system_clock_is_close_to_utc_now() {
    let shared = SystemClock::shared();
    let delta = Utc::now() - shared.now();
    assert!(delta.num_seconds().abs() < 5);
}
