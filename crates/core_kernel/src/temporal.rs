//! Time source abstraction
//!
//! Creation and update timestamps are assigned by the domain layer. Reading
//! the current instant through a [`Clock`] keeps that logic deterministic in
//! tests while production code uses [`SystemClock`].

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Source of the current instant
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Shared, dynamically dispatched clock
pub type SharedClock = Arc<dyn Clock>;

/// Clock backed by the operating system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl SystemClock {
    /// Returns the system clock as a shared clock
    pub fn shared() -> SharedClock {
        Arc::new(SystemClock)
    }
}

/// Clock that returns a controlled instant
///
/// The instant only moves when [`FixedClock::set`] or [`FixedClock::advance`]
/// is called.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Moves the clock to the given instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.lock() = instant;
    }

    /// Moves the clock forward by the given duration
    pub fn advance(&self, by: Duration) {
        let mut instant = self.lock();
        *instant += by;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A poisoned lock still holds a valid instant
        self.instant.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}
