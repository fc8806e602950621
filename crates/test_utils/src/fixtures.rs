//! Pre-built Test Fixtures
//!
//! Consistent values for unit and integration tests. Random names come from
//! `fake` so tests that need distinct rows do not collide.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fake::faker::company::en::CompanyName;
use fake::Fake;

/// Fixed dates and instants
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2024-01-01
    pub fn policy_start() -> NaiveDate {
        date(2024, 1, 1)
    }

    /// 2024-12-31
    pub fn policy_end() -> NaiveDate {
        date(2024, 12, 31)
    }

    /// 2025-01-01
    pub fn renewal_start() -> NaiveDate {
        date(2025, 1, 1)
    }

    /// 2025-12-31
    pub fn renewal_end() -> NaiveDate {
        date(2025, 12, 31)
    }

    /// A fixed instant usable as "now" in deterministic tests
    pub fn reference_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 28, 9, 30, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Policy names
pub struct NameFixtures;

impl NameFixtures {
    pub fn home() -> &'static str {
        "Home Insurance"
    }

    pub fn car() -> &'static str {
        "Car Insurance"
    }

    /// A company-style name, different on every call
    pub fn random() -> String {
        let company: String = CompanyName().fake();
        format!("{} Cover", company)
    }

    /// A name one character longer than the accepted maximum
    pub fn too_long() -> String {
        "x".repeat(201)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
