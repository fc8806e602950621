//! Use Case Tests
//!
//! Runs the insurance policy service against the in-memory store with a
//! controlled clock.
//!
//! # Test Organization
//!
//! - `list` - ordering of the listing
//! - `get_by_id` - lookup and not-found handling
//! - `create` - id assignment, timestamps, rejected inputs
//! - `edit` - preserved fields, refreshed timestamp, atomicity

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use core_kernel::{FixedClock, PolicyId};
use domain_policy::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, GetAllInsurancePoliciesQuery,
    GetInsurancePolicyByIdQuery, InMemoryPolicyStore, InsurancePolicyPort, InsurancePolicyService,
    InsurancePolicyStatus, PolicyError,
};
use std::sync::Arc;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 28, 9, 30, 0).unwrap()
}

struct Harness {
    store: InMemoryPolicyStore,
    clock: Arc<FixedClock>,
    service: InsurancePolicyService,
}

fn harness() -> Harness {
    let store = InMemoryPolicyStore::new();
    let clock = Arc::new(FixedClock::new(t0()));
    let service = InsurancePolicyService::new(Arc::new(store.clone()), clock.clone());
    Harness { store, clock, service }
}

fn create_action(name: &str, status: &str, start: NaiveDate, end: NaiveDate) -> CreateInsurancePolicyAction {
    CreateInsurancePolicyAction {
        name: Some(name.to_string()),
        status: Some(status.to_string()),
        start_date: Some(start),
        end_date: Some(end),
    }
}

fn edit_action(id: i32, name: &str, status: &str, start: NaiveDate, end: NaiveDate) -> EditInsurancePolicyAction {
    EditInsurancePolicyAction {
        id: Some(PolicyId::new(id)),
        name: Some(name.to_string()),
        status: Some(status.to_string()),
        start_date: Some(start),
        end_date: Some(end),
    }
}

// ============================================================================
// LIST
// ============================================================================

mod list {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let h = harness();
        let policies = h
            .service
            .get_all_insurance_policies(GetAllInsurancePoliciesQuery)
            .await
            .unwrap();
        assert!(policies.is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_sorted_by_name_regardless_of_insertion() {
        let h = harness();
        for name in ["Charlie", "Alpha", "Bravo"] {
            h.service
                .create_insurance_policy(create_action(name, "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
                .await
                .unwrap();
        }

        let names: Vec<String> = h
            .service
            .get_all_insurance_policies(GetAllInsurancePoliciesQuery)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[tokio::test]
    async fn test_equal_names_are_ordered_by_id() {
        let h = harness();
        for status in ["INACTIVE", "ACTIVE"] {
            h.service
                .create_insurance_policy(create_action("Same", status, date(2024, 1, 1), date(2024, 12, 31)))
                .await
                .unwrap();
        }

        let ids: Vec<_> = h
            .service
            .get_all_insurance_policies(GetAllInsurancePoliciesQuery)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![Some(PolicyId::new(1)), Some(PolicyId::new(2))]);
    }
}

// ============================================================================
// GET BY ID
// ============================================================================

mod get_by_id {
    use super::*;

    #[tokio::test]
    async fn test_get_after_create_returns_input_fields() {
        let h = harness();
        let created = h
            .service
            .create_insurance_policy(create_action("Home", "INACTIVE", date(2024, 3, 1), date(2025, 2, 28)))
            .await
            .unwrap();
        let id = created.id.expect("id assigned");

        let fetched = h
            .service
            .get_insurance_policy_by_id(GetInsurancePolicyByIdQuery::new(id))
            .await
            .unwrap();

        assert_eq!(fetched.name, "Home");
        assert_eq!(fetched.status, InsurancePolicyStatus::Inactive);
        assert_eq!(fetched.start_date, date(2024, 3, 1));
        assert_eq!(fetched.end_date, date(2025, 2, 28));
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let h = harness();
        let error = h
            .service
            .get_insurance_policy_by_id(GetInsurancePolicyByIdQuery::new(PolicyId::new(999)))
            .await
            .unwrap_err();

        assert!(matches!(error, PolicyError::NotFound { id } if id == PolicyId::new(999)));
        assert_eq!(error.functional_key(), "insurance_policy_not_found");
    }

    #[tokio::test]
    async fn test_missing_id_is_invalid_input() {
        let h = harness();
        let error = h
            .service
            .get_insurance_policy_by_id(GetInsurancePolicyByIdQuery { id: None })
            .await
            .unwrap_err();

        assert_eq!(error.field_errors().len(), 1);
        assert_eq!(error.field_errors()[0].field_name, "id");
    }
}

// ============================================================================
// CREATE
// ============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id_and_equal_timestamps() {
        let h = harness();
        let created = h
            .service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();

        assert_eq!(created.id, Some(PolicyId::new(1)));
        assert_eq!(created.creation, t0());
        assert_eq!(created.creation, created.last_update);
        assert_eq!(h.store.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_payload_is_rejected_without_writes() {
        let h = harness();
        let error = h
            .service
            .create_insurance_policy(CreateInsurancePolicyAction::default())
            .await
            .unwrap_err();

        let names: Vec<_> = error.field_errors().iter().map(|e| e.field_name.as_str()).collect();
        assert_eq!(names, vec!["name", "status", "startDate", "endDate"]);
        assert_eq!(error.to_string(), "Invalid input received: 4 error(s) encountered");
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_status_is_rejected_without_writes() {
        let h = harness();
        let error = h
            .service
            .create_insurance_policy(create_action("A", "XXX", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap_err();

        assert_eq!(error.field_errors().len(), 1);
        assert_eq!(
            error.field_errors()[0].message,
            "The value for the field status can only one of: ACTIVE, INACTIVE"
        );
        assert!(h.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_port_error() {
        let h = harness();
        h.store.fail_saves(true);

        let error = h
            .service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap_err();

        assert!(matches!(error, PolicyError::Port(_)));
        assert!(h.store.is_empty().await);
    }
}

// ============================================================================
// EDIT
// ============================================================================

mod edit {
    use super::*;

    #[tokio::test]
    async fn test_create_then_edit_scenario() {
        let h = harness();
        let created = h
            .service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();
        assert_eq!(created.id, Some(PolicyId::new(1)));

        h.clock.advance(Duration::hours(2));
        let edited = h
            .service
            .edit_insurance_policy(edit_action(1, "B", "INACTIVE", date(2025, 1, 1), date(2025, 12, 31)))
            .await
            .unwrap();

        assert_eq!(edited.id, created.id);
        assert_eq!(edited.creation, created.creation);
        assert!(edited.last_update > created.last_update);
        assert_eq!(edited.last_update, t0() + Duration::hours(2));
        assert_eq!(edited.name, "B");
        assert_eq!(edited.status, InsurancePolicyStatus::Inactive);
        assert_eq!(edited.start_date, date(2025, 1, 1));
        assert_eq!(edited.end_date, date(2025, 12, 31));
        assert_eq!(h.store.snapshot().await, vec![edited]);
    }

    #[tokio::test]
    async fn test_last_update_never_moves_backwards() {
        let h = harness();
        h.service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();

        h.clock.set(t0() - Duration::days(1));
        let edited = h
            .service
            .edit_insurance_policy(edit_action(1, "A2", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();

        assert_eq!(edited.creation, t0());
        assert!(edited.last_update >= edited.creation);
    }

    #[tokio::test]
    async fn test_edit_unknown_id_is_not_found_and_store_unchanged() {
        let h = harness();
        h.service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();
        let before = h.store.snapshot().await;

        let error = h
            .service
            .edit_insurance_policy(edit_action(42, "B", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap_err();

        assert!(matches!(error, PolicyError::NotFound { id } if id == PolicyId::new(42)));
        assert_eq!(h.store.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_edit_validates_id_and_content_together() {
        let h = harness();
        let action = EditInsurancePolicyAction {
            id: None,
            name: Some(String::new()),
            status: Some("ACTIVE".to_string()),
            start_date: Some(date(2024, 6, 1)),
            end_date: Some(date(2024, 6, 1)),
        };

        let error = h.service.edit_insurance_policy(action).await.unwrap_err();

        let names: Vec<_> = error.field_errors().iter().map(|e| e.field_name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "endDate"]);
    }

    #[tokio::test]
    async fn test_failed_save_after_lookup_leaves_stored_policy_intact() {
        let h = harness();
        let created = h
            .service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();

        h.store.fail_saves(true);
        let error = h
            .service
            .edit_insurance_policy(edit_action(1, "B", "INACTIVE", date(2025, 1, 1), date(2025, 12, 31)))
            .await
            .unwrap_err();

        assert!(matches!(error, PolicyError::Port(_)));
        assert_eq!(h.store.snapshot().await, vec![created]);
    }

    #[tokio::test]
    async fn test_concurrent_edits_are_serialised() {
        let h = harness();
        h.service
            .create_insurance_policy(create_action("A", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
            .await
            .unwrap();

        let service = Arc::new(h.service);
        let first = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .edit_insurance_policy(edit_action(1, "First", "ACTIVE", date(2024, 1, 1), date(2024, 12, 31)))
                    .await
            })
        };
        let second = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .edit_insurance_policy(edit_action(1, "Second", "INACTIVE", date(2025, 1, 1), date(2025, 12, 31)))
                    .await
            })
        };

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        let stored = h.store.snapshot().await;
        assert_eq!(stored.len(), 1);
        // One full replacement wins; fields are never mixed
        let winner = &stored[0];
        match winner.name.as_str() {
            "First" => assert_eq!(winner.status, InsurancePolicyStatus::Active),
            "Second" => assert_eq!(winner.status, InsurancePolicyStatus::Inactive),
            other => panic!("Unexpected name {}", other),
        }
    }
}
