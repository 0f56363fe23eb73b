//! Property-based tests for session state transitions
//!
//! These tests verify the log and replacement invariants hold across
//! arbitrary operation sequences.

use super::*;
use crate::trip::{FlightOffer, HotelOffer, TripBundle, TripExtraction, VisaInfo};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_message() -> impl Strategy<Value = Message> {
    (any::<bool>(), "[a-zA-Z ?!.,]{1,40}").prop_map(|(from_user, text)| {
        if from_user {
            Message::user(text)
        } else {
            Message::assistant(text)
        }
    })
}

fn arb_extraction() -> impl Strategy<Value = TripExtraction> {
    (
        proptest::option::of("[A-Z]{3}"),
        proptest::option::of("[A-Z]{3}"),
        proptest::option::of("2024-01-[0-2][0-9]"),
        proptest::option::of(1u32..10),
        proptest::option::of(100.0f64..10_000.0),
        proptest::collection::vec("[a-z_]{3,12}", 0..4),
    )
        .prop_map(
            |(origin, destination, start_date, travelers, budget, missing_fields)| TripExtraction {
                origin,
                destination,
                start_date,
                end_date: None,
                travelers,
                budget,
                nationality: None,
                reply_message: None,
                missing_fields,
            },
        )
}

fn arb_bundle() -> impl Strategy<Value = TripBundle> {
    (
        "[A-Z][a-z]{3,10}",
        200.0f64..2000.0,
        0u32..3,
        "[A-Z][a-z]{3,10}",
        50.0f64..500.0,
        0.0f64..5.0,
        500.0f64..5000.0,
        "[a-zA-Z ]{5,40}",
    )
        .prop_map(
            |(airline, price, layovers, name, price_per_night, rating, total_price, reasoning)| {
                TripBundle {
                    flight: FlightOffer {
                        airline,
                        price,
                        departure: None,
                        arrival: None,
                        layovers,
                        legs: None,
                        via: None,
                    },
                    hotel: HotelOffer {
                        name,
                        price_per_night,
                        rating,
                        distance_km: None,
                    },
                    car_rental: None,
                    total_price,
                    score: None,
                    reasoning,
                }
            },
        )
}

fn arb_visa_info() -> impl Strategy<Value = VisaInfo> {
    ("[A-Z][a-z]{3,10}", "[A-Z][a-z]{3,10}", any::<bool>()).prop_map(
        |(destination, nationality, visa_required)| VisaInfo {
            destination,
            nationality,
            visa_required,
            visa_type: None,
            passport_validity: None,
            notes: None,
        },
    )
}

#[derive(Debug, Clone)]
enum StoreOp {
    Push(Message),
    ReplaceExtraction(Option<TripExtraction>),
    ReplaceRecommendations(Vec<TripBundle>),
    ReplaceVisaInfo(Option<VisaInfo>),
    SetBusy(bool),
    SetError(Option<String>),
}

fn arb_store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        arb_message().prop_map(StoreOp::Push),
        proptest::option::of(arb_extraction()).prop_map(StoreOp::ReplaceExtraction),
        proptest::collection::vec(arb_bundle(), 0..3).prop_map(StoreOp::ReplaceRecommendations),
        proptest::option::of(arb_visa_info()).prop_map(StoreOp::ReplaceVisaInfo),
        any::<bool>().prop_map(StoreOp::SetBusy),
        proptest::option::of("[a-z ]{1,20}").prop_map(StoreOp::SetError),
    ]
}

fn apply(store: &SessionStore, op: StoreOp) {
    match op {
        StoreOp::Push(message) => store.push_message(message),
        StoreOp::ReplaceExtraction(extraction) => store.replace_extraction(extraction),
        StoreOp::ReplaceRecommendations(recs) => store.replace_recommendations(recs),
        StoreOp::ReplaceVisaInfo(info) => store.replace_visa_info(info),
        StoreOp::SetBusy(busy) => store.set_busy(busy),
        StoreOp::SetError(error) => store.set_error(error),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    // Invariant 1: The log is append-only and insertion-ordered
    #[test]
    fn prop_push_extends_log_without_rewriting_history(
        messages in proptest::collection::vec(arb_message(), 1..8)
    ) {
        let mut state = SessionState::new();
        for message in messages {
            let before = state.messages.clone();
            state.push_message(message.clone());
            prop_assert_eq!(state.messages.len(), before.len() + 1);
            prop_assert_eq!(&state.messages[..before.len()], &before[..]);
            prop_assert_eq!(state.messages.last(), Some(&message));
        }
    }

    // Invariant 2: Non-log operations never touch the log
    #[test]
    fn prop_non_log_ops_leave_the_log_alone(
        seed in proptest::collection::vec(arb_message(), 0..4),
        ops in proptest::collection::vec(arb_store_op(), 0..12)
    ) {
        let store = SessionStore::new();
        for message in seed {
            store.push_message(message);
        }
        let log = store.snapshot().messages;

        for op in ops {
            if matches!(op, StoreOp::Push(_)) {
                continue;
            }
            apply(&store, op);
            prop_assert_eq!(&store.snapshot().messages, &log);
        }
    }

    // Invariant 3: Reset restores the construction-time state from anywhere
    #[test]
    fn prop_reset_restores_the_initial_state(
        ops in proptest::collection::vec(arb_store_op(), 0..16)
    ) {
        let store = SessionStore::new();
        let initial = store.snapshot();

        for op in ops {
            apply(&store, op);
        }
        store.reset();

        prop_assert_eq!(store.snapshot(), initial);
    }

    // Invariant 4: Replacement is wholesale, so the latest set wins outright
    #[test]
    fn prop_latest_recommendation_set_wins(
        sets in proptest::collection::vec(proptest::collection::vec(arb_bundle(), 0..3), 1..5)
    ) {
        let store = SessionStore::new();
        let last = sets.last().cloned().unwrap();

        for set in sets {
            store.replace_recommendations(set);
        }

        prop_assert_eq!(store.snapshot().recommendations, last);
    }

    // Invariant 5: The busy flag and the error slot are independent
    #[test]
    fn prop_busy_and_error_slots_are_independent(
        busy in any::<bool>(),
        error in proptest::option::of("[a-z ]{1,20}")
    ) {
        let mut state = SessionState::new();

        state.set_busy(busy);
        state.set_error(error.clone());
        prop_assert_eq!(state.busy, busy);
        prop_assert_eq!(&state.error, &error);

        state.set_busy(!busy);
        prop_assert_eq!(&state.error, &error);
    }
}
