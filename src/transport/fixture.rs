//! Fixture transport for development without a backend
//!
//! Serves one of two canned responses after a simulated network delay: a
//! "missing fields" reply that asks follow-up questions, or a "complete"
//! reply carrying two recommendation bundles. Which one is picked depends
//! on whether the outgoing text names an origin ("from") together with
//! something that reads like a date.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;

use super::wire::{self, ChatResponse};
use super::{ChatTransport, TransportError};
use crate::trip::{CarRentalOffer, TripExtraction};

/// A token that reads like a travel date: a month name, an ISO date, or the
/// word "date(s)" itself.
static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(january|february|march|april|may|june|july|august|september|october|november|december|dates?|\d{4}-\d{2}-\d{2})\b",
    )
    .expect("date token pattern compiles")
});

/// Canned-response transport with a fixed simulated delay
pub struct FixtureTransport {
    delay: Duration,
}

impl FixtureTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ChatTransport for FixtureTransport {
    async fn send(&self, message: &str) -> Result<ChatResponse, TransportError> {
        tokio::time::sleep(self.delay).await;

        let response = if wants_recommendations(message) {
            tracing::debug!(fixture = "complete", "serving canned response");
            complete_response()
        } else {
            tracing::debug!(fixture = "missing_fields", "serving canned response");
            missing_fields_response()
        };

        Ok(response)
    }

    fn describe(&self) -> &str {
        "fixtures"
    }
}

fn wants_recommendations(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("from") && DATE_TOKEN.is_match(&lower)
}

fn missing_fields_response() -> ChatResponse {
    let missing = vec![
        "origin".to_string(),
        "start_date".to_string(),
        "end_date".to_string(),
        "travelers".to_string(),
    ];

    ChatResponse {
        message: "I'd love to help you plan your trip! To find the best options, \
                  I need a few more details:\n\n• Where are you traveling from?\n\
                  • What dates are you planning to travel?\n• How many travelers?"
            .to_string(),
        recommendations: None,
        extracted_data: Some(TripExtraction {
            origin: None,
            destination: Some("Paris".to_string()),
            start_date: None,
            end_date: None,
            travelers: None,
            budget: None,
            nationality: None,
            reply_message: None,
            missing_fields: missing.clone(),
        }),
        missing_fields: Some(missing),
        visa_info: None,
    }
}

fn complete_response() -> ChatResponse {
    ChatResponse {
        message: "Great news! I found 2 excellent options for your trip to Paris. \
                  Here are my top recommendations:"
            .to_string(),
        recommendations: Some(vec![
            wire::TripBundle {
                flight: wire::FlightOffer {
                    airline: "Ethiopian Airlines".to_string(),
                    price: 850.0,
                    departure: Some("2024-01-15T08:00:00".to_string()),
                    arrival: Some("2024-01-15T14:00:00".to_string()),
                    layovers: Some(0),
                    legs: None,
                    via: None,
                },
                hotel: wire::HotelOffer {
                    name: "Hilton Paris Opera".to_string(),
                    price_per_night: 220.0,
                    rating: Some(4.5),
                    distance_km: Some(1.2),
                },
                car_rental: Some(CarRentalOffer {
                    company: "Europcar".to_string(),
                    car_type: "Compact".to_string(),
                    price_per_day: 45.0,
                    rating: Some(4.2),
                }),
                total_price: 1950.0,
                score: None,
                reasoning: "Best value option with direct flight and centrally \
                            located 4.5-star hotel."
                    .to_string(),
            },
            wire::TripBundle {
                flight: wire::FlightOffer {
                    airline: "Air France".to_string(),
                    price: 1200.0,
                    departure: Some("2024-01-15T10:00:00".to_string()),
                    arrival: Some("2024-01-15T15:30:00".to_string()),
                    layovers: Some(0),
                    legs: None,
                    via: None,
                },
                hotel: wire::HotelOffer {
                    name: "Le Bristol Paris".to_string(),
                    price_per_night: 450.0,
                    rating: Some(5.0),
                    distance_km: Some(0.8),
                },
                car_rental: None,
                total_price: 3450.0,
                score: None,
                reasoning: "Premium luxury option with 5-star hotel on Rue du \
                            Faubourg Saint-Honoré."
                    .to_string(),
            },
        ]),
        extracted_data: Some(TripExtraction {
            origin: Some("ADD".to_string()),
            destination: Some("CDG".to_string()),
            start_date: Some("2024-01-15".to_string()),
            end_date: Some("2024-01-20".to_string()),
            travelers: Some(2),
            budget: Some(3000.0),
            nationality: None,
            reply_message: None,
            missing_fields: Vec::new(),
        }),
        missing_fields: None,
        visa_info: None,
    }
}
