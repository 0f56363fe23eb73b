//! Wayfarer - travel planning chat client
//!
//! A terminal front end for the trip assistant service: describe the trip
//! you want, get back ranked flight+hotel bundles, the assistant's
//! structured reading of your request, and visa guidance.

mod config;
mod engine;
mod normalize;
mod session;
mod transport;
mod trip;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::EngineConfig;
use engine::ChatEngine;
use session::{Message, Role, SessionState};
use transport::{ChatTransport, FixtureTransport, HttpTransport, LoggingTransport};
use trip::TripBundle;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stderr keeps the conversation on stdout clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfarer=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let config = EngineConfig::from_env();

    // Transport selection happens here and nowhere else; the engine only
    // ever sees the trait.
    let transport: Arc<dyn ChatTransport> = if config.use_fixtures {
        tracing::info!(
            delay_ms = %config.fixture_delay.as_millis(),
            "using fixture transport"
        );
        Arc::new(FixtureTransport::new(config.fixture_delay))
    } else {
        let http = HttpTransport::new(&config.api_url, config.http_timeout);
        if !http.health_check().await {
            tracing::warn!(
                url = %config.api_url,
                "assistant service not reachable; messages will fail until it is"
            );
        }
        Arc::new(http)
    };
    let transport = Arc::new(LoggingTransport::new(transport));

    let engine = Arc::new(ChatEngine::new(transport));

    // Render the welcome immediately, then follow published changes.
    let mut seen = 0usize;
    render_new_messages(&engine.state(), &mut seen);

    let render_engine = engine.clone();
    tokio::spawn(async move {
        let mut stream = WatchStream::new(render_engine.subscribe());
        while let Some(state) = stream.next().await {
            render_new_messages(&state, &mut seen);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => engine.reset(),
            _ => engine.send_message(&line).await,
        }
    }

    Ok(())
}

/// Print every message the session gained since the last call.
fn render_new_messages(state: &SessionState, seen: &mut usize) {
    // A shrinking log means the session was reset; render it afresh.
    if state.messages.len() < *seen {
        *seen = 0;
    }

    let fresh = &state.messages[*seen..];
    for message in fresh {
        render_message(message);
    }
    if !fresh.is_empty() {
        if let Some(error) = &state.error {
            println!("  (error: {error})");
        }
    }

    *seen = state.messages.len();
}

fn render_message(message: &Message) {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
        Role::System => "system",
    };
    println!("\n[{speaker}] {}", message.content);

    if let Some(bundles) = &message.recommendations {
        for (index, bundle) in bundles.iter().enumerate() {
            render_bundle(index, bundle);
        }
    }
    if let Some(extraction) = &message.extraction {
        if !extraction.is_complete() {
            println!("  still needed: {}", extraction.missing_fields.join(", "));
        }
    }
    if let Some(visa) = &message.visa_info {
        let requirement = if visa.visa_required {
            "required"
        } else {
            "not required"
        };
        match &visa.visa_type {
            Some(kind) => println!("  visa for {}: {requirement} ({kind})", visa.destination),
            None => println!("  visa for {}: {requirement}", visa.destination),
        }
    }
}

fn render_bundle(index: usize, bundle: &TripBundle) {
    println!(
        "  {}. {} (${:.0}) + {} (${:.0}/night, {:.1}★) = ${:.0} total",
        index + 1,
        bundle.flight.airline,
        bundle.flight.price,
        bundle.hotel.name,
        bundle.hotel.price_per_night,
        bundle.hotel.rating,
        bundle.total_price
    );
    match (bundle.flight.layovers, &bundle.flight.via) {
        (0, _) => println!("     direct flight"),
        (stops, Some(via)) => println!("     {stops} stop(s) via {via}"),
        (stops, None) => println!("     {stops} stop(s)"),
    }
    if let Some(car) = &bundle.car_rental {
        println!(
            "     car: {} {} (${:.0}/day)",
            car.company, car.car_type, car.price_per_day
        );
    }
    println!("     {}", bundle.reasoning);
}
