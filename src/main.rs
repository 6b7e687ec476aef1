//! Demo binary: starts the Villa system and walks a few requests through the dispatcher.

use resource_actor::tracing::setup_tracing;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, Instrument};
use villa_api::api::{Dispatcher, VillaRequest};
use villa_api::config::VillaConfig;
use villa_api::lifecycle::VillaSystem;
use villa_api::logging::TracingSink;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = VillaConfig::from_env()?;
    info!("Starting villa API demo");
    let system = VillaSystem::start(config, Arc::new(TracingSink))?;

    let dispatcher = system.dispatcher();
    let span = tracing::info_span!("demo_requests");
    run_requests(dispatcher).instrument(span).await;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

/// Takes the dispatcher by value so its client handle is gone before shutdown.
async fn run_requests(dispatcher: Dispatcher) {
    let requests = [
        VillaRequest::Create {
            body: json!({"name": "Pool View", "occupancy": 4, "squareFootage": 750}),
        },
        VillaRequest::Create {
            body: json!({"name": "Lake House", "occupancy": 6, "squareFootage": 1200}),
        },
        VillaRequest::Create {
            body: json!({"name": "pool view", "occupancy": 2, "squareFootage": 300}),
        },
        VillaRequest::PartialUpdate {
            id: 2,
            document: json!([{"op": "replace", "path": "/occupancy", "value": 10}]),
        },
        VillaRequest::PartialUpdate {
            id: 2,
            document: json!([{"op": "replace", "path": "/name", "value": ""}]),
        },
        VillaRequest::Update {
            id: 1,
            body: json!({"id": 7, "name": "Pool View", "occupancy": 4, "squareFootage": 750}),
        },
        VillaRequest::Get { id: 0 },
        VillaRequest::Get { id: 2 },
        VillaRequest::Delete { id: 1 },
        VillaRequest::List,
    ];

    for request in requests {
        let description = format!("{request:?}");
        let response = dispatcher.dispatch(request).await;
        let body = response
            .body
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        if response.status.is_success() {
            info!(status = response.status.code(), %body, request = %description, "Handled");
        } else {
            error!(status = response.status.code(), %body, request = %description, "Rejected");
        }
    }
}
