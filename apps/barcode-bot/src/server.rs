//! # HTTP Server
//!
//! One axum router serves both the keep-alive page and the interactions
//! endpoint Discord posts slash commands to.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /              → "Sainsbury's Discord Bot is running!"           │
//! │  GET  /health        → {"status":"ok"}                                 │
//! │  POST /interactions  → verify signature → parse → PONG | dispatch      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::commands::Invocation;
use crate::error::BotError;
use crate::interaction::{Interaction, InteractionResponse, InteractionType};
use crate::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::AppContext;

pub const KEEP_ALIVE_MESSAGE: &str = "Sainsbury's Discord Bot is running!";

/// Builds the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(keep_alive))
        .route("/health", get(health))
        .route("/interactions", post(interactions))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn keep_alive() -> &'static str {
    KEEP_ALIVE_MESSAGE
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, BotError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| BotError::InvalidSignature(format!("missing {name} header")))
}

async fn interactions(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, BotError> {
    let signature = header(&headers, SIGNATURE_HEADER)?;
    let timestamp = header(&headers, TIMESTAMP_HEADER)?;
    ctx.verifier.verify(timestamp, &body, signature)?;

    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| BotError::MalformedInteraction(e.to_string()))?;

    debug!(interaction_id = %interaction.id, kind = ?interaction.kind, "Interaction received");

    match interaction.kind {
        InteractionType::Ping => Ok(Json(InteractionResponse::pong())),
        InteractionType::ApplicationCommand => {
            let invocation = Invocation::from_interaction(interaction)?;
            let reply = ctx.dispatcher.respond(&invocation);
            Ok(Json(InteractionResponse::message(reply.embed, reply.ephemeral)))
        }
        InteractionType::Other(kind) => Err(BotError::MalformedInteraction(format!(
            "unsupported interaction type {kind}"
        ))),
    }
}
