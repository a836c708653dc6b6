use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_stream::stream;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::post,
};
use serde::de::DeserializeOwned;
use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::error::ApiError;
use crate::models::{CommentsRequest, CommentsResponse, EmailDraft, EmailReplyResponse};
use crate::reveal::reveal;
use crate::synthesizer::Synthesizer;

const COMMENTS_FAILED: &str = "Failed to generate comments";
const REPLY_FAILED: &str = "Failed to generate response";

/// HTTP front for a [`Synthesizer`].
pub struct Server {
    synth: Arc<Synthesizer>,
    reveal_delay: Duration,
}

fn parse<T: DeserializeOwned>(body: &Bytes, public: &'static str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::internal(public, e))
}

impl Server {
    pub fn new(synth: Arc<Synthesizer>, reveal_delay: Duration) -> Self {
        Self {
            synth,
            reveal_delay,
        }
    }

    /// Build a router exposing the generation endpoints.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/api/generate-comments", post(generate_comments))
            .route("/api/generate-comments/stream", post(stream_comments))
            .route("/api/generate-email-response", post(generate_email_response))
            .with_state(self)
    }
}

async fn generate_comments(
    State(server): State<Arc<Server>>,
    body: Bytes,
) -> Result<Json<CommentsResponse>, ApiError> {
    let req: CommentsRequest = parse(&body, COMMENTS_FAILED)?;
    let comments = server.synth.comments(req.post.as_deref()).await?;
    Ok(Json(CommentsResponse { comments }))
}

async fn stream_comments(
    State(server): State<Arc<Server>>,
    body: Bytes,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let req: CommentsRequest = parse(&body, COMMENTS_FAILED)?;
    let comments = server.synth.comments(req.post.as_deref()).await?;
    let delay = server.reveal_delay;
    let events = stream! {
        let revealed = reveal(comments, delay);
        tokio::pin!(revealed);
        while let Some(comment) = revealed.next().await {
            yield Event::default().event("comment").json_data(&comment);
        }
        yield Ok(Event::default().event("done").data("[DONE]"));
    };
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

async fn generate_email_response(
    State(server): State<Arc<Server>>,
    body: Bytes,
) -> Result<Json<EmailReplyResponse>, ApiError> {
    let draft: EmailDraft = parse(&body, REPLY_FAILED)?;
    let response = server.synth.email_reply(&draft).await?;
    Ok(Json(EmailReplyResponse { response }))
}

/// Serves `server` on `addr` until `shutdown` resolves.
pub async fn serve(
    server: Arc<Server>,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving generation endpoints");
    axum::serve(listener, server.router())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
