//! Live call event stream (SSE)
//!
//! Fans out the raw webhook payloads published on the broadcast hub.
//! The SSE event name is the publish channel ("plivo_call" or
//! "websprix_call"); the data is the raw payload JSON.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/telephony/events", get(stream_events))
}

/// Subscribe to live call events
pub async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.hub.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| {
        // A lagged subscriber just misses events; the stream continues.
        event.ok().map(|e| {
            Ok::<_, Infallible>(
                Event::default()
                    .event(e.channel)
                    .data(e.payload.to_string()),
            )
        })
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
