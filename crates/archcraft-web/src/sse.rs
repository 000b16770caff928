//! `/api/events`: panel changes pushed to the browser as named SSE events.
//!
//! Each [`AppEvent`] is sent with its `type` tag as the SSE event name and the
//! full JSON as data, so a page can `addEventListener("project_created", ..)`.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::{AppEvent, SharedState};

const KEEP_ALIVE: Duration = Duration::from_secs(15);

pub async fn events(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.subscribe()).filter_map(|received| match received {
        Ok(event) => to_sse_event(&event).map(Ok),
        Err(BroadcastStreamRecvError::Lagged(missed)) => {
            tracing::debug!("SSE client lagged, {} events dropped", missed);
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(KEEP_ALIVE).text("ping"))
}

fn to_sse_event(event: &AppEvent) -> Option<Event> {
    match serde_json::to_string(event) {
        Ok(data) => Some(Event::default().event(event.kind()).data(data)),
        Err(e) => {
            tracing::warn!("Dropping {} event: {}", event.kind(), e);
            None
        }
    }
}
