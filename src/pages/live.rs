use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::server::AppState;
use crate::ui::{FilterField, FilterState, ListSettings, ListState, ListView};
use super::list::{render_genre_options, render_results};

/// A filter edit sent by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LiveInput {
    pub field: FilterField,
    pub value: String,
}

/// Re-rendered fragments pushed after every state change.
#[derive(Debug, Clone, Serialize)]
pub struct LiveUpdate {
    pub results: String,
    pub genres: String,
}

impl LiveUpdate {
    pub fn from_state(state: &ListState, eager: usize) -> Self {
        Self {
            results: render_results(state, eager),
            genres: render_genre_options(state),
        }
    }
}

pub async fn live_list(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(filters): Query<FilterState>,
) -> Response {
    let session = uuid::Uuid::new_v4();
    ws.on_upgrade(move |socket| {
        run_session(socket, state, filters).instrument(info_span!("live", %session))
    })
}

async fn run_session(mut socket: WebSocket, state: AppState, filters: FilterState) {
    info!("Live session opened");

    let settings = ListSettings {
        debounce: state.config.ui.debounce(),
        limit: state.config.ui.result_limit,
    };
    let eager = state.config.ui.eager_posters;
    let mut view = ListView::mount(state.api.clone(), filters, settings);
    let mut updates = view.subscribe();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let update = LiveUpdate::from_state(&updates.borrow_and_update(), eager);
                let text = match serde_json::to_string(&update) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("Failed to encode live update: {}", e);
                        continue;
                    }
                };
                if socket.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            msg = socket.recv() => match msg {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<LiveInput>(&text) {
                    Ok(input) => view.set_filter(input.field, input.value),
                    Err(e) => warn!("Ignoring malformed live message: {}", e),
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!("Live socket error: {}", e);
                    break;
                }
            },
        }
    }

    drop(view);
    info!("Live session closed");
}
