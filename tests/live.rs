mod common;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use cinelist::api::ApiClient;
use cinelist::config::Config;
use cinelist::pages::list::NO_MATCHES_MESSAGE;
use cinelist::server::{build_router, AppState};

use common::{api_config, start_backend, MockBackend};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const DEBOUNCE_MS: u64 = 50;

struct LiveServer {
    socket: Socket,
    handle: JoinHandle<()>,
}

impl Drop for LiveServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn open_session(backend: &MockBackend) -> LiveServer {
    let mut config = Config::default();
    config.api = api_config(Some(&backend.base_url));
    config.ui.debounce_ms = DEBOUNCE_MS;
    let api = Arc::new(ApiClient::new(&config.api).unwrap());
    let app = build_router(AppState::new(config, api, Vec::new()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (socket, _) = connect_async(format!("ws://{}/live", addr)).await.unwrap();
    LiveServer { socket, handle }
}

async fn send_edit(socket: &mut Socket, field: &str, value: &str) {
    let edit = serde_json::json!({ "field": field, "value": value }).to_string();
    socket.send(Message::Text(edit)).await.unwrap();
}

/// Reads pushed updates until one whose results fragment satisfies `done`.
async fn wait_for(socket: &mut Socket, done: impl Fn(&str) -> bool) -> Value {
    let read = async {
        loop {
            match socket.next().await {
                Some(Ok(Message::Text(text))) => {
                    let update: Value = serde_json::from_str(&text).unwrap();
                    if done(update["results"].as_str().unwrap()) {
                        return update;
                    }
                }
                Some(Ok(_)) => {}
                other => panic!("live socket ended: {:?}", other),
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), read)
        .await
        .expect("no matching live update")
}

#[tokio::test]
async fn live_session_pushes_results_for_each_edit() {
    let backend = start_backend().await;
    let mut live = open_session(&backend).await;

    let update = wait_for(&mut live.socket, |r| r.contains("Heat (1995)")).await;
    assert!(update["genres"].as_str().unwrap().contains(r#"<option value="Drama">"#));
    assert_eq!(backend.movie_queries(), vec!["limit=250".to_string()]);

    send_edit(&mut live.socket, "search", "nothing").await;
    let update = wait_for(&mut live.socket, |r| r.contains(NO_MATCHES_MESSAGE)).await;
    assert!(!update["results"].as_str().unwrap().contains("Heat"));
    assert_eq!(
        backend.movie_queries().last().map(String::as_str),
        Some("limit=250&search=nothing")
    );
}

#[tokio::test]
async fn live_session_skips_malformed_messages() {
    let backend = start_backend().await;
    let mut live = open_session(&backend).await;
    wait_for(&mut live.socket, |r| r.contains("Heat (1995)")).await;

    live.socket.send(Message::Text("not json".to_string())).await.unwrap();
    send_edit(&mut live.socket, "year", "1994").await;
    send_edit(&mut live.socket, "search", "fail").await;

    wait_for(&mut live.socket, |r| {
        r.contains("Error: Request failed with status code 500")
    })
    .await;
    let queries = backend.movie_queries();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[1], "limit=250&search=fail");
}

#[tokio::test]
async fn closing_the_socket_cancels_pending_fetches() {
    let backend = start_backend().await;
    let mut live = open_session(&backend).await;
    wait_for(&mut live.socket, |r| r.contains("Heat (1995)")).await;

    send_edit(&mut live.socket, "search", "late").await;
    live.socket.close(None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS * 6)).await;
    let queries = backend.movie_queries();
    assert_eq!(queries, vec!["limit=250".to_string()]);
}
