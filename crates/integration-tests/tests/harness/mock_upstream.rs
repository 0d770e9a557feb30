//! Mock Spotify and `ElevenLabs` backends for integration tests
//!
//! One axum server answers both APIs:
//! - `POST /api/token` (Spotify accounts)
//! - `GET /v1/tracks/{id}`, `GET /v1/audio-features/{id}` (Spotify Web API)
//! - `POST /v1/text-to-speech/{voice_id}`, `GET /v1/voices` (`ElevenLabs`)
//!
//! Every endpoint can be switched to a failure status, and token and
//! synthesis requests are captured for inspection.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Audio bytes returned by the synthesis endpoint
pub const MOCK_AUDIO: &[u8] = b"ID3\x04\x00mock-mpeg-frames";

/// Access token handed out by the token endpoint
pub const MOCK_TOKEN: &str = "mock-access-token";

/// Failure and latency switches for the mock endpoints
#[derive(Debug, Clone, Default)]
pub struct MockBehavior {
    pub token_status: Option<u16>,
    pub track_status: Option<u16>,
    pub features_status: Option<u16>,
    pub tts_status: Option<u16>,
    pub voices_status: Option<u16>,
    /// Body returned with a failure status
    pub error_body: Option<String>,
    pub token_delay: Option<Duration>,
}

/// A request as the mock received it
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("captured body is JSON")
    }
}

/// Mock upstream server
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: MockBehavior,
    token_requests: Mutex<Vec<CapturedRequest>>,
    tts_requests: Mutex<Vec<CapturedRequest>>,
    catalog_requests: Mutex<Vec<CapturedRequest>>,
    voices_count: AtomicU32,
}

impl MockUpstream {
    /// Start a mock where every endpoint succeeds
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(MockBehavior::default()).await
    }

    /// Start a mock with the given failure switches
    pub async fn start_with(behavior: MockBehavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            token_requests: Mutex::new(Vec::new()),
            tts_requests: Mutex::new(Vec::new()),
            catalog_requests: Mutex::new(Vec::new()),
            voices_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/api/token", routing::post(handle_token))
            .route("/v1/tracks/{id}", routing::get(handle_track))
            .route("/v1/audio-features/{id}", routing::get(handle_features))
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_tts))
            .route("/v1/voices", routing::get(handle_voices))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// `ElevenLabs` base URL, including `/v1`
    pub fn speech_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Spotify accounts token endpoint
    pub fn token_url(&self) -> String {
        format!("http://{}/api/token", self.addr)
    }

    /// Spotify Web API base URL, including `/v1`
    pub fn catalog_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn token_requests(&self) -> Vec<CapturedRequest> {
        self.state.token_requests.lock().unwrap().clone()
    }

    pub fn tts_requests(&self) -> Vec<CapturedRequest> {
        self.state.tts_requests.lock().unwrap().clone()
    }

    pub fn catalog_requests(&self) -> Vec<CapturedRequest> {
        self.state.catalog_requests.lock().unwrap().clone()
    }

    pub fn voices_count(&self) -> u32 {
        self.state.voices_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn capture(uri: &Uri, headers: HeaderMap, body: Bytes) -> CapturedRequest {
    CapturedRequest {
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        headers,
        body,
    }
}

fn failure(state: &MockState, status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = state
        .behavior
        .error_body
        .clone()
        .unwrap_or_else(|| format!("mock failure {}", status.as_u16()));

    (status, body).into_response()
}

// -- Spotify --

async fn handle_token(State(state): State<Arc<MockState>>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    state.token_requests.lock().unwrap().push(capture(&uri, headers, body));

    if let Some(delay) = state.behavior.token_delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(status) = state.behavior.token_status {
        return failure(&state, status);
    }

    Json(serde_json::json!({
        "access_token": MOCK_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

async fn handle_track(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.catalog_requests.lock().unwrap().push(capture(&uri, headers, Bytes::new()));

    if let Some(status) = state.behavior.track_status {
        return failure(&state, status);
    }

    Json(serde_json::json!({
        "id": id,
        "name": "Wonderwall",
        "artists": [{"name": "Oasis"}, {"name": "Someone Else"}],
        "album": {
            "name": "(What's the Story) Morning Glory?",
            "release_date": "1995-10-02"
        },
        "popularity": 80
    }))
    .into_response()
}

async fn handle_features(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.catalog_requests.lock().unwrap().push(capture(&uri, headers, Bytes::new()));

    if let Some(status) = state.behavior.features_status {
        return failure(&state, status);
    }

    Json(serde_json::json!({
        "id": id,
        "energy": 0.8,
        "valence": 0.2,
        "danceability": 0.3,
        "tempo": 87.0
    }))
    .into_response()
}

// -- ElevenLabs --

async fn handle_tts(State(state): State<Arc<MockState>>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    state.tts_requests.lock().unwrap().push(capture(&uri, headers, body));

    if let Some(status) = state.behavior.tts_status {
        return failure(&state, status);
    }

    ([(axum::http::header::CONTENT_TYPE, "audio/mpeg")], MOCK_AUDIO).into_response()
}

async fn handle_voices(State(state): State<Arc<MockState>>) -> Response {
    state.voices_count.fetch_add(1, Ordering::Relaxed);

    if let Some(status) = state.behavior.voices_status {
        return failure(&state, status);
    }

    Json(serde_json::json!({
        "voices": [
            {"voice_id": "narrator-voice", "name": "Narrator", "category": "premade"},
            {"voice_id": "other-voice", "name": "Other", "category": "cloned"}
        ]
    }))
    .into_response()
}
