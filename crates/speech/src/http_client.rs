use axum::http;
use reqwest::Client;

/// HTTP client for speech provider calls
///
/// Keeps no idle connections, so each call uses a fresh connection that is
/// released on completion. Timeouts are set per call by the provider.
pub fn http_client() -> reqwest::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::ACCEPT, http::HeaderValue::from_static("audio/mpeg"));

    Client::builder()
        .pool_max_idle_per_host(0)
        .tcp_nodelay(true)
        .user_agent(concat!("airwave/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
}
