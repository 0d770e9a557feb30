use reqwest::Client;

/// HTTP client for catalog calls
///
/// Idle connections are not pooled: every call opens its own connection and
/// releases it when the response is consumed. Timeouts are applied per call.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .pool_max_idle_per_host(0)
        .tcp_nodelay(true)
        .user_agent(concat!("airwave/", env!("CARGO_PKG_VERSION")))
        .build()
}
