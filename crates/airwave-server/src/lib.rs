//! Router assembly and the HTTP listener

mod cors;
mod health;

use std::{net::SocketAddr, sync::Arc};

use airwave_config::Config;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use health::HealthSnapshot;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the speech or catalog clients cannot be constructed
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address();

        let catalog = catalog::build_catalog(&config)?;
        let speech_state = speech::build_server(&config)?;
        let intro_state = intro::build_server(&config, catalog, Arc::clone(&speech_state));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            let snapshot = Arc::new(HealthSnapshot::from_config(&config));
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler).with_state(snapshot),
            );
        }

        // Speech routes
        app = app.merge(speech::endpoint_router().with_state(speech_state));

        // Intro routes
        app = app.merge(intro::endpoint_router().with_state(intro_state));

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());
        app = app.layer(cors::cors_layer(&config.server.cors));

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
