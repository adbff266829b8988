use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use crate::{api, prelude::*};

#[derive(Parser)]
pub struct ServeArgs {
    #[clap(long, default_value = "0.0.0.0:8888", env = "BIND_ADDRESS")]
    bind_address: String,

    /// Abort requests that take longer than this.
    #[clap(long, default_value = "10s", env = "REQUEST_TIMEOUT")]
    request_timeout: humantime::Duration,
}

impl ServeArgs {
    #[instrument(skip_all, fields(bind_address = self.bind_address))]
    pub async fn run(self) -> Result {
        let listener = TcpListener::bind(&self.bind_address)
            .await
            .with_context(|| format!("failed to bind to `{}`", self.bind_address))?;
        let request_timeout: Duration = self.request_timeout.into();
        info!(?request_timeout, "serving…");
        axum::serve(listener, api::router(request_timeout))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("the server has failed")?;
        info!("shut down");
        Ok(())
    }
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down…");
}
