// HTTP server lifecycle: bind, serve in the background, shut down gracefully.

use std::net::SocketAddr;

use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::handler::{AppState, router};

/// Handle to a running evaluation server.
pub struct EvaluationServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl EvaluationServer {
    /// Bind `addr` and start serving, returning a handle.
    ///
    /// Bind to port 0 to let the OS pick a free port; read it back with
    /// [`local_addr`](Self::local_addr).
    pub async fn start(addr: impl ToSocketAddrs, state: AppState) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = router(state);

        let task = tokio::spawn(async move {
            let served = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = served {
                error!(error = %e, "evaluation server stopped with error");
            }
        });

        info!(%addr, "evaluation server listening");

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }

    /// Address the server is listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build an absolute URL for `path` on this server.
    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            error!(error = %e, "evaluation server task failed");
        }
        info!(addr = %self.addr, "evaluation server stopped");
    }
}
