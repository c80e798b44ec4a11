use crate::adapters::http::{build_router, AppState};
use crate::core::calculator::CompoundInterestCalculator;
use crate::domain::ports::{Calculator, ConfigProvider};
use crate::utils::error::Result;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct ApiServer<C: ConfigProvider> {
    config: C,
    calculator: Arc<dyn Calculator>,
}

impl<C: ConfigProvider + 'static> ApiServer<C> {
    pub fn new(config: C) -> Self {
        Self::with_calculator(config, Arc::new(CompoundInterestCalculator::new()))
    }

    pub fn with_calculator(config: C, calculator: Arc<dyn Calculator>) -> Self {
        Self { config, calculator }
    }

    pub fn router(&self) -> Router {
        build_router(AppState::new(
            self.calculator.clone(),
            self.config.error_status(),
        ))
    }

    /// 綁定設定中的位址並服務，直到收到 Ctrl-C 或 SIGTERM
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr).await?;

        self.serve(listener, shutdown_signal()).await
    }

    /// 在既有的 listener 上服務，`shutdown` 完成後優雅關閉
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();

        tracing::info!(
            "🚀 Server running on {} (error status policy: {:?})",
            listener.local_addr()?,
            self.config.error_status()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
