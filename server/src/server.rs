//! axumサーバー起動・シャットダウンハンドリング

use crate::shutdown::ShutdownController;
use crate::AppState;
use axum::Router;
use mergington_activities_common::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

/// 設定に従ってバインドし、シャットダウンシグナルまでサーバーを実行する
pub async fn run(state: AppState, config: &ServerConfig) -> std::io::Result<()> {
    let shutdown = state.shutdown.clone();
    let app = crate::api::create_app(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %listener.local_addr()?,
        static_dir = %config.static_dir.display(),
        "Activities server listening"
    );

    serve(listener, app, shutdown_signal(shutdown)).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// バインド済みリスナーでアプリケーションを提供する
///
/// `signal` が完了するとグレースフルシャットダウンする。
pub async fn serve<F>(listener: TcpListener, app: Router, signal: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
}

/// シャットダウンシグナルを待機
///
/// Ctrl+C、SIGTERM、または `ShutdownController::request` のいずれか。
pub async fn shutdown_signal(shutdown: ShutdownController) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.wait() => {
            info!("Shutdown requested, shutting down...");
        }
    }
}
