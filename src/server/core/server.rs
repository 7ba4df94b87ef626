use log::{error, info};
use tokio::signal;

use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::utils::error::BoxResult;

/// Serve the output directory until Ctrl+C
pub async fn serve(server_config: &ServerConfig) -> BoxResult<()> {
    let addr = server_config.socket_addr()?;
    let app = create_app(server_config.root.clone());

    info!("Serving {} at {}", server_config.root.display(), server_config.url());
    let server = axum_server::bind(addr).serve(app.into_make_service());

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}
