mod config;
mod page;
mod server;
mod status;
mod timing;

use std::{path::PathBuf, sync::Arc};

use config::{Config, CONFIG_ENV, DEFAULT_CONFIG_PATH};
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use server::server::Server;
use status::board::StatusBoard;
use timing::clock::ZonedClock;
use tokio::net::TcpListener;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_status=info".into()),
        )
        .init();

    let config_path = std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)?;

    let board = Arc::new(StatusBoard::new(Arc::new(ZonedClock::new())));
    tracing::info!("Store status: {}", board.current().text());
    let server = Server::setup(board.clone(), config.whatsapp_number.clone());

    tokio::spawn(board.run(config.refresh_interval()));

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    loop {
        let (stream, _) = match listener.accept().await {
            Ok(connection) => connection,
            Err(err) => {
                tracing::error!("Could not accept connection: {}", err);
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let server_clone = server.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, server_clone)
                .await
            {
                tracing::error!("{}", err);
            }
        });
    }
}
