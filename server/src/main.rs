use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{shutdown, telemetry, Config, TodoStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();
    telemetry::init(&config.log_filter);

    let listener = TcpListener::bind(config.addr()).await?;
    let store = Arc::new(TodoStore::new(config.id_policy));
    todo_server::run_until(listener, store, shutdown::signal()).await
}
