use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use futures_util::future::select_all;
use justsayit::utils::{print_err, ResultExt as _};
use justsayit::{logging, start_server, ServerOptions};
use log::{debug, info};
use tokio::signal;

type SignalFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

async fn terminate_on_signal() -> Result<()> {
    let interrupt_signal: SignalFuture = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::interrupt())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    let terminate_signal: SignalFuture = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    select_all([interrupt_signal, terminate_signal]).await.0
}

async fn run() -> Result<()> {
    let options = ServerOptions::from_env()?;
    debug!("{options:?}");
    let server = start_server(options)
        .await
        .context("Failed to start server")?;

    terminate_on_signal().await.print_err();
    info!("Terminating.");
    server.stop().await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let logger = logging::init();
    if let Err(e) = run().await {
        print_err(&e);
        logger.flush();
        std::process::exit(1);
    }
}
