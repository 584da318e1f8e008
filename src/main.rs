use clap::Parser;
use color_eyre::eyre::Result;
use tokio::io::BufReader;

use nestui::{
    driver::launch,
    infrastructure::{cli::Cli, config::Config},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), CLI flags take precedence
    let config = Config::new()?;
    let session = args.session(&config);

    launch(session, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
