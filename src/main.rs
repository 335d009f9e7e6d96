use clap::Parser;
use color_eyre::eyre::Result;

use statboard::{
    app::App,
    infrastructure::{cli::Cli, config::Config},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;
    let layout = args.layout.unwrap_or(config.layout);
    let mut app = App::new(config, args.tick_rate, args.frame_rate).with_layout(layout);

    if args.snapshot {
        println!("{}", app.snapshot(args.width, args.height)?);
        return Ok(());
    }

    app.run().await?;

    Ok(())
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
