// src/bin/cli.rs
use wq_watch::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    wq_watch::log::init();
    cli::run()
}
