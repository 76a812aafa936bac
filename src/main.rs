//! mm - MechMania competitor CLI
//!
//! Usage: mm <COMMAND>
//!
//! Commands:
//!   login     Log in and store the session token
//!   submit    Package and submit the strategy
//!   versions  List submitted bot versions
//!   switch    Change the active bot version
//!   run       Build the bot and play it against itself
//!   engine    Run the match engine directly
//!   update    Update the CLI and starterpack

mod cli;
mod commands;
mod observability;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;

async fn dispatch(ui: &UiContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login => commands::login::cmd_login(ui).await,
        Commands::Submit { no_wait } => commands::submit::cmd_submit(ui, no_wait).await,
        Commands::Versions => commands::versions::cmd_versions(ui).await,
        Commands::Switch { version } => commands::versions::cmd_switch(ui, version).await,
        Commands::Run(args) => commands::run::cmd_run(ui, args).await,
        Commands::Engine(args) => commands::engine::cmd_engine(ui, args).await,
        Commands::Update { check } => commands::update::cmd_update(ui, check).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    observability::init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);

    if let Err(err) = dispatch(&ui, cli.command).await {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}
