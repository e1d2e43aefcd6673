//! Todo CLI Application
//!
//! Command-line interface and MCP server for the local to-do list.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TodoMcpServer};
use renderer::TerminalRenderer;
use todo_core::TaskStoreBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = TaskStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open task store")?;

    info!("todo started");

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(store, renderer);

    match command {
        Some(Add(args)) => cli.add(&args.into()),
        Some(List(args)) => cli.list(&args.into()),
        Some(Show(args)) => cli.show(&args.into()),
        Some(Done(args)) => cli.set_completed(&args.completed(true)),
        Some(Undo(args)) => cli.set_completed(&args.completed(false)),
        Some(Toggle(args)) => cli.toggle(&args.into()),
        Some(Star(args)) => cli.star(&args.into()),
        Some(Edit(args)) => cli.edit(&args.into()),
        Some(Delete(args)) => cli.delete(&args.into()),
        Some(Stats) => cli.stats(),
        Some(Categories) => cli.categories(),
        Some(Serve) => {
            info!("Starting todo MCP server");
            run_stdio_server(TodoMcpServer::new(cli.into_store()))
                .await
                .context("MCP server failed")
        }
        None => cli.overview(),
    }
}
