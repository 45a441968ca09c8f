//! NPI Board CLI Application
//!
//! Command-line interface for the NPI meeting board.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, TextArgs};
use log::info;
use npi_core::BoardBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        weekday_style,
        command,
    } = Args::parse();

    let board = BoardBuilder::new()
        .with_database_path(database_file)
        .with_weekday_style(weekday_style.into())
        .build()
        .context("Failed to open board")?;

    let cli = Cli::new(board, TerminalRenderer::new(!no_color));

    info!("NPI board opened");

    match command {
        None | Some(Overview) => cli.overview(),
        Some(Title(TextArgs { text })) => cli.set_title(text),
        Some(FlowTitle(TextArgs { text })) => cli.set_flow_title(text),
        Some(Project { command }) => cli.handle_project_command(command),
        Some(Spec { command }) => cli.handle_spec_command(command),
        Some(Step { command }) => cli.handle_step_command(command),
        Some(Schedule) => cli.schedule(),
        Some(Gantt) => cli.gantt(),
        Some(Report) => cli.report(),
        Some(Export) => cli.export(),
        Some(Attendees { command }) => cli.handle_attendee_command(command),
    }
}
