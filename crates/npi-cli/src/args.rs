use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AttendeeCommands, ProjectCommands, SpecCommands, StepCommands, TextArgs, WeekdayStyleArg,
};

/// Command-line interface for the NPI meeting board
///
/// The board tracks one New Product Introduction trial run: project details,
/// technical specs, the manufacturing process flow and meeting attendees.
/// From the dated process steps it derives a day-by-day schedule and a Gantt
/// chart. Every change is saved to a local SQLite file.
#[derive(Parser)]
#[command(version, about, name = "npi")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/npi-board/board.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Language of schedule weekday labels
    #[arg(long, global = true, value_enum, default_value_t = WeekdayStyleArg::Chinese)]
    pub weekday_style: WeekdayStyleArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the NPI board CLI
///
/// Running without a command shows the overview: project details, the Gantt
/// chart and the schedule.
#[derive(Subcommand)]
pub enum Commands {
    /// Show project details, Gantt chart and schedule
    #[command(alias = "o")]
    Overview,
    /// Set the board title
    Title(TextArgs),
    /// Set the process flow section title
    FlowTitle(TextArgs),
    /// Show or edit project details
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage technical specs
    Spec {
        #[command(subcommand)]
        command: SpecCommands,
    },
    /// Manage process steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Show the day-by-day schedule
    Schedule,
    /// Show the Gantt chart
    #[command(alias = "g")]
    Gantt,
    /// Show every section of the board
    Report,
    /// Write the board snapshot as JSON to stdout
    Export,
    /// Show or record meeting attendees
    #[command(alias = "a")]
    Attendees {
        #[command(subcommand)]
        command: AttendeeCommands,
    },
}
