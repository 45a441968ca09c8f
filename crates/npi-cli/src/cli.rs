//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry clap derives and convert into core
//! [`Edit`](npi_core::params::Edit) values, so the core stays free of
//! CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Edit → Board::apply → markdown → terminal
//! ```
//!
//! Positions taken on the command line are 1-based, matching the numbering
//! of `step list` and `spec list`.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use npi_core::{
    dates::calendar_date_value,
    display::{
        Attendees, GanttChart, OperationStatus, Overview, Report, Schedule, Specs, Steps,
    },
    params::{DateField, Edit, ProjectField, StepField},
    Applied, Board, WeekdayStyle,
};

use crate::renderer::TerminalRenderer;

/// Parses a 1-based position into a 0-based index.
fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) => Ok(n - 1),
        Err(e) => Err(format!("invalid position '{s}': {e}")),
    }
}

/// Free text argument for title commands
#[derive(Args)]
pub struct TextArgs {
    /// New text
    pub text: String,
}

/// Weekday label language
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum WeekdayStyleArg {
    /// 一 .. 日
    Chinese,
    /// Mon .. Sun
    English,
}

impl From<WeekdayStyleArg> for WeekdayStyle {
    fn from(val: WeekdayStyleArg) -> Self {
        match val {
            WeekdayStyleArg::Chinese => WeekdayStyle::Chinese,
            WeekdayStyleArg::English => WeekdayStyle::English,
        }
    }
}

// ============================================================================
// Project
// ============================================================================

/// Update project details
///
/// Only the given fields change. Quantity accepts any number; text that is
/// not a non-negative number is stored as 0.
#[derive(Args)]
pub struct SetProjectArgs {
    #[arg(long, help = "Project code")]
    pub id: Option<String>,
    #[arg(long, help = "Number of units to ship")]
    pub quantity: Option<String>,
    #[arg(long, help = "Board dimensions, e.g. '100 x 80 x 1.6 mm'")]
    pub pcb_size: Option<String>,
    #[arg(long, help = "Target ship date (YYYY-MM-DD); empty to clear")]
    pub target_ship_date: Option<String>,
}

impl From<SetProjectArgs> for Vec<Edit> {
    fn from(val: SetProjectArgs) -> Self {
        [
            (ProjectField::Id, val.id),
            (ProjectField::Quantity, val.quantity),
            (ProjectField::PcbSize, val.pcb_size),
            (ProjectField::TargetShipDate, val.target_ship_date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| Edit::SetProjectDetail { field, value }))
        .collect()
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show project details
    #[command(alias = "s")]
    Show,
    /// Update project details
    Set(SetProjectArgs),
}

// ============================================================================
// Specs
// ============================================================================

#[derive(Args)]
pub struct SpecIdArgs {
    #[arg(help = "ID of the spec")]
    pub spec_id: String,
}

/// Add a new spec
#[derive(Args)]
pub struct AddSpecArgs {
    #[arg(short, long, help = "Title of the new spec (defaults to 'New Spec')")]
    pub title: Option<String>,
}

#[derive(Args)]
pub struct RenameSpecArgs {
    #[arg(help = "ID of the spec")]
    pub spec_id: String,
    #[arg(help = "New title")]
    pub title: String,
}

impl From<RenameSpecArgs> for Edit {
    fn from(val: RenameSpecArgs) -> Self {
        Edit::SetSpecTitle {
            spec_id: val.spec_id,
            title: val.title,
        }
    }
}

/// Set a parameter value, adding the parameter if it is new
#[derive(Args)]
pub struct SetSpecItemArgs {
    #[arg(help = "ID of the spec")]
    pub spec_id: String,
    #[arg(help = "Parameter name")]
    pub key: String,
    #[arg(help = "Parameter value")]
    pub value: String,
}

impl From<SetSpecItemArgs> for Edit {
    fn from(val: SetSpecItemArgs) -> Self {
        Edit::SetSpecItem {
            spec_id: val.spec_id,
            key: val.key,
            value: val.value,
        }
    }
}

/// Rename a parameter, keeping its position
#[derive(Args)]
pub struct RenameSpecItemArgs {
    #[arg(help = "ID of the spec")]
    pub spec_id: String,
    #[arg(help = "Current parameter name")]
    pub old_key: String,
    #[arg(help = "New parameter name")]
    pub new_key: String,
}

impl From<RenameSpecItemArgs> for Edit {
    fn from(val: RenameSpecItemArgs) -> Self {
        Edit::RenameSpecItem {
            spec_id: val.spec_id,
            old_key: val.old_key,
            new_key: val.new_key,
        }
    }
}

#[derive(Args)]
pub struct RemoveSpecItemArgs {
    #[arg(help = "ID of the spec")]
    pub spec_id: String,
    #[arg(help = "Parameter name")]
    pub key: String,
}

impl From<RemoveSpecItemArgs> for Edit {
    fn from(val: RemoveSpecItemArgs) -> Self {
        Edit::DeleteSpecItem {
            spec_id: val.spec_id,
            key: val.key,
        }
    }
}

/// Move an entry from one list position to another
#[derive(Args)]
pub struct MoveArgs {
    #[arg(value_parser = parse_position, help = "Current 1-based position")]
    pub from: usize,
    #[arg(value_parser = parse_position, help = "New 1-based position")]
    pub to: usize,
}

#[derive(Subcommand)]
pub enum SpecCommands {
    /// List all specs
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a new spec
    #[command(alias = "a")]
    Add(AddSpecArgs),
    /// Remove a spec and unlink the steps that reference it
    #[command(aliases = ["rm", "d"])]
    Remove(SpecIdArgs),
    /// Rename a spec
    Rename(RenameSpecArgs),
    /// Set a parameter value
    Set(SetSpecItemArgs),
    /// Rename a parameter
    RenameKey(RenameSpecItemArgs),
    /// Add a placeholder parameter
    AddItem(SpecIdArgs),
    /// Remove a parameter
    RemoveItem(RemoveSpecItemArgs),
    /// Move a spec to another position
    Move(MoveArgs),
}

// ============================================================================
// Steps
// ============================================================================

#[derive(Args)]
pub struct StepIdArgs {
    #[arg(help = "ID of the process step")]
    pub step_id: String,
}

/// Step text fields, shared by `step add` and `step set`
#[derive(Args)]
pub struct StepFieldArgs {
    #[arg(short, long, help = "Step name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Step details")]
    pub details: Option<String>,
    #[arg(long, help = "Start date or date-time; empty to clear")]
    pub start: Option<String>,
    #[arg(long, help = "End date or date-time; empty to clear")]
    pub end: Option<String>,
}

impl StepFieldArgs {
    fn into_edits(self, step_id: &str) -> Vec<Edit> {
        [
            (StepField::Name, self.name),
            (StepField::Details, self.details),
            (StepField::StartDate, self.start),
            (StepField::EndDate, self.end),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value.map(|value| Edit::SetStepField {
                step_id: step_id.to_string(),
                field,
                value,
            })
        })
        .collect()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.details.is_none() && self.start.is_none() && self.end.is_none()
    }
}

#[derive(Args)]
pub struct SetStepArgs {
    #[arg(help = "ID of the process step")]
    pub step_id: String,
    #[command(flatten)]
    pub fields: StepFieldArgs,
}

/// Which end of the steps to set
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DateFieldArg {
    Start,
    End,
}

impl From<DateFieldArg> for DateField {
    fn from(val: DateFieldArg) -> Self {
        match val {
            DateFieldArg::Start => DateField::Start,
            DateFieldArg::End => DateField::End,
        }
    }
}

/// Set the same start or end date on several steps
///
/// A bare calendar day (YYYY-MM-DD) is stored as 09:00 for start dates and
/// 17:00 for end dates. Any other value is stored as given.
#[derive(Args)]
pub struct StepDatesArgs {
    #[arg(value_enum, help = "Which date to set")]
    pub field: DateFieldArg,
    #[arg(help = "Date (YYYY-MM-DD) or date-time (YYYY-MM-DDTHH:MM)")]
    pub value: String,
    #[arg(required = true, help = "IDs of the steps to update")]
    pub step_ids: Vec<String>,
}

impl From<StepDatesArgs> for Edit {
    fn from(val: StepDatesArgs) -> Self {
        let field = DateField::from(val.field);
        let day = val.value.trim();
        let value = Some(day)
            .filter(|day| !day.contains(|c| c == 'T' || c == ' '))
            .and_then(|day| day.parse::<Date>().ok())
            .map(|date| calendar_date_value(date, field))
            .unwrap_or(val.value);
        Edit::SetStepDates {
            step_ids: val.step_ids,
            field,
            value,
        }
    }
}

#[derive(Args)]
pub struct LinkStepArgs {
    #[arg(help = "ID of the process step")]
    pub step_id: String,
    #[arg(help = "ID of the spec to link")]
    pub spec_id: String,
}

impl From<LinkStepArgs> for Edit {
    fn from(val: LinkStepArgs) -> Self {
        Edit::LinkStepToSpec {
            step_id: val.step_id,
            spec_id: Some(val.spec_id),
        }
    }
}

/// Drag a step onto another among the active steps
///
/// Inactive steps are moved after all active steps.
#[derive(Args)]
pub struct DropStepArgs {
    #[arg(help = "ID of the step being moved")]
    pub dragged: String,
    #[arg(help = "ID of the step it is dropped onto")]
    pub target: String,
}

impl From<DropStepArgs> for Edit {
    fn from(val: DropStepArgs) -> Self {
        Edit::DropStep {
            dragged: val.dragged,
            target: val.target,
        }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// List all process steps in flow order
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a new step at the end of the flow
    #[command(alias = "a")]
    Add(StepFieldArgs),
    /// Remove a step
    #[command(aliases = ["rm", "d"])]
    Remove(StepIdArgs),
    /// Toggle whether a step is active
    #[command(alias = "t")]
    Toggle(StepIdArgs),
    /// Update a step's name, details or dates
    #[command(alias = "u")]
    Set(SetStepArgs),
    /// Set a start or end date on several steps
    Dates(StepDatesArgs),
    /// Link a step to a spec
    Link(LinkStepArgs),
    /// Remove a step's spec link
    Unlink(StepIdArgs),
    /// Move a step to another position in the flow
    Move(MoveArgs),
    /// Drop one active step onto another
    Drop(DropStepArgs),
}

// ============================================================================
// Attendees
// ============================================================================

/// Record the meeting attendees
///
/// The given names replace the current list. Blank names are ignored.
#[derive(Args)]
pub struct SetAttendeesArgs {
    #[arg(help = "Attendee names")]
    pub names: Vec<String>,
    #[arg(long, help = "Meeting date")]
    pub date: Option<String>,
}

impl From<SetAttendeesArgs> for Vec<Edit> {
    fn from(val: SetAttendeesArgs) -> Self {
        let mut edits = vec![Edit::SetAttendees(val.names.join("\n"))];
        if let Some(date) = val.date {
            edits.push(Edit::SetMeetingDate(date));
        }
        edits
    }
}

#[derive(Subcommand)]
pub enum AttendeeCommands {
    /// Show the meeting date and attendees
    #[command(alias = "s")]
    Show,
    /// Replace the attendee list
    Set(SetAttendeesArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Applies commands to a board and renders the result.
pub struct Cli {
    board: Board,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(board: Board, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    fn apply(&mut self, edit: Edit) -> Result<Applied> {
        self.board.apply(edit).context("Edit rejected")
    }

    /// Applies each edit in turn and reports the last confirmation.
    fn apply_all(&mut self, edits: Vec<Edit>) -> Result<()> {
        if edits.is_empty() {
            bail!("Nothing to update; pass at least one field");
        }
        let mut last = None;
        for edit in edits {
            last = Some(self.apply(edit)?);
        }
        match last {
            Some(applied) => self.status(applied),
            None => Ok(()),
        }
    }

    fn status(&self, applied: Applied) -> Result<()> {
        self.renderer
            .render(&OperationStatus::from(applied).to_string())
    }

    pub fn overview(&self) -> Result<()> {
        self.renderer.render(&Overview(&self.board).to_string())
    }

    pub fn report(&self) -> Result<()> {
        self.renderer.render(&Report(&self.board).to_string())
    }

    pub fn schedule(&self) -> Result<()> {
        let rows = self.board.schedule();
        self.renderer
            .render(&format!("# Schedule\n\n{}", Schedule(&rows)))
    }

    pub fn gantt(&self) -> Result<()> {
        self.renderer
            .render(&format!("# Gantt\n\n{}", GanttChart(&self.board.chart())))
    }

    pub fn export(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.board.snapshot())
            .context("Failed to serialize board")?;
        self.renderer.raw(&json);
        Ok(())
    }

    pub fn set_title(mut self, text: String) -> Result<()> {
        let applied = self.apply(Edit::SetAppTitle(text))?;
        self.status(applied)
    }

    pub fn set_flow_title(mut self, text: String) -> Result<()> {
        let applied = self.apply(Edit::SetProcessFlowTitle(text))?;
        self.status(applied)
    }

    pub fn handle_project_command(mut self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Show => {
                let project = &self.board.snapshot().project_details;
                self.renderer.render(&format!("# Project\n\n{project}"))
            }
            ProjectCommands::Set(args) => self.apply_all(args.into()),
        }
    }

    pub fn handle_spec_command(mut self, command: SpecCommands) -> Result<()> {
        match command {
            SpecCommands::List => {
                let specs = &self.board.snapshot().specs;
                self.renderer.render(&format!("# Specs\n\n{}", Specs(specs)))
            }
            SpecCommands::Add(AddSpecArgs { title }) => {
                let applied = self.apply(Edit::AddSpec)?;
                let Some(spec_id) = applied.created_id.clone() else {
                    return self.status(applied);
                };
                if let Some(title) = title {
                    self.apply(Edit::SetSpecTitle {
                        spec_id: spec_id.clone(),
                        title,
                    })?;
                }
                self.status(applied)?;
                self.show_spec(&spec_id)
            }
            SpecCommands::Remove(SpecIdArgs { spec_id }) => {
                let applied = self.apply(Edit::DeleteSpec { spec_id })?;
                self.status(applied)
            }
            SpecCommands::Rename(args) => {
                let spec_id = args.spec_id.clone();
                self.apply_spec_edit(&spec_id, args.into())
            }
            SpecCommands::Set(args) => {
                let spec_id = args.spec_id.clone();
                self.apply_spec_edit(&spec_id, args.into())
            }
            SpecCommands::RenameKey(args) => {
                let spec_id = args.spec_id.clone();
                self.apply_spec_edit(&spec_id, args.into())
            }
            SpecCommands::AddItem(SpecIdArgs { spec_id }) => {
                let edit = Edit::AddSpecItem {
                    spec_id: spec_id.clone(),
                };
                self.apply_spec_edit(&spec_id, edit)
            }
            SpecCommands::RemoveItem(args) => {
                let spec_id = args.spec_id.clone();
                self.apply_spec_edit(&spec_id, args.into())
            }
            SpecCommands::Move(MoveArgs { from, to }) => {
                let applied = self.apply(Edit::MoveSpec { from, to })?;
                self.status(applied)
            }
        }
    }

    fn apply_spec_edit(&mut self, spec_id: &str, edit: Edit) -> Result<()> {
        let applied = self.apply(edit)?;
        self.status(applied)?;
        self.show_spec(spec_id)
    }

    fn show_spec(&self, spec_id: &str) -> Result<()> {
        match self.board.find_spec(spec_id) {
            Some(spec) => self.renderer.render(&format!("\n{spec}")),
            None => Ok(()),
        }
    }

    pub fn handle_step_command(mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::List => {
                let snapshot = self.board.snapshot();
                self.renderer.render(&format!(
                    "# {}\n\n{}",
                    snapshot.process_flow_title,
                    Steps(&snapshot.process_steps)
                ))
            }
            StepCommands::Add(fields) => {
                let applied = self.apply(Edit::AddStep)?;
                let Some(step_id) = applied.created_id.clone() else {
                    return self.status(applied);
                };
                for edit in fields.into_edits(&step_id) {
                    self.apply(edit)?;
                }
                self.status(applied)?;
                self.show_step(&step_id)
            }
            StepCommands::Remove(StepIdArgs { step_id }) => {
                let applied = self.apply(Edit::DeleteStep { step_id })?;
                self.status(applied)
            }
            StepCommands::Toggle(StepIdArgs { step_id }) => {
                let applied = self.apply(Edit::ToggleStep {
                    step_id: step_id.clone(),
                })?;
                self.status(applied)?;
                self.show_step(&step_id)
            }
            StepCommands::Set(SetStepArgs { step_id, fields }) => {
                if fields.is_empty() {
                    bail!("Nothing to update; pass at least one field");
                }
                self.apply_all(fields.into_edits(&step_id))?;
                self.show_step(&step_id)
            }
            StepCommands::Dates(args) => {
                let applied = self.apply(args.into())?;
                self.status(applied)
            }
            StepCommands::Link(args) => {
                let step_id = args.step_id.clone();
                let applied = self.apply(args.into())?;
                self.status(applied)?;
                self.show_step(&step_id)
            }
            StepCommands::Unlink(StepIdArgs { step_id }) => {
                let applied = self.apply(Edit::LinkStepToSpec {
                    step_id,
                    spec_id: None,
                })?;
                self.status(applied)
            }
            StepCommands::Move(MoveArgs { from, to }) => {
                let applied = self.apply(Edit::MoveStep { from, to })?;
                self.status(applied)
            }
            StepCommands::Drop(args) => {
                let applied = self.apply(args.into())?;
                self.status(applied)
            }
        }
    }

    fn show_step(&self, step_id: &str) -> Result<()> {
        match self.board.find_step(step_id) {
            Some(step) => self.renderer.render(&format!("\n{step}")),
            None => Ok(()),
        }
    }

    pub fn handle_attendee_command(mut self, command: AttendeeCommands) -> Result<()> {
        match command {
            AttendeeCommands::Show => {
                let snapshot = self.board.snapshot();
                self.renderer.render(
                    &Attendees(&snapshot.attendees, &snapshot.meeting_date).to_string(),
                )
            }
            AttendeeCommands::Set(args) => self.apply_all(args.into()),
        }
    }
}
