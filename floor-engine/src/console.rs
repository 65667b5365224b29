//! Host console
//!
//! Line-oriented stand-in for the floor-plan UI. Each line maps to one
//! floor command or query:
//!
//! ```text
//! servers <1-7>              set active server count
//! seat <table> <server> [n]  seat a party of n (default 0)
//! unseat <table>
//! confirm <server> [n]       seat at the recommended table
//! select <table> | deselect
//! floor | rec | sections | section <id>
//! info <table> | classify <table>
//! json                       floor snapshot as JSON
//! help | quit
//! ```

use std::fmt::Write as _;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::floor::FloorManager;
use shared::floor::{FloorCommand, FloorCommandPayload, FloorSnapshot};
use shared::models::SectionSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Execute(FloorCommandPayload),
    ShowFloor,
    ExportJson,
    ShowRecommendation,
    Sections,
    Section(i32),
    TableInfo(i32),
    Classify(i32),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

fn number(raw: &str) -> Result<i32, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::NotANumber(raw.to_string()))
}

/// Parse one console line
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(ParseError::Empty);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("servers", [count]) => ConsoleCommand::Execute(FloorCommandPayload::SetActiveServerCount {
            count: number(count)?,
        }),
        ("servers", _) => return Err(ParseError::Usage("servers <1-7>")),

        ("seat", [table, server, rest @ ..]) if rest.len() <= 1 => {
            ConsoleCommand::Execute(FloorCommandPayload::SeatTable {
                table_number: number(table)?,
                server: server.to_string(),
                party_size: rest.first().map_or(Ok(0), |n| number(n))?,
            })
        }
        ("seat", _) => return Err(ParseError::Usage("seat <table> <server> [party]")),

        ("unseat", [table]) => ConsoleCommand::Execute(FloorCommandPayload::UnseatTable {
            table_number: number(table)?,
        }),
        ("unseat", _) => return Err(ParseError::Usage("unseat <table>")),

        ("confirm", [server, rest @ ..]) if rest.len() <= 1 => {
            ConsoleCommand::Execute(FloorCommandPayload::ConfirmRecommendedSeating {
                server: server.to_string(),
                party_size: rest.first().map_or(Ok(0), |n| number(n))?,
            })
        }
        ("confirm", _) => return Err(ParseError::Usage("confirm <server> [party]")),

        ("select", [table]) => ConsoleCommand::Execute(FloorCommandPayload::SelectTable {
            table_number: number(table)?,
        }),
        ("select", _) => return Err(ParseError::Usage("select <table>")),
        ("deselect", []) => ConsoleCommand::Execute(FloorCommandPayload::DeselectTable),

        ("info", [table]) => ConsoleCommand::TableInfo(number(table)?),
        ("info", _) => return Err(ParseError::Usage("info <table>")),
        ("classify", [table]) => ConsoleCommand::Classify(number(table)?),
        ("classify", _) => return Err(ParseError::Usage("classify <table>")),

        ("floor", []) => ConsoleCommand::ShowFloor,
        ("json", []) => ConsoleCommand::ExportJson,
        ("rec", []) => ConsoleCommand::ShowRecommendation,
        ("sections", []) => ConsoleCommand::Sections,
        ("section", [id]) => ConsoleCommand::Section(number(id)?),
        ("section", _) => return Err(ParseError::Usage("section <id>")),
        ("help", _) => ConsoleCommand::Help,
        ("quit" | "exit", _) => ConsoleCommand::Quit,
        (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

const HELP: &str = "\
servers <1-7>              set active server count
seat <table> <server> [n]  seat a party of n
unseat <table>             clear a table
confirm <server> [n]       seat at the recommended table
select <table>             toggle table focus
deselect                   clear focus
floor | rec | sections     show floor state
section <id>               one section's summary
info <table>               table details
classify <table>           table shape and capacity
json                       floor snapshot as JSON
quit";

/// Render the floor as one line per table
pub fn render_floor(floor: &FloorSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "servers: {}  seated: {}  recommendation: {}",
        floor.active_server_count,
        floor.seated_count(),
        floor
            .recommendation
            .map_or("none".to_string(), |t| t.to_string())
    );
    for table in floor.tables.iter().filter(|t| !t.number.is_bar()) {
        let mut marks = String::new();
        if table.is_window {
            marks.push('W');
        }
        if floor.recommendation == Some(table.number) {
            marks.push('*');
        }
        if floor.selected_table == Some(table.number) {
            marks.push('>');
        }
        let status = match &table.assigned_server {
            Some(server) => format!("{} ({})", server, table.party_size),
            None => "open".to_string(),
        };
        let _ = writeln!(
            out,
            "{:>3} {:<4} s{} {:<9} p{:<3} {}",
            table.number.get(),
            marks,
            table.section,
            table.shape.name(),
            table.priority,
            status
        );
    }
    out
}

fn render_section(s: &SectionSummary) -> String {
    format!(
        "section {} priority {:>3}  open {:>2}  seated {:>2}  guests {:>3}{}",
        s.id,
        s.priority,
        s.open_tables,
        s.seated_tables,
        s.seated_guests,
        if s.is_skipped { "  (skipped)" } else { "" }
    )
}

/// Outcome of one console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutcome {
    Continue(String),
    Quit,
}

/// Console bound to a floor manager
pub struct Console {
    manager: FloorManager,
    operator: String,
}

impl Console {
    pub fn new(manager: FloorManager, operator: impl Into<String>) -> Self {
        Self {
            manager,
            operator: operator.into(),
        }
    }

    /// Handle one line and return the text to show
    pub fn handle_line(&self, line: &str) -> ConsoleOutcome {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return ConsoleOutcome::Continue(String::new()),
            Err(e) => return ConsoleOutcome::Continue(format!("error: {e}")),
        };

        let text = match command {
            ConsoleCommand::Execute(payload) => {
                let response = self
                    .manager
                    .execute_command(FloorCommand::new(self.operator.clone(), payload));
                match response.error {
                    Some(error) => format!("error [{:?}]: {}", error.code, error.message),
                    None => {
                        let table = response
                            .table_number
                            .map_or(String::new(), |t| format!("table {t}, "));
                        let rec = response
                            .recommendation
                            .map_or("none".to_string(), |t| t.to_string());
                        format!("ok: {table}next: {rec}")
                    }
                }
            }
            ConsoleCommand::ShowFloor => render_floor(&self.manager.get_floor()),
            ConsoleCommand::ExportJson => {
                match serde_json::to_string_pretty(&self.manager.get_floor()) {
                    Ok(json) => json,
                    Err(e) => format!("error: {e}"),
                }
            }
            ConsoleCommand::ShowRecommendation => match self.manager.get_recommendation() {
                Some(table) => format!(
                    "table {} (section {}, {}{})",
                    table.number,
                    table.section,
                    table.shape.name(),
                    if table.is_window { ", window" } else { "" }
                ),
                None => "no table available".to_string(),
            },
            ConsoleCommand::Sections => self
                .manager
                .section_summaries()
                .iter()
                .map(render_section)
                .collect::<Vec<_>>()
                .join("\n"),
            ConsoleCommand::Section(id) => match self.manager.section_summary(id) {
                Ok(summary) => render_section(&summary),
                Err(e) => format!("error: {e}"),
            },
            ConsoleCommand::TableInfo(n) => match self.manager.get_table_info(n) {
                Ok(info) => format!(
                    "table {}: section {}, {} for {}, {}{}{}",
                    info.number,
                    info.section,
                    info.shape.name(),
                    info.capacity,
                    match &info.assigned_server {
                        Some(server) => format!("seated with {} ({})", server, info.party_size),
                        None => "open".to_string(),
                    },
                    if info.is_window { ", window" } else { "" },
                    if info.is_selected { ", selected" } else { "" }
                ),
                Err(e) => format!("error: {e}"),
            },
            ConsoleCommand::Classify(n) => match self.manager.classify_table(n) {
                Ok((shape, capacity)) => format!("table {n}: {} seats {capacity}", shape.name()),
                Err(e) => format!("error: {e}"),
            },
            ConsoleCommand::Help => HELP.to_string(),
            ConsoleCommand::Quit => return ConsoleOutcome::Quit,
        };
        ConsoleOutcome::Continue(text)
    }

    /// Read commands from stdin until EOF or `quit`
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        while let Some(line) = lines.next_line().await? {
            match self.handle_line(&line) {
                ConsoleOutcome::Quit => break,
                ConsoleOutcome::Continue(text) => {
                    if !text.is_empty() {
                        stdout.write_all(text.trim_end().as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                    }
                }
            }
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }
        Ok(())
    }
}
