//! Command parsing and dispatch: turns one line of the input stream into a
//! mutation or query on an [`Engine`], and renders the result to the exact
//! success/failure strings the command surface specifies.

use tracing::warn;

use crate::engine::{
    AddStationOutcome, AddVehicleOutcome, Engine, RemoveStationOutcome, ScrapVehicleOutcome,
};
use crate::planner::PlanOutcome;

/// One parsed command, ready to be applied to an [`Engine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStation { distance: u32, autonomies: Vec<u32> },
    RemoveStation { distance: u32 },
    AddVehicle { distance: u32, autonomy: u32 },
    ScrapVehicle { distance: u32, autonomy: u32 },
    PlanRoute { start: u32, end: u32 },
}

/// Parses one whitespace-separated line into a [`Command`].
///
/// Returns `None` for a blank line, an unknown command token, a wrong
/// number of arguments, or a non-numeric argument where an integer is
/// expected. This is the "lenient skipping" choice documented in
/// `DESIGN.md`'s Open Question 3: the source leaves malformed input
/// unspecified, and skipping keeps the dispatcher total without inventing
/// an output line the command surface doesn't define.
pub fn parse(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;

    match command {
        "aggiungi-stazione" => {
            let distance: u32 = tokens.next()?.parse().ok()?;
            let count: usize = tokens.next()?.parse().ok()?;
            let mut autonomies = Vec::with_capacity(count);
            for _ in 0..count {
                autonomies.push(tokens.next()?.parse().ok()?);
            }
            Some(Command::AddStation {
                distance,
                autonomies,
            })
        }
        "demolisci-stazione" => {
            let distance: u32 = tokens.next()?.parse().ok()?;
            Some(Command::RemoveStation { distance })
        }
        "aggiungi-auto" => {
            let distance: u32 = tokens.next()?.parse().ok()?;
            let autonomy: u32 = tokens.next()?.parse().ok()?;
            Some(Command::AddVehicle { distance, autonomy })
        }
        "rottama-auto" => {
            let distance: u32 = tokens.next()?.parse().ok()?;
            let autonomy: u32 = tokens.next()?.parse().ok()?;
            Some(Command::ScrapVehicle { distance, autonomy })
        }
        "pianifica-percorso" => {
            let start: u32 = tokens.next()?.parse().ok()?;
            let end: u32 = tokens.next()?.parse().ok()?;
            Some(Command::PlanRoute { start, end })
        }
        other => {
            warn!(command = other, "unknown command token, skipping line");
            None
        }
    }
}

/// Applies `command` to `engine` and returns the output line (without the
/// trailing newline), exactly as specified in the command surface.
///
/// A `pianifica-percorso` success line is space-separated distances; every
/// other success or failure is one of the five fixed Italian tokens.
pub fn dispatch(engine: &mut Engine, command: Command) -> String {
    match command {
        Command::AddStation {
            distance,
            autonomies,
        } => match engine.add_station(distance, &autonomies) {
            AddStationOutcome::Added => "aggiunta".to_string(),
            AddStationOutcome::AlreadyPresent => "non aggiunta".to_string(),
        },
        Command::RemoveStation { distance } => match engine.remove_station(distance) {
            RemoveStationOutcome::Removed => "demolita".to_string(),
            RemoveStationOutcome::NotPresent => "non demolita".to_string(),
        },
        Command::AddVehicle { distance, autonomy } => {
            match engine.add_vehicle(distance, autonomy) {
                AddVehicleOutcome::Added => "aggiunta".to_string(),
                AddVehicleOutcome::StationAbsent => "non aggiunta".to_string(),
            }
        }
        Command::ScrapVehicle { distance, autonomy } => {
            match engine.scrap_vehicle(distance, autonomy) {
                ScrapVehicleOutcome::Scrapped => "rottamata".to_string(),
                ScrapVehicleOutcome::NotFound => "non rottamata".to_string(),
            }
        }
        Command::PlanRoute { start, end } => match engine.plan_route(start, end) {
            PlanOutcome::Route(distances) => distances
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            PlanOutcome::NoRoute => "nessun percorso".to_string(),
        },
    }
}

/// Parses and applies one line, returning the rendered output line, or
/// `None` if the line did not parse into a known command.
pub fn run_line(engine: &mut Engine, line: &str) -> Option<String> {
    parse(line).map(|command| dispatch(engine, command))
}
