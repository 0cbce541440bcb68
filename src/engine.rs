//! Owns one [`StationIndex`] and exposes the five command operations as
//! typed methods, decoupled from how those commands are read or rendered.

use crate::planner::{PlanOutcome, RoutePlanner};
use crate::station::{InsertOutcome, RemoveOutcome as StationRemoveOutcome, StationIndex};

/// Outcome of `aggiungi-stazione`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStationOutcome {
    /// A new station was created and the vehicles were added to it.
    Added,
    /// A station already existed at this distance; no change was made
    /// (the caller is still responsible for discarding the trailing
    /// vehicle list, since this command always consumes its arguments).
    AlreadyPresent,
}

/// Outcome of `demolisci-stazione`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStationOutcome {
    /// The station existed and was removed along with its fleet.
    Removed,
    /// No station existed at this distance.
    NotPresent,
}

/// Outcome of `aggiungi-auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddVehicleOutcome {
    /// The vehicle was added to a live station.
    Added,
    /// No station lives at the given distance.
    StationAbsent,
}

/// Outcome of `rottama-auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapVehicleOutcome {
    /// A vehicle of that autonomy was removed.
    Scrapped,
    /// No station lives at the given distance, or it has no vehicle of
    /// that autonomy.
    NotFound,
}

/// The highway engine: one station index plus a stateless route planner.
///
/// This is the single owner SPEC_FULL.md's concurrency model describes —
/// there is no locking discipline because nothing else can reach this
/// state concurrently.
#[derive(Debug, Default)]
pub struct Engine {
    stations: StationIndex,
    planner: RoutePlanner,
}

impl Engine {
    /// Creates an engine with no stations.
    pub fn new() -> Self {
        Self {
            stations: StationIndex::new(),
            planner: RoutePlanner::new(),
        }
    }

    /// Read-only access to the station index, for tests and diagnostics.
    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    /// `aggiungi-stazione d k a1 a2 ... ak`.
    ///
    /// If a station already lives at `distance`, the autonomies are
    /// discarded and no state changes; the command token stream has
    /// already been fully consumed by the caller before this is invoked.
    pub fn add_station(&mut self, distance: u32, autonomies: &[u32]) -> AddStationOutcome {
        match self.stations.insert(distance) {
            InsertOutcome::AlreadyPresent => AddStationOutcome::AlreadyPresent,
            InsertOutcome::Created => {
                for &autonomy in autonomies {
                    self.stations.add_vehicle(distance, autonomy);
                }
                AddStationOutcome::Added
            }
        }
    }

    /// `demolisci-stazione d`.
    pub fn remove_station(&mut self, distance: u32) -> RemoveStationOutcome {
        match self.stations.remove(distance) {
            StationRemoveOutcome::Removed => RemoveStationOutcome::Removed,
            StationRemoveOutcome::NotPresent => RemoveStationOutcome::NotPresent,
        }
    }

    /// `aggiungi-auto d a`.
    pub fn add_vehicle(&mut self, distance: u32, autonomy: u32) -> AddVehicleOutcome {
        if self.stations.add_vehicle(distance, autonomy) {
            AddVehicleOutcome::Added
        } else {
            AddVehicleOutcome::StationAbsent
        }
    }

    /// `rottama-auto d a`.
    pub fn scrap_vehicle(&mut self, distance: u32, autonomy: u32) -> ScrapVehicleOutcome {
        match self.stations.remove_vehicle(distance, autonomy) {
            StationRemoveOutcome::Removed => ScrapVehicleOutcome::Scrapped,
            StationRemoveOutcome::NotPresent => ScrapVehicleOutcome::NotFound,
        }
    }

    /// `pianifica-percorso d1 d2`. Fails with [`PlanOutcome::NoRoute`] if
    /// either endpoint is not a live station (the planner never runs on
    /// an absent station).
    pub fn plan_route(&self, start: u32, end: u32) -> PlanOutcome {
        if self.stations.get(start).is_none() || self.stations.get(end).is_none() {
            return PlanOutcome::NoRoute;
        }
        self.planner.plan(&self.stations, start, end)
    }
}
