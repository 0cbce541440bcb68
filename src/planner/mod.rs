//! Shortest-hop route planning over the station index.
//!
//! The planner is direction-aware: the forward case (start distance less
//! than end distance) and the backward case (start greater than end) use
//! structurally different searches, because the lexicographically-smallest
//! tie-break interacts with ascending-vs-descending traversal differently
//! in each direction. See `DESIGN.md` for why the two are not unified.

mod backward;
mod forward;
mod node;

use crate::station::StationIndex;

/// Outcome of a [`RoutePlanner::plan`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A route was found; the distances are listed in travel order, i.e.
    /// starting at `start` and ending at `end` (numerically ascending when
    /// `start < end`, descending when `start > end`).
    Route(Vec<u32>),
    /// No station sequence connects `start` to `end` in one-hop steps.
    NoRoute,
}

/// Plans routes over a [`StationIndex`]. Stateless: every call materializes
/// its own working array and queue, which are released when the call
/// returns (see `DESIGN.md`, §5 resource discipline).
#[derive(Debug, Default)]
pub struct RoutePlanner;

impl RoutePlanner {
    /// Creates a planner. The planner holds no state of its own; this
    /// exists so call sites read like other collaborators' constructors.
    pub fn new() -> Self {
        Self
    }

    /// Plans a route from the station at `start` to the station at `end`.
    ///
    /// Both distances must name live stations in `stations`; it is the
    /// caller's responsibility (the command dispatcher) to have checked
    /// this, since "station absent" and "no route" are distinct failures
    /// at the command surface.
    pub fn plan(&self, stations: &StationIndex, start: u32, end: u32) -> PlanOutcome {
        if start == end {
            return PlanOutcome::Route(vec![start]);
        }

        if start < end {
            let mut nodes = node::materialize(stations, start, end, true);
            match forward::search(&mut nodes) {
                Some(path) => {
                    PlanOutcome::Route(path.into_iter().map(|i| nodes[i].distance).collect())
                }
                None => PlanOutcome::NoRoute,
            }
        } else {
            let mut nodes = node::materialize(stations, end, start, false);
            match backward::search(&mut nodes) {
                Some(path) => {
                    PlanOutcome::Route(path.into_iter().map(|i| nodes[i].distance).collect())
                }
                None => PlanOutcome::NoRoute,
            }
        }
    }
}
