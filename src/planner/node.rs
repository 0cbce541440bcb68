//! The planner's working array: one call's materialized view of a distance range.

use crate::station::StationIndex;

/// BFS visitation color, as in the textbook two-color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Color {
    White,
    Grey,
}

/// One slot of the planner's working array: a station's position in the
/// search, plus its cached reach and BFS bookkeeping.
///
/// This is a plain, short-lived value — it exists only for the duration of
/// one [`crate::planner::RoutePlanner::plan`] call and is never stored
/// alongside the station it was copied from.
#[derive(Debug, Clone, Copy)]
pub(super) struct Node {
    pub distance: u32,
    pub leftmost: u32,
    pub rightmost: u32,
    pub color: Color,
    pub prev_on_path: Option<usize>,
}

impl Node {
    fn from_station(distance: u32, leftmost: u32, rightmost: u32) -> Self {
        Self {
            distance,
            leftmost,
            rightmost,
            color: Color::White,
            prev_on_path: None,
        }
    }
}

/// Materializes the live stations in `[lo, hi]` into a contiguous array.
///
/// When `ascending` is `true`, `A[0]` is the station at `lo` and `A[len-1]`
/// is the station at `hi` (the forward case, start < end). When `false`,
/// the array is built in descending order: `A[0]` is the station at `hi`
/// and `A[len-1]` is the station at `lo` (the backward case, start > end).
/// Either way `A[0]` is the planner's start station and `A[len-1]` its end,
/// which is what lets both searches share one `prev_on_path`-reconstruction
/// scheme.
pub(super) fn materialize(stations: &StationIndex, lo: u32, hi: u32, ascending: bool) -> Vec<Node> {
    if ascending {
        stations
            .range_ascending(lo, hi)
            .map(|s| Node::from_station(s.distance(), s.reach().leftmost, s.reach().rightmost))
            .collect()
    } else {
        stations
            .range_descending(lo, hi)
            .map(|s| Node::from_station(s.distance(), s.reach().leftmost, s.reach().rightmost))
            .collect()
    }
}
