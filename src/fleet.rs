//! Per-station vehicle fleet: an ordered multiset of autonomies.

use std::collections::BTreeMap;
use std::num::NonZeroU16;

/// Outcome of removing one vehicle of a given autonomy from a [`FleetIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No vehicle with that autonomy was present; nothing changed.
    NotPresent,
    /// A vehicle was removed, but at least one with the same autonomy remains.
    Decremented,
    /// The last vehicle with that autonomy was removed; the entry is gone.
    RemovedLast,
}

/// An ordered multiset of vehicle autonomies belonging to one station.
///
/// Vehicles are tracked as `(autonomy, count)` pairs rather than as one node
/// per vehicle, so that a fleet of identical autonomies costs one entry, not
/// one entry per car.
///
/// # Examples
///
/// ```
/// use highway_stations::fleet::{FleetIndex, RemoveOutcome};
///
/// let mut fleet = FleetIndex::new();
/// fleet.insert(10);
/// fleet.insert(10);
/// fleet.insert(30);
/// assert_eq!(fleet.max(), 30);
///
/// assert_eq!(fleet.remove(30), RemoveOutcome::RemovedLast);
/// assert_eq!(fleet.max(), 10);
/// assert_eq!(fleet.remove(10), RemoveOutcome::Decremented);
/// assert_eq!(fleet.remove(10), RemoveOutcome::RemovedLast);
/// assert_eq!(fleet.remove(10), RemoveOutcome::NotPresent);
/// assert_eq!(fleet.max(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FleetIndex {
    by_autonomy: BTreeMap<u32, NonZeroU16>,
}

impl FleetIndex {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self {
            by_autonomy: BTreeMap::new(),
        }
    }

    /// Returns `true` if the fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.by_autonomy.is_empty()
    }

    /// Adds one vehicle of the given autonomy. Always succeeds.
    pub fn insert(&mut self, autonomy: u32) {
        self.by_autonomy
            .entry(autonomy)
            .and_modify(|count| *count = count.saturating_add(1))
            .or_insert(NonZeroU16::new(1).expect("1 is nonzero"));
    }

    /// Removes one vehicle of the given autonomy, if present.
    ///
    /// See [`RemoveOutcome`] for the tri-valued result.
    pub fn remove(&mut self, autonomy: u32) -> RemoveOutcome {
        match self.by_autonomy.get_mut(&autonomy) {
            None => RemoveOutcome::NotPresent,
            Some(count) => match NonZeroU16::new(count.get() - 1) {
                Some(remaining) => {
                    *count = remaining;
                    RemoveOutcome::Decremented
                }
                None => {
                    self.by_autonomy.remove(&autonomy);
                    RemoveOutcome::RemovedLast
                }
            },
        }
    }

    /// Returns `true` if a vehicle of the given autonomy is present.
    pub fn contains(&self, autonomy: u32) -> bool {
        self.by_autonomy.contains_key(&autonomy)
    }

    /// Returns the largest autonomy present, or `0` if the fleet is empty.
    pub fn max(&self) -> u32 {
        self.by_autonomy
            .last_key_value()
            .map(|(&autonomy, _)| autonomy)
            .unwrap_or(0)
    }
}
