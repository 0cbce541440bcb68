//! Property-based checks for the for-all invariants of the station/fleet
//! index and the command dispatcher, driven by randomly generated command
//! sequences.

use proptest::prelude::*;

use highway_stations::command::{self, Command};
use highway_stations::engine::Engine;

fn small_distance() -> impl Strategy<Value = u32> {
    0u32..20
}

fn small_autonomy() -> impl Strategy<Value = u32> {
    0u32..15
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (small_distance(), prop::collection::vec(small_autonomy(), 0..4)).prop_map(
            |(distance, autonomies)| Command::AddStation {
                distance,
                autonomies
            }
        ),
        small_distance().prop_map(|distance| Command::RemoveStation { distance }),
        (small_distance(), small_autonomy())
            .prop_map(|(distance, autonomy)| Command::AddVehicle { distance, autonomy }),
        (small_distance(), small_autonomy())
            .prop_map(|(distance, autonomy)| Command::ScrapVehicle { distance, autonomy }),
        (small_distance(), small_distance())
            .prop_map(|(start, end)| Command::PlanRoute { start, end }),
    ]
}

proptest! {
    /// Property 1: after any sequence of commands, every live station's
    /// cached `max_autonomy`/`leftmost`/`rightmost` agree with its fleet
    /// and distance.
    #[test]
    fn reach_cache_always_matches_fleet_and_distance(commands in prop::collection::vec(arb_command(), 0..200)) {
        let mut engine = Engine::new();
        for cmd in commands {
            command::dispatch(&mut engine, cmd);
        }

        for distance in 0u32..20 {
            if let Some(station) = engine.stations().get(distance) {
                let expected_max = station.fleet().max();
                prop_assert_eq!(station.max_autonomy(), expected_max);
                prop_assert_eq!(station.reach().rightmost, station.distance() + expected_max);
                prop_assert_eq!(
                    station.reach().leftmost,
                    station.distance().saturating_sub(expected_max)
                );
            }
        }
    }

    /// Property 2: the ordered index enumerates live stations in strictly
    /// ascending distance order with no duplicates.
    #[test]
    fn ascending_range_has_no_duplicates_and_is_sorted(commands in prop::collection::vec(arb_command(), 0..200)) {
        let mut engine = Engine::new();
        for cmd in commands {
            command::dispatch(&mut engine, cmd);
        }

        let distances: Vec<u32> = engine
            .stations()
            .range_ascending(0, u32::MAX)
            .map(|s| s.distance())
            .collect();
        let mut sorted = distances.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(distances, sorted);
    }

    /// Property 3: inserting then removing a station at the same distance
    /// leaves lookup results unchanged relative to before the pair.
    #[test]
    fn insert_then_remove_same_distance_is_observationally_neutral(
        distance in small_distance(),
        autonomies in prop::collection::vec(small_autonomy(), 0..4),
        prelude in prop::collection::vec(arb_command(), 0..50),
    ) {
        let mut before = Engine::new();
        for cmd in prelude.clone() {
            command::dispatch(&mut before, cmd);
        }
        let before_present = before.stations().get(distance).is_some();

        let mut after = Engine::new();
        for cmd in prelude {
            command::dispatch(&mut after, cmd);
        }
        command::dispatch(
            &mut after,
            Command::AddStation {
                distance,
                autonomies,
            },
        );
        command::dispatch(&mut after, Command::RemoveStation { distance });

        prop_assert_eq!(before_present, after.stations().get(distance).is_some());
    }

    /// Property 4: `aggiungi-auto d a` followed by `rottama-auto d a` is a
    /// no-op on the fleet multiset, provided the station exists.
    #[test]
    fn add_then_scrap_vehicle_is_a_fleet_noop(
        distance in small_distance(),
        autonomy in small_autonomy(),
    ) {
        let mut engine = Engine::new();
        command::dispatch(
            &mut engine,
            Command::AddStation {
                distance,
                autonomies: vec![],
            },
        );
        let before_max = engine.stations().get(distance).unwrap().max_autonomy();

        command::dispatch(&mut engine, Command::AddVehicle { distance, autonomy });
        command::dispatch(&mut engine, Command::ScrapVehicle { distance, autonomy });

        let after_max = engine.stations().get(distance).unwrap().max_autonomy();
        prop_assert_eq!(before_max, after_max);
    }

    /// Property 5: planning a route from a live station to itself always
    /// emits the single-station route.
    #[test]
    fn same_station_route_is_trivial(
        distance in small_distance(),
        autonomies in prop::collection::vec(small_autonomy(), 0..4),
    ) {
        let mut engine = Engine::new();
        command::dispatch(
            &mut engine,
            Command::AddStation {
                distance,
                autonomies,
            },
        );
        let output = command::dispatch(&mut engine, Command::PlanRoute { start: distance, end: distance });
        prop_assert_eq!(output, distance.to_string());
    }
}
