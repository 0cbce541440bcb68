//! Backward breadth-first search: descending working array, quadratic scan.

use std::collections::VecDeque;

use super::node::{Color, Node};

/// Finds the shortest, lexicographically-smallest-ascending path from
/// `nodes[0]` to `nodes[nodes.len() - 1]` in a descending working array.
///
/// Returns the path as a sequence of array indices from first to last (in
/// search order, i.e. descending distance), or `None` if the last node is
/// unreachable.
///
/// Unlike the forward case, a node can be *tested* for reachability (for the
/// termination check) even after it was already enqueued by an earlier
/// predecessor; it is only skipped from re-enqueueing once grey. Preferring
/// the earliest (highest-distance) predecessor that reaches each node is
/// what keeps the path lexicographically smallest once printed ascending.
pub(super) fn search(nodes: &mut [Node]) -> Option<Vec<usize>> {
    let n = nodes.len();
    debug_assert!(n >= 2);
    let last = n - 1;

    let mut queue: VecDeque<usize> = VecDeque::new();
    nodes[0].color = Color::Grey;
    queue.push_back(0);

    while let Some(curr) = queue.pop_front() {
        for i in (curr + 1)..n {
            if nodes[i].distance < nodes[curr].leftmost {
                continue;
            }
            if i == last {
                nodes[i].prev_on_path = Some(curr);
                return Some(reconstruct(nodes, last));
            }
            if nodes[i].color == Color::White {
                nodes[i].color = Color::Grey;
                nodes[i].prev_on_path = Some(curr);
                queue.push_back(i);
            }
        }
    }
    None
}

fn reconstruct(nodes: &[Node], last: usize) -> Vec<usize> {
    let mut path = vec![last];
    let mut curr = last;
    while let Some(prev) = nodes[curr].prev_on_path {
        path.push(prev);
        curr = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::node::materialize;
    use crate::station::StationIndex;

    fn build(pairs: &[(u32, u32)]) -> StationIndex {
        let mut index = StationIndex::new();
        for &(distance, autonomy) in pairs {
            index.insert(distance);
            index.add_vehicle(distance, autonomy);
        }
        index
    }

    #[test]
    fn direct_reach_needs_no_intermediate() {
        // Every station can reach every other in one hop (autonomy 100),
        // so the shortest path from 30 to 0 is the direct single hop.
        let index = build(&[(0, 100), (10, 100), (20, 100), (30, 100)]);
        // descending working array: 30, 20, 10, 0
        let mut nodes = materialize(&index, 0, 30, false);
        let path = search(&mut nodes).expect("reachable");
        let distances: Vec<u32> = path.iter().map(|&i| nodes[i].distance).collect();
        assert_eq!(distances, vec![30, 0]);
    }

    #[test]
    fn tie_break_prefers_lexicographically_smallest_ascending_sequence() {
        // 30 (autonomy 10) reaches only 20 directly; 20 (autonomy 20) reaches
        // both 10 and 0, forcing a genuine two-hop search. The path must go
        // through 20, since 10 is unreachable from 30 in one hop.
        let index = build(&[(0, 0), (10, 5), (20, 20), (30, 10)]);
        // descending working array: 30, 20, 10, 0
        let mut nodes = materialize(&index, 0, 30, false);
        let path = search(&mut nodes).expect("reachable");
        let distances: Vec<u32> = path.iter().map(|&i| nodes[i].distance).collect();
        assert_eq!(distances, vec![30, 20, 0]);
    }

    #[test]
    fn unreachable_destination_reports_none() {
        let index = build(&[(0, 0), (10, 0), (20, 0)]);
        let mut nodes = materialize(&index, 0, 20, false);
        assert!(search(&mut nodes).is_none());
    }

    #[test]
    fn insufficient_autonomy_to_reach_the_start_from_further_back_reports_none() {
        // 30's reach (autonomy 5) is [25, 35]; 0 lies outside it, and there
        // is no intermediate station to bridge the gap.
        let index = build(&[(0, 0), (30, 5)]);
        let mut nodes = materialize(&index, 0, 30, false);
        assert!(search(&mut nodes).is_none());
    }
}
