use super::{
    frontier_entry::FrontierEntry, CancellationToken, CutoffExceededWarning, ReachableSet,
    SearchBudget,
};
use crate::{graph::Graph, model::VertexId};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap};
use std::time::Instant;

/// bounded shortest-path reachability from many sources.
///
/// each distinct source runs its own single-source search (see [driving_distance_single])
/// on the rayon thread pool. searches share only the read-only [Graph]; all search state
/// is private to the search, so no synchronization is needed beyond collecting results.
///
/// # Arguments
///
/// * `graph`   - walking network
/// * `sources` - source vertex ids. duplicates are searched once.
/// * `cutoff`  - maximum walking cost in feet. vertices farther than this are excluded.
/// * `budget`  - per-search circuit breaker limits
///
/// # Returns
///
/// one [ReachableSet] per distinct source, keyed by source id.
pub fn driving_distance(
    graph: &Graph,
    sources: &[VertexId],
    cutoff: f64,
    budget: &SearchBudget,
) -> BTreeMap<VertexId, ReachableSet> {
    driving_distance_cancellable(graph, sources, cutoff, budget, &HashMap::new())
}

/// [driving_distance] where individual searches can be stopped from another thread.
///
/// a source with an entry in `cancel` checks that token alongside its `budget`.
/// cancelling one token stops only its own search, which returns its settled vertices
/// with a [CutoffExceededWarning]; sources without a token always run to completion
/// or budget exhaustion.
pub fn driving_distance_cancellable(
    graph: &Graph,
    sources: &[VertexId],
    cutoff: f64,
    budget: &SearchBudget,
    cancel: &HashMap<VertexId, CancellationToken>,
) -> BTreeMap<VertexId, ReachableSet> {
    let unique: BTreeSet<VertexId> = sources.iter().copied().collect();
    unique
        .into_par_iter()
        .map(|source| {
            let token = cancel.get(&source);
            let reachable = driving_distance_single(graph, source, cutoff, budget, token);
            (source, reachable)
        })
        .collect()
}

/// Dijkstra search from a single source over the undirected network, bounded by `cutoff`.
///
/// vertices are settled in increasing cost order from a binary min-heap with lazy deletion
/// of stale entries. a relaxation that would exceed `cutoff` is never pushed, so vertices
/// beyond the cutoff are absent from the result rather than present at infinite cost.
/// vertices at exactly `cutoff` are included.
///
/// if the `budget` (or the optional cancellation token) stops the search early, the vertices
/// settled so far are returned with a [CutoffExceededWarning]. settled costs are final, so
/// the partial set is a subset of the complete one.
///
/// a source that is not in the graph yields a set holding only itself at cost 0.
pub fn driving_distance_single(
    graph: &Graph,
    source: VertexId,
    cutoff: f64,
    budget: &SearchBudget,
    cancel: Option<&CancellationToken>,
) -> ReachableSet {
    let source_index = match graph.vertex_index(&source) {
        Some(index) => index,
        None => {
            log::debug!("source vertex {source} not in graph, returning source-only set");
            return ReachableSet::source_only(source);
        }
    };
    let cutoff = if cutoff.is_finite() && cutoff >= 0.0 {
        cutoff
    } else {
        log::warn!("invalid cutoff {cutoff} for source {source}, only the source is reachable");
        0.0
    };

    let started = Instant::now();
    let mut settled: HashMap<usize, f64> = HashMap::new();
    let mut best: HashMap<usize, f64> = HashMap::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut warning: Option<CutoffExceededWarning> = None;

    best.insert(source_index, 0.0);
    frontier.push(FrontierEntry::new(0.0, source_index));

    while let Some(FrontierEntry { cost, vertex_index }) = frontier.pop() {
        let cost = cost.into_inner();
        if settled.contains_key(&vertex_index) {
            continue;
        }
        if best.get(&vertex_index).is_some_and(|b| cost > *b) {
            // stale entry, a cheaper path was pushed later
            continue;
        }
        if let Some(reason) = budget.check(settled.len(), started, cancel) {
            let w = CutoffExceededWarning {
                source,
                reason,
                settled: settled.len(),
                elapsed: started.elapsed(),
            };
            log::warn!("{w}");
            warning = Some(w);
            break;
        }
        settled.insert(vertex_index, cost);

        for adj in graph.adjacency_at(vertex_index) {
            if settled.contains_key(&adj.neighbor_index) {
                continue;
            }
            let next_cost = cost + adj.weight;
            if next_cost > cutoff {
                continue;
            }
            let improves = best
                .get(&adj.neighbor_index)
                .map(|b| next_cost < *b)
                .unwrap_or(true);
            if improves {
                best.insert(adj.neighbor_index, next_cost);
                frontier.push(FrontierEntry::new(next_cost, adj.neighbor_index));
            }
        }
    }

    let costs = settled
        .into_iter()
        .map(|(index, cost)| (graph.vertex_at(index).vertex_id, cost))
        .collect::<HashMap<_, _>>();
    ReachableSet::new(source, costs, warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Vertex};
    use crate::search::BreakerReason;

    const A: VertexId = VertexId(0);
    const B: VertexId = VertexId(1);
    const C: VertexId = VertexId(2);

    fn triangle() -> Graph {
        let vertices = vec![
            Vertex::new(0, 0.0, 0.0),
            Vertex::new(1, 1000.0, 0.0),
            Vertex::new(2, 1000.0, 1000.0),
        ];
        let edges = vec![
            Edge::new(0, 0, 1, 1000.0),
            Edge::new(1, 1, 2, 1000.0),
            Edge::new(2, 0, 2, 2500.0),
        ];
        Graph::build(vertices, edges).unwrap()
    }

    /// a star around vertex 0: five spokes within a half mile and two beyond,
    /// with the far spokes only reachable through long edges.
    fn entrance_star() -> Graph {
        let vertices = (0..8)
            .map(|i| Vertex::new(i, i as f64 * 100.0, 0.0))
            .collect::<Vec<_>>();
        let edges = vec![
            Edge::new(0, 0, 1, 300.0),
            Edge::new(1, 0, 2, 800.0),
            Edge::new(2, 2, 3, 900.0),
            Edge::new(3, 3, 4, 940.0),
            Edge::new(4, 0, 5, 2000.0),
            Edge::new(5, 5, 6, 700.0),
            Edge::new(6, 4, 7, 100.0),
        ];
        Graph::build(vertices, edges).unwrap()
    }

    /// 10 x 10 grid with 100 ft blocks
    fn grid() -> Graph {
        let n = 10;
        let vertices = (0..n * n)
            .map(|i| Vertex::new(i, (i % n) as f64 * 100.0, (i / n) as f64 * 100.0))
            .collect::<Vec<_>>();
        let mut edges = vec![];
        for i in 0..n * n {
            if i % n < n - 1 {
                edges.push(Edge::new(edges.len() as i64, i, i + 1, 100.0));
            }
            if i / n < n - 1 {
                edges.push(Edge::new(edges.len() as i64, i, i + n, 100.0));
            }
        }
        Graph::build(vertices, edges).unwrap()
    }

    #[test]
    fn test_triangle_cutoff() {
        let graph = triangle();
        let result = driving_distance(&graph, &[A], 1600.0, &SearchBudget::unlimited());
        let reachable = result.get(&A).unwrap();
        assert_eq!(reachable.len(), 2);
        assert_eq!(reachable.cost(&A), Some(0.0));
        assert_eq!(reachable.cost(&B), Some(1000.0));
        assert!(!reachable.contains(&C));
        assert!(!reachable.is_truncated());
    }

    #[test]
    fn test_triangle_prefers_shorter_two_hop_path() {
        let graph = triangle();
        let reachable =
            driving_distance_single(&graph, A, 5000.0, &SearchBudget::unlimited(), None);
        assert_eq!(reachable.cost(&C), Some(2000.0));
    }

    #[test]
    fn test_half_mile_walkshed_size() {
        let graph = entrance_star();
        let v = VertexId(0);
        let result = driving_distance(&graph, &[v], 2640.0, &SearchBudget::unlimited());
        let reachable = result.get(&v).unwrap();
        // 1 (300), 2 (800), 3 (1700), 4 (2640), 5 (2000) plus the source itself
        assert_eq!(reachable.len(), 6);
        assert_eq!(reachable.cost(&VertexId(4)), Some(2640.0));
        assert!(!reachable.contains(&VertexId(6)));
        assert!(!reachable.contains(&VertexId(7)));
    }

    #[test]
    fn test_source_always_present_at_zero() {
        let graph = grid();
        for cutoff in [0.0, 50.0, 100.0, 450.0] {
            let result = driving_distance(
                &graph,
                &[VertexId(0), VertexId(55), VertexId(99)],
                cutoff,
                &SearchBudget::unlimited(),
            );
            for (source, reachable) in result.iter() {
                assert_eq!(reachable.source, *source);
                assert_eq!(reachable.cost(source), Some(0.0));
            }
        }
    }

    #[test]
    fn test_monotone_in_cutoff() {
        let graph = grid();
        let budget = SearchBudget::unlimited();
        let cutoffs = [0.0, 100.0, 250.0, 400.0, 900.0, 1800.0];
        for window in cutoffs.windows(2) {
            let small = driving_distance_single(&graph, VertexId(44), window[0], &budget, None);
            let large = driving_distance_single(&graph, VertexId(44), window[1], &budget, None);
            assert!(small.is_subset_of(&large));
            assert!(small.len() <= large.len());
        }
    }

    #[test]
    fn test_grid_costs_are_manhattan() {
        let graph = grid();
        let reachable =
            driving_distance_single(&graph, VertexId(0), 300.0, &SearchBudget::unlimited(), None);
        // all grid vertices with manhattan distance <= 3 blocks from the corner
        assert_eq!(reachable.len(), 10);
        assert_eq!(reachable.cost(&VertexId(21)), Some(300.0));
        assert_eq!(reachable.max_cost(), 300.0);
    }

    #[test]
    fn test_missing_source_is_source_only() {
        let graph = triangle();
        let missing = VertexId(404);
        let result = driving_distance(&graph, &[missing, A], 1600.0, &SearchBudget::unlimited());
        let reachable = result.get(&missing).unwrap();
        assert_eq!(reachable.len(), 1);
        assert_eq!(reachable.cost(&missing), Some(0.0));
        assert_eq!(result.get(&A).unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_sources_searched_once() {
        let graph = triangle();
        let result = driving_distance(&graph, &[A, B, A], 1000.0, &SearchBudget::unlimited());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_settled_limit_keeps_partial_result() {
        let graph = grid();
        let budget = SearchBudget {
            max_settled: Some(5),
            timeout: None,
        };
        let partial = driving_distance_single(&graph, VertexId(0), 2000.0, &budget, None);
        let full =
            driving_distance_single(&graph, VertexId(0), 2000.0, &SearchBudget::unlimited(), None);
        assert_eq!(partial.len(), 5);
        assert!(partial.is_truncated());
        assert_eq!(
            partial.warning().map(|w| w.reason),
            Some(BreakerReason::MaxSettled(5))
        );
        assert!(partial.is_subset_of(&full));
        assert_eq!(partial.cost(&VertexId(0)), Some(0.0));
    }

    #[test]
    fn test_cancelled_search_does_not_affect_others() {
        let graph = grid();
        let token = CancellationToken::new();
        token.cancel();
        let budget = SearchBudget::unlimited();
        let cancelled = driving_distance_single(&graph, VertexId(0), 500.0, &budget, Some(&token));
        let other = driving_distance_single(
            &graph,
            VertexId(0),
            500.0,
            &budget,
            Some(&CancellationToken::new()),
        );
        assert_eq!(cancelled.len(), 1);
        assert_eq!(
            cancelled.warning().map(|w| w.reason),
            Some(BreakerReason::Cancelled)
        );
        assert!(!other.is_truncated());
        assert_eq!(other.len(), 21);
    }

    #[test]
    fn test_batch_cancellation_is_per_source() {
        let graph = grid();
        let token = CancellationToken::new();
        token.cancel();
        let tokens = HashMap::from([
            (VertexId(0), token),
            (VertexId(99), CancellationToken::new()),
        ]);
        let sources = [VertexId(0), VertexId(55), VertexId(99)];
        let budget = SearchBudget::unlimited();
        let result = driving_distance_cancellable(&graph, &sources, 500.0, &budget, &tokens);

        let cancelled = result.get(&VertexId(0)).unwrap();
        assert_eq!(
            cancelled.warning().map(|w| w.reason),
            Some(BreakerReason::Cancelled)
        );
        assert_eq!(cancelled.cost(&VertexId(0)), Some(0.0));
        assert!(!result.get(&VertexId(55)).unwrap().is_truncated());
        assert!(!result.get(&VertexId(99)).unwrap().is_truncated());
        assert_eq!(result.get(&VertexId(99)).unwrap().len(), 21);
    }

    #[test]
    fn test_invalid_cutoff_only_reaches_source() {
        let graph = triangle();
        let budget = SearchBudget::unlimited();
        for cutoff in [-1.0, f64::NAN] {
            let reachable = driving_distance_single(&graph, A, cutoff, &budget, None);
            assert_eq!(reachable.vertex_ids(), vec![A]);
        }
    }
}
