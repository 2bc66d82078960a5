use super::CutoffExceededWarning;
use crate::model::VertexId;
use itertools::Itertools;
use std::collections::HashMap;

/// vertices reachable from a source within the walking cutoff, each with its
/// shortest walking distance in feet. the source is always a member at cost 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachableSet {
    pub source: VertexId,
    costs: HashMap<VertexId, f64>,
    warning: Option<CutoffExceededWarning>,
}

impl ReachableSet {
    pub fn new(
        source: VertexId,
        mut costs: HashMap<VertexId, f64>,
        warning: Option<CutoffExceededWarning>,
    ) -> ReachableSet {
        costs.insert(source, 0.0);
        ReachableSet {
            source,
            costs,
            warning,
        }
    }

    /// the result for a source that is not part of the graph
    pub fn source_only(source: VertexId) -> ReachableSet {
        ReachableSet::new(source, HashMap::new(), None)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn contains(&self, vertex_id: &VertexId) -> bool {
        self.costs.contains_key(vertex_id)
    }

    pub fn cost(&self, vertex_id: &VertexId) -> Option<f64> {
        self.costs.get(vertex_id).copied()
    }

    pub fn costs(&self) -> &HashMap<VertexId, f64> {
        &self.costs
    }

    /// member vertex ids in ascending order
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.costs.keys().copied().sorted().collect_vec()
    }

    /// the largest cost among members, which is 0 for a source-only set
    pub fn max_cost(&self) -> f64 {
        self.costs.values().copied().fold(0.0, f64::max)
    }

    pub fn warning(&self) -> Option<&CutoffExceededWarning> {
        self.warning.as_ref()
    }

    /// true if a circuit breaker stopped the search and this set is partial
    pub fn is_truncated(&self) -> bool {
        self.warning.is_some()
    }

    /// true if every member of this set is in `other` with the identical cost.
    pub fn is_subset_of(&self, other: &ReachableSet) -> bool {
        self.costs
            .iter()
            .all(|(id, cost)| other.cost(id) == Some(*cost))
    }
}
