use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// element of the search frontier. ordered so that a [std::collections::BinaryHeap]
/// (a max-heap) pops the lowest cost first, with ties going to the lowest vertex index.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FrontierEntry {
    pub cost: OrderedFloat<f64>,
    pub vertex_index: usize,
}

impl FrontierEntry {
    pub fn new(cost: f64, vertex_index: usize) -> FrontierEntry {
        FrontierEntry {
            cost: OrderedFloat(cost),
            vertex_index,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex_index.cmp(&self.vertex_index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
