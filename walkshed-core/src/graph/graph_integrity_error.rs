use crate::model::{EdgeId, VertexId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphIntegrityError {
    #[error("edge '{edge_id}' references vertex '{vertex_id}' which is not in the vertex list")]
    DanglingEdgeReference { edge_id: EdgeId, vertex_id: VertexId },
    #[error("vertex id '{0}' appears more than once in the vertex list")]
    DuplicateVertexId(VertexId),
    #[error("edge id '{0}' appears more than once in the edge list")]
    DuplicateEdgeId(EdgeId),
    #[error("edge '{0}' has invalid length {1}, must be finite and non-negative")]
    InvalidEdgeLength(EdgeId, f64),
    #[error("vertex '{0}' has a non-finite coordinate ({1}, {2})")]
    NonFiniteCoordinate(VertexId, f64, f64),
}
