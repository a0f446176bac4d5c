use thiserror::Error;

use crate::OsmNodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No street found matching \"{query}\"")]
    StreetNotFound {
        query: String,
        /// Street names present in the graph, to help correct the query
        samples: Vec<String>,
    },
    #[error("No path exists between nodes {from} and {to}")]
    NoPathExists { from: OsmNodeId, to: OsmNodeId },
    #[error("No nearby points found for snapping")]
    NoPointsFound,
    #[error("Invalid node index")]
    InvalidNodeIndex,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
