use log::info;

use super::StreetQuery;
use crate::{Error, StreetGraph};

/// Multiplies the length of every edge matching `query` by `factor`.
///
/// The graph is changed for the rest of its lifetime; apply penalties before
/// computing any path. Returns the number of penalised edges.
///
/// # Errors
///
/// Returns an error if `factor` is negative or not finite
pub fn apply_penalty(
    graph: &mut StreetGraph,
    query: &StreetQuery,
    factor: f64,
) -> Result<usize, Error> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(Error::InvalidData(format!(
            "Penalty factor must be a non-negative number, got {factor}"
        )));
    }

    let mut penalised = 0;
    for edge in graph.graph.edge_weights_mut() {
        if query.matches_edge(edge) {
            edge.length *= factor;
            penalised += 1;
        }
    }

    info!("Applied penalty x{factor} to {penalised} edges matching \"{query}\"");
    Ok(penalised)
}
