use std::io::Write;
use std::path::PathBuf;

use streetpath_core::prelude::*;

use crate::config::RouteSettings;
use crate::error::AppError;
use crate::model::{load_graph, save_map};

/// `streetpath route`: prints the streets along the shortest path, one per
/// line, then writes the map and the optional GeoJSON export.
pub fn run_route(settings: &RouteSettings, out: &mut impl Write) -> Result<StreetRoute, AppError> {
    let mut graph = load_graph(&settings.graph)?;

    if let Some((street, factor)) = &settings.penalty {
        let penalised = apply_penalty(&mut graph, street, *factor)?;
        if penalised == 0 {
            tracing::warn!("Penalty street \"{street}\" matched no segment");
        }
    }

    let route = find_route(&graph, &settings.from, &settings.to)?;

    let stdout_error = |source| AppError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    };
    for street in &route.streets {
        writeln!(out, "{street}").map_err(stdout_error)?;
    }

    let output = save_map(&graph, Some(&route.path), &settings.render)?;
    tracing::info!("Map with path saved to {}", output.display());

    if let Some(path) = &settings.geojson {
        let geojson = route.to_geojson_string(&graph)?;
        std::fs::write(path, geojson).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Route exported to {}", path.display());
    }

    Ok(route)
}
