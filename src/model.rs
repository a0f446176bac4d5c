use std::io::Write;
use std::path::{Path, PathBuf};

use streetpath_core::prelude::*;

use crate::config::{MapSettings, RenderSettings};
use crate::error::AppError;

pub fn load_graph(path: &Path) -> Result<StreetGraph, AppError> {
    let graph = load_street_graph(&StreetGraphConfig::new(path))?;
    tracing::info!(
        "Loaded street graph from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Renders the graph with an optional path and writes it to the configured
/// output
pub fn save_map(
    graph: &StreetGraph,
    path: Option<&NodePath>,
    settings: &RenderSettings,
) -> Result<PathBuf, AppError> {
    render_map(graph, path, settings.tiles.as_ref())
        .with_zoom(settings.zoom)
        .with_assets(settings.assets.clone())
        .save(&settings.output)?;
    Ok(settings.output.clone())
}

/// `streetpath map`
pub fn run_map(settings: &MapSettings, out: &mut impl Write) -> Result<(), AppError> {
    let graph = load_graph(&settings.graph)?;
    let output = save_map(&graph, None, &settings.render)?;
    writeln!(out, "Map saved to {}", output.display()).map_err(|source| AppError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

/// `streetpath streets`
pub fn run_streets(graph_path: &Path, limit: usize, out: &mut impl Write) -> Result<(), AppError> {
    let graph = load_graph(graph_path)?;
    let names = graph.street_names();

    let stdout_error = |source| AppError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    };
    writeln!(out, "{} distinct street names", names.len()).map_err(stdout_error)?;
    for name in names.iter().take(limit) {
        writeln!(out, "{name}").map_err(stdout_error)?;
    }
    if names.len() > limit {
        writeln!(out, "... and {} more", names.len() - limit).map_err(stdout_error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_network;

    #[test]
    fn lists_sorted_street_names_with_limit() {
        let (_dir, graph) = write_network();
        let mut out = Vec::new();
        run_streets(&graph, 2, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "3 distinct street names\nMain Street\nPark Avenue\n... and 1 more\n"
        );
    }

    #[test]
    fn saves_network_map() {
        let (dir, graph) = write_network();
        let settings = MapSettings {
            graph,
            render: RenderSettings {
                tiles: None,
                output: dir.path().join("map.html"),
                zoom: 13,
                assets: LeafletAssets::default(),
            },
        };
        let mut out = Vec::new();
        run_map(&settings, &mut out).unwrap();

        let html = std::fs::read_to_string(dir.path().join("map.html")).unwrap();
        assert!(html.contains("Park Avenue"));
        assert!(html.contains("], 13);"));
        assert!(String::from_utf8(out).unwrap().starts_with("Map saved to"));
    }

    #[test]
    fn missing_graph_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_graph(&dir.path().join("nope.geojson"));
        assert!(matches!(
            result,
            Err(AppError::Core(streetpath_core::Error::IoError(_)))
        ));
    }
}
