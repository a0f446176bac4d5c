use log::info;

use super::config::StreetGraphConfig;
use super::feature_collection::street_graph_from_geojson;
use crate::{Error, StreetGraph};

/// Loads the street graph described by the provided configuration
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or malformed
pub fn load_street_graph(config: &StreetGraphConfig) -> Result<StreetGraph, Error> {
    validate_config(config)?;

    info!(
        "Processing street data (GeoJSON): {}",
        config.graph_path.display()
    );

    let source = std::fs::read_to_string(&config.graph_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to read graph file '{}': {}",
                config.graph_path.display(),
                e
            ),
        )
    })?;
    let graph = street_graph_from_geojson(&source)?;
    drop(source);

    if graph.edge_count() == 0 {
        log::warn!("Street graph has no edges - every street query will fail");
    }

    // Parsing large GeoJSON documents allocates a lot of short-lived memory
    // that glibc keeps around. Release the free tail of the heap.
    //
    // # Safety
    //
    // This call is safe to use on linux with glibc implementation
    // which is checked by the cfg attribute in compile time.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
        if libc::malloc_trim(0) == 0 {
            log::debug!("No heap memory released after graph loading");
        } else {
            log::debug!("Successfully trimmed unused heap memory");
        }
    }

    Ok(graph)
}

fn validate_config(config: &StreetGraphConfig) -> Result<(), Error> {
    if !config.graph_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Graph file not found: {}", config.graph_path.display()),
        )));
    }

    if config.graph_path.is_dir() {
        return Err(Error::InvalidData(format!(
            "Graph path is a directory: {}",
            config.graph_path.display()
        )));
    }

    Ok(())
}
