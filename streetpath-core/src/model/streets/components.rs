//! Street network components - nodes and edges

use geo::{LineString, Point};

use super::StreetName;
use crate::{Meters, OsmNodeId};

/// Street graph node
#[derive(Debug, Clone)]
pub struct StreetNode {
    /// OSM ID of the node
    pub id: OsmNodeId,
    /// Node coordinates (lon, lat)
    pub geometry: Point<f64>,
}

/// Street graph edge (street segment)
#[derive(Debug, Clone)]
pub struct StreetEdge {
    /// Distinguishes parallel edges between the same pair of nodes
    pub key: u32,
    /// Segment length in meters, scaled in place by penalties
    pub length: Meters,
    /// Official name(s) of the segment, if any
    pub name: Option<StreetName>,
    /// Segment geometry, from source node to target node
    pub geometry: LineString<f64>,
}

impl StreetEdge {
    pub fn weight(&self) -> Meters {
        self.length
    }

    /// All names carried by this edge, empty for unnamed segments
    pub fn names(&self) -> &[String] {
        self.name.as_ref().map(StreetName::names).unwrap_or_default()
    }

    /// Point at `fraction` (0.0..=1.0) of the geometry's arc length.
    ///
    /// Distances are planar in the geometry's own coordinates.
    pub fn point_at_fraction(&self, fraction: f64) -> Option<Point<f64>> {
        let fraction = fraction.clamp(0.0, 1.0);
        let segment_lengths: Vec<f64> = self
            .geometry
            .lines()
            .map(|line| line.dx().hypot(line.dy()))
            .collect();
        let total: f64 = segment_lengths.iter().sum();

        if total == 0.0 {
            return self.geometry.points().next();
        }

        let mut remaining = total * fraction;
        for (line, segment_length) in self.geometry.lines().zip(&segment_lengths) {
            if remaining <= *segment_length {
                let ratio = if *segment_length > 0.0 {
                    remaining / segment_length
                } else {
                    0.0
                };
                return Some(Point::new(
                    line.start.x + line.dx() * ratio,
                    line.start.y + line.dy() * ratio,
                ));
            }
            remaining -= segment_length;
        }

        self.geometry.points().last()
    }
}
