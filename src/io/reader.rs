use geo::{Coord, LineString};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path as FsPath;

use crate::graph::{Graph, VertexIndex};
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Builds a [`Graph`] from a GeoJSON `FeatureCollection` of road segments
///
/// Every feature yields a `<id>-direct` edge (start -> end) and a
/// `<id>-reverse` edge (end -> start), both carrying the feature geometry
/// oriented from their source to their target. Line ends that share an exact
/// coordinate share a vertex; vertices are numbered "0", "1", ... in
/// creation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphReader;

impl GraphReader {
    pub fn new() -> Self {
        GraphReader
    }

    /// Reads a GeoJSON file
    pub fn read(&self, path: impl AsRef<FsPath>) -> Result<Graph> {
        let path = path.as_ref();
        info!("reading road network from {}", path.display());
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Reads GeoJSON from any reader
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Graph> {
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        self.build(collection)
    }

    /// Reads GeoJSON from a string
    pub fn read_str(&self, geojson: &str) -> Result<Graph> {
        let collection: FeatureCollection = serde_json::from_str(geojson)?;
        self.build(collection)
    }

    fn build(&self, collection: FeatureCollection) -> Result<Graph> {
        let features = collection.features.len();
        let mut graph = Graph::with_capacity(features, 2 * features);

        for (position, feature) in collection.features.into_iter().enumerate() {
            let id = feature_id(feature.id.as_ref(), position);
            let geometry = to_line_string(&id, feature.geometry)?;
            self.create_edges(&mut graph, &id, geometry)?;
        }

        info!(
            "loaded {} features: {} vertices, {} edges",
            features,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Adds the direct and reverse edges of one road segment
    pub fn create_edges(&self, graph: &mut Graph, id: &str, geometry: LineString<f64>) -> Result<()> {
        let (start, end) = match (geometry.0.first(), geometry.0.last()) {
            (Some(start), Some(end)) if geometry.0.len() >= 2 => (*start, *end),
            _ => {
                return Err(Error::InvalidGeometry {
                    feature: id.to_string(),
                    reason: "a line needs at least two points".to_string(),
                })
            }
        };

        let source = get_or_create_vertex(graph, start)?;
        let target = get_or_create_vertex(graph, end)?;

        let reverse_geometry = LineString::new(geometry.0.iter().rev().copied().collect());
        graph.add_edge(format!("{}-direct", id), source, target, Some(geometry))?;
        graph.add_edge(format!("{}-reverse", id), target, source, Some(reverse_geometry))?;
        Ok(())
    }
}

fn get_or_create_vertex(graph: &mut Graph, coordinate: Coord<f64>) -> Result<VertexIndex> {
    match graph.find_vertex_by_coordinate(coordinate) {
        Some(vertex) => Ok(vertex),
        None => {
            let id = graph.vertex_count().to_string();
            debug!("new vertex {} at ({}, {})", id, coordinate.x, coordinate.y);
            graph.add_vertex(id, coordinate)
        }
    }
}

fn feature_id(id: Option<&Value>, position: usize) -> String {
    match id {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => position.to_string(),
    }
}

/// Extracts the line of a feature; multi-lines contribute their first component
fn to_line_string(feature: &str, geometry: Option<RawGeometry>) -> Result<LineString<f64>> {
    let geometry = geometry.ok_or_else(|| Error::UnsupportedGeometry("null".to_string()))?;
    let invalid = |reason: String| Error::InvalidGeometry {
        feature: feature.to_string(),
        reason,
    };

    match geometry.kind.as_str() {
        "LineString" => {
            let positions: Vec<Vec<f64>> =
                serde_json::from_value(geometry.coordinates).map_err(|e| invalid(e.to_string()))?;
            to_coords(&positions).map_err(invalid)
        }
        "MultiLineString" => {
            let lines: Vec<Vec<Vec<f64>>> =
                serde_json::from_value(geometry.coordinates).map_err(|e| invalid(e.to_string()))?;
            match lines.first() {
                Some(first) => to_coords(first).map_err(invalid),
                None => Err(invalid("empty MultiLineString".to_string())),
            }
        }
        other => Err(Error::UnsupportedGeometry(other.to_string())),
    }
}

fn to_coords(positions: &[Vec<f64>]) -> std::result::Result<LineString<f64>, String> {
    if positions.len() < 2 {
        return Err("a line needs at least two points".to_string());
    }
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(format!("position {:?} has fewer than two ordinates", position)),
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(LineString::new)
}
