use crate::graph::{Graph, VertexIndex};
use crate::{Error, Result};
use geo::{Coord, LineString};
use rand::prelude::*;

/// Parameters for a synthetic road grid
#[derive(Debug, Clone, Copy)]
pub struct RoadGridOptions {
    /// Number of intersections along x
    pub width: usize,
    /// Number of intersections along y
    pub height: usize,
    /// Distance between neighbouring intersections
    pub spacing: f64,
    /// Probability that a street segment is one-way
    pub one_way_ratio: f64,
    /// Probability that a street segment is missing altogether
    pub missing_ratio: f64,
}

impl RoadGridOptions {
    fn validate(&self) -> Result<()> {
        for (name, ratio) in [("one_way_ratio", self.one_way_ratio), ("missing_ratio", self.missing_ratio)] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::InvalidGridOptions(format!(
                    "{} must lie in [0, 1], got {}",
                    name, ratio
                )));
            }
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::InvalidGridOptions(format!(
                "spacing must be a finite non-negative number, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

impl Default for RoadGridOptions {
    fn default() -> Self {
        RoadGridOptions {
            width: 10,
            height: 10,
            spacing: 100.0,
            one_way_ratio: 0.1,
            missing_ratio: 0.05,
        }
    }
}

/// Generates a jittered street grid
///
/// Each street segment gets a bent three-point geometry, so edge costs are
/// slightly above the spacing. Two-way segments produce a `-direct` and a
/// `-reverse` edge, the way loaded datasets do; one-way segments produce only
/// the `-direct` edge in a random direction.
///
/// Fails with [`Error::InvalidGridOptions`] when a ratio lies outside `[0, 1]`
/// or the spacing is negative or not finite.
pub fn generate_road_grid<R: Rng + ?Sized>(options: RoadGridOptions, rng: &mut R) -> Result<Graph> {
    options.validate()?;
    let RoadGridOptions { width, height, spacing, .. } = options;
    let mut graph = Graph::with_capacity(width * height, 4 * width * height);

    let mut grid: Vec<VertexIndex> = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let jitter = spacing * 0.1;
            let coordinate = Coord {
                x: x as f64 * spacing + rng.gen_range(-jitter..=jitter),
                y: y as f64 * spacing + rng.gen_range(-jitter..=jitter),
            };
            let id = graph.vertex_count().to_string();
            grid.push(graph.add_vertex(id, coordinate)?);
        }
    }

    let mut segment = 0usize;
    for y in 0..height {
        for x in 0..width {
            let here = grid[y * width + x];
            let mut neighbours = Vec::with_capacity(2);
            if x + 1 < width {
                neighbours.push(grid[y * width + x + 1]);
            }
            if y + 1 < height {
                neighbours.push(grid[(y + 1) * width + x]);
            }

            for there in neighbours {
                if rng.gen_bool(options.missing_ratio) {
                    continue;
                }
                let start = graph.vertex(here).coordinate();
                let end = graph.vertex(there).coordinate();
                let bend = Coord {
                    x: (start.x + end.x) / 2.0 + rng.gen_range(-1.0..=1.0) * spacing * 0.05,
                    y: (start.y + end.y) / 2.0 + rng.gen_range(-1.0..=1.0) * spacing * 0.05,
                };
                let line = LineString::new(vec![start, bend, end]);
                let name = format!("segment.{}", segment);
                segment += 1;

                if rng.gen_bool(options.one_way_ratio) {
                    let (source, target, geometry) = if rng.gen_bool(0.5) {
                        (here, there, line)
                    } else {
                        (there, here, reversed(&line))
                    };
                    graph.add_edge(format!("{}-direct", name), source, target, Some(geometry))?;
                } else {
                    graph.add_edge(format!("{}-direct", name), here, there, Some(line.clone()))?;
                    graph.add_edge(format!("{}-reverse", name), there, here, Some(reversed(&line)))?;
                }
            }
        }
    }

    Ok(graph)
}

fn reversed(line: &LineString<f64>) -> LineString<f64> {
    LineString::new(line.0.iter().rev().copied().collect())
}
