//! Problem definition: coordinates and the geodesic distance matrix.

use crate::error::{InvalidInput, SolveError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Check that the coordinate is finite and within the WGS84 range.
    pub fn is_in_range(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate in kilometers.
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

/// Symmetric pairwise distance matrix in kilometers.
///
/// Built once per solve and read-only afterwards. Square, zero diagonal,
/// symmetric, every entry finite and non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrix {
    node_count: usize,
    /// Row-major cells, `node_count * node_count` entries.
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Validate the coordinates and build the full pairwise matrix.
    ///
    /// Fails with `InvalidInput` if fewer than two coordinates are given or
    /// any coordinate is out of range.
    pub fn build(coordinates: &[Coordinate]) -> Result<Self, SolveError> {
        if coordinates.len() < 2 {
            return Err(SolveError::InvalidInput(InvalidInput::NotEnoughPoints {
                count: coordinates.len(),
            }));
        }

        for (index, coordinate) in coordinates.iter().enumerate() {
            if !coordinate.is_in_range() {
                return Err(SolveError::InvalidInput(
                    InvalidInput::CoordinateOutOfRange {
                        index,
                        latitude: coordinate.latitude,
                        longitude: coordinate.longitude,
                    },
                ));
            }
        }

        let n = coordinates.len();
        let mut cells = vec![0.0; n * n];

        // Rows are mutually independent. The haversine formula is symmetric
        // in its arguments, so row-parallel filling still yields an exactly
        // symmetric matrix.
        cells.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                if i != j {
                    *cell = coordinates[i].haversine_km(&coordinates[j]);
                }
            }
        });

        Ok(DistanceMatrix {
            node_count: n,
            cells,
        })
    }

    /// Number of nodes covered by the matrix.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distance between two node indices in kilometers.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.node_count + to]
    }
}

/// A TSP instance: the input coordinates plus their distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub coordinates: Vec<Coordinate>,
    pub matrix: DistanceMatrix,
}

impl Problem {
    /// Create a new instance, validating the input and building the matrix.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, SolveError> {
        let matrix = DistanceMatrix::build(&coordinates)?;
        Ok(Problem {
            coordinates,
            matrix,
        })
    }

    /// Number of nodes in the instance.
    pub fn node_count(&self) -> usize {
        self.matrix.node_count()
    }
}
