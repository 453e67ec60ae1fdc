//! The Traveling Salesman Problem as an [`OptProblem`] over 2-opt moves.
//!
//! Cities are numbered `0..n`. A state is a closed tour
//! `[0, perm(1..n), 0]`, so the first city is fixed and there are `(n-1)!`
//! states. An action `(i, j)` exchanges the `i`-th and `j`-th edges of the tour
//! by reversing the cities between them:
//!
//! ```text
//! result([v0..vn], (i, j)) = [v0..vi] ++ [vj..v(i+1)] ++ [v(j+1)..vn]
//! ```
//!
//! The objective is the negated tour length.

use std::path::Path;

use log::debug;
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use super::problem::OptProblem;
use crate::{Error, Result};

/// Closed tour: starts and ends at city 0
pub type Tour = Vec<usize>;

/// 2-opt move exchanging edges `i` and `j`
pub type TwoOpt = (usize, usize);

/// Validated instance; only built through the constructors below.
#[derive(Debug, Clone, Serialize)]
pub struct Tsp {
    pub name: String,
    distances: Vec<Vec<f64>>,
}

impl Tsp {
    /// Build an instance from a square, symmetric, non-negative matrix.
    pub fn from_matrix(name: impl Into<String>, distances: Vec<Vec<f64>>) -> Result<Self> {
        let n = distances.len();
        if n < 2 {
            return Err(Error::InvalidInstance {
                message: format!("need at least 2 cities, got {n}"),
            });
        }
        if let Some((i, row)) = distances.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::InvalidInstance {
                message: format!("row {i} has {} entries, expected {n}", row.len()),
            });
        }
        for (i, row) in distances.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::InvalidInstance {
                        message: format!("distance ({i}, {j}) = {d} must be finite and non-negative"),
                    });
                }
                if (d - distances[j][i]).abs() > 1e-9 {
                    return Err(Error::InvalidInstance {
                        message: format!("matrix is not symmetric at ({i}, {j})"),
                    });
                }
            }
        }
        Ok(Self {
            name: name.into(),
            distances,
        })
    }

    /// Euclidean distances between points
    pub fn from_coordinates(name: impl Into<String>, points: &[(f64, f64)]) -> Result<Self> {
        Self::from_points(name, points, |d| d)
    }

    fn from_points(
        name: impl Into<String>,
        points: &[(f64, f64)],
        round: impl Fn(f64) -> f64,
    ) -> Result<Self> {
        let distances = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| round((x1 - x2).hypot(y1 - y2)))
                    .collect()
            })
            .collect();
        Self::from_matrix(name, distances)
    }

    /// `n` cities uniformly scattered over a 1000x1000 square
    pub fn random_euclidean<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
            .collect();
        Self::from_coordinates(format!("random{n}"), &points)
    }

    /// Parse a TSPLIB instance. Supports `EUC_2D` coordinates (rounded to the
    /// nearest integer, as TSPLIB prescribes) and `EXPLICIT` `FULL_MATRIX`
    /// weights.
    pub fn from_tsplib(text: &str) -> Result<Self> {
        let mut name = String::from("unnamed");
        let mut dimension: Option<usize> = None;
        let mut weight_type = String::from("EUC_2D");
        let mut weight_format: Option<String> = None;
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let mut section = None;
        for line in lines.by_ref() {
            if line == "EOF" {
                break;
            }
            if line.starts_with("NODE_COORD_SECTION") || line.starts_with("EDGE_WEIGHT_SECTION") {
                section = Some(line.trim_end_matches(':').trim().to_string());
                break;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "NAME" => name = value.to_string(),
                "TYPE" if value != "TSP" => {
                    return Err(Error::UnsupportedTsplib {
                        field: "TYPE".to_string(),
                        value: value.to_string(),
                    });
                }
                "DIMENSION" => {
                    dimension = Some(value.parse().map_err(|_| Error::InvalidInstance {
                        message: format!("invalid DIMENSION '{value}'"),
                    })?);
                }
                "EDGE_WEIGHT_TYPE" => weight_type = value.to_string(),
                "EDGE_WEIGHT_FORMAT" => weight_format = Some(value.to_string()),
                _ => {}
            }
        }

        let n = dimension.ok_or_else(|| Error::InvalidInstance {
            message: "missing DIMENSION".to_string(),
        })?;
        if n < 2 {
            return Err(Error::InvalidInstance {
                message: format!("need at least 2 cities, got {n}"),
            });
        }
        let too_large = || Error::InvalidInstance {
            message: format!("DIMENSION {n} is too large"),
        };
        let numbers: Vec<f64> = lines
            .take_while(|l| *l != "EOF" && !l.ends_with("SECTION"))
            .flat_map(str::split_whitespace)
            .map(|token| {
                token.parse::<f64>().map_err(|_| Error::InvalidInstance {
                    message: format!("invalid number '{token}'"),
                })
            })
            .collect::<Result<_>>()?;

        let instance = match (section.as_deref(), weight_type.as_str()) {
            (Some("NODE_COORD_SECTION"), "EUC_2D") => {
                if numbers.len() != n.checked_mul(3).ok_or_else(too_large)? {
                    return Err(Error::InvalidInstance {
                        message: format!("expected {n} coordinate lines"),
                    });
                }
                let points: Vec<(f64, f64)> =
                    numbers.chunks_exact(3).map(|c| (c[1], c[2])).collect();
                Self::from_points(name, &points, f64::round)?
            }
            (Some("EDGE_WEIGHT_SECTION"), "EXPLICIT") => {
                match weight_format.as_deref() {
                    Some("FULL_MATRIX") => {}
                    other => {
                        return Err(Error::UnsupportedTsplib {
                            field: "EDGE_WEIGHT_FORMAT".to_string(),
                            value: other.unwrap_or("(missing)").to_string(),
                        });
                    }
                }
                let entries = n.checked_mul(n).ok_or_else(too_large)?;
                if numbers.len() != entries {
                    return Err(Error::InvalidInstance {
                        message: format!("expected {entries} matrix entries, got {}", numbers.len()),
                    });
                }
                let rows = numbers.chunks_exact(n).map(<[f64]>::to_vec).collect();
                Self::from_matrix(name, rows)?
            }
            (None, _) => {
                return Err(Error::InvalidInstance {
                    message: "no data section".to_string(),
                });
            }
            (_, other) => {
                return Err(Error::UnsupportedTsplib {
                    field: "EDGE_WEIGHT_TYPE".to_string(),
                    value: other.to_string(),
                });
            }
        };
        debug!("loaded TSPLIB instance '{}' with {n} cities", instance.name);
        Ok(instance)
    }

    /// Read a TSPLIB file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read {}", path.display()),
            source,
        })?;
        Self::from_tsplib(&text)
    }

    pub fn cities(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.distances[a][b]
    }

    /// Total length of a closed tour
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }

    /// Whether `tour` is `[0, perm(1..n), 0]`
    pub fn is_valid_tour(&self, tour: &[usize]) -> bool {
        let n = self.cities();
        if tour.len() != n + 1 || tour.first() != Some(&0) || tour.last() != Some(&0) {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &tour[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Change in tour length removed by `(i, j)`
    fn delta(&self, tour: &[usize], (i, j): TwoOpt) -> f64 {
        let (v1, v2) = (tour[i], tour[i + 1]);
        let (v3, v4) = (tour[j], tour[j + 1]);
        self.distance(v1, v2) + self.distance(v3, v4)
            - self.distance(v1, v3)
            - self.distance(v2, v4)
    }
}

impl OptProblem for Tsp {
    type State = Tour;
    type Action = TwoOpt;

    fn initial(&self) -> Tour {
        (0..self.cities()).chain(std::iter::once(0)).collect()
    }

    /// All pairs of non-adjacent edges. Independent of the tour itself.
    fn actions(&self, _state: &Tour) -> Vec<TwoOpt> {
        let n = self.cities();
        let mut actions = Vec::new();
        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n {
                // edge n-1 wraps around to edge 0
                if (j + 1) % n != i {
                    actions.push((i, j));
                }
            }
        }
        actions
    }

    fn result(&self, state: &Tour, (i, j): TwoOpt) -> Tour {
        let mut succ = state.clone();
        succ[i + 1..=j].reverse();
        succ
    }

    fn obj_val(&self, state: &Tour) -> f64 {
        -self.tour_length(state)
    }

    fn successor_value(&self, state: &Tour, action: TwoOpt) -> f64 {
        self.obj_val(state) + self.delta(state, action)
    }

    /// Evaluates the tour once and applies each delta to it.
    fn successor_values(&self, state: &Tour) -> Vec<(TwoOpt, f64)> {
        let value = self.obj_val(state);
        self.actions(state)
            .into_iter()
            .map(|action| (action, value + self.delta(state, action)))
            .collect()
    }

    fn random_reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Tour {
        let mut middle: Vec<usize> = (1..self.cities()).collect();
        middle.shuffle(rng);
        let mut tour = Vec::with_capacity(self.cities() + 1);
        tour.push(0);
        tour.extend(middle);
        tour.push(0);
        tour
    }
}
