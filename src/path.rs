//! Path representations produced by the search engine.
//!
//! `AntPath` is one ant's successful walk; `BestPath` is the running and
//! final result of a search, including the "no path" sentinel.

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A walk from start to end found by a single ant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntPath {
    /// Node ids from start to end
    pub path: Vec<String>,
    /// Sum of traversed edge distances
    pub total_distance: f64,
}

/// Best path found by a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestPath {
    /// Node ids from start to end; empty when nothing was found
    pub path: Vec<String>,
    /// Total distance, infinite when nothing was found
    #[serde(with = "distance_serde")]
    pub total_distance: f64,
    /// Algorithm that generated this result
    pub algorithm: String,
    /// Iterations actually executed
    pub iterations: usize,
    /// Number of ant walks that reached the end node
    pub valid_walks: usize,
    /// Best-so-far distance after each iteration
    #[serde(with = "history_serde")]
    pub history: Vec<f64>,
    /// Computation time in seconds
    pub computation_time: f64,
}

impl BestPath {
    /// The "no path" sentinel
    pub fn none() -> Self {
        BestPath {
            path: Vec::new(),
            total_distance: f64::INFINITY,
            algorithm: String::new(),
            iterations: 0,
            valid_walks: 0,
            history: Vec::new(),
            computation_time: 0.0,
        }
    }

    /// Whether a path was found at all
    pub fn is_found(&self) -> bool {
        !self.path.is_empty() && self.total_distance.is_finite()
    }

    /// Replace the current best if `candidate` is strictly shorter.
    /// Returns true when the best path changed.
    pub fn offer(&mut self, candidate: &AntPath) -> bool {
        if candidate.total_distance < self.total_distance {
            self.path = candidate.path.clone();
            self.total_distance = candidate.total_distance;
            true
        } else {
            false
        }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Route rendered as `A -> B -> C`
    pub fn route(&self) -> String {
        self.path.join(" -> ")
    }

    /// Check that the path is a simple walk from `start` to `end` over real
    /// edges of `graph` and that its distance is no shorter than the edges it
    /// uses allow. With parallel edges an ant may have taken a longer one.
    pub fn is_valid_in(&self, graph: &Graph, start: &str, end: &str) -> bool {
        if !self.is_found() {
            return false;
        }
        if self.path.first().map(String::as_str) != Some(start)
            || self.path.last().map(String::as_str) != Some(end)
        {
            return false;
        }

        let unique: HashSet<&String> = self.path.iter().collect();
        if unique.len() != self.path.len() {
            return false;
        }

        match graph.path_distance(self.path.as_slice()) {
            Some(shortest) => self.total_distance >= shortest - 1e-9 * shortest.max(1.0),
            None => false,
        }
    }
}

impl Default for BestPath {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Display for BestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Best path ({})", self.algorithm)?;
        if self.is_found() {
            writeln!(f, "  Route: {}", self.route())?;
            writeln!(f, "  Distance: {:.2}", self.total_distance)?;
        } else {
            writeln!(f, "  Route: no path found")?;
        }
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Valid walks: {}", self.valid_walks)?;
        write!(f, "  Time: {:.4}s", self.computation_time)
    }
}

// JSON has no infinity, so the sentinel distance travels as `null`.
mod distance_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

mod history_serde {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for v in values {
            seq.serialize_element(&v.is_finite().then_some(*v))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let raw = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|v| v.unwrap_or(f64::INFINITY)).collect())
    }
}
