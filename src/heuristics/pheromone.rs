//! Pheromone table keyed by directed node pairs.

use crate::graph::Graph;
use std::collections::HashMap;

/// Pheromone levels for every directed node pair joined by an edge.
///
/// Parallel edges between the same two nodes share one entry per direction.
/// Both directions of a pair are always written together, so the table
/// stays symmetric.
#[derive(Debug, Clone)]
pub struct PheromoneTable {
    levels: HashMap<(usize, usize), f64>,
}

impl PheromoneTable {
    /// Seed both directions of every edge with `initial`
    pub fn new(graph: &Graph, initial: f64) -> Self {
        let mut levels = HashMap::with_capacity(graph.edge_count() * 2);
        for from in 0..graph.node_count() {
            for inc in graph.incident(from) {
                levels.insert((from, inc.neighbor), initial);
            }
        }
        PheromoneTable { levels }
    }

    /// Pheromone on the directed pair `from -> to`; 0 for pairs without an edge
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.levels.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Overwrite both directions of a pair
    pub fn set(&mut self, a: usize, b: usize, value: f64) {
        self.levels.insert((a, b), value);
        self.levels.insert((b, a), value);
    }

    /// Multiply every entry by `1 - rate`
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for level in self.levels.values_mut() {
            *level *= keep;
        }
    }

    /// Add `amount` to both directions of a pair
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        *self.levels.entry((a, b)).or_insert(0.0) += amount;
        if a != b {
            *self.levels.entry((b, a)).or_insert(0.0) += amount;
        }
    }

    /// Number of directed entries
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sum over all directed entries
    pub fn total(&self) -> f64 {
        self.levels.values().sum()
    }

    /// Check that every entry equals its reverse
    pub fn is_symmetric(&self) -> bool {
        self.levels
            .iter()
            .all(|(&(a, b), &v)| self.levels.get(&(b, a)).map_or(false, |&w| (v - w).abs() <= 1e-12))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn create_test_graph() -> Graph {
        let nodes = vec![
            Node::new("A", "A", 0.0, 0.0),
            Node::new("B", "B", 1.0, 0.0),
            Node::new("C", "C", 2.0, 0.0),
        ];
        let edges = vec![
            Edge::new("A", "B", 1.0),
            Edge::new("B", "A", 2.0),
            Edge::new("B", "C", 1.0),
        ];
        Graph::new("test", nodes, edges).unwrap()
    }

    #[test]
    fn test_initialization() {
        let graph = create_test_graph();
        let table = PheromoneTable::new(&graph, 1.0);
        // parallel A-B edges collapse onto one pair
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0, 1), 1.0);
        assert_eq!(table.get(1, 0), 1.0);
        assert_eq!(table.get(2, 1), 1.0);
        assert_eq!(table.get(0, 2), 0.0);
        assert!(table.is_symmetric());
    }

    #[test]
    fn test_evaporate_then_deposit() {
        let graph = create_test_graph();
        let mut table = PheromoneTable::new(&graph, 1.0);

        table.evaporate(0.5);
        assert!((table.total() - 2.0).abs() < 1e-12);

        table.deposit(0, 1, 0.25);
        table.deposit(1, 0, 0.25);
        assert!((table.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((table.get(1, 0) - 1.0).abs() < 1e-12);
        assert!((table.get(1, 2) - 0.5).abs() < 1e-12);
        assert!(table.is_symmetric());

        table.evaporate(1.0);
        assert_eq!(table.total(), 0.0);
    }
}
