//! Ant Quest path search library
//!
//! Finds short routes across small weighted maps with Ant Colony
//! Optimization.
//!
//! # Features
//!
//! - Validated undirected graphs loaded from JSON or sectioned text files
//! - Seedable ACO path search with an injectable random source
//! - The six-location demo map with seeded random edges
//! - SVG rendering of the map with the best route highlighted
//! - Repeated-trial benchmarking with route frequencies and CSV export
//!
//! # Example
//!
//! ```
//! use ant_quest::graph::{Edge, Graph, Node};
//! use ant_quest::heuristics::aco::{search, ACOConfig};
//!
//! let nodes = vec![
//!     Node::new("A", "Ant hill", 0.0, 0.0),
//!     Node::new("B", "Bridge", 1.0, 0.0),
//!     Node::new("C", "Castle", 2.0, 0.0),
//! ];
//! let edges = vec![Edge::new("A", "B", 5.0), Edge::new("B", "C", 3.0)];
//! let graph = Graph::new("chain", nodes, edges).unwrap();
//!
//! let config = ACOConfig { seed: Some(42), ..Default::default() };
//! let best = search(&graph, "A", "C", &config);
//!
//! assert_eq!(best.path, vec!["A", "B", "C"]);
//! assert_eq!(best.total_distance, 8.0);
//! ```

pub mod graph;
pub mod path;
pub mod heuristics;
pub mod map;
pub mod benchmark;
pub mod visualization;

pub use graph::Graph;
pub use path::BestPath;
