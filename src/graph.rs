//! Module for building, loading and validating weighted undirected graphs.
//!
//! Nodes are addressed by string identifiers in files and in the public API,
//! and by dense indices inside the search engine. Two file formats are
//! supported: JSON (`.json`) and a sectioned text format close to TSP-LIB.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use serde::{Deserialize, Serialize};

/// A named location on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier used by edges and paths
    pub id: String,
    /// Display name
    pub name: String,
    /// X coordinate (rendering only)
    pub x: f64,
    /// Y coordinate (rendering only)
    pub y: f64,
}

impl Node {
    pub fn new(id: &str, name: &str, x: f64, y: f64) -> Self {
        Node {
            id: id.to_string(),
            name: name.to_string(),
            x,
            y,
        }
    }
}

/// An undirected, weighted connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Strictly positive travel distance
    #[serde(alias = "dist")]
    pub distance: f64,
}

impl Edge {
    pub fn new(from: &str, to: &str, distance: f64) -> Self {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        }
    }

    /// Check whether this edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    /// Index of the edge in the graph's edge list
    pub edge: usize,
    /// Index of the node at the far end
    pub neighbor: usize,
    pub distance: f64,
}

/// On-disk JSON layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphFile {
    #[serde(default)]
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

/// A validated graph with interned node identifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphFile", into = "GraphFile")]
pub struct Graph {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
    /// Incident edges per node, in edge input order
    adjacency: Vec<Vec<Incident>>,
}

impl TryFrom<GraphFile> for Graph {
    type Error = String;

    fn try_from(file: GraphFile) -> Result<Self, Self::Error> {
        Graph::new(&file.name, file.nodes, file.edges)
    }
}

impl From<Graph> for GraphFile {
    fn from(graph: Graph) -> Self {
        GraphFile {
            name: graph.name,
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

impl Graph {
    /// Build a graph, rejecting duplicate node ids, edges with unknown
    /// endpoints and non-positive or non-finite distances.
    pub fn new(name: &str, nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(format!("Duplicate node id: {}", node.id));
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for (e, edge) in edges.iter().enumerate() {
            let from = *index.get(&edge.from)
                .ok_or_else(|| format!("Edge {} references unknown node {}", e, edge.from))?;
            let to = *index.get(&edge.to)
                .ok_or_else(|| format!("Edge {} references unknown node {}", e, edge.to))?;
            if !edge.distance.is_finite() || edge.distance <= 0.0 {
                return Err(format!(
                    "Edge {}-{} has invalid distance {}",
                    edge.from, edge.to, edge.distance
                ));
            }

            adjacency[from].push(Incident { edge: e, neighbor: to, distance: edge.distance });
            if from != to {
                adjacency[to].push(Incident { edge: e, neighbor: from, distance: edge.distance });
            }
        }

        Ok(Graph {
            name: name.to_string(),
            nodes,
            edges,
            index,
            adjacency,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Dense index of a node id
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Find a node by id
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.node_index(id).map(|i| &self.nodes[i])
    }

    /// Edges incident to a node, in input order
    #[inline]
    pub fn incident(&self, idx: usize) -> &[Incident] {
        &self.adjacency[idx]
    }

    /// Node ids adjacent to `id`
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        match self.node_index(id) {
            Some(i) => self.adjacency[i]
                .iter()
                .map(|inc| self.nodes[inc.neighbor].id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check whether at least one edge joins `a` and `b`
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_distance(a, b).is_some()
    }

    /// Shortest distance among the (possibly parallel) edges joining `a` and `b`
    pub fn edge_distance(&self, a: &str, b: &str) -> Option<f64> {
        let from = self.node_index(a)?;
        let to = self.node_index(b)?;
        self.adjacency[from]
            .iter()
            .filter(|inc| inc.neighbor == to)
            .map(|inc| inc.distance)
            .min_by(|x, y| x.total_cmp(y))
    }

    /// Length of a path given as node ids, or `None` if two consecutive
    /// nodes are not adjacent.
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> Option<f64> {
        path.windows(2)
            .map(|pair| self.edge_distance(pair[0].as_ref(), pair[1].as_ref()))
            .sum()
    }

    /// Copy of this graph with every distance multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Result<Graph, String> {
        let edges = self.edges
            .iter()
            .map(|e| Edge::new(&e.from, &e.to, e.distance * factor))
            .collect();
        Graph::new(&self.name, self.nodes.clone(), edges)
    }

    /// Load a graph from a file, choosing the format from the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let is_json = path.as_ref()
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_text_file(path)
        }
    }

    /// Load a graph from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::open(&path)
            .map_err(|e| format!("Cannot open file: {}", e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("Invalid graph JSON: {}", e))
    }

    /// Load a graph from a sectioned text file
    pub fn from_text_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::open(&path)
            .map_err(|e| format!("Cannot open file: {}", e))?;
        Self::parse_text(BufReader::new(file))
    }

    /// Parse the sectioned text format:
    ///
    /// ```text
    /// NAME: demo
    /// NODE_SECTION
    /// A 0 0 Start camp
    /// B 10 0
    /// EDGE_SECTION
    /// A B 12.5
    /// EOF
    /// ```
    pub fn parse_text<R: BufRead>(reader: R) -> Result<Self, String> {
        let mut name = String::new();
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut section = String::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Read error: {}", e))?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line == "EOF" {
                continue;
            }

            if line.starts_with("NAME:") {
                name = line.replace("NAME:", "").trim().to_string();
                continue;
            }
            if line.starts_with("NODE_SECTION") {
                section = "nodes".to_string();
                continue;
            }
            if line.starts_with("EDGE_SECTION") {
                section = "edges".to_string();
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match section.as_str() {
                "nodes" => {
                    if parts.len() < 3 {
                        return Err(format!("Line {}: expected `<id> <x> <y> [name]`", lineno + 1));
                    }
                    let x: f64 = parts[1].parse()
                        .map_err(|_| format!("Line {}: invalid x coordinate", lineno + 1))?;
                    let y: f64 = parts[2].parse()
                        .map_err(|_| format!("Line {}: invalid y coordinate", lineno + 1))?;
                    let display = if parts.len() > 3 { parts[3..].join(" ") } else { parts[0].to_string() };
                    nodes.push(Node::new(parts[0], &display, x, y));
                }
                "edges" => {
                    if parts.len() < 3 {
                        return Err(format!("Line {}: expected `<from> <to> <distance>`", lineno + 1));
                    }
                    let distance: f64 = parts[2].parse()
                        .map_err(|_| format!("Line {}: invalid distance", lineno + 1))?;
                    edges.push(Edge::new(parts[0], parts[1], distance));
                }
                _ => {
                    log::warn!("Ignoring line {} outside of any section: {}", lineno + 1, line);
                }
            }
        }

        Graph::new(&name, nodes, edges)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Cannot serialize graph: {}", e))
    }

    /// Serialize to the sectioned text format
    pub fn to_text_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("NAME: {}\n", self.name));
        out.push_str("NODE_SECTION\n");
        for node in &self.nodes {
            out.push_str(&format!("{} {} {} {}\n", node.id, node.x, node.y, node.name));
        }
        out.push_str("EDGE_SECTION\n");
        for edge in &self.edges {
            out.push_str(&format!("{} {} {}\n", edge.from, edge.to, edge.distance));
        }
        out.push_str("EOF\n");
        out
    }

    /// Write the graph to disk; `.json` paths get JSON, anything else text
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        let is_json = path.extension().map(|e| e.eq_ignore_ascii_case("json")).unwrap_or(false);
        let content = if is_json {
            self.to_json_string()
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        } else {
            self.to_text_string()
        };
        std::fs::write(path, content)
    }

    /// Number of connected components (isolated nodes count as one each)
    pub fn connected_components(&self) -> usize {
        let mut seen = vec![false; self.nodes.len()];
        let mut components = 0;

        for start in 0..self.nodes.len() {
            if seen[start] {
                continue;
            }
            components += 1;
            seen[start] = true;
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                for inc in &self.adjacency[current] {
                    if !seen[inc.neighbor] {
                        seen[inc.neighbor] = true;
                        stack.push(inc.neighbor);
                    }
                }
            }
        }

        components
    }

    /// Check whether `end` can be reached from `start` at all
    pub fn is_reachable(&self, start: &str, end: &str) -> bool {
        let (Some(s), Some(t)) = (self.node_index(start), self.node_index(end)) else {
            return false;
        };
        let mut seen = HashSet::new();
        let mut stack = vec![s];
        seen.insert(s);
        while let Some(current) = stack.pop() {
            if current == t {
                return true;
            }
            for inc in &self.adjacency[current] {
                if seen.insert(inc.neighbor) {
                    stack.push(inc.neighbor);
                }
            }
        }
        false
    }

    /// Compute summary statistics
    pub fn statistics(&self) -> GraphStatistics {
        let distances: Vec<f64> = self.edges.iter().map(|e| e.distance).collect();
        let (min_distance, max_distance, avg_distance) = if distances.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                distances.iter().cloned().fold(f64::INFINITY, f64::min),
                distances.iter().cloned().fold(0.0, f64::max),
                distances.iter().sum::<f64>() / distances.len() as f64,
            )
        };

        let isolated_nodes = self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| self.adjacency[*i].is_empty())
            .map(|(_, n)| n.id.clone())
            .collect();

        let max_degree = self.adjacency.iter().map(|a| a.len()).max().unwrap_or(0);

        GraphStatistics {
            name: self.name.clone(),
            num_nodes: self.nodes.len(),
            num_edges: self.edges.len(),
            min_distance,
            max_distance,
            avg_distance,
            max_degree,
            components: self.connected_components(),
            isolated_nodes,
        }
    }
}

/// Summary statistics of a graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphStatistics {
    pub name: String,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub min_distance: f64,
    pub max_distance: f64,
    pub avg_distance: f64,
    pub max_degree: usize,
    pub components: usize,
    pub isolated_nodes: Vec<String>,
}

impl std::fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph: {}", self.name)?;
        writeln!(f, "  Nodes: {}", self.num_nodes)?;
        writeln!(f, "  Edges: {}", self.num_edges)?;
        writeln!(f, "  Distance: min {:.2}, avg {:.2}, max {:.2}",
            self.min_distance, self.avg_distance, self.max_distance)?;
        writeln!(f, "  Max degree: {}", self.max_degree)?;
        writeln!(f, "  Connected components: {}", self.components)?;
        if self.isolated_nodes.is_empty() {
            write!(f, "  Isolated nodes: none")
        } else {
            write!(f, "  Isolated nodes: {}", self.isolated_nodes.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph {
        let nodes = vec![
            Node::new("A", "Alpha", 0.0, 0.0),
            Node::new("B", "Beta", 1.0, 0.0),
            Node::new("C", "Gamma", 2.0, 0.0),
            Node::new("D", "Delta", 5.0, 5.0),
        ];
        let edges = vec![
            Edge::new("A", "B", 5.0),
            Edge::new("B", "C", 3.0),
            Edge::new("C", "B", 2.0),
        ];
        Graph::new("test", nodes, edges).unwrap()
    }

    #[test]
    fn test_graph_construction() {
        let graph = create_test_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_index("C"), Some(2));
        assert_eq!(graph.find_node("B").map(|n| n.name.as_str()), Some("Beta"));
        assert_eq!(graph.neighbors("B"), vec!["A", "C", "C"]);
        assert!(graph.neighbors("Z").is_empty());
    }

    #[test]
    fn test_parallel_edges_use_shortest() {
        let graph = create_test_graph();
        assert!(graph.has_edge("C", "B"));
        assert!(!graph.has_edge("A", "C"));
        assert_eq!(graph.edge_distance("B", "C"), Some(2.0));
        assert_eq!(graph.path_distance(&["A", "B", "C"]), Some(7.0));
        assert_eq!(graph.path_distance(&["A", "C"]), None);
        assert_eq!(graph.path_distance(&["A"]), Some(0.0));
    }

    #[test]
    fn test_rejects_malformed_input() {
        let nodes = vec![Node::new("A", "A", 0.0, 0.0), Node::new("A", "A", 1.0, 1.0)];
        assert!(Graph::new("dup", nodes, Vec::new()).is_err());

        let nodes = vec![Node::new("A", "A", 0.0, 0.0), Node::new("B", "B", 1.0, 1.0)];
        let unknown = vec![Edge::new("A", "X", 1.0)];
        assert!(Graph::new("unknown", nodes.clone(), unknown).is_err());

        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let edges = vec![Edge::new("A", "B", bad)];
            assert!(Graph::new("bad", nodes.clone(), edges).is_err());
        }
    }

    #[test]
    fn test_parse_text() {
        let text = "\
NAME: sample
# comment line
NODE_SECTION
A 0 0 Start camp
B 10 0
EDGE_SECTION
A B 12.5
EOF
";
        let graph = Graph::parse_text(text.as_bytes()).unwrap();
        assert_eq!(graph.name(), "sample");
        assert_eq!(graph.node(0).name, "Start camp");
        assert_eq!(graph.node(1).name, "B");
        assert_eq!(graph.edge_distance("B", "A"), Some(12.5));

        let reparsed = Graph::parse_text(graph.to_text_string().as_bytes()).unwrap();
        assert_eq!(reparsed.nodes(), graph.nodes());
        assert_eq!(reparsed.edges(), graph.edges());
    }

    #[test]
    fn test_parse_text_errors() {
        let bad_distance = "NODE_SECTION\nA 0 0\nB 1 1\nEDGE_SECTION\nA B far\n";
        assert!(Graph::parse_text(bad_distance.as_bytes()).is_err());

        let short_node = "NODE_SECTION\nA 0\n";
        assert!(Graph::parse_text(short_node.as_bytes()).is_err());
    }

    #[test]
    fn test_json_accepts_dist_alias() {
        let json = r#"{
            "nodes": [
                {"id": "A", "name": "A", "x": 0.0, "y": 0.0},
                {"id": "B", "name": "B", "x": 1.0, "y": 0.0}
            ],
            "edges": [{"from": "A", "to": "B", "dist": 4.25}]
        }"#;
        let graph: Graph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.edge_distance("A", "B"), Some(4.25));

        let invalid = r#"{"nodes": [], "edges": [{"from": "A", "to": "B", "distance": 1.0}]}"#;
        assert!(serde_json::from_str::<Graph>(invalid).is_err());
    }

    #[test]
    fn test_statistics() {
        let graph = create_test_graph();
        let stats = graph.statistics();
        assert_eq!(stats.components, 2);
        assert_eq!(stats.isolated_nodes, vec!["D".to_string()]);
        assert_eq!(stats.max_degree, 3);
        assert!((stats.avg_distance - 10.0 / 3.0).abs() < 1e-9);
        assert!(graph.is_reachable("A", "C"));
        assert!(!graph.is_reachable("A", "D"));
        assert!(stats.to_string().contains("Isolated nodes: D"));
    }
}
