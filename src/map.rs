//! The Ant Quest demo map.
//!
//! Six fixed locations; edges between them are drawn at random from all
//! possible pairs, with distances in `[10, 120)` rounded to two decimals.

use crate::graph::{Edge, Graph, Node};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Number of random edges on the default demo map
pub const DEFAULT_EDGE_COUNT: usize = 9;
/// Default start location (the ant hill)
pub const DEFAULT_START: &str = "MR1";
/// Default destination (the castle)
pub const DEFAULT_END: &str = "CT1";

const MIN_DISTANCE: f64 = 10.0;
const DISTANCE_SPAN: f64 = 110.0;

/// The six named locations of the demo map, positioned on a 1000x1500 canvas
pub fn demo_nodes() -> Vec<Node> {
    vec![
        Node::new("MR1", "Najwyższe Mrowisko", 150.0, 350.0),
        Node::new("BG1", "Bagna Koralowe", 180.0, 1250.0),
        Node::new("RC1", "Bród - Rzeka Dwóch Cieni", 450.0, 800.0),
        Node::new("LB1", "Labirynt Pięciu Dolin", 500.0, 700.0),
        Node::new("BST", "Baszta Zmierzchu - Góry Mgliste", 870.0, 240.0),
        Node::new("CT1", "Zamek Verdantii", 830.0, 1370.0),
    ]
}

/// Pick `count` distinct node pairs at random and give each a random distance.
///
/// Asking for more edges than there are pairs yields the complete graph.
pub fn generate_random_edges<R: Rng + ?Sized>(nodes: &[Node], count: usize, rng: &mut R) -> Vec<Edge> {
    let mut pairs = Vec::with_capacity(nodes.len() * nodes.len().saturating_sub(1) / 2);
    for i in 0..nodes.len() {
        for j in i + 1..nodes.len() {
            pairs.push((i, j));
        }
    }

    pairs.shuffle(rng);
    pairs.truncate(count);

    pairs
        .into_iter()
        .map(|(i, j)| {
            let raw = rng.gen::<f64>() * DISTANCE_SPAN + MIN_DISTANCE;
            let distance = (raw * 100.0).round() / 100.0;
            Edge::new(&nodes[i].id, &nodes[j].id, distance)
        })
        .collect()
}

/// Build the demo map with `edge_count` random edges drawn from `seed`
pub fn demo_graph(edge_count: usize, seed: u64) -> Result<Graph, String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nodes = demo_nodes();
    let edges = generate_random_edges(&nodes, edge_count, &mut rng);
    Graph::new(&format!("ant-quest-{}", seed), nodes, edges)
}
