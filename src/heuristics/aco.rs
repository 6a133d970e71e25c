//! Ant Colony Optimization path search.
//!
//! Ants walk from a start node towards an end node, choosing each step by
//! roulette-wheel selection over `pheromone^alpha * (1/distance)^beta`.
//! After every round the pheromone table evaporates and each successful walk
//! deposits `q / length` on the pairs it used.

use crate::graph::{Graph, Incident};
use crate::heuristics::pheromone::PheromoneTable;
use crate::path::{AntPath, BestPath};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// ACO configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ACOConfig {
    /// Ants released per iteration
    pub ant_count: usize,
    /// Pheromone importance (alpha)
    pub alpha: f64,
    /// Visibility importance (beta)
    pub beta: f64,
    /// Fraction of pheromone lost per iteration, in [0, 1]
    pub evaporation_rate: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Pheromone seeded on every edge at the start of a run
    pub initial_pheromone: f64,
    /// Pheromone deposit factor (q)
    pub deposit_factor: f64,
    /// Random seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for ACOConfig {
    fn default() -> Self {
        ACOConfig {
            ant_count: 50,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            iterations: 20,
            initial_pheromone: 1.0,
            deposit_factor: 1.0,
            seed: None,
        }
    }
}

impl ACOConfig {
    /// Report parameters outside their meaningful range.
    ///
    /// Zero ants or zero iterations are allowed and simply produce no path.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(format!("evaporation rate must be in [0, 1], got {}", self.evaporation_rate));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be a non-negative number, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be a non-negative number, got {}", self.beta));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(format!("initial pheromone must be positive, got {}", self.initial_pheromone));
        }
        if !self.deposit_factor.is_finite() || self.deposit_factor <= 0.0 {
            return Err(format!("deposit factor must be positive, got {}", self.deposit_factor));
        }
        Ok(())
    }
}

/// Working state of one ant
struct Ant {
    current: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
    distance: f64,
}

impl Ant {
    fn new(start: usize, node_count: usize) -> Self {
        let mut visited = vec![false; node_count];
        visited[start] = true;
        Ant {
            current: start,
            visited,
            path: vec![start],
            distance: 0.0,
        }
    }

    fn advance(&mut self, step: &Incident) {
        self.current = step.neighbor;
        self.visited[step.neighbor] = true;
        self.path.push(step.neighbor);
        self.distance += step.distance;
    }
}

/// A completed walk in node indices
#[derive(Debug, Clone)]
struct Walk {
    nodes: Vec<usize>,
    distance: f64,
}

/// Ant Colony Optimization path search over one graph.
///
/// A value of this type is a single run: the pheromone table is created in
/// the constructor and dropped with the search.
pub struct AntColonySearch<'a, R = ChaCha8Rng> {
    config: ACOConfig,
    graph: &'a Graph,
    pheromone: PheromoneTable,
    best: BestPath,
    rng: R,
}

impl<'a> AntColonySearch<'a, ChaCha8Rng> {
    /// Create a search seeded from `config.seed`
    pub fn new(graph: &'a Graph, config: ACOConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(graph, config, rng)
    }
}

impl<'a, R: Rng> AntColonySearch<'a, R> {
    /// Create a search drawing from an injected random source.
    /// `config.seed` is ignored.
    pub fn with_rng(graph: &'a Graph, config: ACOConfig, rng: R) -> Self {
        let pheromone = PheromoneTable::new(graph, config.initial_pheromone);
        let mut best = BestPath::none();
        best.algorithm = "ACO".to_string();

        AntColonySearch {
            config,
            graph,
            pheromone,
            best,
            rng,
        }
    }

    pub fn config(&self) -> &ACOConfig {
        &self.config
    }

    pub fn pheromone(&self) -> &PheromoneTable {
        &self.pheromone
    }

    /// Mutable access, e.g. to bias the table before running
    pub fn pheromone_mut(&mut self) -> &mut PheromoneTable {
        &mut self.pheromone
    }

    /// Best path found so far
    pub fn best(&self) -> &BestPath {
        &self.best
    }

    fn endpoints(&self, start_id: &str, end_id: &str) -> Option<(usize, usize)> {
        match (self.graph.node_index(start_id), self.graph.node_index(end_id)) {
            (Some(start), Some(end)) => Some((start, end)),
            (start, end) => {
                if start.is_none() {
                    log::warn!("Start node {} is not in graph {}", start_id, self.graph.name());
                }
                if end.is_none() {
                    log::warn!("End node {} is not in graph {}", end_id, self.graph.name());
                }
                None
            }
        }
    }

    /// Selection weight of moving from `from` along `step`
    #[inline]
    fn weight(&self, from: usize, step: &Incident) -> f64 {
        let tau = self.pheromone.get(from, step.neighbor).powf(self.config.alpha);
        let eta = (1.0 / step.distance).powf(self.config.beta);
        tau * eta
    }

    /// Normalised selection probabilities for `steps` leaving `from`.
    ///
    /// An infinite weight takes the whole wheel (the first one in adjacency
    /// order), weights whose sum overflows are rescaled by the largest, and a
    /// wheel whose weights all underflow to zero falls back to the first step.
    fn probabilities(&self, from: usize, steps: &[Incident]) -> Vec<f64> {
        let mut weights: Vec<f64> = steps
            .iter()
            .map(|step| self.weight(from, step))
            .map(|w| if w.is_nan() { 0.0 } else { w })
            .collect();

        if weights.is_empty() {
            return weights;
        }

        let only = |chosen: usize| -> Vec<f64> {
            (0..steps.len()).map(|i| if i == chosen { 1.0 } else { 0.0 }).collect()
        };

        if let Some(chosen) = weights.iter().position(|w| w.is_infinite()) {
            return only(chosen);
        }

        let mut total: f64 = weights.iter().sum();
        if total.is_infinite() {
            let largest = weights.iter().cloned().fold(0.0, f64::max);
            for w in weights.iter_mut() {
                *w /= largest;
            }
            total = weights.iter().sum();
        }

        if !(total > 0.0) {
            return only(0);
        }

        weights.iter().map(|w| w / total).collect()
    }

    /// Roulette-wheel choice among edges to unvisited neighbors.
    /// Returns None when the ant is stuck.
    fn select_next(&mut self, ant: &Ant) -> Option<Incident> {
        let graph = self.graph;
        let steps: Vec<Incident> = graph
            .incident(ant.current)
            .iter()
            .filter(|step| !ant.visited[step.neighbor])
            .copied()
            .collect();

        if steps.is_empty() {
            return None;
        }
        let probabilities = self.probabilities(ant.current, &steps);

        let pick = self.rng.gen::<f64>();
        let mut acc = 0.0;
        let mut chosen = None;
        for (step, &p) in steps.iter().zip(&probabilities) {
            if p <= 0.0 {
                continue;
            }
            chosen = Some(*step);
            acc += p;
            if acc >= pick {
                break;
            }
        }

        // rounding can leave `acc` just short of `pick`
        chosen
    }

    /// Walk one ant from `start` until it reaches `end` or gets stuck
    fn construct_walk(&mut self, start: usize, end: usize) -> Option<Walk> {
        let mut ant = Ant::new(start, self.graph.node_count());

        while ant.current != end {
            match self.select_next(&ant) {
                Some(step) => ant.advance(&step),
                None => {
                    log::trace!("Ant stuck at {} after {} hops", self.graph.node(ant.current).id, ant.path.len() - 1);
                    return None;
                }
            }
        }

        Some(Walk {
            nodes: ant.path,
            distance: ant.distance,
        })
    }

    fn to_ant_path(&self, walk: &Walk) -> AntPath {
        AntPath {
            path: walk.nodes.iter().map(|&i| self.graph.node(i).id.clone()).collect(),
            total_distance: walk.distance,
        }
    }

    /// Evaporation on every entry, then deposition by every valid walk
    fn update_pheromone(&mut self, walks: &[Walk]) {
        self.pheromone.evaporate(self.config.evaporation_rate);

        for walk in walks {
            if walk.nodes.len() < 2 {
                continue;
            }
            let delta = self.config.deposit_factor / walk.distance;
            for pair in walk.nodes.windows(2) {
                self.pheromone.deposit(pair[0], pair[1], delta);
            }
        }
    }

    fn iterate_indices(&mut self, start: usize, end: usize) -> usize {
        let walks: Vec<Walk> = (0..self.config.ant_count)
            .filter_map(|_| self.construct_walk(start, end))
            .collect();

        self.update_pheromone(&walks);

        let mut improved = false;
        for walk in &walks {
            if walk.distance < self.best.total_distance {
                let candidate = self.to_ant_path(walk);
                improved |= self.best.offer(&candidate);
            }
        }

        self.best.iterations += 1;
        self.best.valid_walks += walks.len();
        self.best.history.push(self.best.total_distance);

        log::debug!(
            "Iteration {}: {}/{} ants reached the target, best {:.2}{}",
            self.best.iterations,
            walks.len(),
            self.config.ant_count,
            self.best.total_distance,
            if improved { " (improved)" } else { "" }
        );

        walks.len()
    }

    /// Run a single iteration and return how many ants reached `end_id`
    pub fn iterate(&mut self, start_id: &str, end_id: &str) -> usize {
        match self.endpoints(start_id, end_id) {
            Some((start, end)) => self.iterate_indices(start, end),
            None => 0,
        }
    }

    /// Sample one walk with the current pheromone table without learning from it
    pub fn sample_path(&mut self, start_id: &str, end_id: &str) -> Option<AntPath> {
        let (start, end) = self.endpoints(start_id, end_id)?;
        let walk = self.construct_walk(start, end)?;
        Some(self.to_ant_path(&walk))
    }

    /// Probability of each first step out of `from_id` when nothing else has
    /// been visited, in adjacency order
    pub fn transition_probabilities(&self, from_id: &str) -> Vec<(String, f64)> {
        let Some(from) = self.graph.node_index(from_id) else {
            return Vec::new();
        };

        let steps: Vec<Incident> = self.graph
            .incident(from)
            .iter()
            .filter(|step| step.neighbor != from)
            .copied()
            .collect();
        let probabilities = self.probabilities(from, &steps);

        steps
            .iter()
            .zip(probabilities)
            .map(|(step, p)| (self.graph.node(step.neighbor).id.clone(), p))
            .collect()
    }

    /// Run all configured iterations and return the best path
    pub fn run(mut self, start_id: &str, end_id: &str) -> BestPath {
        let start_time = Instant::now();

        if let Some((start, end)) = self.endpoints(start_id, end_id) {
            for _ in 0..self.config.iterations {
                self.iterate_indices(start, end);
            }
        }

        self.best.computation_time = start_time.elapsed().as_secs_f64();

        if self.best.is_found() {
            log::info!(
                "ACO found {} ({:.2}) after {} iterations",
                self.best.route(),
                self.best.total_distance,
                self.best.iterations
            );
        } else {
            log::info!("ACO found no path from {} to {} after {} iterations",
                start_id, end_id, self.best.iterations);
        }

        self.best
    }
}

/// Search for a short path from `start_id` to `end_id`, seeding from `config.seed`
pub fn search(graph: &Graph, start_id: &str, end_id: &str, config: &ACOConfig) -> BestPath {
    AntColonySearch::new(graph, config.clone()).run(start_id, end_id)
}

/// Search drawing randomness from `rng` instead of `config.seed`
pub fn search_with_rng<R: Rng + ?Sized>(
    graph: &Graph,
    start_id: &str,
    end_id: &str,
    config: &ACOConfig,
    rng: &mut R,
) -> BestPath {
    AntColonySearch::with_rng(graph, config.clone(), rng).run(start_id, end_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};
    use crate::map;

    fn build(edges: &[(&str, &str, f64)]) -> Graph {
        let mut ids: Vec<&str> = Vec::new();
        for &(a, b, _) in edges {
            for id in [a, b] {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        let nodes = ids.iter().enumerate()
            .map(|(i, id)| Node::new(id, id, i as f64, 0.0))
            .collect();
        let edges = edges.iter().map(|&(a, b, d)| Edge::new(a, b, d)).collect();
        Graph::new("test", nodes, edges).unwrap()
    }

    fn seeded(seed: u64) -> ACOConfig {
        ACOConfig { seed: Some(seed), ..Default::default() }
    }

    /// Short route S-A-T (2) and long route S-B-T (4)
    fn two_routes() -> Graph {
        build(&[("S", "A", 1.0), ("A", "T", 1.0), ("S", "B", 2.0), ("B", "T", 2.0)])
    }

    fn probability_of(search: &AntColonySearch<'_, ChaCha8Rng>, from: &str, to: &str) -> f64 {
        search.transition_probabilities(from)
            .into_iter()
            .find(|(id, _)| id == to)
            .map(|(_, p)| p)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_single_route() {
        let graph = build(&[("A", "B", 5.0), ("B", "C", 3.0)]);
        let configs = [
            seeded(1),
            ACOConfig { ant_count: 1, iterations: 1, seed: Some(2), ..Default::default() },
            ACOConfig { alpha: 3.0, beta: 0.0, evaporation_rate: 0.9, seed: Some(3), ..Default::default() },
            ACOConfig { beta: 500.0, ..seeded(1) },
            ACOConfig { evaporation_rate: 1.0, alpha: 50.0, ..seeded(4) },
        ];

        for config in &configs {
            assert!(config.validate().is_ok());
            let best = search(&graph, "A", "C", config);
            assert_eq!(best.path, vec!["A", "B", "C"]);
            assert_eq!(best.total_distance, 8.0);
            assert!(best.is_valid_in(&graph, "A", "C"));
        }
    }

    #[test]
    fn test_single_route_with_tiny_distances() {
        let graph = build(&[("A", "B", 0.01), ("B", "C", 0.02)]);
        for beta in [5.0, 200.0, 1000.0] {
            let config = ACOConfig { beta, ..seeded(1) };
            let best = search(&graph, "A", "C", &config);
            assert_eq!(best.path, vec!["A", "B", "C"]);
            assert!((best.total_distance - 0.03).abs() < 1e-12);
        }
    }

    #[test]
    fn test_start_equals_end() {
        let graph = two_routes();
        for seed in 0..10 {
            let best = search(&graph, "S", "S", &seeded(seed));
            assert_eq!(best.path, vec!["S"]);
            assert_eq!(best.total_distance, 0.0);
            assert!(best.is_found());
        }

        // any random source gives the same answer
        let mut rng = StdRng::seed_from_u64(99);
        let best = search_with_rng(&graph, "A", "A", &ACOConfig::default(), &mut rng);
        assert_eq!(best.path, vec!["A"]);
        assert_eq!(best.total_distance, 0.0);
    }

    #[test]
    fn test_unreachable_target() {
        let graph = build(&[("A", "B", 1.0), ("B", "C", 2.0), ("X", "Y", 1.0)]);
        let config = seeded(5);
        let best = search(&graph, "A", "Y", &config);

        assert!(!best.is_found());
        assert!(best.path.is_empty());
        assert!(best.total_distance.is_infinite());
        assert_eq!(best.iterations, config.iterations);
        assert_eq!(best.valid_walks, 0);
        assert!(best.history.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_unknown_endpoint() {
        let graph = two_routes();
        let best = search(&graph, "S", "NOWHERE", &seeded(1));
        assert!(!best.is_found());
        assert_eq!(best.iterations, 0);

        let best = search(&graph, "NOWHERE", "T", &seeded(1));
        assert!(!best.is_found());
    }

    #[test]
    fn test_zero_ants_or_iterations() {
        let graph = two_routes();

        let no_ants = ACOConfig { ant_count: 0, ..seeded(1) };
        let best = search(&graph, "S", "T", &no_ants);
        assert!(!best.is_found());
        assert_eq!(best.iterations, no_ants.iterations);

        let no_iterations = ACOConfig { iterations: 0, ..seeded(1) };
        let best = search(&graph, "S", "T", &no_iterations);
        assert!(!best.is_found());
        assert!(best.history.is_empty());

        // even the degenerate path needs at least one ant
        let best = search(&graph, "S", "S", &no_ants);
        assert!(!best.is_found());
    }

    #[test]
    fn test_paths_are_valid_on_demo_maps() {
        for seed in 0..20 {
            let graph = map::demo_graph(map::DEFAULT_EDGE_COUNT, seed).unwrap();
            let best = search(&graph, map::DEFAULT_START, map::DEFAULT_END, &seeded(seed));

            if best.is_found() {
                assert!(best.is_valid_in(&graph, map::DEFAULT_START, map::DEFAULT_END));
                let recomputed = graph.path_distance(&best.path).unwrap();
                assert!(recomputed <= best.total_distance + 1e-9);
            } else {
                assert!(best.total_distance.is_infinite());
            }

            if !graph.is_reachable(map::DEFAULT_START, map::DEFAULT_END) {
                assert!(!best.is_found());
            }
        }
    }

    #[test]
    fn test_history_is_non_increasing() {
        let graph = build(&[
            ("A", "B", 2.0), ("B", "D", 2.0), ("A", "C", 3.0),
            ("C", "D", 4.0), ("B", "C", 1.5), ("A", "D", 9.0),
        ]);
        let config = ACOConfig { ant_count: 3, iterations: 40, ..seeded(11) };
        let best = search(&graph, "A", "D", &config);

        assert_eq!(best.history.len(), 40);
        assert!(best.history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(best.history.last().copied(), Some(best.total_distance));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let graph = map::demo_graph(12, 3).unwrap();
        let config = seeded(42);

        let first = search(&graph, "MR1", "CT1", &config);
        let second = search(&graph, "MR1", "CT1", &config);
        assert_eq!(first.path, second.path);
        assert_eq!(first.history, second.history);
        assert_eq!(first.valid_walks, second.valid_walks);

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let injected = search_with_rng(&graph, "MR1", "CT1", &config, &mut rng);
        assert_eq!(injected.path, first.path);
        assert_eq!(injected.history, first.history);
    }

    #[test]
    fn test_scaling_distances_keeps_route() {
        let graph = build(&[
            ("A", "B", 2.0), ("B", "D", 2.0), ("A", "C", 3.0),
            ("C", "D", 4.0), ("B", "C", 1.5),
        ]);
        let scaled = graph.scaled(3.5).unwrap();

        let best = search(&graph, "A", "D", &seeded(7));
        let best_scaled = search(&scaled, "A", "D", &seeded(7));

        assert_eq!(best.path, vec!["A", "B", "D"]);
        assert_eq!(best_scaled.path, best.path);
        assert!((best.total_distance - 4.0).abs() < 1e-9);
        assert!((best_scaled.total_distance - 4.0 * 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_pheromone_bias_grows_with_iterations() {
        let graph = two_routes();
        let config = ACOConfig { beta: 1.0, ..seeded(2024) };
        let mut aco = AntColonySearch::new(&graph, config);

        let initial = probability_of(&aco, "S", "A");
        assert!((initial - 2.0 / 3.0).abs() < 1e-9);

        aco.iterate("S", "T");
        let after_one = probability_of(&aco, "S", "A");

        for _ in 0..19 {
            aco.iterate("S", "T");
        }
        let after_twenty = probability_of(&aco, "S", "A");

        assert!(after_one > initial);
        assert!(after_twenty > after_one);
        assert!(after_twenty > 0.95);
        assert!(aco.pheromone().is_symmetric());
        assert_eq!(aco.best().path, vec!["S", "A", "T"]);
    }

    #[test]
    fn test_route_frequency_skews_towards_shorter_route() {
        let graph = two_routes();
        let short_share = |iterations: usize| {
            let config = ACOConfig { beta: 1.0, ..seeded(77) };
            let mut aco = AntColonySearch::new(&graph, config);
            for _ in 0..iterations {
                aco.iterate("S", "T");
            }
            let short = (0..400)
                .filter_map(|_| aco.sample_path("S", "T"))
                .filter(|p| p.path == vec!["S", "A", "T"])
                .count();
            short as f64 / 400.0
        };

        let untrained = short_share(0);
        let trained = short_share(10);
        assert!(untrained > 0.5 && untrained < 0.8);
        assert!(trained > untrained);
        assert!(trained > 0.9);
    }

    #[test]
    fn test_seeded_pheromone_steers_choice() {
        let graph = two_routes();
        let config = ACOConfig { beta: 1.0, ..seeded(1) };
        let mut aco = AntColonySearch::new(&graph, config);

        let s = graph.node_index("S").unwrap();
        let b = graph.node_index("B").unwrap();
        aco.pheromone_mut().set(s, b, 100.0);

        assert!(probability_of(&aco, "S", "B") > 0.95);
    }

    #[test]
    fn test_zero_weights_fall_back_to_first_step() {
        let graph = build(&[("A", "B", 5.0), ("B", "C", 3.0), ("A", "D", 1.0)]);
        let mut aco = AntColonySearch::new(&graph, seeded(3));
        aco.pheromone_mut().set(0, 1, 0.0);
        aco.pheromone_mut().set(0, 3, 0.0);

        let probabilities = aco.transition_probabilities("A");
        assert_eq!(probabilities, vec![("B".to_string(), 1.0), ("D".to_string(), 0.0)]);

        let walk = aco.sample_path("A", "C").unwrap();
        assert_eq!(walk.path, vec!["A", "B", "C"]);

        let best = aco.run("A", "C");
        assert_eq!(best.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_infinite_weight_takes_the_wheel() {
        let graph = build(&[("S", "A", 1.0), ("A", "T", 1.0), ("S", "B", 1e-3), ("B", "T", 1e-3)]);
        let config = ACOConfig { beta: 120.0, ..seeded(5) };
        let aco = AntColonySearch::new(&graph, config);

        let probabilities = aco.transition_probabilities("S");
        assert_eq!(probabilities, vec![("A".to_string(), 0.0), ("B".to_string(), 1.0)]);
    }

    #[test]
    fn test_search_recovers_after_a_round_without_walks() {
        let graph = build(&[("S", "T", 1000.0), ("S", "X", 1.0)]);
        let config = ACOConfig {
            ant_count: 1,
            evaporation_rate: 1.0,
            iterations: 50,
            ..seeded(3)
        };

        let best = search(&graph, "S", "T", &config);
        assert_eq!(best.path, vec!["S", "T"]);
        assert_eq!(best.total_distance, 1000.0);
        assert!(best.valid_walks >= 49);
    }

    #[test]
    fn test_full_evaporation_keeps_found_route() {
        let graph = two_routes();
        let config = ACOConfig { evaporation_rate: 1.0, ..seeded(9) };
        let best = search(&graph, "S", "T", &config);
        assert_eq!(best.path, vec!["S", "A", "T"]);
        assert_eq!(best.total_distance, 2.0);
    }

    #[test]
    fn test_config_validation() {
        assert!(ACOConfig::default().validate().is_ok());
        assert!(ACOConfig { ant_count: 0, iterations: 0, ..Default::default() }.validate().is_ok());
        assert!(ACOConfig { evaporation_rate: 1.5, ..Default::default() }.validate().is_err());
        assert!(ACOConfig { evaporation_rate: -0.1, ..Default::default() }.validate().is_err());
        assert!(ACOConfig { alpha: f64::NAN, ..Default::default() }.validate().is_err());
        assert!(ACOConfig { beta: -1.0, ..Default::default() }.validate().is_err());
        assert!(ACOConfig { initial_pheromone: 0.0, ..Default::default() }.validate().is_err());
        assert!(ACOConfig { deposit_factor: -2.0, ..Default::default() }.validate().is_err());
    }
}
