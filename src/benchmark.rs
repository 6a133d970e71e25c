//! Repeated-trial benchmarking for the path search.
//!
//! Runs many independently seeded searches on one graph, collects their
//! results, and summarises distance statistics and how often each route
//! was returned.

use crate::graph::Graph;
use crate::heuristics::aco::{search, ACOConfig};
use crate::path::BestPath;

use indicatif::ProgressBar;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Result of a single seeded search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Seed used for this run
    pub seed: u64,
    /// Whether a path was found
    pub found: bool,
    /// Best distance, empty when nothing was found
    pub distance: Option<f64>,
    /// Route as `A -> B -> C`
    pub route: String,
    /// Number of edges on the route
    pub hops: usize,
    /// Iterations executed
    pub iterations: usize,
    /// Ant walks that reached the target
    pub valid_walks: usize,
    /// Computation time in seconds
    pub time: f64,
}

impl TrialResult {
    fn from_best(seed: u64, best: &BestPath) -> Self {
        TrialResult {
            seed,
            found: best.is_found(),
            distance: best.is_found().then_some(best.total_distance),
            route: best.route(),
            hops: best.hops(),
            iterations: best.iterations,
            valid_walks: best.valid_walks,
            time: best.computation_time,
        }
    }
}

/// Aggregated statistics over all trials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialStatistics {
    /// Number of runs
    pub runs: usize,
    /// Runs that found a path
    pub found: usize,
    /// Share of runs that found a path
    pub success_rate: f64,
    /// Best distance
    pub best_distance: Option<f64>,
    /// Average distance over successful runs
    pub mean_distance: Option<f64>,
    /// Sample standard deviation of the distance
    pub std_distance: Option<f64>,
    /// Worst distance
    pub worst_distance: Option<f64>,
    /// Average time
    pub mean_time: f64,
    /// Total time
    pub total_time: f64,
}

/// How often a route was returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFrequency {
    pub route: String,
    pub distance: f64,
    pub count: usize,
    /// Share among successful runs
    pub share: f64,
}

/// Trial configuration
#[derive(Debug, Clone)]
pub struct TrialConfig {
    /// Number of independent searches
    pub runs: usize,
    /// Seed of the first run; run `i` uses `base_seed + i`
    pub base_seed: u64,
    /// Run searches in parallel
    pub parallel: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        TrialConfig {
            runs: 30,
            base_seed: 0,
            parallel: true,
        }
    }
}

/// Benchmarking engine
pub struct Benchmark {
    config: TrialConfig,
    aco: ACOConfig,
    results: Vec<TrialResult>,
}

impl Benchmark {
    pub fn new(config: TrialConfig, aco: ACOConfig) -> Self {
        Benchmark {
            config,
            aco,
            results: Vec::new(),
        }
    }

    /// Run all trials from `start` to `end`
    pub fn run(&mut self, graph: &Graph, start: &str, end: &str) -> &[TrialResult] {
        self.run_with_progress(graph, start, end, &ProgressBar::hidden())
    }

    /// Run all trials, ticking `progress` once per finished search
    pub fn run_with_progress(
        &mut self,
        graph: &Graph,
        start: &str,
        end: &str,
        progress: &ProgressBar,
    ) -> &[TrialResult] {
        log::info!(
            "Running {} trials on {} ({} -> {}){}",
            self.config.runs,
            graph.name(),
            start,
            end,
            if self.config.parallel { " in parallel" } else { "" }
        );

        let seeds: Vec<u64> = (0..self.config.runs as u64)
            .map(|i| self.config.base_seed.wrapping_add(i))
            .collect();

        let trial = |seed: u64| {
            let config = ACOConfig { seed: Some(seed), ..self.aco.clone() };
            let best = search(graph, start, end, &config);
            progress.inc(1);
            TrialResult::from_best(seed, &best)
        };

        self.results = if self.config.parallel {
            seeds.into_par_iter().map(trial).collect()
        } else {
            seeds.into_iter().map(trial).collect()
        };

        progress.finish();
        &self.results
    }

    /// Compute statistics over the recorded trials
    pub fn compute_statistics(&self) -> TrialStatistics {
        let distances: Vec<f64> = self.results.iter().filter_map(|r| r.distance).collect();
        let times: Vec<f64> = self.results.iter().map(|r| r.time).collect();

        let runs = self.results.len();
        let found = distances.len();

        let (best_distance, mean_distance, std_distance, worst_distance) = if distances.is_empty() {
            (None, None, None, None)
        } else {
            let std = if distances.len() > 1 { distances.iter().std_dev() } else { 0.0 };
            (
                Some(distances.iter().cloned().fold(f64::INFINITY, f64::min)),
                Some(distances.iter().mean()),
                Some(std),
                Some(distances.iter().cloned().fold(0.0, f64::max)),
            )
        };

        let total_time = times.iter().sum::<f64>();
        let mean_time = if times.is_empty() { 0.0 } else { times.iter().mean() };

        TrialStatistics {
            runs,
            found,
            success_rate: if runs == 0 { 0.0 } else { found as f64 / runs as f64 },
            best_distance,
            mean_distance,
            std_distance,
            worst_distance,
            mean_time,
            total_time,
        }
    }

    /// Routes returned by successful trials, most frequent first
    pub fn route_frequencies(&self) -> Vec<RouteFrequency> {
        let mut counts: HashMap<&str, (usize, f64)> = HashMap::new();
        for result in &self.results {
            if let Some(distance) = result.distance {
                let entry = counts.entry(result.route.as_str()).or_insert((0, distance));
                entry.0 += 1;
            }
        }

        let found: usize = counts.values().map(|&(c, _)| c).sum();
        let mut frequencies: Vec<RouteFrequency> = counts
            .into_iter()
            .map(|(route, (count, distance))| RouteFrequency {
                route: route.to_string(),
                distance,
                count,
                share: count as f64 / found as f64,
            })
            .collect();

        frequencies.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| OrderedFloat(a.distance).cmp(&OrderedFloat(b.distance)))
                .then_with(|| a.route.cmp(&b.route))
        });
        frequencies
    }

    /// Export results to CSV
    pub fn export_to_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);

        for result in &self.results {
            writer.serialize(result)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Export route frequencies to CSV
    pub fn export_routes_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);

        for frequency in self.route_frequencies() {
            writer.serialize(frequency)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Generate summary report
    pub fn generate_report(&self, graph: &Graph, start: &str, end: &str) -> String {
        let mut report = String::new();

        report.push_str("========================================\n");
        report.push_str("       Ant Quest Trial Report\n");
        report.push_str("========================================\n\n");
        report.push_str(&format!("Generated: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));
        report.push_str(&format!("Graph: {} ({} nodes, {} edges)\n",
            graph.name(), graph.node_count(), graph.edge_count()));
        report.push_str(&format!("Route: {} -> {}\n", start, end));
        report.push_str(&format!("ACO: ants={}, iterations={}, alpha={}, beta={}, evaporation={}\n\n",
            self.aco.ant_count, self.aco.iterations, self.aco.alpha, self.aco.beta, self.aco.evaporation_rate));

        let stats = self.compute_statistics();
        let fmt = |v: Option<f64>| v.map(|d| format!("{:.2}", d)).unwrap_or_else(|| "-".to_string());

        report.push_str(&format!("Runs: {} (found {}, {:.1}%)\n",
            stats.runs, stats.found, stats.success_rate * 100.0));
        report.push_str(&format!("Distance: best {}, mean {}, std {}, worst {}\n",
            fmt(stats.best_distance), fmt(stats.mean_distance),
            fmt(stats.std_distance), fmt(stats.worst_distance)));
        report.push_str(&format!("Time: mean {:.4}s, total {:.4}s\n\n", stats.mean_time, stats.total_time));

        report.push_str("Routes:\n");
        report.push_str("-".repeat(80).as_str());
        report.push('\n');
        report.push_str(&format!("{:<50} {:>10} {:>8} {:>8}\n", "Route", "Distance", "Count", "Share"));
        report.push_str("-".repeat(80).as_str());
        report.push('\n');

        for frequency in self.route_frequencies() {
            report.push_str(&format!("{:<50} {:>10.2} {:>8} {:>7.1}%\n",
                frequency.route, frequency.distance, frequency.count, frequency.share * 100.0));
        }

        report.push_str("-".repeat(80).as_str());
        report.push('\n');

        report
    }

    /// Get all results
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }
}
