//! Ant Quest - Command Line Interface
//!
//! Finds a short route across a weighted map with Ant Colony Optimization.

use ant_quest::benchmark::{Benchmark, TrialConfig};
use ant_quest::graph::Graph;
use ant_quest::heuristics::aco::{search, ACOConfig};
use ant_quest::map;
use ant_quest::path::BestPath;
use ant_quest::visualization::Visualizer;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ant-quest")]
#[command(version = "1.0")]
#[command(about = "Ant Colony Optimization path search over small weighted maps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Graph file (.json or sectioned text); the demo map is used when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Number of random edges on the demo map
    #[arg(long, default_value_t = map::DEFAULT_EDGE_COUNT)]
    edges: usize,

    /// Seed for the demo map's random edges
    #[arg(long, default_value = "1")]
    map_seed: u64,

    /// Start node id
    #[arg(long, default_value = map::DEFAULT_START)]
    start: String,

    /// End node id
    #[arg(long, default_value = map::DEFAULT_END)]
    end: String,
}

#[derive(Args, Debug)]
struct AcoArgs {
    /// Ants per iteration
    #[arg(long, default_value = "50")]
    ants: usize,

    /// Pheromone importance
    #[arg(long, default_value = "1.0")]
    alpha: f64,

    /// Distance visibility importance
    #[arg(long, default_value = "5.0")]
    beta: f64,

    /// Fraction of pheromone lost per iteration
    #[arg(long, default_value = "0.5")]
    evaporation: f64,

    /// Number of iterations
    #[arg(long, default_value = "20")]
    iterations: usize,

    /// Random seed (base seed for trials)
    #[arg(short, long)]
    seed: Option<u64>,
}

impl AcoArgs {
    fn to_config(&self) -> ACOConfig {
        ACOConfig {
            ant_count: self.ants,
            alpha: self.alpha,
            beta: self.beta,
            evaporation_rate: self.evaporation,
            iterations: self.iterations,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best route once
    Solve {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        aco: AcoArgs,

        /// Write the result as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the map to an SVG (or PNG) file
        #[arg(long)]
        visualize: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run many seeded searches and report route statistics
    Trials {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        aco: AcoArgs,

        /// Number of runs
        #[arg(short, long, default_value = "30")]
        runs: usize,

        /// Output directory for results
        #[arg(short, long, default_value = "results")]
        output: PathBuf,

        /// Run searches one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Print graph statistics
    Analyze {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Write the demo map to a file (.json or text)
    Map {
        /// Number of random edges
        #[arg(long, default_value_t = map::DEFAULT_EDGE_COUNT)]
        edges: usize,

        /// Seed for the random edges
        #[arg(long, default_value = "1")]
        map_seed: u64,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// JSON document written by `solve --output`
#[derive(Serialize)]
struct SolveReport<'a> {
    graph: &'a str,
    start: &'a str,
    end: &'a str,
    config: &'a ACOConfig,
    result: &'a BestPath,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Solve { graph, aco, output, visualize, verbose } => {
            solve(&graph, &aco, output, visualize, verbose)
        }

        Commands::Trials { graph, aco, runs, output, sequential } => {
            run_trials(&graph, &aco, runs, &output, sequential)
        }

        Commands::Analyze { graph } => analyze(&graph),

        Commands::Map { edges, map_seed, output } => write_map(edges, map_seed, &output),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_graph(args: &GraphArgs) -> Result<Graph, String> {
    let graph = match &args.graph {
        Some(path) => {
            println!("Loading graph from {:?}...", path);
            Graph::from_file(path)?
        }
        None => map::demo_graph(args.edges, args.map_seed)?,
    };

    for id in [&args.start, &args.end] {
        if graph.node_index(id).is_none() {
            return Err(format!("Node {} is not in graph {}", id, graph.name()));
        }
    }

    Ok(graph)
}

fn solve(
    graph_args: &GraphArgs,
    aco_args: &AcoArgs,
    output: Option<PathBuf>,
    visualize: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    let graph = load_graph(graph_args)?;
    let config = aco_args.to_config();
    config.validate()?;

    if verbose {
        println!("{}", graph.statistics());
        println!("Config: {:?}", config);
    }

    println!("Searching {} -> {} on {}...", graph_args.start, graph_args.end, graph.name());
    let best = search(&graph, &graph_args.start, &graph_args.end, &config);

    println!("\n========== Results ==========");
    println!("{}", best);

    if verbose {
        let history: Vec<String> = best.history
            .iter()
            .map(|d| if d.is_finite() { format!("{:.2}", d) } else { "-".to_string() })
            .collect();
        println!("History: {}", history.join(" "));
        if !graph.is_reachable(&graph_args.start, &graph_args.end) {
            println!("Note: {} is not reachable from {}", graph_args.end, graph_args.start);
        }
    }

    if let Some(out_path) = output {
        let report = SolveReport {
            graph: graph.name(),
            start: &graph_args.start,
            end: &graph_args.end,
            config: &config,
            result: &best,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Cannot serialize result: {}", e))?;
        std::fs::write(&out_path, json)
            .map_err(|e| format!("Failed to write {:?}: {}", out_path, e))?;
        println!("\nResult saved to {:?}", out_path);
    }

    if let Some(image_path) = visualize {
        render(&graph, &best, &image_path)?;
    }

    Ok(())
}

fn render(graph: &Graph, best: &BestPath, image_path: &Path) -> Result<(), String> {
    let viz = Visualizer::new();
    let svg = viz.generate_svg(graph, best);

    let wants_png = image_path.extension().map(|e| e == "png").unwrap_or(false);
    if wants_png {
        match viz.save_png(&svg, image_path) {
            Ok(()) => println!("Visualization saved to {:?}", image_path),
            Err(e) => {
                // fallback: write SVG if PNG conversion failed
                let svg_path = image_path.with_extension("svg");
                viz.save_svg(&svg, &svg_path)
                    .map_err(|e| format!("Failed to save SVG: {}", e))?;
                println!("PNG conversion failed ({}). Saved SVG to {:?}", e, svg_path);
            }
        }
    } else {
        viz.save_svg(&svg, image_path)
            .map_err(|e| format!("Failed to save SVG: {}", e))?;
        println!("Visualization saved to {:?}", image_path);
    }

    let data_path = viz.save_plot_data(graph, best, image_path)
        .map_err(|e| format!("Failed to save plot data: {}", e))?;
    println!("Plot data saved to {:?}", data_path);

    let chart_path = image_path.with_extension("convergence.svg");
    viz.save_svg(&viz.generate_convergence_svg(best), &chart_path)
        .map_err(|e| format!("Failed to save convergence chart: {}", e))?;
    println!("Convergence chart saved to {:?}", chart_path);

    Ok(())
}

fn run_trials(
    graph_args: &GraphArgs,
    aco_args: &AcoArgs,
    runs: usize,
    output: &Path,
    sequential: bool,
) -> Result<(), String> {
    let graph = load_graph(graph_args)?;
    let aco = aco_args.to_config();
    aco.validate()?;

    std::fs::create_dir_all(output)
        .map_err(|e| format!("Failed to create output directory: {}", e))?;

    let config = TrialConfig {
        runs,
        base_seed: aco_args.seed.unwrap_or(0),
        parallel: !sequential,
    };

    let progress = ProgressBar::new(runs as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} trials ({elapsed})") {
        progress.set_style(style);
    }

    let mut benchmark = Benchmark::new(config, aco);
    benchmark.run_with_progress(&graph, &graph_args.start, &graph_args.end, &progress);

    let results_path = output.join("results.csv");
    benchmark.export_to_csv(&results_path)
        .map_err(|e| format!("Failed to export results: {}", e))?;
    println!("\nResults exported to {:?}", results_path);

    let routes_path = output.join("routes.csv");
    benchmark.export_routes_csv(&routes_path)
        .map_err(|e| format!("Failed to export routes: {}", e))?;
    println!("Routes exported to {:?}", routes_path);

    let report = benchmark.generate_report(&graph, &graph_args.start, &graph_args.end);
    println!("\n{}", report);

    let report_path = output.join("report.txt");
    std::fs::write(&report_path, &report)
        .map_err(|e| format!("Failed to save report: {}", e))?;
    println!("Report saved to {:?}", report_path);

    Ok(())
}

fn analyze(graph_args: &GraphArgs) -> Result<(), String> {
    let graph = load_graph(graph_args)?;

    println!("========== Graph Analysis ==========\n");
    println!("{}", graph.statistics());

    println!("\nAdjacency:");
    for node in graph.nodes() {
        println!("  {:<4} {:<35} -> {}", node.id, node.name, graph.neighbors(&node.id).join(", "));
    }

    let reachable = graph.is_reachable(&graph_args.start, &graph_args.end);
    println!("\n{} reachable from {}: {}", graph_args.end, graph_args.start, reachable);

    if reachable {
        let quick = ACOConfig { ant_count: 10, iterations: 5, seed: Some(0), ..Default::default() };
        let best = search(&graph, &graph_args.start, &graph_args.end, &quick);
        if best.is_found() {
            println!("Quick estimate: {} ({:.2})", best.route(), best.total_distance);
        } else {
            println!("Quick estimate: no path sampled");
        }
    }

    Ok(())
}

fn write_map(edges: usize, map_seed: u64, output: &Path) -> Result<(), String> {
    let graph = map::demo_graph(edges, map_seed)?;
    graph.save(output)
        .map_err(|e| format!("Failed to write {:?}: {}", output, e))?;
    println!("Demo map ({} edges, seed {}) saved to {:?}", graph.edge_count(), map_seed, output);
    Ok(())
}
