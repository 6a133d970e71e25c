//! Visualization utilities for maps and search results.
//!
//! Generates SVG drawings of a graph with the best path highlighted, a
//! convergence chart of the best distance per iteration, and plain-text
//! exports for external plotting.

use crate::graph::Graph;
use crate::path::BestPath;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
#[cfg(feature = "png")]
use resvg::usvg;
#[cfg(feature = "png")]
use resvg::usvg::TreeParsing;
#[cfg(feature = "png")]
use resvg::tiny_skia::{Pixmap, Transform};

/// SVG visualization generator
pub struct Visualizer {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Margin
    pub margin: f64,
    /// Node radius
    pub node_radius: f64,
}

impl Default for Visualizer {
    fn default() -> Self {
        Visualizer {
            width: 1000.0,
            height: 1500.0,
            margin: 60.0,
            node_radius: 12.5,
        }
    }
}

/// Escape text placed inside SVG elements
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Visualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate an SVG map with every edge, every node and the best path in red
    pub fn generate_svg(&self, graph: &Graph, best: &BestPath) -> String {
        let mut svg = String::new();

        let (min_x, max_x, min_y, max_y) = self.get_bounds(graph);

        let scale_x = (self.width - 2.0 * self.margin) / (max_x - min_x).max(1.0);
        let scale_y = (self.height - 2.0 * self.margin) / (max_y - min_y).max(1.0);
        let scale = scale_x.min(scale_y);

        svg.push_str(&format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
<style>
    .node {{ fill: rgb(60,120,60); }}
    .edge {{ stroke: rgb(100,100,100); stroke-width: 2; fill: none; }}
    .best {{ stroke: rgb(255,0,0); stroke-width: 4; fill: none; stroke-linejoin: round; }}
    .distance {{ font-family: Georgia; font-size: 10px; fill: rgb(50,50,50); }}
    .label {{ font-family: Georgia; font-size: 12px; fill: #000000; }}
    .title {{ font-family: Georgia; font-size: 16px; fill: #000000; font-weight: bold; }}
</style>
<rect width="100%" height="100%" fill="#f4f7fb"/>
"##,
            self.width, self.height, self.width, self.height
        ));

        let summary = if best.is_found() {
            format!("{} | Distance: {:.2}", best.route(), best.total_distance)
        } else {
            "no path found".to_string()
        };
        svg.push_str(&format!(
            r##"<text x="{}" y="30" class="title">{} | {}</text>
"##,
            self.margin, escape(graph.name()), escape(&summary)
        ));

        // canvas coordinates already grow downwards, so y is not flipped
        let transform = |x: f64, y: f64| -> (f64, f64) {
            let tx = self.margin + (x - min_x) * scale;
            let ty = self.margin + (y - min_y) * scale;
            (tx, ty)
        };

        for edge in graph.edges() {
            let (Some(from), Some(to)) = (graph.find_node(&edge.from), graph.find_node(&edge.to)) else {
                continue;
            };
            let (x1, y1) = transform(from.x, from.y);
            let (x2, y2) = transform(to.x, to.y);

            svg.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" class="edge"/>
"#,
                x1, y1, x2, y2
            ));
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" class="distance" text-anchor="middle">{}</text>
"#,
                (x1 + x2) / 2.0, (y1 + y2) / 2.0 - 5.0, edge.distance
            ));
        }

        if best.path.len() > 1 {
            let points: Vec<String> = best.path
                .iter()
                .filter_map(|id| graph.find_node(id))
                .map(|node| {
                    let (x, y) = transform(node.x, node.y);
                    format!("{:.2},{:.2}", x, y)
                })
                .collect();

            svg.push_str(&format!(
                r#"<polyline points="{}" class="best"/>
"#,
                points.join(" ")
            ));
        }

        for node in graph.nodes() {
            let (x, y) = transform(node.x, node.y);

            svg.push_str(&format!(
                r##"<circle cx="{:.2}" cy="{:.2}" r="{}" class="node"/>
"##,
                x, y, self.node_radius
            ));

            svg.push_str(&format!(
                r##"<text x="{:.2}" y="{:.2}" class="label" text-anchor="middle">{}</text>
"##,
                x, y - self.node_radius - 3.0, escape(&node.name)
            ));
        }

        svg.push_str("</svg>");

        svg
    }

    /// Generate a chart of the best distance after each iteration
    pub fn generate_convergence_svg(&self, best: &BestPath) -> String {
        let mut svg = String::new();

        let width = self.width;
        let height = 300.0;
        let margin = 50.0;

        svg.push_str(&format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
<style>
    .line {{ stroke: #c0392b; stroke-width: 2; fill: none; }}
    .axis {{ stroke: #2c3e50; stroke-width: 1; }}
    .label {{ font-family: Arial; font-size: 12px; fill: #2c3e50; }}
    .title {{ font-family: Arial; font-size: 14px; fill: #2c3e50; font-weight: bold; }}
</style>
<rect width="100%" height="100%" fill="#ecf0f1"/>
"##,
            width, height, width, height
        ));

        svg.push_str(&format!(
            r#"<text x="{}" y="25" class="title">Best distance per iteration ({} iterations)</text>
"#,
            margin, best.history.len()
        ));

        let plot_width = width - 2.0 * margin;
        let plot_height = height - 2.0 * margin;

        svg.push_str(&format!(
            r##"<line x1="{}" y1="{}" x2="{}" y2="{}" class="axis"/>
<line x1="{}" y1="{}" x2="{}" y2="{}" class="axis"/>
"##,
            margin, height - margin, width - margin, height - margin,
            margin, margin, margin, height - margin
        ));

        let finite: Vec<(usize, f64)> = best.history
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(i, &d)| (i, d))
            .collect();

        if let (Some(&(_, first)), Some(&(_, last))) = (finite.first(), finite.last()) {
            let y_max = first.max(last);
            let y_min = last.min(first) * 0.9;
            let y_span = (y_max - y_min).max(1e-9);
            let x_scale = plot_width / best.history.len().saturating_sub(1).max(1) as f64;

            let mut path = String::new();
            for (k, &(i, d)) in finite.iter().enumerate() {
                let x = margin + i as f64 * x_scale;
                let y = height - margin - (d - y_min) / y_span * plot_height;

                if k == 0 {
                    path.push_str(&format!("M {:.2} {:.2}", x, y));
                } else {
                    path.push_str(&format!(" L {:.2} {:.2}", x, y));
                }
            }

            svg.push_str(&format!(r##"<path d="{}" class="line"/>
"##, path));

            svg.push_str(&format!(
                r#"<text x="{}" y="{}" class="label">{:.2}</text>
<text x="{}" y="{}" class="label">{:.2}</text>
"#,
                5.0, margin + 5.0, y_max,
                5.0, height - margin, y_min
            ));
        } else {
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" class="label">no path found</text>
"#,
                width / 2.0 - 40.0, height / 2.0
            ));
        }

        svg.push_str("</svg>");

        svg
    }

    /// Save SVG to file
    pub fn save_svg<P: AsRef<Path>>(&self, svg: &str, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }

    /// Save SVG as PNG, natively when the `png` feature is enabled and
    /// otherwise through `rsvg-convert`, `magick` or `inkscape`.
    pub fn save_png<P: AsRef<Path>>(&self, svg: &str, path: P) -> std::io::Result<()> {
        let path = path.as_ref();

        #[cfg(feature = "png")]
        let result = Self::render_png(svg, path, self.width as u32, self.height as u32)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        #[cfg(not(feature = "png"))]
        let result = Self::convert_external(svg, path);

        result
    }

    #[cfg(feature = "png")]
    fn render_png(svg: &str, out: &Path, default_w: u32, default_h: u32) -> Result<(), Box<dyn std::error::Error>> {
        let opt = usvg::Options::default();
        let rtree = usvg::Tree::from_str(svg, &opt)?;

        let dimension = |attr: &str, fallback: u32| -> u32 {
            svg.split_once(attr)
                .and_then(|(_, rest)| rest.split_once('"'))
                .and_then(|(value, _)| value.parse::<f64>().ok())
                .map(|v| v as u32)
                .unwrap_or(fallback)
        };
        let w = dimension("width=\"", default_w);
        let h = dimension("height=\"", default_h);

        let mut pixmap = Pixmap::new(w.max(1), h.max(1)).ok_or("Failed to create pixmap")?;
        resvg::render(&rtree, resvg::FitTo::Original, Transform::default(), pixmap.as_mut())
            .ok_or("resvg render failed")?;
        pixmap.save_png(out)?;
        Ok(())
    }

    fn convert_external(svg: &str, path: &Path) -> std::io::Result<()> {
        let tmp_svg = path.with_extension("svg.tmp");
        std::fs::write(&tmp_svg, svg)?;

        let out = path.to_string_lossy().to_string();
        let input = tmp_svg.to_string_lossy().to_string();
        let attempts: [(&str, Vec<&str>); 3] = [
            ("rsvg-convert", vec!["-o", out.as_str(), input.as_str()]),
            ("magick", vec!["convert", input.as_str(), out.as_str()]),
            ("inkscape", vec![input.as_str(), "--export-type=png", "--export-filename", out.as_str()]),
        ];

        for (program, args) in &attempts {
            if let Ok(status) = Command::new(program).args(args).status() {
                if status.success() {
                    let _ = std::fs::remove_file(&tmp_svg);
                    return Ok(());
                }
            }
            log::debug!("{} could not convert {}", program, input);
        }

        let _ = std::fs::remove_file(&tmp_svg);
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "No SVG->PNG converter succeeded (tried rsvg-convert, magick, inkscape)",
        ))
    }

    /// Write the plot data next to a rendered image as `<image>.dat`
    pub fn save_plot_data<P: AsRef<Path>>(&self, graph: &Graph, best: &BestPath, image_path: P) -> std::io::Result<PathBuf> {
        let data_path = image_path.as_ref().with_extension("dat");
        std::fs::write(&data_path, self.export_plot_data(graph, best))?;
        Ok(data_path)
    }

    /// Get coordinate bounds
    fn get_bounds(&self, graph: &Graph) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for node in graph.nodes() {
            min_x = min_x.min(node.x);
            max_x = max_x.max(node.x);
            min_y = min_y.min(node.y);
            max_y = max_y.max(node.y);
        }

        if graph.nodes().is_empty() {
            return (0.0, 1.0, 0.0, 1.0);
        }

        (min_x, max_x, min_y, max_y)
    }

    /// Export data for external plotting (e.g., matplotlib)
    pub fn export_plot_data(&self, graph: &Graph, best: &BestPath) -> String {
        let mut data = String::new();

        data.push_str("# Ant Quest Search Data\n");
        data.push_str(&format!("# Graph: {}\n", graph.name()));
        if best.is_found() {
            data.push_str(&format!("# Distance: {:.2}\n\n", best.total_distance));
        } else {
            data.push_str("# Distance: none\n\n");
        }

        data.push_str("# Nodes: id, x, y\n");
        for node in graph.nodes() {
            data.push_str(&format!("{},{},{}\n", node.id, node.x, node.y));
        }

        data.push_str("\n# Edges: from, to, distance\n");
        for edge in graph.edges() {
            data.push_str(&format!("{},{},{}\n", edge.from, edge.to, edge.distance));
        }

        data.push_str("\n# Best path: sequence of node ids\n");
        data.push_str(&best.path.join(","));
        data.push('\n');

        data.push_str("\n# Best distance per iteration\n");
        let history: Vec<String> = best.history
            .iter()
            .map(|d| if d.is_finite() { format!("{:.2}", d) } else { "inf".to_string() })
            .collect();
        data.push_str(&history.join(","));
        data.push('\n');

        data
    }
}
