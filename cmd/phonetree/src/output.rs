//! Report rendering.

use clap::ValueEnum;
use giztoy_phonetree::{Match, Stats};
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

/// Matches for one query text.
#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub threshold: u32,
    pub lookups: usize,
    pub matches: Vec<Match>,
}

pub struct Output {
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Serializes `value` for the structured formats. Returns `None` for text.
    fn structured<T: Serialize>(&self, value: &T) -> anyhow::Result<Option<String>> {
        Ok(match self.format {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
        })
    }

    pub fn stats(&self, stats: &Stats) -> anyhow::Result<()> {
        if let Some(out) = self.structured(stats)? {
            println!("{out}");
            return Ok(());
        }
        print!("{}", render_stats(stats));
        Ok(())
    }

    pub fn queries(&self, reports: &[QueryReport]) -> anyhow::Result<()> {
        if let Some(out) = self.structured(&reports)? {
            println!("{out}");
            return Ok(());
        }
        for report in reports {
            print!("{}", render_query(report));
        }
        Ok(())
    }
}

fn render_stats(stats: &Stats) -> String {
    let mut out = String::new();
    for b in &stats.buckets {
        out.push_str(&format!("For length {}:\n", b.length));
        out.push_str(&format!("\tInsert count is {}\n", b.inserts));
        out.push_str(&format!("\tTree node count is {}\n", b.shape.nodes));
        out.push_str(&format!(
            "\tLeaf/internal count is {}/{}, depth {}\n",
            b.shape.leaves, b.shape.internals, b.shape.depth
        ));
        if b.shape.pivots > 0 {
            out.push_str(&format!("\tPivot count is {}\n", b.shape.pivots));
        }
    }
    out.push_str(&format!("Total insert count is {}\n", stats.total_inserts()));
    out.push_str(&format!("Total stored count is {}\n", stats.total_stored()));
    out.push_str(&format!("Total tree node count is {}\n", stats.total_nodes()));
    out
}

fn render_query(report: &QueryReport) -> String {
    let mut out = format!(
        "{} (threshold {}, {} matches, {} lookups)\n",
        report.query,
        report.threshold,
        report.matches.len(),
        report.lookups
    );
    for m in &report.matches {
        out.push_str(&format!("\t{}\t{}\n", m.distance, m.value));
    }
    out
}
