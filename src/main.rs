use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use topobench::analysis::{measure_size, size_steps};
use topobench::{report, Algorithm, Measurement};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of nodes to test
    #[arg(long, default_value_t = 2000)]
    max_nodes: usize,

    /// Number of different graph sizes to test
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Graph density (0.0 to 1.0) for the random DAGs
    #[arg(long, default_value_t = 0.1, value_parser = parse_density)]
    density: f64,

    /// Seed for the graph generator; uses OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Filename to save the raw CSV data
    #[arg(long, default_value = "topo_sort_results.csv")]
    csv: PathBuf,

    /// Optional filename to save the records as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Algorithms to compare
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Algorithm::ALL)]
    algorithms: Vec<Algorithm>,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must be between 0.0 and 1.0, got {density}"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let node_counts = size_steps(args.max_nodes, args.steps);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("--- Starting Topological Sort Analysis ---");
    println!(
        "Algorithms: {}",
        args.algorithms.iter().map(|a| a.name()).join(", ")
    );
    println!("Node counts: {node_counts:?}");
    println!("Graph density: {}", args.density);

    let mut records: Vec<Measurement> = Vec::with_capacity(args.algorithms.len() * node_counts.len());
    for &nodes in &node_counts {
        println!("Analyzing for n = {nodes} nodes...");
        records.extend(measure_size(&args.algorithms, nodes, args.density, &mut rng)?);
    }

    let file = File::create(&args.csv)
        .with_context(|| format!("failed to create '{}'", args.csv.display()))?;
    let mut writer = BufWriter::new(file);
    report::write_csv(&mut writer, &records)
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write '{}'", args.csv.display()))?;
    println!("\nRaw results saved to '{}'", args.csv.display());

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);
        report::write_json(&mut writer, &records)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        writer.flush()?;
        println!("Records saved to '{}'", path.display());
    }

    println!("--- Analysis Complete ---");
    Ok(())
}
