use std::error::Error;
use std::path::PathBuf;

use barchain::input::read_model;
use barchain::report::render;
use barchain::{analyse, AnalysisOptions, LoadAggregation, SolverKind};
use clap::{Parser, ValueEnum};
use log::info;

/// Solver back-ends selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SolverArg {
    Lu,
    Cholesky,
}

impl From<SolverArg> for SolverKind {
    fn from(value: SolverArg) -> Self {
        match value {
            SolverArg::Lu => SolverKind::Lu,
            SolverArg::Cholesky => SolverKind::Cholesky,
        }
    }
}

/// Linear static analysis of a chain of axial bars.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Model file: comma separated text, or JSON when the extension is .json
    input: PathBuf,

    /// JSON file with analysis options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Linear solver back-end, overrides the options file
    #[arg(short, long, value_enum)]
    solver: Option<SolverArg>,

    /// Add duplicate loads on the same element instead of keeping the last one
    #[arg(long)]
    sum_loads: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // Options file first, then command line overrides.
    let mut options = match &cli.config {
        Some(path) => AnalysisOptions::from_json_file(path)?,
        None => AnalysisOptions::default(),
    };
    if let Some(solver) = cli.solver {
        options.solver = solver.into();
    }
    if cli.sum_loads {
        options.load_aggregation = LoadAggregation::Sum;
    }

    let model = read_model(&cli.input)?;
    info!(
        "read {} nodes and {} elements from {}",
        model.nodes.len(),
        model.elements.len(),
        cli.input.display()
    );

    let result = analyse(&model, &options)?;
    println!("{}", render(&result));

    Ok(())
}
