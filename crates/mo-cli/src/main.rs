//! MincerOxide CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use mo_core::data::{DataFrame, DescriptiveStats, SeriesValue};
use mo_econ::{
    EconAnalyzer, ModelComparison, ReturnsToEducation, SimulationConfig,
    robust_regression_summary,
};
use mo_models::ModelSummary;

#[derive(Parser)]
#[command(name = "mincer")]
#[command(about = "MincerOxide - wage equations and returns to education")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, default_value = "warn")]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate wage data and run the full Mincer analysis
    Demo {
        /// Number of simulated observations
        #[arg(long, default_value = "1000")]
        n_obs: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Print results as pretty JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Print a simulated dataset as CSV
    Simulate {
        /// Number of simulated observations
        #[arg(long, default_value = "1000")]
        n_obs: usize,

        /// Random seed. Omit for OS entropy.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct DemoReport {
    descriptive_stats: DescriptiveStats,
    summary: ModelSummary,
    returns_to_education: ReturnsToEducation,
    comparison: ModelComparison,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Demo { n_obs, seed, json } => cmd_demo(n_obs, seed, json),
        Commands::Simulate { n_obs, seed } => cmd_simulate(n_obs, seed),
    }
}

fn cmd_demo(n_obs: usize, seed: u64, json: bool) -> Result<()> {
    let data = SimulationConfig::default().n_obs(n_obs).seed(seed).simulate()?;
    log::info!("simulated {} observations", data.nrows());

    let mut analyzer = EconAnalyzer::new(data);
    let descriptive_stats =
        analyzer.descriptive_stats(Some(&["wage", "log_wage", "education", "experience", "age"]))?;

    let basic = analyzer
        .mincer_regression("log_wage", "education", "experience", false)?
        .clone();
    let extended = analyzer
        .mincer_regression("log_wage", "education", "experience", true)?
        .clone();

    let returns_to_education = analyzer.calculate_returns_to_education(&extended, "education")?;
    let comparison =
        robust_regression_summary(&[&basic, &extended], &["Basic Mincer", "Extended Mincer"])?;

    let report = DemoReport {
        descriptive_stats,
        summary: analyzer.summary(&EconAnalyzer::mincer_model_name("log_wage"))?,
        returns_to_education,
        comparison,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Descriptive Statistics");
    println!("{}", report.descriptive_stats);
    println!("{}", report.summary);
    println!("{}", report.returns_to_education);
    println!("Model Comparison");
    print!("{}", report.comparison);

    Ok(())
}

fn cmd_simulate(n_obs: usize, seed: Option<u64>) -> Result<()> {
    let config = SimulationConfig { n_obs, seed };
    let data = config.simulate()?;
    write_csv(&data, std::io::stdout())
}

/// Write `data` as CSV with a header row. Floats keep full precision.
fn write_csv<W: std::io::Write>(data: &DataFrame, writer: W) -> Result<()> {
    let names = data.column_names();
    let columns = names
        .iter()
        .map(|name| data.column(name))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&names)?;

    for row in 0..data.nrows() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| match column.get(row) {
                Some(SeriesValue::Float(v)) => format!("{}", v),
                Some(other) => other.to_string(),
                None => String::new(),
            })
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
