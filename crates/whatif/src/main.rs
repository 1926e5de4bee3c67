//! Command-line demonstrations of the what-if analysis routines against the
//! bookstore stocking model.

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

use whatif_core::{
    GoalSeekSpec, ProgressCallback, ScenarioSpec, SimulationSpec, data_table, flatten, goal_seek,
    simulate,
};

mod model;
mod report;

use model::BookstoreModel;

#[derive(Parser, Debug)]
#[command(name = "whatif")]
#[command(about = "Spreadsheet-style what-if analysis over a bookstore stocking model")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate outputs over a grid of candidate input values
    Table(TableArgs),
    /// Drive one output to a target value by bisecting one input
    Seek(SeekArgs),
    /// Monte Carlo simulation with normally distributed demand
    Simulate(SimulateArgs),
}

#[derive(ClapArgs, Debug)]
struct TableArgs {
    /// Candidate order quantities
    #[arg(long, value_delimiter = ',', default_value = "150,200,250")]
    order_quantity: Vec<f64>,

    /// Candidate selling prices (optional second sweep dimension)
    #[arg(long, value_delimiter = ',')]
    selling_price: Vec<f64>,

    /// Outputs to record per grid point
    #[arg(long, value_delimiter = ',', default_value = "profit")]
    outputs: Vec<String>,

    /// Emit rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct SeekArgs {
    /// Output to drive to the target
    #[arg(long, default_value = "profit")]
    output: String,

    /// Target value for the output
    #[arg(long, default_value_t = 0.0)]
    target: f64,

    /// Input to search over
    #[arg(long, default_value = "order_quantity")]
    input: String,

    /// Lower end of the search bracket
    #[arg(long)]
    lower: f64,

    /// Upper end of the search bracket
    #[arg(long)]
    upper: f64,

    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    /// Print each bisection step
    #[arg(long)]
    trace: bool,
}

#[derive(ClapArgs, Debug)]
struct SimulateArgs {
    /// Number of demand replications to draw
    #[arg(long, default_value_t = 1000)]
    replications: usize,

    #[arg(long, default_value_t = 200.0)]
    demand_mean: f64,

    #[arg(long, default_value_t = 40.0)]
    demand_sd: f64,

    /// Order quantities to sweep as scenarios
    #[arg(long, value_delimiter = ',', default_value = "150,200,250")]
    order_quantity: Vec<f64>,

    /// Outputs to evaluate per scenario
    #[arg(long, value_delimiter = ',', default_value = "profit")]
    outputs: Vec<String>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Record the drawn demand series in the provenance snapshot
    #[arg(long)]
    keep_random_inputs: bool,

    /// Emit flattened rows as JSON instead of summary statistics
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let model = BookstoreModel::base();
    match args.command {
        Command::Table(table) => run_table(&model, &table),
        Command::Seek(seek) => run_seek(&model, &seek),
        Command::Simulate(sim) => run_simulate(&model, &sim),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_table(model: &BookstoreModel, args: &TableArgs) -> Result<()> {
    let mut spec = ScenarioSpec::new().values("order_quantity", args.order_quantity.clone());
    if !args.selling_price.is_empty() {
        spec = spec.values("selling_price", args.selling_price.clone());
    }
    tracing::info!(points = spec.point_count(), "expanding scenario grid");

    let output_refs: Vec<&str> = args.outputs.iter().map(String::as_str).collect();
    let rows = data_table(model, &spec, &output_refs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::print_data_table(&rows);
    }
    Ok(())
}

fn run_seek(model: &BookstoreModel, args: &SeekArgs) -> Result<()> {
    let spec = GoalSeekSpec::new(
        args.output.clone(),
        args.target,
        args.input.clone(),
        args.lower,
        args.upper,
    )
    .max_iterations(args.max_iterations);

    let progress: Option<ProgressCallback> = if args.trace {
        Some(Box::new(|iteration, midpoint, value| {
            println!("  iter {iteration:>3}: midpoint {midpoint:>14.6} -> {value:>14.6}");
        }))
    } else {
        None
    };

    let result = goal_seek(model, &spec, progress)?;
    report::print_goal_seek(&spec, &result);
    Ok(())
}

fn run_simulate(model: &BookstoreModel, args: &SimulateArgs) -> Result<()> {
    let normal = Normal::new(args.demand_mean, args.demand_sd)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let demand: Vec<f64> = (0..args.replications)
        .map(|_| normal.sample(&mut rng))
        .collect();
    tracing::info!(
        replications = args.replications,
        seed = args.seed,
        "drew demand sequence"
    );

    let mut spec = SimulationSpec::new()
        .random_input("demand", demand)
        .scenarios(ScenarioSpec::new().values("order_quantity", args.order_quantity.clone()))
        .keep_random_inputs(args.keep_random_inputs);
    for name in &args.outputs {
        spec = spec.output(name.as_str());
    }

    let groups = simulate(model, &spec)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&flatten(&groups))?);
    } else {
        report::print_simulation_summary(&groups, &args.outputs);
    }
    Ok(())
}
