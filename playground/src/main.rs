use clap::{Parser, Subcommand};
use writer::ReportWriter;

mod shapes;
mod sorting;
mod writer;

/// Demonstrations of the shape factory and merge sort lessons.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort the given numbers with merge sort
    Sort {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Sort both halves of large inputs on separate threads
        #[arg(long)]
        parallel: bool,
        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Sort a few fixed arrays and print inputs and outputs
    Demo,
    /// Compare merge sort against the standard library sort on random arrays
    Check {
        #[arg(long, default_value_t = 100)]
        len: usize,
        /// Values are drawn from `0..max`
        #[arg(long, default_value_t = 1000)]
        max: i64,
        #[arg(long, default_value_t = 1)]
        runs: usize,
        #[arg(long)]
        json: bool,
    },
    /// Build one shape with the factory and print it
    Shape {
        /// circle, triangle or square
        kind: String,
        size: f64,
        #[arg(long)]
        json: bool,
    },
    /// Build one shape of every kind and print them
    Shapes,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = ReportWriter::new(stdout.lock());
    match cli.command {
        Command::Sort {
            values,
            parallel,
            json,
        } => sorting::sort_values(&mut out, &values, parallel, json),
        Command::Demo => sorting::run_demo(&mut out),
        Command::Check {
            len,
            max,
            runs,
            json,
        } => {
            let settings = sorting::CheckSettings { len, max, runs };
            sorting::check(&mut out, &mut rand::rng(), &settings, json)
        }
        Command::Shape { kind, size, json } => shapes::show_shape(&mut out, &kind, size, json),
        Command::Shapes => shapes::run_demo(&mut out),
    }
}
