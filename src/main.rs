use std::path::PathBuf;

use clap::Parser;
use pyarith::{
    DEFAULT_MAX_DEPTH, Limits,
    error::IoError,
    pipeline::{default_output_dir, ensure_dir, process_file, select_inputs, summary_line},
};
use tracing::{error, info, warn};

/// pyarith evaluates arithmetic expression files and writes one result per
/// file: the value, or `ERROR:<position>` for the first problem found.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every `.txt` file directly inside this directory.
    #[arg(short, long, value_name = "DIR", conflicts_with = "input")]
    dir: Option<PathBuf>,

    /// Directory for result files. Created if missing.
    #[arg(short, long, value_name = "OUTDIR")]
    output_dir: Option<PathBuf>,

    /// Suffix appended to each result file name: `<stem>_<suffix>.txt`.
    #[arg(long, default_value = "result")]
    suffix: String,

    /// Maximum nesting of parentheses, signs, and exponents.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Also print every result line to stdout.
    #[arg(short, long)]
    print: bool,

    /// A single input file.
    input: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        report(&e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), IoError> {
    let inputs = select_inputs(args.dir.as_deref(), args.input.as_deref())?;

    let out_dir = args.output_dir
                      .clone()
                      .unwrap_or_else(|| {
                          default_output_dir(args.input.as_deref(),
                                             args.dir.is_some(),
                                             &args.suffix)
                      });
    ensure_dir(&out_dir)?;

    let limits = Limits { max_depth: args.max_depth };
    info!(files = inputs.len(), out_dir = %out_dir.display(), "processing inputs");

    for input in &inputs {
        match process_file(input, &out_dir, &args.suffix, limits) {
            Ok(processed) => {
                if let Err(e) = &processed.outcome {
                    warn!(file = %input.display(), "{e}");
                }
                if args.print {
                    println!("{}", summary_line(input, &processed.outcome));
                }
            },
            Err(e) => report(&e),
        }
    }

    Ok(())
}

/// Sends a failure to the log when a subscriber is installed, to stderr
/// otherwise.
fn report(e: &IoError) {
    if tracing::dispatcher::has_been_set() {
        error!("{e}");
    } else {
        eprintln!("{e}");
    }
}

/// Installs a stderr `fmt` subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
