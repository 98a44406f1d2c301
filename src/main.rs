use clap::Parser;
use std::io;
use std::path::PathBuf;
use toy_robot::{RobotInterpreter, Session, SessionError, TableConfig};
use tracing_subscriber::EnvFilter;

const BANNER: &str = "-------------- Toy Robot Simulator --------------";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command file to run. Reads from stdin when omitted.
    input: Option<PathBuf>,

    /// Table width in cells.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Table height in cells.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Log filter for diagnostics written to stderr (e.g. "debug", "toy_robot=trace").
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), SessionError> {
    let args = Args::parse();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .try_init();

    println!("{BANNER}");

    let interpreter = RobotInterpreter::new(TableConfig {
        width: args.width,
        height: args.height,
    });
    let mut session = Session::new(interpreter, io::stdout());

    let result = match &args.input {
        Some(path) => session.run_file(path),
        None => session.run_console(io::stdin().lock()),
    };
    match result {
        Err(err @ SessionError::MissingInputFile) => {
            println!("{err}");
            Ok(())
        }
        other => other,
    }
}
