use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use tickle::core::config::{self, CliOverrides, ResolvedConfig};
use tickle::core::error::Error;

/// Exit code for Ctrl+C, as a shell reports SIGINT.
const INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "tickle", about = "Interactive todo list manager")]
struct Args {
    /// Todo file to read and write [default: todos.json]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_interrupt() => {
            log::info!("Interrupted");
            ExitCode::from(INTERRUPTED)
        }
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("tickle: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let file_config = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            file: args.file,
            verbose: args.verbose,
        },
    );
    init_logging(&resolved);

    log::info!(
        "Tickle starting up with store {}",
        resolved.store_path.display()
    );
    tickle::tui::run(&resolved).await
}

/// File logger; the terminal itself is reserved for prompts and output.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
