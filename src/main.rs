use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ecs_sample_job::config::JobConfig;
use ecs_sample_job::runner::run_job;

/// Sample batch job: processes a fixed number of simulated items and prints a JSON summary
#[derive(Parser, Debug)]
#[command(name = "ecs-sample-job", version)]
struct Args {
    /// Name of the job (labels output only) [default: sample-job]
    #[arg(long, env = "JOB_NAME")]
    job_name: Option<String>,

    /// Number of items to process [default: 5]
    #[arg(long, env = "PROCESS_COUNT", allow_hyphen_values = true)]
    process_count: Option<String>,

    /// Simulated work per item, in milliseconds [default: 1000]
    #[arg(long, env = "STEP_DELAY_MS")]
    step_delay_ms: Option<String>,

    /// Log runner diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return report_parse_error(e),
    };

    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Numeric values stay raw strings here so bad input reports through the
    // job's own error path instead of clap's usage error
    let config = JobConfig::from_raw(
        args.job_name.as_deref(),
        args.process_count.as_deref(),
        args.step_delay_ms.as_deref(),
    )
    .context("invalid job configuration")?;

    run_job(&config, std::io::stdout().lock())
        .await
        .with_context(|| format!("job '{}' failed", config.job_name))?;

    Ok(())
}

/// Help and version go to stdout and exit 0; every other parse failure is a
/// job fault and gets the one-line `ERROR:` treatment
fn report_parse_error(e: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            let rendered = e.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            eprintln!("ERROR: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the job transcript
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let default_filter = if verbose {
        "ecs_sample_job=info"
    } else {
        "ecs_sample_job=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
