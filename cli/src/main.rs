mod cli;
mod observer;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, DrawArgs, InputArgs, OutputFormat, VerifyArgs};
use observer::TracingObserver;
use secret_santa_core_rs::tabular::{read_participants, read_previous_pairs, write_assignments};
use secret_santa_core_rs::{
    run_draw, verify_record, Assignment, DrawRecord, ForbiddenPairs, GeneratorConfig, Participant, RecordError,
    DEFAULT_MAX_ATTEMPTS,
};

/// Optional settings file; flags take precedence
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    rng_seed: Option<u64>,
    max_attempts: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Draw(args) => draw(args),
        Command::Verify(args) => verify(args),
    }
}

/// Initialize tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so assignments can be piped from stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn draw(args: DrawArgs) -> Result<()> {
    let (participants, forbidden) = load_inputs(&args.inputs)?;
    let config = build_config(&args)?;
    tracing::info!(
        participants = participants.len(),
        prior_pairs = forbidden.len(),
        seed = config.rng_seed,
        max_attempts = config.max_attempts,
        "drawing"
    );

    let record = match run_draw(&config, &participants, &forbidden, &mut TracingObserver::default()) {
        Ok(record) => record,
        Err(RecordError::Generation(err)) => {
            tracing::error!("{}", err.diagnostic_report());
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_output(BufWriter::new(file), args.format, &record.assignments)?;
            tracing::info!(path = %path.display(), "assignments written");
        }
        None => write_output(io::stdout().lock(), args.format, &record.assignments)?,
    }

    if let Some(path) = &args.record {
        fs::write(path, record.to_json()?).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), run_id = %record.run_id, "draw record written");
    }

    Ok(())
}

fn verify(args: VerifyArgs) -> Result<()> {
    let (participants, forbidden) = load_inputs(&args.inputs)?;
    let json = fs::read_to_string(&args.record)
        .with_context(|| format!("reading {}", args.record.display()))?;
    let record = DrawRecord::from_json(&json)?;

    verify_record(&record, &participants, &forbidden)
        .with_context(|| format!("draw {} failed verification", record.run_id))?;

    tracing::info!(run_id = %record.run_id, seed = record.rng_seed, "draw record verified");
    Ok(())
}

fn load_inputs(inputs: &InputArgs) -> Result<(Vec<Participant>, ForbiddenPairs)> {
    let participants = read_participants(open(&inputs.participants)?)
        .with_context(|| format!("reading participants from {}", inputs.participants.display()))?;
    if participants.is_empty() {
        bail!("{} contains no participants", inputs.participants.display());
    }

    let forbidden = match &inputs.previous {
        Some(path) => read_previous_pairs(open(path)?)
            .with_context(|| format!("reading previous round from {}", path.display()))?,
        None => ForbiddenPairs::new(),
    };

    Ok((participants, forbidden))
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn build_config(args: &DrawArgs) -> Result<GeneratorConfig> {
    let file = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<ConfigFile>(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let seed = args
        .seed
        .or(file.rng_seed)
        .unwrap_or_else(|| uuid::Uuid::new_v4().as_u64_pair().0);
    let max_attempts = args
        .max_attempts
        .or(file.max_attempts)
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);

    Ok(GeneratorConfig::new(seed).with_max_attempts(max_attempts))
}

fn write_output<W: Write>(mut writer: W, format: OutputFormat, assignments: &[Assignment]) -> Result<()> {
    match format {
        OutputFormat::Csv => write_assignments(writer, assignments)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, assignments)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
