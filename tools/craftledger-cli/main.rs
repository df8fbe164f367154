use anyhow::{Context, Result};
use clap::Parser;
use craftledger::catalog::{DEFAULT_API_URL, MAX_LEVEL};
use craftledger::config::DEFAULT_DATA_DIR;
use craftledger::prelude::*;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extracts craftable equipment and their recipe trees, then builds the pricing ledgers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the job list, the effect allowlist, the results and the ledgers
    #[arg(long, env = "CRAFTLEDGER_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Base URL of the item catalog API
    #[arg(long, env = "CRAFTLEDGER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

/// The operator typed `q` at a prompt.
#[derive(Debug)]
struct Quit;

impl fmt::Display for Quit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "execution terminated by user")
    }
}

impl std::error::Error for Quit {}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let start = Instant::now();
    let settings = Settings::new(cli.data_dir, cli.api_url);

    match run(&settings) {
        Ok(()) => println!("Done."),
        Err(e) if e.is::<Quit>() => println!("Execution terminated by user."),
        Err(e) => exit_with_error(&format!("{:#}", e)),
    }
    println!("Execution time: {:.2} seconds", start.elapsed().as_secs_f64());
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "craftledger=info,craftledger_cli=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(settings: &Settings) -> Result<()> {
    let forest = extract_or_load(settings)?;

    let ledgers = aggregate(&forest);
    ledgers
        .save(&settings.ledger_paths())
        .context("Failed to write ledgers")?;
    info!(
        unpriced = ledgers.unpriced_count(),
        "Ledgers written, ready for pricing"
    );
    Ok(())
}

/// Runs a fresh extraction, or reuses the existing results file when the operator declines to overwrite it.
fn extract_or_load(settings: &Settings) -> Result<Vec<JobExtraction>> {
    let results_path = settings.results_path();
    if file_exists(&results_path) {
        let question = format!(
            "Results file '{}' already exists. Overwrite it?",
            results_path.display()
        );
        if !prompt_yes_no(&question)? {
            info!(path = %results_path.display(), "Reusing existing results");
            return read_json(&results_path).context("Failed to load existing results");
        }
    }

    let jobs: Vec<JobConfig> =
        read_json(&settings.jobs_path()).context("Failed to load the job list")?;
    let accepted: Vec<String> =
        read_json(&settings.effects_path()).context("Failed to load accepted effect names")?;

    let selection = prompt_job(&jobs)?;
    let levels = prompt_levels()?;

    let catalog = HttpCatalog::new(&settings.api_url);
    let extractor = Extractor::new(&catalog, &jobs, accepted);
    let forest = extractor
        .extract_jobs(&selection, levels)
        .context("Extraction failed")?;
    info!(
        jobs = forest.len(),
        recipes = extractor.resolver().cache().len(),
        "Extraction finished"
    );

    write_json(&results_path, &forest).context("Failed to write results")?;
    Ok(forest)
}

fn prompt_yes_no(question: &str) -> Result<bool> {
    loop {
        match prompt_for_input(&format!("{} (y/n/q)", question))?
            .to_lowercase()
            .as_str()
        {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Please answer y, n or q."),
        }
    }
}

fn prompt_job(jobs: &[JobConfig]) -> Result<JobSelection> {
    println!("\nAvailable jobs:");
    for (index, job) in jobs.iter().enumerate() {
        println!("  {}: {}", index, job.name);
    }

    loop {
        let choice = prompt_for_input("Select a job (index, 'all' or 'q')")?;
        if choice.eq_ignore_ascii_case("all") {
            return Ok(JobSelection::All);
        }
        match choice.parse::<usize>().ok().and_then(|i| jobs.get(i)) {
            Some(job) => return Ok(JobSelection::Named(job.name.clone())),
            None => println!(
                "Invalid choice. Enter an index between 0 and {}.",
                jobs.len().saturating_sub(1)
            ),
        }
    }
}

fn prompt_levels() -> Result<LevelRange> {
    let min = prompt_level("Minimum level", 0)?;
    let max = prompt_level("Maximum level", min)?;
    Ok(LevelRange::new(min, max)?)
}

fn prompt_level(label: &str, lowest: u32) -> Result<u32> {
    loop {
        let input = prompt_for_input(&format!("{} ({}-{})", label, lowest, MAX_LEVEL))?;
        match input.parse::<u32>() {
            Ok(level) if (lowest..=MAX_LEVEL).contains(&level) => return Ok(level),
            _ => println!("Please enter a level between {} and {}.", lowest, MAX_LEVEL),
        }
    }
}

/// Prompts the user and reads a trimmed line. `q` (or end of input) yields [`Quit`].
fn prompt_for_input(prompt_text: &str) -> Result<String> {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush()?;

    if io::stdin().read_line(&mut line)? == 0 {
        return Err(Quit.into());
    }
    let trimmed = line.trim().to_string();
    if trimmed.eq_ignore_ascii_case("q") {
        return Err(Quit.into());
    }
    Ok(trimmed)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
