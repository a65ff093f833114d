use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Use library instead of local modules
use card_validator::{
    init_logging, network_rules, shell, validate_card, validate_file, AppConfig, ReportFormat,
};

#[derive(Parser)]
#[command(name = "card-validator", version, about = "Identify a card's network and check its Luhn digit")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the numbers given on the command line
    Check {
        #[arg(required = true)]
        numbers: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate every number in a CSV file (column `number`)
    Batch {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List the network rules in matching order
    Networks,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ReportFormat::Json,
            Format::Csv => ReportFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = AppConfig::load(cli.config.as_deref(), &cwd)?;
    init_logging(&config.logging.filter);

    match cli.command {
        None => run_interactive(&config),
        Some(Command::Check { numbers, json }) => run_check(&numbers, json),
        Some(Command::Batch { file, format, output }) => run_batch(&file, format.into(), output),
        Some(Command::Networks) => run_networks(),
    }
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_session(&config.shell, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn run_check(numbers: &[String], json: bool) -> Result<()> {
    let results: Vec<_> = numbers.iter().map(|n| validate_card(n)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (number, result) in numbers.iter().zip(&results) {
        println!("{}  {}", card_validator::mask_number(number), result.message());
    }

    Ok(())
}

fn run_batch(file: &Path, format: ReportFormat, output: Option<PathBuf>) -> Result<()> {
    eprintln!("📂 Validating {}...", file.display());
    let report = validate_file(file)?;

    match output {
        Some(path) => {
            let out = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            report.write(format, io::BufWriter::new(out))?;
            eprintln!("✓ Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            report.write(format, &mut lock)?;
            writeln!(lock)?;
        }
    }

    eprintln!("✓ {}", report.summary.summary());
    Ok(())
}

fn run_networks() -> Result<()> {
    println!("{:<18} {:<21} RULE", "NETWORK", "SAMPLE");
    for rule in network_rules() {
        println!("{:<18} {:<21} {}", rule.network.name(), rule.sample(), rule.describe());
    }
    Ok(())
}
