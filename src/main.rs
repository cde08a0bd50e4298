//! mathforge CLI - Randomized math worksheet generation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mathforge::{Config, Registry, WorksheetPipeline};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mathforge")]
#[command(version)]
#[command(about = "Randomized math worksheet generation with LaTeX output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "mathforge.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the problems and solutions documents
    Generate {
        /// RNG seed, overriding the configured one
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Validate configuration file
    Validate,

    /// List the registered problem kinds
    List,

    /// Show example configuration
    Example,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# mathforge configuration file

[output]
problems = "problems.tex"
solutions = "solutions.tex"

# Optional: override the LaTeX wrapper emitted around both documents.
# [latex]
# preamble = "..."
# postamble = "\\end{document}"

[generation]
# seed = 42            # uncomment for reproducible output

# One table per problem kind; run `mathforge list` for the full set.
# nprobs is the number of problems to emit, and the solutions flag picks
# full worked solutions over short answers in the solutions document.
[problems.abs-value-inequality]
nprobs = 5
solutions = true

[problems.binomial-expansion]
nprobs = 3
solutions = false

[problems.reverse-abs-value]
nprobs = 4
solutions = true
full_simplify = true
"#;
    println!("{example}");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
            return Ok(());
        }

        Commands::List => {
            let registry = Registry::builtin();
            for kind in registry.iter() {
                println!("{:<24} {}", kind.slug, kind.section);
            }
            return Ok(());
        }

        Commands::Validate => {
            let config = Config::from_file(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

            let pipeline =
                WorksheetPipeline::new(config).context("Failed to validate configuration")?;

            let config = pipeline.config();
            info!("Configuration is valid");
            info!(
                "  Kinds configured: {} of {}",
                config.problems.len(),
                pipeline.registry().len()
            );
            info!("  Total problems:   {}", config.total_requested());
            return Ok(());
        }

        Commands::Generate { seed } => {
            let mut config = Config::from_file(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

            // Override seed from CLI
            if seed.is_some() {
                config.generation.seed = seed;
            }

            let prob_path = config.output.problems_path();
            let soln_path = config.output.solutions_path();

            let pipeline = WorksheetPipeline::new(config)?;
            let stats = pipeline.run()?;

            println!("\n=== Worksheet Generation Complete ===");
            println!("Sections:    {}", stats.total_sections);
            println!("Problems:    {}", stats.total_problems);
            println!("Answers:     {}", stats.total_answers);
            println!("Solutions:   {}", stats.total_full_solutions);
            println!("Runtime:     {:.1}s", stats.runtime_secs);
            println!("Problems:    {}", prob_path.display());
            println!("Solutions:   {}", soln_path.display());
        }
    }

    Ok(())
}
