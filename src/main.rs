//! pomcheck: release-readiness checker for Maven projects.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pomcheck::{
    cli,
    config::{self, CheckConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pomcheck")]
#[command(version)]
#[command(about = "Check a Maven project for release readiness", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXIT CODES:
    0  Every check passed
    1  A check failed, the build failed, or the run could not start

ENVIRONMENT:
    CONTINUE_ON_ERROR   Any non-empty value runs every check instead of stopping at the first failure
    POMCHECK_CONFIG     Path to the configuration file

EXAMPLES:
    # Stop at the first problem
    pomcheck path/to/project

    # Report every problem
    CONTINUE_ON_ERROR=1 pomcheck path/to/project

    # SARIF for code-scanning upload
    pomcheck path/to/project --continue-on-error -o sarif -O pomcheck.sarif")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress PASS lines
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "POMCHECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    check: CheckArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments of the default check
#[derive(Args)]
struct CheckArgs {
    /// Maven project directory containing the top-level pom.xml
    project_dir: Option<PathBuf>,

    /// Run every check and report all failures
    #[arg(long)]
    continue_on_error: bool,

    /// Final report format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .pomcheck.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1 like every other failure; --help/--version exit 0.
            let code = if e.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        None => {
            let args = cli.check;
            let Some(project_dir) = args.project_dir else {
                anyhow::bail!("missing <PROJECT_DIR> argument; see `pomcheck --help`");
            };

            let (mut app, loaded_from) = config::load_for_run(cli.config.as_deref())
                .context("failed to load configuration")?;
            if let Some(path) = &loaded_from {
                tracing::debug!("loaded config from {}", path.display());
            }
            if args.continue_on_error || config::continue_on_error_from_env() {
                app.behavior.continue_on_error = true;
            }

            let mut check = CheckConfig::new(project_dir, app);
            check.format = args.output;
            check.output_file = args.output_file;
            check.quiet = cli.quiet;
            check.no_color = cli.no_color;

            let exit_code = cli::run_check(check)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "pomcheck", &mut io::stdout());
            Ok(())
        }

        Some(Commands::ConfigSchema { output }) => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::file::search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".pomcheck.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
