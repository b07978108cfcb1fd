mod commands;

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tokencss_core::config::{DEFAULT_CYCLE_DEPTH_LIMIT, DEFAULT_DECIMAL_PRECISION, DEFAULT_PREFIX};
use tokencss_core::Config;

/// Output format for CLI error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Design-token to CSS custom-property toolchain.
#[derive(Parser)]
#[command(name = "tokencss", version, about = "Design-token compiler")]
struct Cli {
    /// Error report format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Custom-property namespace prefix
    #[arg(long, global = true, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Theme mode name that branches into per-theme blocks (repeatable;
    /// defaults to light and dark)
    #[arg(long = "theme-mode", global = true)]
    theme_modes: Vec<String>,

    /// Maximum fractional digits for normalized numeric values
    #[arg(long, global = true, default_value_t = DEFAULT_DECIMAL_PRECISION)]
    precision: u32,

    /// Substitution depth before a reference chain is declared cyclic
    #[arg(long, global = true, default_value_t = DEFAULT_CYCLE_DEPTH_LIMIT)]
    depth_limit: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten one token JSON source into custom-property declarations
    Flatten {
        /// Path to the token JSON file
        source: PathBuf,
        /// Output CSS file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Emit normalized literal values instead of var() references
        #[arg(long)]
        base: bool,
        /// Suffix appended to every path key (e.g. a size-set name)
        #[arg(long)]
        suffix: Option<String>,
        /// Selector for the emitted rule block
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Flatten <mode>.json per theme mode into theme-class rule blocks
    Themes {
        /// Directory containing one <mode>.json per theme mode
        dir: PathBuf,
        /// Output CSS file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Flatten several suffixed sources into one :root block
    Multi {
        /// Directory containing <name>.json files
        dir: PathBuf,
        /// Source names; each is both the file stem and the key suffix
        #[arg(required = true)]
        names: Vec<String>,
        /// Output CSS file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Resolve var() references across flattened CSS files
    Resolve {
        /// Flattened CSS files sharing one namespace
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Directory for resolved copies (stdout when omitted)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Merge exactly two theme files into light-dark() composites
        #[arg(long)]
        light_dark: bool,
        /// Selector whose declarations are read from each input
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Resolve a token tree against itself into nested JSON test data
    Testdata {
        /// Path to the token JSON file
        source: PathBuf,
        /// Output JSON file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let theme_modes: BTreeSet<String> = if cli.theme_modes.is_empty() {
        Config::default().theme_modes
    } else {
        cli.theme_modes.iter().cloned().collect()
    };
    let config = Config {
        prefix: cli.prefix.clone(),
        theme_modes,
        decimal_precision: cli.precision,
        cycle_depth_limit: cli.depth_limit,
    };

    let result = match &cli.command {
        Commands::Flatten {
            source,
            out,
            base,
            suffix,
            selector,
        } => commands::flatten::run(
            source,
            out.as_deref(),
            *base,
            suffix.as_deref(),
            selector,
            &config,
        ),
        Commands::Themes { dir, out } => commands::themes::run(dir, out.as_deref(), &config),
        Commands::Multi { dir, names, out } => {
            commands::multi::run(dir, names, out.as_deref(), &config)
        }
        Commands::Resolve {
            files,
            out_dir,
            light_dark,
            selector,
        } => commands::resolve::run(files, out_dir.as_deref(), *light_dark, selector, &config),
        Commands::Testdata { source, out } => {
            commands::testdata::run(source, out.as_deref(), &config)
        }
    };

    if let Err(failure) = result {
        commands::report(&failure, cli.output, cli.quiet);
        process::exit(1);
    }
}
