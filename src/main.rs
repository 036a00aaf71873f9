//! CLI entry point for heft

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use heft::{OutputConfig, SizeMode, SortOrder, TreeFormatter, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "heft")]
#[command(about = "A tree command that shows where your disk space went")]
#[command(version)]
struct Args {
    /// File or directory to analyze
    path: PathBuf,

    /// Use apparent byte size instead of allocated blocks (512 bytes each)
    #[arg(short = 'a', long = "apparent-size")]
    apparent_size: bool,

    /// Sort entries by size, largest first, instead of by name
    #[arg(short = 's', long = "sort-size")]
    sort_size: bool,

    /// Show each entry as a percentage of the root size
    #[arg(short = 'p', long = "percent")]
    percent: bool,

    /// Descend only NUMBER levels below the root
    #[arg(short = 'd', long = "depth", value_name = "NUMBER")]
    depth: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let walker_config = WalkerConfig {
        size_mode: if args.apparent_size {
            SizeMode::Apparent
        } else {
            SizeMode::Blocks
        },
    };

    let walker = TreeWalker::new(walker_config);
    let mut tree = match walker.walk(&args.path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("heft: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        sort: if args.sort_size {
            SortOrder::Size
        } else {
            SortOrder::Name
        },
        percent: args.percent,
        max_depth: args.depth,
    };

    let formatter = TreeFormatter::new(output_config);
    if let Err(e) = formatter.print(&mut tree) {
        eprintln!("heft: error writing output: {}", e);
        process::exit(1);
    }
}
