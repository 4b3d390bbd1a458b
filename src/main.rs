use anyhow::Result;
use clap::{Parser, Subcommand};

use verg::semantic::{self, IncrementFlags, Semantic};
use verg::ui;

#[derive(Parser)]
#[command(
    name = "verg",
    version,
    about = "Parse, increment and compare semantic versions",
    subcommand_negates_reqs = true
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(id = "input_version", required = true, value_name = "VERSION")]
    version: Option<String>,

    #[arg(short = 'x', long, help = "increment major version")]
    major: bool,

    #[arg(short = 'y', long, help = "increment minor version")]
    minor: bool,

    #[arg(short = 'z', long, help = "increment patch version")]
    patch: bool,

    #[arg(short = 'r', long, help = "increment release version")]
    release: bool,

    #[arg(short = 'b', long, help = "increment beta version")]
    beta: bool,

    #[arg(short = 'a', long, help = "increment alpha version")]
    alpha: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two versions, e.g. "1.0.0 [< or <= or > or >= or ==] 2.0.0"
    Compare {
        #[arg(value_name = "EXPRESSION")]
        expression: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Compare { expression }) => run_compare(&expression),
        None => run_bump(&args),
    }
}

fn run_bump(args: &Args) -> Result<()> {
    // The positional is required whenever no subcommand is given
    let raw = args.version.as_deref().unwrap_or_default();

    let mut semantic = match Semantic::parse(raw) {
        Ok(s) => s,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    semantic.apply_increments(&IncrementFlags {
        major: args.major,
        minor: args.minor,
        patch: args.patch,
        release: args.release,
        beta: args.beta,
        alpha: args.alpha,
    });

    println!("{}", semantic);
    Ok(())
}

fn run_compare(expression: &str) -> Result<()> {
    let items: Vec<&str> = expression.splitn(3, ' ').collect();

    if items.len() != 3 {
        ui::display_error(
            "Command is not valid argument. Ex: 1.0.0 [< or <= or > or >= or ==] 2.0.0",
        );
        std::process::exit(1);
    }

    match semantic::compare(items[0], items[1], items[2]) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
