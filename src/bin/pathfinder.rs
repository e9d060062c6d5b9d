//! pathfinder
//!
//! Inspects deep-link paths and cursor addresses without a game record.

use clap::Parser;
use clap::Subcommand;
use movepath::*;

#[derive(Parser)]
#[command(about = "Inspect move-tree paths and addresses")]
struct Args {
    /// log at DEBUG level
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Show the segments a path string parses into
    Parse { path: String },
    /// Validate a "<depth>,<sibling>" address
    Address { text: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    match args.command {
        Cmd::Parse { path } => {
            let parsed = Path::from(path.as_str());
            if parsed.is_empty() {
                log::info!("{:?} navigates nowhere", path);
            }
            for (i, segment) in parsed.segments().iter().enumerate() {
                let noop = if segment.is_noop() { "  (no-op)" } else { "" };
                println!("{:>3}  {:<6} {}{}", i, format!("{:?}", segment.mode), segment.count, noop);
            }
            println!("canonical: {}", parsed);
        }
        Cmd::Address { text } => {
            let address = Address::try_from(text.as_str())?;
            println!("depth:   {}", address.depth);
            println!("sibling: {}", address.sibling);
            if address.is_root() {
                println!("(root)");
            }
        }
    }
    Ok(())
}
