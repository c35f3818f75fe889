use anyhow::{Result, bail};
use clap::Parser;
use rmr::framework::{FrameworkDescriptor, FrameworkSelector};
use rmr::moniker::RuntimeMoniker;
use rmr::platform::runtime_identifiers;

/// rmr - Runtime Moniker Resolver
///
/// Resolve runtime monikers (e.g. "dnx-clr-win-x64.1.0.0") into a target
/// framework and the runtime identifiers used for asset selection.
///
/// Examples:
///   rmr rids dnx-clr-win-x64.1.0.0
///   rmr select dnx-mono.1.0.0 -c DNX/4.5 -c DNX/4.6
#[derive(Parser, Debug)]
#[command(author, version = env!("RMR_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Parse a moniker into its family/os/arch triple
    Parse(ParseArgs),

    /// Select the target framework for a moniker among candidates
    Select(SelectArgs),

    /// Print the runtime identifiers for a moniker
    Rids(RidsArgs),
}

#[derive(clap::Args, Debug)]
struct ParseArgs {
    /// The runtime moniker, e.g. "dnx-coreclr-linux-x64.1.0.0"
    #[arg(value_name = "MONIKER")]
    moniker: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct SelectArgs {
    /// The runtime moniker to select a framework for
    #[arg(value_name = "MONIKER")]
    moniker: String,

    /// Candidate framework as IDENTIFIER/VERSION (repeatable)
    #[arg(
        short = 'c',
        long = "candidate",
        value_name = "ID/VERSION",
        required = true
    )]
    candidates: Vec<FrameworkDescriptor>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct RidsArgs {
    /// The runtime moniker to map
    #[arg(value_name = "MONIKER")]
    moniker: String,

    /// Emit a JSON array instead of one identifier per line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => parse(&args),
        Commands::Select(args) => select(&args),
        Commands::Rids(args) => rids(&args),
    }
}

fn parse(args: &ParseArgs) -> Result<()> {
    let Some(moniker) = RuntimeMoniker::parse(&args.moniker) else {
        bail!("Invalid runtime moniker: {:?}", args.moniker);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&moniker)?);
    } else {
        println!("family: {}", moniker.family);
        if let Some(os) = &moniker.os {
            println!("os: {os}");
        }
        if let Some(arch) = &moniker.arch {
            println!("arch: {arch}");
        }
    }
    Ok(())
}

fn select(args: &SelectArgs) -> Result<()> {
    let Some(moniker) = RuntimeMoniker::parse(&args.moniker) else {
        bail!("Invalid runtime moniker: {:?}", args.moniker);
    };

    match FrameworkSelector::select(&moniker, &args.candidates) {
        Some(framework) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(framework)?);
            } else {
                println!("{framework}");
            }
            Ok(())
        }
        None => bail!("No candidate framework matches {:?}", args.moniker),
    }
}

fn rids(args: &RidsArgs) -> Result<()> {
    let identifiers = runtime_identifiers(&args.moniker);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&identifiers)?);
    } else {
        // Empty output is a valid answer: the moniker just has no platforms.
        for identifier in &identifiers {
            println!("{identifier}");
        }
    }
    Ok(())
}
