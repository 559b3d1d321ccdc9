use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tailgroup_engine::{classify, group, FormatOptions, Formatter};

use crate::flags::OutputFormatFlag;

mod flags;

#[derive(Parser)]
#[command(name = "tailgroup")]
#[command(about = "Group CSS utility classes into labeled category segments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regroup a class string and print the rendered form
    Format(FormatArgs),

    /// Print the category of each token
    Classify(ClassifyArgs),

    /// Print the grouping as a category-to-tokens JSON map
    Group(GroupArgs),

    /// Lint mode: exit non-zero when a class string should be regrouped
    Check(CheckArgs),
}

#[derive(Args)]
struct FormatArgs {
    /// Class string to format (reads --file or stdin when omitted)
    classes: Option<String>,

    /// Path to a file containing the class string
    #[arg(long, conflicts_with = "classes")]
    file: Option<PathBuf>,

    /// Output shape
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormatFlag::Clsx)]
    format: OutputFormatFlag,

    /// Minimum token count before regrouping applies
    #[arg(long, default_value_t = 4)]
    min_tokens: usize,

    /// Omit category label comments
    #[arg(long)]
    no_comments: bool,

    /// Indentation prefix for rendered lines
    #[arg(long, default_value = "  ")]
    indent: String,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Tokens to classify
    #[arg(required = true)]
    tokens: Vec<String>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GroupArgs {
    /// Class string to group (reads --file or stdin when omitted)
    classes: Option<String>,

    /// Path to a file containing the class string
    #[arg(long, conflicts_with = "classes")]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct CheckArgs {
    /// Class string to check (reads --file or stdin when omitted)
    classes: Option<String>,

    /// Path to a file containing the class string
    #[arg(long, conflicts_with = "classes")]
    file: Option<PathBuf>,

    /// Minimum token count before regrouping applies
    #[arg(long, default_value_t = 4)]
    min_tokens: usize,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for machine-readable output.
    let json_output = match &cli.command {
        Commands::Format(args) => args.json,
        Commands::Classify(args) => args.json,
        Commands::Group(_) => true,
        Commands::Check(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Format(args) => run_format(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Group(args) => run_group(args),
        Commands::Check(args) => run_check(args),
    }
}

fn run_format(args: FormatArgs) -> Result<()> {
    let input = read_classes(args.classes.as_ref(), args.file.as_deref())?;
    let options = FormatOptions {
        format: args.format.as_domain(),
        min_tokens: args.min_tokens,
        include_comments: !args.no_comments,
        indent: args.indent.clone(),
    };

    let formatter = Formatter::new(options).context("Invalid formatter options")?;
    let outcome = formatter.format(input.trim())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        if let Some(reason) = outcome.skip_reason {
            log::info!("left unchanged: {}", reason.as_str());
        }
        println!("{}", outcome.output);
    }

    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    if args.json {
        let entries: Vec<_> = args
            .tokens
            .iter()
            .map(|token| json!({ "token": token, "category": classify(token).as_str() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for token in &args.tokens {
            println!("{}\t{}", token, classify(token).as_str());
        }
    }

    Ok(())
}

fn run_group(args: GroupArgs) -> Result<()> {
    let input = read_classes(args.classes.as_ref(), args.file.as_deref())?;
    let grouping = group(input.trim());
    println!("{}", serde_json::to_string_pretty(&grouping)?);
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let input = read_classes(args.classes.as_ref(), args.file.as_deref())?;
    let options = FormatOptions {
        min_tokens: args.min_tokens,
        ..Default::default()
    };

    let outcome = tailgroup_engine::format(input.trim(), &options)?;

    if outcome.changed {
        eprintln!("Class string should be grouped by category; suggested fix:");
        println!("{}", outcome.output);
        std::process::exit(1);
    }

    log::debug!("class string is already canonical");
    Ok(())
}

fn read_classes(inline: Option<&String>, file: Option<&Path>) -> Result<String> {
    if let Some(raw) = inline {
        return Ok(raw.clone());
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read classes from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read classes from stdin")?;

    if buffer.trim().is_empty() {
        anyhow::bail!("Class string is empty. Provide CLASSES, --file, or pipe via stdin.");
    }

    Ok(buffer)
}
