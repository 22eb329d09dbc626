//! unresume CLI - resume text structuring tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unresume::{render, JsonFormat, SectionKind, StructuringResult, Unresume};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Structure resume text into contact fields, sections and entries", long_about = None)]
struct Cli {
    /// Input resume file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    structure: StructureArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Structuring flags shared by every command.
#[derive(clap::Args, Clone, Default)]
struct StructureArgs {
    /// Body font size to report when none was measured
    #[arg(long, value_name = "PT", global = true)]
    font_size: Option<u32>,

    /// Keep only the last occurrence of a repeated section header
    #[arg(long, global = true)]
    last_wins: bool,

    /// Extra section header phrase (e.g. "custom=Volunteering"), repeatable
    #[arg(long, value_name = "KIND=PHRASE", value_parser = parse_alias, global = true)]
    alias: Vec<(SectionKind, String)>,
}

impl StructureArgs {
    fn builder(&self) -> Unresume {
        let mut builder = Unresume::new();
        if let Some(size) = self.font_size {
            builder = builder.with_default_font_size(size);
        }
        if self.last_wins {
            builder = builder.last_wins();
        }
        for (kind, phrase) in &self.alias {
            builder = builder.with_alias(*kind, phrase);
        }
        builder
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Structure a resume and print JSON
    Parse {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print a human-readable outline of a resume
    Outline {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show what was detected in a resume
    Info {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Structure many resumes into a directory of JSON files
    Batch {
        /// Input resume files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Process files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let args = cli.structure;

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
        }) => cmd_parse(&args, &input, output.as_deref(), compact),
        Some(Commands::Outline { input, output }) => cmd_outline(&args, &input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&args, &input),
        Some(Commands::Batch {
            inputs,
            output,
            sequential,
        }) => cmd_batch(&args, &inputs, output.as_deref(), sequential),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: parse if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&args, &input, None, false)
            } else {
                println!("{}", "Usage: unresume <FILE>".yellow());
                println!("       unresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Parse a `KIND=PHRASE` alias argument.
fn parse_alias(value: &str) -> Result<(SectionKind, String), String> {
    let (kind, phrase) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PHRASE, got '{}'", value))?;

    let kind = SectionKind::from_name(kind).ok_or_else(|| {
        let known: Vec<&str> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown section kind '{}' (expected one of: {})", kind.trim(), known.join(", "))
    })?;

    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Err("alias phrase must not be empty".to_string());
    }

    Ok((kind, phrase.to_string()))
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_parse(
    args: &StructureArgs,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = args.builder().parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&result, format)?;
    write_or_print(output, &json)
}

fn cmd_outline(
    args: &StructureArgs,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = args.builder().parse_file(input)?;
    let text = render::to_text(&result)?;
    write_or_print(output, &text)
}

fn cmd_info(args: &StructureArgs, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = args.builder().parse_file(input)?;
    let resume = &result.resume;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), or_dash(&resume.full_name));
    println!("{}: {}", "Email".bold(), or_dash(&resume.email));
    println!("{}: {}", "Phone".bold(), or_dash(&resume.phone));
    println!("{}: {}pt", "Font size".bold(), resume.base_font_size);

    for (label, url) in [
        ("LinkedIn", &resume.linkedin_url),
        ("GitHub", &resume.github_url),
        ("Portfolio", &resume.portfolio_url),
    ] {
        if !url.is_empty() {
            println!("{}: {}", label.bold(), url);
        }
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if result.sections.is_empty() {
        println!("{}", "(none detected)".dimmed());
    }
    for section in &result.sections {
        println!("{}: {} entries", section.section_title.bold(), section.entry_count());
    }

    if result.has_warnings() {
        println!();
        for warning in &result.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
    }

    Ok(())
}

fn cmd_batch(
    args: &StructureArgs,
    inputs: &[PathBuf],
    output: Option<&Path>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("unresume_output"));
    fs::create_dir_all(&output_dir)?;

    let mut builder = args.builder();
    if sequential {
        builder = builder.sequential();
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    log::debug!(
        "Structuring {} file(s) into {}",
        inputs.len(),
        output_dir.display()
    );
    pb.set_message("Structuring...");
    let results = builder.parse_files(inputs);

    let mut index = Vec::with_capacity(inputs.len());
    let mut used_names: HashSet<String> = HashSet::from([INDEX_FILE_NAME.to_string()]);
    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        let entry = match result {
            Ok(result) => {
                let file_name = json_file_name(input, &mut used_names);
                let json = render::to_json(&result, JsonFormat::Pretty)?;
                fs::write(output_dir.join(&file_name), json)?;
                summary_entry(input, Some(&file_name), Some(&result), None)
            }
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                summary_entry(input, None, None, Some(&e.to_string()))
            }
        };
        index.push(entry);
        pb.inc(1);
    }

    fs::write(
        output_dir.join(INDEX_FILE_NAME),
        serde_json::to_string_pretty(&index)?,
    )?;

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} structured, {} failed",
        "Output:".green().bold(),
        inputs.len() - failed,
        failed
    );
    println!("  {} {}", "└─".dimmed(), output_dir.display());

    Ok(())
}

const INDEX_FILE_NAME: &str = "index.json";

/// Output name for `input`: its stem plus `.json`, with a `-2`, `-3`, ...
/// suffix when an earlier input already took that name.
fn json_file_name(input: &Path, used: &mut HashSet<String>) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let mut name = format!("{}.json", stem);
    let mut n = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}.json", stem, n);
        n += 1;
    }
    name
}

fn summary_entry(
    input: &Path,
    output: Option<&str>,
    result: Option<&StructuringResult>,
    error: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "input": input.display().to_string(),
        "output": output,
        "full_name": result.map(|r| r.resume.full_name.as_str()),
        "sections": result.map(|r| r.sections.len()),
        "warnings": result.map(|r| r.warnings.len()),
        "error": error,
    })
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume text structuring tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unresume".dimmed());
    println!("License: MIT");
}
