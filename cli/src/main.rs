//! respoint CLI - resume bullet point insertion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use respoint::{load_document, load_points, DocumentProcessor, JsonFormat, PriorityHint, ProcessOptions};

#[derive(Parser)]
#[command(name = "respoint")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Insert tech-stack bullet points into resume documents", long_about = None)]
struct Cli {
    /// Minimum match score for honoring priority companies (percent)
    #[arg(
        long,
        global = true,
        env = "COMPANY_MATCH_THRESHOLD",
        default_value_t = 70,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    company_match_threshold: u8,

    /// Only detect projects inside an experience section
    #[arg(long, global = true)]
    within_section: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the projects detected in a document
    Projects {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output the projects as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the dominant bullet marker of a document
    Marker {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Insert points into one or more documents
    Process {
        /// Input documents (JSON)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Points payload (JSON)
        #[arg(short, long, value_name = "FILE")]
        points: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Also write a report next to each document
        #[arg(long)]
        report: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Priority company names, in priority order
        #[arg(long, value_name = "COMPANY", num_args = 1..)]
        priority: Vec<String>,

        /// Match score of the priority companies (percent)
        #[arg(long, default_value_t = 100)]
        match_score: u8,
    },

    /// Preview the text of a document with points inserted
    Preview {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Points payload (JSON)
        #[arg(short, long, value_name = "FILE")]
        points: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut options = ProcessOptions::new().with_company_match_threshold(cli.company_match_threshold);
    if cli.within_section {
        options.detector = options.detector.within_section();
    }

    let result = match cli.command {
        Some(Commands::Projects { input, json }) => cmd_projects(&input, json, options),
        Some(Commands::Marker { input }) => cmd_marker(&input, options),
        Some(Commands::Process {
            inputs,
            points,
            output,
            report,
            compact,
            priority,
            match_score,
        }) => {
            if !priority.is_empty() {
                options = options.with_priority(PriorityHint::new(priority, match_score));
            }
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            cmd_process(&inputs, &points, output.as_deref(), report, json_format, options)
        }
        Some(Commands::Preview { input, points }) => cmd_preview(&input, &points, options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: respoint <COMMAND> <FILE>".yellow());
            println!("       respoint --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_projects(input: &Path, json: bool, options: ProcessOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let projects = DocumentProcessor::new(options).detector().find_projects(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    println!("{}", "Detected Projects".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if projects.is_empty() {
        println!("{}", "No projects found".yellow());
        return Ok(());
    }

    for (i, project) in projects.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{}.", i + 1).bold(),
            project.name.green(),
            format!("[{}..={}]", project.start_index, project.end_index).dimmed()
        );
        if !project.role.is_empty() {
            println!("   {}: {}", "Role".bold(), project.role);
        }
        if !project.company.is_empty() {
            println!("   {}: {}", "Company".bold(), project.company);
        }
        if !project.date_range.is_empty() {
            println!("   {}: {}", "Dates".bold(), project.date_range);
        }
        println!("   {}: {}", "Bullets".bold(), project.bullet_points.len());
    }

    Ok(())
}

fn cmd_marker(input: &Path, options: ProcessOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let marker = DocumentProcessor::new(options)
        .formatter()
        .detect_document_bullet_marker(&doc);
    println!("{}: '{}'", "Bullet marker".bold(), marker);
    Ok(())
}

fn cmd_process(
    inputs: &[PathBuf],
    points: &Path,
    output: Option<&Path>,
    report: bool,
    json_format: JsonFormat,
    options: ProcessOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = load_points(points)?;
    let processor = DocumentProcessor::new(options);

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("respoint_output"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failed = 0;
    let mut lines = Vec::new();
    for input in inputs {
        let name = input.file_name().unwrap_or_default().to_string_lossy().into_owned();
        pb.set_message(name.clone());
        log::debug!("Processing {}", input.display());

        let outcome = load_document(input).and_then(|mut doc| {
            let result = processor.process(&mut doc, &payload)?;
            fs::write(output_dir.join(&name), respoint::render::to_json(&doc, json_format)?)?;
            if report {
                let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                fs::write(
                    output_dir.join(format!("{}.report.json", stem)),
                    respoint::render::to_json(&result, json_format)?,
                )?;
            }
            Ok(result)
        });

        match outcome {
            Ok(result) => {
                let partial = result.failures().count();
                let status = if partial > 0 {
                    format!("{} points, {} projects failed", result.total_points_added, partial).yellow()
                } else {
                    format!("{} points", result.total_points_added).green()
                };
                lines.push(format!("  {} {} ({})", "├─".dimmed(), name, status));
            }
            Err(e) => {
                failed += 1;
                lines.push(format!("  {} {} ({})", "├─".dimmed(), name, e.to_string().red()));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Processed documents:".green().bold());
    for line in &lines {
        println!("{}", line);
    }
    println!("  {} {}", "└─".dimmed(), output_dir.display());

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn cmd_preview(input: &Path, points: &Path, options: ProcessOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let payload = load_points(points)?;
    let preview = DocumentProcessor::new(options).preview(&doc, &payload)?;

    println!("{}", "Planned Points".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (name, points) in preview.project_points() {
        println!("{}", name.green().bold());
        for point in points {
            println!("  {} {}", "+".green(), point);
        }
    }
    println!(
        "\n{}: {}  {}: '{}'",
        "Points added".bold(),
        preview.report.total_points_added,
        "Marker".bold(),
        preview.report.document_marker
    );

    println!();
    println!("{}", "Preview".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", preview.content);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "respoint".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume bullet point insertion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/respoint".dimmed());
    println!("License: MIT");
}
