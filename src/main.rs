// Thu Feb 12 2026 - Alex

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use struct_analyzer::config::Config;
use struct_analyzer::generate::ClassGenerator;
use struct_analyzer::output::{FileErrorSink, RegistryExport, ReportWriter};
use struct_analyzer::registry::TypeRegistry;
use struct_analyzer::scan::StructAnalyzer;
use struct_analyzer::utils::logging;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Struct analyzer and class generator for C-like sources", long_about = None)]
struct Args {
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    generate_classes: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    if !args.no_banner {
        print_banner();
    }

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{} {}", "[!]".red(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(dir) = args.source_dir {
        config = config.with_source_dir(dir);
    }
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }
    if args.verbose {
        config.enable_verbose_output = true;
    }
    if args.no_progress {
        config.enable_progress_bars = false;
    }

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid configuration: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if let Err(e) = std::fs::create_dir_all(&config.output_dir) {
        eprintln!(
            "{} Failed to create output dir {}: {}",
            "[!]".red(),
            config.output_dir.display(),
            e
        );
        std::process::exit(1);
    }
    let log_file = config.output_dir.join("app.log");
    if logging::init_logger_with_file(config.enable_verbose_output, &log_file).is_err() {
        logging::init_logger(config.enable_verbose_output);
    }

    let start_time = Instant::now();
    let result = if args.generate_classes {
        log::info!("Starting class generation mode");
        run_generation(&config)
    } else {
        log::info!("Starting analysis mode");
        run_analysis(&config)
    };

    match result {
        Ok(()) => {
            println!();
            println!(
                "{} Done in {:.2}s",
                "[+]".green(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    }
}

fn print_banner() {
    println!("{}", "Struct Analyzer".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();
}

fn run_analysis(config: &Config) -> anyhow::Result<()> {
    println!(
        "{} Analyzing source directory: {}",
        "[*]".blue(),
        config.source_dir.display()
    );

    let progress = if config.enable_progress_bars {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Scanning files...");
        Some(pb)
    } else {
        None
    };

    let analyzer = StructAnalyzer::new();
    let mut registry = TypeRegistry::new();
    let mut errors = FileErrorSink::new(config.error_path());

    let stats = analyzer.analyze_tree(
        &config.source_dir,
        &config.include_patterns,
        &config.exclude_patterns,
        &mut registry,
        &mut errors,
        |done, total| {
            if let Some(ref pb) = progress {
                pb.set_length(total as u64);
                pb.set_position(done as u64);
            }
        },
    )?;

    if let Some(pb) = progress {
        pb.finish_with_message("Scan complete");
    }

    println!("{} Files scanned: {}", "[+]".green(), stats.files_scanned);
    if stats.files_failed > 0 {
        println!("{} Files skipped: {}", "[!]".yellow(), stats.files_failed);
    }
    println!("{} Types registered: {}", "[+]".green(), registry.len());
    println!(
        "{} Definitions: {}  Usages: {}",
        "[+]".green(),
        stats.definitions_found,
        stats.usages_found
    );
    if stats.malformed_matches > 0 {
        println!(
            "{} Malformed matches: {}",
            "[!]".yellow(),
            stats.malformed_matches
        );
    }

    RegistryExport::from_registry(&registry).write(&config.json_path())?;
    println!(
        "{} Registry export saved to: {}",
        "[+]".green(),
        config.json_path().display()
    );

    ReportWriter::write(&registry, &config.report_path())?;
    println!(
        "{} Report saved to: {}",
        "[+]".green(),
        config.report_path().display()
    );

    Ok(())
}

fn run_generation(config: &Config) -> anyhow::Result<()> {
    println!(
        "{} Generating classes from: {}",
        "[*]".blue(),
        config.json_path().display()
    );

    let generator = ClassGenerator::from_table(
        config.generated_path(),
        &config.json_path(),
        &config.source_dir,
    )?;
    let mut errors = FileErrorSink::new(config.error_path());
    let stats = generator.generate(config.top_n, &mut errors)?;

    println!("{} Output units written: {}", "[+]".green(), stats.files_written);
    println!("{} Classes emitted: {}", "[+]".green(), stats.classes_emitted);
    if stats.types_skipped > 0 {
        println!("{} Types skipped: {}", "[!]".yellow(), stats.types_skipped);
    }
    println!(
        "{} Generated sources in: {}",
        "[+]".green(),
        config.generated_path().display()
    );

    Ok(())
}
