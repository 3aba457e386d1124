use std::io::{self, BufRead};
use std::path::Path;

use clap::Parser;
use colored::*;
use console::Term;
use directories::ProjectDirs;
use metalens::api::MetalensApi;
use metalens::catalog::PropertyCatalog;
use metalens::config::MetalensConfig;
use metalens::error::Result;
use metalens::provider::fs::{FsObject, FsProvider};
use metalens::report::{render, MessageLevel, Report, ReportMessage};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = load_catalog(&cli)?;
    let api = MetalensApi::new(FsProvider::new(), catalog);

    match &cli.path {
        Some(path) => {
            let report = api.inspect_path(path)?;
            print_report(&report, cli.verbose);
            Ok(())
        }
        None => interactive_loop(&api, cli.verbose),
    }
}

/// Catalog precedence: `--catalog` flag, then the config file, then the
/// embedded list.
fn load_catalog(cli: &Cli) -> Result<PropertyCatalog> {
    if let Some(path) = &cli.catalog {
        return PropertyCatalog::load(path);
    }
    if let Some(path) = load_config().catalog_path {
        return PropertyCatalog::load(&path);
    }
    Ok(PropertyCatalog::builtin().clone())
}

fn load_config() -> MetalensConfig {
    ProjectDirs::from("com", "metalens", "metalens")
        .map(|dirs| MetalensConfig::load(dirs.config_dir()).unwrap_or_default())
        .unwrap_or_default()
}

/// Outcome of one prompt round. Validation failures re-prompt through
/// `Retry`; there is no hidden restart state.
enum PromptOutcome {
    Inspect(Box<FsObject>),
    Retry,
    Quit,
}

fn interactive_loop(api: &MetalensApi<FsProvider>, verbose: bool) -> Result<()> {
    print_banner();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("Enter a valid file or folder path:");

        let Some(line) = lines.next() else {
            return Ok(());
        };
        match resolve_input(line?.trim()) {
            PromptOutcome::Quit => return Ok(()),
            PromptOutcome::Retry => continue,
            PromptOutcome::Inspect(handle) => {
                let report = api.inspect(&handle);
                print_report(&report, verbose);
            }
        }
    }
}

fn print_banner() {
    let border = "#".repeat(80);
    println!("{}", border);
    println!("{:#^80}", " FILE METADATA READER ");
    println!("{}", border);
    println!("{}", "Press Enter on an empty line to exit.".dimmed());
}

fn resolve_input(raw: &str) -> PromptOutcome {
    if raw.is_empty() {
        return PromptOutcome::Quit;
    }
    if !Path::new(raw).exists() {
        println!(
            "{}",
            "This file does not exist. Please enter a path to an existing file or directory."
                .yellow()
        );
        return PromptOutcome::Retry;
    }
    match FsObject::from_path(raw) {
        Ok(handle) => PromptOutcome::Inspect(Box::new(handle)),
        Err(e) => {
            println!(
                "{}",
                format!("{}. Please enter the path again.", e).red()
            );
            PromptOutcome::Retry
        }
    }
}

fn print_report(report: &Report, verbose: bool) {
    if verbose {
        print_messages(&report.messages);
    }

    // Best-effort layout hint; a POSIX process cannot widen its own terminal.
    if let Some(ideal) = render::ideal_width(report) {
        let term = Term::stdout();
        if let Some((_, cols)) = term.size_checked() {
            if (cols as usize) < ideal {
                print_messages(&[ReportMessage::info(format!(
                    "Widen the terminal to {} columns for unbroken rows.",
                    ideal
                ))]);
            }
        }
    }

    println!("{}", render::render(report));
}

fn print_messages(messages: &[ReportMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
