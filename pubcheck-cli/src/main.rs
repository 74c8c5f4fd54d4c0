//! pubcheck CLI
//!
//! Command-line interface for checking a publication manifest against the
//! publication ledger and recording the batch as published.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pubcheck_db::open_store;
use pubcheck_manifest::parse_manifest;
use pubcheck_reconcile::{
    classify, publish_records, read_confirmation, Category, Classification, ClassifyProgress,
    Confirmation,
};

mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "pubcheck")]
#[command(about = "Check a content manifest against the publication ledger", long_about = None)]
struct Cli {
    /// Manifest file, one record per line: content ID, payload ID, size, archive size
    manifest: PathBuf,

    /// Campaign identifier to publish under
    campaign_id: String,

    /// Publisher identifier to publish under
    publisher_id: String,

    /// Publication store path (defaults to $PUBCHECK_DB, then the user data directory)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    // A bare or partial invocation prints usage and exits cleanly; other
    // argument errors keep clap's behavior so --help and --version work.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: pubcheck <MANIFEST> <CAMPAIGN_ID> <PUBLISHER_ID>");
            println!("Run 'pubcheck --help' for all options.");
            return;
        }
        Err(e) => e.exit(),
    };

    // The store connection lives inside run() so every exit path closes it
    // before the process picks its exit code.
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store_path = resolve_store_path(cli.db);
    if let Some(parent) = store_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::warn!("Could not create {}: {}", parent.display(), e);
        }
    }

    let conn = open_store(&store_path)?;
    log::debug!("Publication store: {}", store_path.display());

    let records = parse_manifest(&cli.manifest)?;
    println!(
        "Checking {} records from {} against campaign {} / publisher {}",
        records.len(),
        cli.manifest
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        cli.campaign_id.if_supports_color(Stdout, |t| t.bold()),
        cli.publisher_id.if_supports_color(Stdout, |t| t.bold()),
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    let progress = SpinnerProgress { pb: &pb };

    let classification = match classify(
        &conn,
        &records,
        &cli.campaign_id,
        &cli.publisher_id,
        Some(&progress),
    ) {
        Ok(classification) => {
            pb.finish_and_clear();
            classification
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    print_report(&classification);

    println!();
    println!("Save these records to the publication store? (yes/no)");
    match read_confirmation(&mut std::io::stdin().lock()) {
        Confirmation::Proceed => {
            let inserted = publish_records(&conn, &records, &cli.campaign_id, &cli.publisher_id)?;
            println!(
                "{} {} records saved to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                inserted,
                store_path.display(),
            );
        }
        Confirmation::Abort => {
            println!(
                "{}",
                "Operation aborted.".if_supports_color(Stdout, |t| t.dimmed())
            );
        }
    }

    Ok(())
}

/// Spinner-backed progress for the classification loop.
struct SpinnerProgress<'a> {
    pb: &'a ProgressBar,
}

impl ClassifyProgress for SpinnerProgress<'_> {
    fn on_record(&self, current: usize, total: usize, content_id: &str) {
        self.pb
            .set_message(format!("[{current}/{total}] {content_id}"));
        self.pb.tick();
    }
}

/// Resolve the store path: `--db` flag first, then `PUBCHECK_DB`, then the
/// user data directory.
fn resolve_store_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = std::env::var("PUBCHECK_DB") {
        return PathBuf::from(path);
    }
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pubcheck").join("publications.db")
}

/// Print the classification report, one block per category present.
fn print_report(classification: &Classification) {
    if classification.is_empty() {
        println!(
            "{}",
            "No records to report".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }

    for (category, ids) in classification.groups() {
        println!();
        println!("{}:", styled_label(category));
        if category == Category::New {
            println!("num: {}", ids.len());
        }
        for id in ids {
            println!("  {id}");
        }
    }
}

/// Category label with report coloring.
fn styled_label(category: Category) -> String {
    let label = category.label();
    match category {
        Category::New => format!("{}", label.if_supports_color(Stdout, |t| t.green())),
        Category::AlreadyPublished => {
            format!("{}", label.if_supports_color(Stdout, |t| t.yellow()))
        }
        Category::OtherCampaign => format!("{}", label.if_supports_color(Stdout, |t| t.red())),
    }
}
