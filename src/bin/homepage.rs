use std::path::PathBuf;

use clap::Parser;
use opsgen::{HomepageOptions, generate_homepage};

#[derive(Parser)]
#[command(name = "homepage")]
#[command(version)]
#[command(about = "Render the homepage and events pages from a CSV record file", long_about = None)]
struct Cli {
    /// CSV file with one record per row, semicolon separated
    #[arg(long, default_value = "output/all_hostnames.csv")]
    csv: PathBuf,
    /// Directory holding index.html.j2 and events.html.j2
    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,
    /// Directory the rendered pages are written to
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let options =
        HomepageOptions { csv: cli.csv, templates_dir: cli.templates_dir, out_dir: cli.out_dir };

    match generate_homepage(options) {
        Ok(outcome) => {
            println!(
                "✅ Wrote {} and {} ({} records)",
                outcome.homepage.display(),
                outcome.events.display(),
                outcome.record_count
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
