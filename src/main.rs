use clap::{Parser, Subcommand};
use folio::{config, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Works manifest generator for a single-page photo portfolio")]
#[command(long_about = "\
Works manifest generator for a single-page photo portfolio

Your filesystem is the data source. Numeric directories under the photos
root become albums; numeric JPEG filenames become image slots. The build
writes works.json, the one artifact the site loads at session start.

Content structure:

  Photos/
  ├── 1/                    # Album (numeric name = album)
  │   ├── 1.jpg             # Image slot 1
  │   ├── 2.JPG             # Extension is case-insensitive
  │   └── 03.jpeg           # Leading zeros fine, same slot as 3
  ├── 2/                    # Album 2 (kept even when empty)
  ├── 10/                   # Sorts after 2, not between 1 and 2
  └── notanumber/           # Skipped, not an error

The album count is the highest image index present, so gaps in numbering
keep their slots. Optional config.toml in the working directory overrides
the photos root, the output path, and scan parallelism.")]
#[command(version)]
struct Cli {
    /// Photos directory to scan (overrides config.toml photos_dir)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Manifest output path (overrides config.toml output)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the photos directory and write the works manifest
    Build,
    /// Validate the photos directory without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let site_config = config::load_config(Path::new("."))?;
    let source = cli
        .source
        .unwrap_or_else(|| PathBuf::from(&site_config.photos_dir));
    let artifact = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&site_config.output));

    init_thread_pool(&site_config.scan);

    match cli.command {
        Command::Build => {
            println!("==> Scanning {}", source.display());
            let outcome = scan::scan(&source)?;
            output::print_scan_output(&outcome, &source);

            let json = serde_json::to_string_pretty(&outcome.manifest)?;
            std::fs::write(&artifact, json)?;
            println!("==> Manifest written: {}", artifact.display());
        }
        Command::Check => {
            println!("==> Checking {}", source.display());
            let outcome = scan::scan(&source)?;
            output::print_scan_output(&outcome, &source);
            println!("==> Photos directory is valid");
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on scan config.
///
/// Caps at the available CPU cores; config can constrain down, not up.
fn init_thread_pool(scan: &config::ScanConfig) {
    let threads = config::effective_threads(scan);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
