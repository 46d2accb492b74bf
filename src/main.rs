use clap::{Parser, Subcommand};
use optimize_assets::{config, output, process};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "optimize-assets")]
#[command(about = "Convert a site's JPEG/PNG assets to WebP with smart resizing")]
#[command(long_about = "\
Convert a site's JPEG/PNG assets to WebP with smart resizing

Every .jpg, .jpeg and .png under the source directory (recursively, any
case) is re-encoded as lossy WebP next to the original. Originals are never
modified or deleted; existing .webp files are overwritten.

Resize rules (aspect ratio preserved):
  Logos/icons    filename contains logo, icon or favicon → max-width 300px
  Everything else wider than 1200px                      → max-width 1200px

Run 'optimize-assets gen-config' to generate a documented config file.")]
#[command(version)]
struct Cli {
    /// Directory to scan for images
    #[arg(long, default_value = "assets/img", global = true)]
    source: PathBuf,

    /// Config file (stock defaults are used when it does not exist)
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all images to WebP (the default)
    Run,
    /// Show what would be resized, without writing anything
    Check,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let settings = config::load_config(&cli.config)?;
            output::print_header(&cli.source, &settings);

            let report = process::run(
                &cli.source,
                &settings.convert_config(),
                |event| output::print_process_event(event),
            )?;

            if !report.results.is_empty() {
                output::print_summary(&report.summary());
            }
        }
        Command::Check => {
            let settings = config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.source.display());
            let planned = process::plan(&cli.source, &settings.convert_config())?;
            output::print_plan(&planned, &cli.source);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
