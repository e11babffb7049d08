use std::path::PathBuf;
use clap::Parser;
use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use demo_viz::{generate, GeneratorConfig, Viewer};

#[derive(Parser)]
#[command(name = "demo-viz")]
#[command(author, version, about = "Generate an HTML visualization from demo data")]
struct Cli {
    /// Path to the demo data JSON file
    #[arg(value_name = "DEMO_DATA_FILE")]
    demo_data_file: PathBuf,

    /// Path to the output HTML file (default: <output-dir>/<viewer default name>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Viewer page to generate
    #[arg(long, value_enum, default_value_t = Viewer::UnifiedIp)]
    viewer: Viewer,

    /// Directory holding the HTML templates
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Directory for the default output file
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Escape `<`, `>` and `&` in the embedded JSON so it cannot close the script block
    #[arg(long)]
    escape_script: bool,

    /// Path to a TOML config file (default: demo-viz.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::load(cli.config.as_deref())?
        .with_overrides(cli.template_dir, cli.output_dir, cli.escape_script);

    let output_path = generate(&config, cli.viewer, &cli.demo_data_file, cli.output.as_deref())?;

    println!("HTML visualization generated at: {}", output_path.display());

    Ok(())
}
