pub mod error;
pub mod config;
pub mod visualization;

use std::path::{Path, PathBuf};

pub use crate::config::{EmbedMode, GeneratorConfig};
pub use crate::error::{DemoVizError, Result};
pub use crate::visualization::{load_demo_data, load_template, render, resolve_output_path, write_output, Viewer};

/// Generate a viewer page from a demo data file.
///
/// Inputs are read and rendered before anything touches the output side, so
/// a missing or malformed input leaves no file or directory behind. Returns
/// the path that was written.
pub fn generate(
    config: &GeneratorConfig,
    viewer: Viewer,
    demo_data_path: &Path,
    output_path: Option<&Path>,
) -> Result<PathBuf> {
    let data = load_demo_data(demo_data_path)?;
    let template = load_template(config, viewer)?;
    let html = render(&template, viewer, &data, config.embed)?;

    let output_path = resolve_output_path(config, viewer, output_path)?;
    write_output(&output_path, &html)?;

    Ok(output_path)
}
