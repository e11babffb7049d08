use std::fs;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{DemoVizError, Result};
use crate::visualization::viewer::Viewer;

/// Load the viewer's HTML template from the configured template directory
pub fn load_template(config: &GeneratorConfig, viewer: Viewer) -> Result<String> {
    let path = config.template_dir.join(viewer.template_file());
    debug!("Reading template from {}", path.display());
    fs::read_to_string(&path).map_err(|e| DemoVizError::io(&path, e))
}
