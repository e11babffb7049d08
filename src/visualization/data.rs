use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{DemoVizError, Result};

/// Read and parse the demo data file. No schema is applied.
pub fn load_demo_data(path: &Path) -> Result<Value> {
    debug!("Reading demo data from {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| DemoVizError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| DemoVizError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
