use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{EmbedMode, GeneratorConfig};
use crate::error::{DemoVizError, Result};
use crate::visualization::viewer::Viewer;

/// Substitute the demo data into the template.
///
/// Every occurrence of the viewer's placeholder statement is replaced with
/// `const <var> = <json>;`, the JSON being pretty-printed with two-space
/// indentation. A template without the placeholder comes back unchanged.
pub fn render(template: &str, viewer: Viewer, data: &Value, embed: EmbedMode) -> Result<String> {
    let placeholder = viewer.placeholder();
    if !template.contains(&placeholder) {
        warn!("Template has no `{}` placeholder, data not embedded", placeholder);
        return Ok(template.to_string());
    }

    let mut json = serde_json::to_string_pretty(data)?;
    if embed == EmbedMode::ScriptSafe {
        json = escape_for_script(&json);
    }

    Ok(template.replace(&placeholder, &viewer.statement(&json)))
}

/// Escape characters that could end the surrounding `<script>` element or
/// break a JavaScript string. Serialized JSON only has these inside strings.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Pick the output path. Without an explicit one, the viewer's default file
/// inside the output directory is used and the directory is created.
pub fn resolve_output_path(config: &GeneratorConfig, viewer: Viewer, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let dir = &config.output_dir;
    if !dir.is_dir() {
        debug!("Creating output directory {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|e| DemoVizError::io(dir, e))?;
    Ok(dir.join(viewer.default_output_file()))
}

/// Write the generated page, replacing any existing file.
///
/// The content lands in a sibling temp file that is renamed over the target,
/// so a failed write leaves the previous file (or nothing) in place. An
/// existing symlink is followed and its target replaced.
pub fn write_output(path: &Path, html: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = target.as_path();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    if let Err(e) = fs::write(&tmp, html) {
        let _ = fs::remove_file(&tmp);
        return Err(DemoVizError::io(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(DemoVizError::io(path, e));
    }

    debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
