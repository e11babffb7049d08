mod data;
mod generator;
mod templates;
mod viewer;

pub use data::load_demo_data;
pub use generator::{render, resolve_output_path, write_output};
pub use templates::load_template;
pub use viewer::Viewer;
