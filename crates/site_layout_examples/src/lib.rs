#![forbid(unsafe_code)]

mod config_file;
mod rendering;

pub use config_file::{load_site_config, parse_site_config, seed_from_args};
pub use rendering::{init_tracing, render_layout, render_layout_to_png, RenderConfig};
