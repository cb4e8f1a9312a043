//! Stage entry points.
//!
//! Each function here backs one subcommand of the binary:
//! - `render_static_map`: resolve the campus and write a one-off map file
//! - `run_server`: resolve the campus and serve the API until Ctrl-C

mod demo;
mod serve;
mod shutdown;
mod static_map;

pub use demo::demo_points;
pub use serve::{prepare_state, run_server, ServeOptions};
pub use shutdown::shutdown_signal;
pub use static_map::{render_static_map, StaticMapReport};
