//! Text input and output around the dispatch core.
//!
//! - [`read_loads`] — whitespace-delimited load records with a header line
//! - [`write_routes`] — one `[id1,id2,...]` line per driver

mod error;
mod reader;
mod writer;

pub use error::InputError;
pub use reader::{read_loads, read_loads_from_path};
pub use writer::{format_route, write_routes};
