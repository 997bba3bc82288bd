//! Probing the system for the CLI.
//!
//! - `find_executable`: explicit path, PATH and fallback directory lookup
//! - `check_version`: `--version` with a timeout
//! - `parse_version`: regex extraction of the dotted version string
//! - [`Probe`] / [`SystemProbe`]: the seam the [`Detector`](crate::Detector)
//!   calls through, and its real implementation

mod check;
mod parser;
mod path_finder;
mod probe;

pub(crate) use check::check_version;
pub(crate) use parser::parse_version;
pub(crate) use path_finder::find_executable;
pub use probe::{Probe, SystemProbe};
