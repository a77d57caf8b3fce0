//! Filesystem layout and low-level file I/O shared by the errscope crates

mod io;
mod paths;

pub use io::{atomic_write, read_tail_lines};
pub use paths::{Paths, ROOT_ENV};
