//! Text I/O for graph description files.

pub mod reader;

pub use reader::GraphReader;
