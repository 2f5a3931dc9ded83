//! Output destinations

pub mod file;
pub mod terminal;

pub use file::FileSink;
pub use terminal::TerminalSink;
