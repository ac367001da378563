/// Filesystem adapters for reading package indexes and writing results
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::StdoutPresenter;
