//! Tag cloud engine: reading sources, rendering and persisting documents.
mod filename;
mod job;
mod persist;
mod render;
mod source;
mod summary;

pub use filename::{validate_input_name, validate_output_name, FileNameError};
pub use job::{JobError, JobReport, TagCloudJob};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{html_escape_into, render_document, render_to_string, PageHeader};
pub use source::{decode_text, read_source, split_lines, DecodeError, ReadError, SourceText};
pub use summary::build_summary;
