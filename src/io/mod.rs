pub mod output;

pub use output::{create_writer, OutputFormat, ReportWriter};

use crate::errors::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
