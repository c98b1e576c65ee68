mod formatter;

pub use formatter::{OutputFormatter, REVIEWED_SUFFIX, UNDONE_HEADER};

use std::io::Write;
use std::path::Path;

use crate::error::{IoError, Result};

/// Writes a rendered report to `output_file`, or to stdout when absent.
pub fn emit(rendered: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| IoError::write_error(path, e))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| IoError::write_error("<stdout>", e))?;
        }
    }
    Ok(())
}
