use std::path::PathBuf;

use pose_fingerprint::io::Format;

#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Path to write to, or `None` for stdout.
    pub path: Option<PathBuf>,
    /// Delimited output format (CSV or TSV).
    pub format: Format,
}

impl OutputSpec {
    pub fn delimiter(&self) -> u8 {
        self.format.delimiter().unwrap_or(b',')
    }
}
