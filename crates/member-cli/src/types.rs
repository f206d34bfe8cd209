use std::path::PathBuf;

/// Outcome of loading a single input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub read: usize,
    pub rejected: usize,
    pub emptied: usize,
    pub transformed: usize,
    /// `None` on dry runs.
    pub inserted: Option<usize>,
}

impl FileSummary {
    pub fn is_partial(&self) -> bool {
        self.inserted
            .is_some_and(|inserted| inserted < self.transformed)
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
