//! Frame selection policies for animation runs.
//!
//! The source dataset has a dense period of interest (the 2004/2005
//! northeast monsoon); files from that period are rendered at daily
//! cadence, everything else at the profile's coarser stride.

/// Frame-skip policy keyed on file names.
#[derive(Debug, Clone)]
pub struct CadencePolicy {
    dense_patterns: Vec<String>,
    stride: usize,
}

impl CadencePolicy {
    /// Dense-period file name fragments of the source dataset.
    pub const DEFAULT_DENSE_PATTERNS: [&'static str; 3] =
        ["Nov_2004", "Dec_2004", "Jan_2005"];

    /// Policy with the default dense period and the given sparse stride.
    pub fn new(stride: usize) -> Self {
        Self::with_patterns(
            stride,
            Self::DEFAULT_DENSE_PATTERNS.iter().map(|p| p.to_string()),
        )
    }

    pub fn with_patterns(stride: usize, patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            dense_patterns: patterns.into_iter().collect(),
            stride: stride.max(1),
        }
    }

    /// How many files to advance past the one just rendered.
    pub fn advance(&self, file_name: &str) -> usize {
        if self.dense_patterns.iter().any(|p| file_name.contains(p)) {
            1
        } else {
            self.stride
        }
    }

    /// Indices of the files an animation run would render, in order.
    pub fn select(&self, file_names: &[impl AsRef<str>]) -> Vec<usize> {
        let mut selected = Vec::new();
        let mut i = 0;
        while i < file_names.len() {
            selected.push(i);
            i += self.advance(file_names[i].as_ref());
        }
        selected
    }
}

/// PNG snapshot policy keyed on the snapshot's date string.
#[derive(Debug, Clone)]
pub struct SnapshotPolicy {
    patterns: Vec<String>,
}

impl SnapshotPolicy {
    /// Date fragments (as spelled in the dumps) worth a still snapshot.
    pub const DEFAULT_PATTERNS: [&'static str; 3] = ["NOV-2004", "DEC", "JAN-2005"];

    pub fn new() -> Self {
        Self::with_patterns(Self::DEFAULT_PATTERNS.iter().map(|p| p.to_string()))
    }

    pub fn with_patterns(patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    pub fn wants(&self, date: &str) -> bool {
        self.patterns.iter().any(|p| date.contains(p))
    }
}

impl Default for SnapshotPolicy {
    fn default() -> Self {
        Self::new()
    }
}
