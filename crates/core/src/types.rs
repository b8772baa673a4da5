use serde::{Deserialize, Serialize};

/// Default upload limit in bytes (10 MB, decimal).
pub const DEFAULT_MAX_ARCHIVE_BYTES: u64 = 10_000_000;

/// One record from an archive's directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Full path inside the archive, `/` separated. Directories end with `/`.
    pub path: String,
    pub is_directory: bool,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
        }
    }

    /// Number of `/` characters in the raw path
    pub fn separator_count(&self) -> usize {
        self.path.matches('/').count()
    }
}

/// Which byte count is compared against the size limit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBasis {
    /// Length of the zip file itself
    #[default]
    Archive,
    /// Sum of all entries' uncompressed sizes
    Uncompressed,
}

/// Size limits applied to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_archive_bytes: u64,
    pub size_basis: SizeBasis,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_archive_bytes: DEFAULT_MAX_ARCHIVE_BYTES,
            size_basis: SizeBasis::default(),
        }
    }
}

impl Limits {
    /// Human-readable limit in decimal megabytes, e.g. "10 MB"
    pub fn display_size(&self) -> String {
        format_megabytes(self.max_archive_bytes)
    }
}

/// Complete checker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    pub limits: Limits,
}

/// Format a byte count as decimal megabytes, dropping a zero fraction.
/// Counts that are not an exact multiple of 0.01 MB are given in bytes.
pub fn format_megabytes(bytes: u64) -> String {
    let whole = bytes / 1_000_000;
    let rest = bytes % 1_000_000;
    if rest == 0 {
        format!("{} MB", whole)
    } else if rest % 10_000 == 0 {
        let hundredths = format!("{:02}", rest / 10_000);
        format!("{}.{} MB", whole, hundredths.trim_end_matches('0'))
    } else {
        format!("{} bytes", bytes)
    }
}
