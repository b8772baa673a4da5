//! Reading the directory listing of a submission zip.

use log::debug;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use submission_check_core::{ArchiveEntry, Result, SizeBasis};
use zip::ZipArchive;

/// Listing and sizes of a submission archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Length of the zip file in bytes
    pub archive_bytes: u64,
    /// Sum of the uncompressed sizes of all entries
    pub uncompressed_bytes: u64,
    /// Entries in central directory order
    pub entries: Vec<ArchiveEntry>,
}

impl Submission {
    /// Byte count to compare against the limit for the given basis
    pub fn size(&self, basis: SizeBasis) -> u64 {
        match basis {
            SizeBasis::Archive => self.archive_bytes,
            SizeBasis::Uncompressed => self.uncompressed_bytes,
        }
    }
}

/// Read the listing of a zip file on disk
pub fn read_archive<P: AsRef<Path>>(path: P) -> Result<Submission> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let archive_bytes = file.metadata()?.len();
    debug!("reading {} ({} bytes)", path.display(), archive_bytes);
    read_archive_from(file, archive_bytes)
}

/// Read the listing of a zip from any seekable reader.
///
/// Entry contents are never decompressed, so encrypted or unsupported
/// compression methods do not matter here.
pub fn read_archive_from<R: Read + Seek>(reader: R, archive_bytes: u64) -> Result<Submission> {
    let mut archive = ZipArchive::new(reader)?;

    let mut entries = Vec::with_capacity(archive.len());
    let mut uncompressed_bytes: u64 = 0;
    for index in 0..archive.len() {
        let file = archive.by_index_raw(index)?;
        uncompressed_bytes = uncompressed_bytes.saturating_add(file.size());
        entries.push(ArchiveEntry {
            path: file.name().to_string(),
            is_directory: file.is_dir(),
        });
    }

    debug!(
        "archive has {} entries, {} bytes uncompressed",
        entries.len(),
        uncompressed_bytes
    );

    Ok(Submission {
        archive_bytes,
        uncompressed_bytes,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use submission_check_core::Error;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    /// Helper to build an in-memory zip. Names ending in `/` become directories.
    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for (name, data) in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, options).unwrap();
            } else {
                zip.start_file(*name, options).unwrap();
                zip.write_all(data.as_bytes()).unwrap();
            }
        }

        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_reads_entries_in_order() {
        let bytes = build_zip(&[
            ("team_name.txt", "Robo Team"),
            ("robot/", ""),
            ("robot/robot.py", "print('hi')"),
        ]);
        let len = bytes.len() as u64;

        let submission = read_archive_from(Cursor::new(bytes), len).unwrap();
        assert_eq!(
            submission.entries,
            vec![
                ArchiveEntry::file("team_name.txt"),
                ArchiveEntry::directory("robot/"),
                ArchiveEntry::file("robot/robot.py"),
            ]
        );
        assert_eq!(submission.archive_bytes, len);
        assert_eq!(submission.uncompressed_bytes, 9 + 11);
    }

    #[test]
    fn test_size_basis() {
        let submission = Submission {
            archive_bytes: 10,
            uncompressed_bytes: 40,
            entries: vec![],
        };
        assert_eq!(submission.size(SizeBasis::Archive), 10);
        assert_eq!(submission.size(SizeBasis::Uncompressed), 40);
    }

    #[test]
    fn test_read_archive_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submission.zip");
        let bytes = build_zip(&[("team_name.txt", "Team"), ("extra/", "")]);
        std::fs::write(&path, &bytes).unwrap();

        let submission = read_archive(&path).unwrap();
        assert_eq!(submission.archive_bytes, bytes.len() as u64);
        assert_eq!(submission.entries.len(), 2);
        assert!(submission.entries[1].is_directory);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = read_archive(dir.path().join("nope.zip"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_non_zip_is_invalid_archive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-a-zip.zip");
        std::fs::write(&path, "this is plain text, not a zip archive").unwrap();

        let result = read_archive(&path);
        assert!(matches!(result, Err(Error::InvalidArchive(_))));
    }

    #[test]
    fn test_listing_feeds_validator() {
        let bytes = build_zip(&[
            ("team_name.txt", "Team"),
            ("robot/", ""),
            ("robot/robot.py", "pass"),
            ("robot/utils/", ""),
            ("robot/utils/helpers.py", "pass"),
        ]);
        let len = bytes.len() as u64;

        let submission = read_archive_from(Cursor::new(bytes), len).unwrap();
        assert!(crate::validate(submission.archive_bytes, &submission.entries).is_empty());
    }
}
