use crate::utils::ARCHIVE_EXTENSION;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Content type of every delivered archive
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// Longest file name, in bytes, common filesystems accept
pub const MAX_FILENAME_BYTES: usize = 255;

/// Destination for finished archives
pub trait ArchiveSink: Send + Sync {
    /// Hand over an archive's bytes under the suggested file name
    fn deliver(&self, bytes: &[u8], filename: &str) -> io::Result<()>;
}

/// Writes archives as files into a directory.
///
/// An existing file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArchiveSink for DirectorySink {
    fn deliver(&self, bytes: &[u8], filename: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(fit_filename(filename).as_ref());
        fs::write(&path, bytes)?;
        ::log::info!(
            "Saved {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            HTML_CONTENT_TYPE
        );
        Ok(())
    }
}

/// Shorten `filename` to `MAX_FILENAME_BYTES`, keeping the `.html` suffix
fn fit_filename(filename: &str) -> Cow<'_, str> {
    if filename.len() <= MAX_FILENAME_BYTES {
        return Cow::Borrowed(filename);
    }

    let (stem, extension) = match filename.strip_suffix(ARCHIVE_EXTENSION) {
        Some(stem) => (stem, ARCHIVE_EXTENSION),
        None => (filename, ""),
    };

    let mut end = MAX_FILENAME_BYTES - extension.len();
    while !stem.is_char_boundary(end) {
        end -= 1;
    }

    ::log::debug!("Truncating file name of {} bytes to {}", filename.len(), end);
    Cow::Owned(format!("{}{}", &stem[..end], extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("archives"));

        sink.deliver(b"<html></html>", "page.html").unwrap();

        let written = fs::read_to_string(dir.path().join("archives/page.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn test_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.deliver(b"first", "same.html").unwrap();
        sink.deliver(b"second", "same.html").unwrap();

        let written = fs::read_to_string(dir.path().join("same.html")).unwrap();
        assert_eq!(written, "second");
    }

    #[test]
    fn test_long_names_are_shortened_keeping_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        let filename = format!("{}.html", "nyheter ".repeat(40));

        sink.deliver(b"<html></html>", &filename).unwrap();

        let names = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].len(), MAX_FILENAME_BYTES);
        assert!(names[0].starts_with("nyheter nyheter"));
        assert!(names[0].ends_with(".html"));
    }

    #[test]
    fn test_shortening_respects_char_boundaries() {
        let filename = format!("{}.html", "å".repeat(200));

        let fitted = fit_filename(&filename);
        assert!(fitted.len() <= MAX_FILENAME_BYTES);
        assert_eq!(fitted, format!("{}.html", "å".repeat(125)));
    }

    #[test]
    fn test_short_names_are_untouched() {
        assert_eq!(fit_filename("café   test .html"), "café   test .html");
    }

    #[test]
    fn test_unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();

        let sink = DirectorySink::new(&blocker);
        assert!(sink.deliver(b"x", "page.html").is_err());
    }
}
