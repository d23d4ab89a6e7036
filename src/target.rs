use crate::error::{Result, WatchError};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// The single path under observation and the name shown as the
/// notification title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    path: PathBuf,
    title: String,
}

impl WatchTarget {
    pub fn new(raw: &OsStr) -> Result<Self> {
        let title = basename(raw)
            .ok_or_else(|| WatchError::InvalidPath(raw.to_string_lossy().into_owned()))?;

        Ok(Self {
            path: PathBuf::from(raw),
            title,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Last non-empty `/`-separated segment of `raw`.
///
/// Unlike `Path::file_name`, a trailing `..` or `.` is returned as-is
/// rather than rejected; only an argument made up entirely of separators
/// (or nothing at all) has no basename.
pub fn basename(raw: &OsStr) -> Option<String> {
    raw.as_bytes()
        .rsplit(|b| *b == b'/')
        .find(|segment| !segment.is_empty())
        .map(|segment| String::from_utf8_lossy(segment).into_owned())
}
