//! Backends holding the raw bytes of the work log table.
//!
//! Bytes, not text: one row with a bad encoding must not make the rest of
//! the table unreadable.

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// Raw byte storage behind a [`Store`](super::Store).
///
/// The store only ever reads the whole table, appends to its end, or
/// replaces it entirely.
pub trait Table {
    /// Human readable location, used in messages.
    fn location(&self) -> String;

    fn exists(&self) -> bool;

    fn read_bytes(&self) -> AppResult<Vec<u8>>;

    /// Replace the whole content. Either the new content lands or an error
    /// is returned.
    fn replace(&mut self, content: &[u8]) -> AppResult<()>;

    fn append(&mut self, content: &[u8]) -> AppResult<()>;

    /// Last byte of the content, `None` when empty.
    fn last_byte(&self) -> AppResult<Option<u8>>;
}

/// The on-disk table file.
#[derive(Debug, Clone)]
pub struct FileTable {
    path: PathBuf,
}

impl FileTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Table for FileTable {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_bytes(&self) -> AppResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    fn replace(&mut self, content: &[u8]) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;

        // write aside, then swap in
        let tmp = self.temp_path();
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(content)?;
            f.sync_all()?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn append(&mut self, content: &[u8]) -> AppResult<()> {
        let mut f = OpenOptions::new().append(true).open(&self.path)?;
        f.write_all(content)?;
        f.flush()?;
        Ok(())
    }

    fn last_byte(&self) -> AppResult<Option<u8>> {
        let mut f = fs::File::open(&self.path)?;
        if f.metadata()?.len() == 0 {
            return Ok(None);
        }
        f.seek(SeekFrom::End(-1))?;
        let mut buf = [0u8; 1];
        f.read_exact(&mut buf)?;
        Ok(Some(buf[0]))
    }
}

/// In-memory table, used as a test double.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    content: Option<Vec<u8>>,
}

impl MemoryTable {
    /// A table that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Content as text; `None` when missing or not valid UTF-8.
    pub fn content(&self) -> Option<&str> {
        self.bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    fn missing() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "in-memory table does not exist")
    }
}

impl Table for MemoryTable {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn read_bytes(&self) -> AppResult<Vec<u8>> {
        self.content.clone().ok_or_else(|| Self::missing().into())
    }

    fn replace(&mut self, content: &[u8]) -> AppResult<()> {
        self.content = Some(content.to_vec());
        Ok(())
    }

    fn append(&mut self, content: &[u8]) -> AppResult<()> {
        match self.content.as_mut() {
            Some(c) => {
                c.extend_from_slice(content);
                Ok(())
            }
            None => Err(Self::missing().into()),
        }
    }

    fn last_byte(&self) -> AppResult<Option<u8>> {
        match &self.content {
            Some(c) => Ok(c.last().copied()),
            None => Err(Self::missing().into()),
        }
    }
}
