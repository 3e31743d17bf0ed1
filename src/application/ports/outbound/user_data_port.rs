use std::io::{self, Write};

use crate::domain::value_objects::ResPath;

/// Sandboxed writable storage rooted at the user-data directory
pub trait UserDataPort: Send + Sync {
    /// Create a directory and any missing parents; succeeds if it already exists
    fn create_dir(&self, path: &ResPath) -> io::Result<()>;

    /// Open a text file for writing, truncating existing content
    fn open_write_text(&self, path: &ResPath) -> io::Result<Box<dyn Write + Send>>;
}
