//! On-disk user data storage
//!
//! Every [`ResPath`] is resolved beneath a single root directory. `ResPath`
//! cannot express `..` or absolute paths, so nothing here can reach outside it.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::application::ports::outbound::UserDataPort;
use crate::domain::value_objects::ResPath;

pub struct DiskUserData {
    root: PathBuf,
}

impl DiskUserData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &ResPath) -> PathBuf {
        path.to_path_under(&self.root)
    }
}

impl UserDataPort for DiskUserData {
    fn create_dir(&self, path: &ResPath) -> io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    fn open_write_text(&self, path: &ResPath) -> io::Result<Box<dyn Write + Send>> {
        let file = File::create(self.resolve(path))?;
        Ok(Box::new(file))
    }
}
