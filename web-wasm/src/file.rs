//! Browser file handle for the upload flow

use perfect_cv_common::FileLike;
use web_sys::File;

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl FileLike for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn file_size(&self) -> u64 {
        // File.size is a JS number; sizes are whole bytes
        self.0.size().max(0.0) as u64
    }
}
