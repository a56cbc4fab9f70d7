use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{ApplyListError, Result};
use crate::listfile::LineReader;
use crate::scanner::FileEnumerator;

/// One collaborator call, recorded in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ReadLines(PathBuf),
    ListAllFiles,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockLineReader {
    files: HashMap<PathBuf, Vec<String>>,
    log: CallLog,
}

impl MockLineReader {
    pub fn new(log: &CallLog) -> Self {
        Self {
            files: HashMap::new(),
            log: Rc::clone(log),
        }
    }

    pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
        self.files.insert(
            PathBuf::from(path),
            lines.iter().map(|s| (*s).to_string()).collect(),
        );
        self
    }
}

impl LineReader for MockLineReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.log.borrow_mut().push(Call::ReadLines(path.to_path_buf()));
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplyListError::ListRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "error"),
            })
    }
}

pub struct MockEnumerator {
    files: Option<Vec<String>>,
    log: CallLog,
}

impl MockEnumerator {
    pub fn new(log: &CallLog, files: &[&str]) -> Self {
        Self {
            files: Some(files.iter().map(|s| (*s).to_string()).collect()),
            log: Rc::clone(log),
        }
    }

    pub fn failing(log: &CallLog) -> Self {
        Self {
            files: None,
            log: Rc::clone(log),
        }
    }
}

impl FileEnumerator for MockEnumerator {
    fn list_all_files(&self) -> Result<Vec<String>> {
        self.log.borrow_mut().push(Call::ListAllFiles);
        self.files
            .clone()
            .ok_or_else(|| ApplyListError::Enumeration("error".to_string()))
    }
}
