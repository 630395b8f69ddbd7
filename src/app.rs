use std::collections::HashSet;

use tabstrip::{OpenFile, TabStripCallbacks};
use tracing::{info, warn};

/// In-memory editor state that owns the tab order and the active file
#[derive(Debug, Default)]
pub struct Workspace {
    /// Open files in display order
    files: Vec<OpenFile>,
    /// Path of the active file
    active_file: Option<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a file as the last tab. Already open paths are left alone.
    pub fn open(&mut self, path: &str, is_modified: bool) {
        if self.files.iter().any(|f| f.path == path) {
            return;
        }
        self.files.push(OpenFile::new(path).modified(is_modified));
        if self.active_file.is_none() {
            self.active_file = Some(path.to_string());
        }
    }

    pub fn files(&self) -> &[OpenFile] {
        &self.files
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active_file.as_deref()
    }

    /// Make an open file the active one
    pub fn select(&mut self, path: &str) {
        if self.files.iter().any(|f| f.path == path) {
            info!("Selected {}", path);
            self.active_file = Some(path.to_string());
        }
    }

    /// Close a file
    pub fn close(&mut self, path: &str) {
        let Some(index) = self.files.iter().position(|f| f.path == path) else {
            return;
        };
        self.files.remove(index);
        info!("Closed {}", path);

        // If we closed the active file, the tab that slid into its place wins
        if self.active_file.as_deref() == Some(path) {
            self.active_file = self
                .files
                .get(index)
                .or_else(|| self.files.last())
                .map(|f| f.path.clone());
        }
    }

    /// Replace the tab order. Rejected unless `order` is a permutation of
    /// the open paths.
    pub fn reorder(&mut self, order: Vec<String>) {
        let current: HashSet<&str> = self.files.iter().map(|f| f.path.as_str()).collect();
        let proposed: HashSet<&str> = order.iter().map(String::as_str).collect();
        if order.len() != self.files.len() || current != proposed {
            warn!("Ignoring reorder that does not match the open files: {:?}", order);
            return;
        }

        let mut files = std::mem::take(&mut self.files);
        self.files = order
            .iter()
            .filter_map(|path| {
                let index = files.iter().position(|f| &f.path == path)?;
                Some(files.swap_remove(index))
            })
            .collect();
        info!("Reordered tabs: {:?}", order);
    }

    /// Callbacks that apply tab strip events to a workspace
    pub fn callbacks<'a>() -> TabStripCallbacks<'a, Workspace> {
        TabStripCallbacks::new(Self::select, Self::close, Self::reorder)
    }
}
