/// Separator used to split a path into its display label
pub const PATH_SEPARATOR: char = '/';

/// A file shown as one tab in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFile {
    /// Unique identifier, also the source of the tab label
    pub path: String,
    /// Whether the file has unsaved changes
    pub is_modified: bool,
}

impl OpenFile {
    /// Unmodified file at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_modified: false,
        }
    }

    /// Set the unsaved-changes flag
    pub fn modified(mut self, is_modified: bool) -> Self {
        self.is_modified = is_modified;
        self
    }

    /// Display label for this tab
    pub fn label(&self) -> &str {
        file_label(&self.path)
    }
}

/// Text after the last path separator ("/a/x.ts" -> "x.ts")
pub fn file_label(path: &str) -> &str {
    path.rsplit(PATH_SEPARATOR).next().unwrap_or(path)
}

/// Paths of `files` in display order
pub fn paths(files: &[OpenFile]) -> Vec<String> {
    files.iter().map(|f| f.path.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_label() {
        assert_eq!(file_label("/a/x.ts"), "x.ts");
        assert_eq!(file_label("x.ts"), "x.ts");
        assert_eq!(file_label("/a/b/"), "");
        assert_eq!(file_label(""), "");
    }

    #[test]
    fn test_open_file_builder() {
        let file = OpenFile::new("/src/main.rs").modified(true);
        assert_eq!(file.label(), "main.rs");
        assert!(file.is_modified);
        assert!(!OpenFile::new("/src/lib.rs").is_modified);
    }

    #[test]
    fn test_paths() {
        let files = vec![OpenFile::new("/a/x.ts"), OpenFile::new("/a/y.ts")];
        assert_eq!(paths(&files), vec!["/a/x.ts", "/a/y.ts"]);
    }
}
