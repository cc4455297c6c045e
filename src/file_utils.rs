use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use walkdir::WalkDir;

use crate::errors::{Result, WebVttError};

// @module: File system capability and directory helpers

/// File system operations needed to read sources and write WebVTT output
///
/// Conversions never touch `std::fs` directly, so tests can swap in
/// [`MemoryFileSystem`].
pub trait FileSystem: Send + Sync {
    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is a file that can be opened for reading
    fn is_readable(&self, path: &Path) -> bool;

    /// Whether new files can be written inside the directory `path`
    fn is_writable_dir(&self, path: &Path) -> bool;

    /// Create a single directory level; an existing directory is not an error
    fn create_dir(&self, path: &Path) -> Result<()>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents` to `path`, replacing any existing file
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Files with `extension` directly inside `dir`, sorted by path
    fn find_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;
}

// @struct: std::fs backed implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && fs::File::open(path).is_ok()
    }

    // Advisory: only the read-only flag is checked, ownership and ACLs are
    // not. A write the OS still refuses fails later in `write` with `Io`.
    fn is_writable_dir(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => metadata.is_dir() && !metadata.permissions().readonly(),
            Err(_) => false,
        }
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        match fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(WebVttError::io(path, format!("failed to create directory: {}", e))),
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .map_err(|e| WebVttError::io(path, format!("failed to read file: {}", e)))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)
            .map_err(|e| WebVttError::io(path, format!("failed to write file: {}", e)))
    }

    fn find_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        FileManager::find_files(dir, extension)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

/// In-memory file system for tests
///
/// The current directory (`""`, `"."`) and the root always exist.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory (and all of its ancestors)
    pub fn add_dir<P: AsRef<Path>>(&self, path: P) {
        let mut state = self.state.lock();
        for ancestor in path.as_ref().ancestors() {
            if !Self::is_implicit_dir(ancestor) {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    /// Register a file, creating its parent directories
    pub fn add_file<P: AsRef<Path>>(&self, path: P, contents: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state.lock().files.insert(path.to_path_buf(), contents.to_string());
    }

    /// Refuse writes into `dir`
    pub fn set_read_only<P: AsRef<Path>>(&self, dir: P) {
        self.state.lock().read_only.insert(dir.as_ref().to_path_buf());
    }

    /// Refuse reads of `path`
    pub fn set_unreadable<P: AsRef<Path>>(&self, path: P) {
        self.state.lock().unreadable.insert(path.as_ref().to_path_buf());
    }

    /// Contents of a stored file
    pub fn contents<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        self.state.lock().files.get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().files.len()
    }

    fn is_implicit_dir(path: &Path) -> bool {
        path.as_os_str().is_empty() || path == Path::new(".") || path == Path::new("/")
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        Self::is_implicit_dir(path) || self.state.lock().dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().files.contains_key(path)
    }

    fn is_readable(&self, path: &Path) -> bool {
        let state = self.state.lock();
        state.files.contains_key(path) && !state.unreadable.contains(path)
    }

    fn is_writable_dir(&self, path: &Path) -> bool {
        self.is_dir(path) && !self.state.lock().read_only.contains(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if self.is_dir(path) {
            return Ok(());
        }
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.is_dir(parent) {
            return Err(WebVttError::io(path, "failed to create directory: parent does not exist"));
        }
        if !self.is_writable_dir(parent) {
            return Err(WebVttError::io(path, "failed to create directory: permission denied"));
        }
        self.state.lock().dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        if !self.is_readable(path) {
            return Err(WebVttError::io(path, "failed to read file: not readable"));
        }
        self.contents(path)
            .ok_or_else(|| WebVttError::io(path, "failed to read file: not found"))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.is_writable_dir(parent) {
            return Err(WebVttError::io(path, "failed to write file: directory not writable"));
        }
        self.state.lock().files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn find_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(WebVttError::io(dir, "failed to read directory: not found"));
        }
        let wanted = extension.trim_start_matches('.');
        let mut result: Vec<PathBuf> = self
            .state
            .lock()
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
            })
            .cloned()
            .collect();
        result.sort();
        Ok(result)
    }
}

// @struct: Directory helpers for batch conversion
pub struct FileManager;

impl FileManager {
    /// Find files with `extension` directly inside `dir`, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let wanted = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| {
                WebVttError::io(dir, format!("failed to read directory entry: {}", e))
            })?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(wanted) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// `src/name.xml` -> `dest_dir/name.<extension>`
    pub fn output_path_for<P1: AsRef<Path>, P2: AsRef<Path>>(
        source: P1,
        dest_dir: P2,
        extension: &str,
    ) -> PathBuf {
        let stem = source.as_ref().file_stem().unwrap_or_default();
        let mut file_name = stem.to_string_lossy().to_string();
        file_name.push('.');
        file_name.push_str(extension.trim_start_matches('.'));
        dest_dir.as_ref().join(file_name)
    }
}
