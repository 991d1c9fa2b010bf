//! Filesystem helpers used by module hooks and the export step.

use std::{fs, io, path::Path};

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Copy a file or directory tree from `src` to `dest`.
///
/// A file is copied to the `dest` path itself (parent directories are
/// created); a directory is mirrored recursively under `dest`. Returns the
/// number of files copied.
pub fn copy_recursively(src: &Path, dest: &Path) -> io::Result<u64> {
    let meta = fs::metadata(src)?;
    if meta.is_dir() {
        fs::create_dir_all(dest)?;
        let mut copied = 0;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copied += copy_recursively(&entry.path(), &dest.join(entry.file_name()))?;
        }
        Ok(copied)
    } else {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dest)?;
        Ok(1)
    }
}
