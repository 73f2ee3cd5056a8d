//! Loading and saving ROM images.

use crate::error::SwapperError;
use mg64_rom::{RomImage, RomLayout};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Read a whole ROM image into memory.
pub fn load_image(path: &Path) -> Result<RomImage, SwapperError> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SwapperError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SwapperError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    info!("Loaded ROM {}: {} bytes", path.display(), data.len());
    Ok(RomImage::new(data))
}

/// Reject images too short to hold the tables described by `layout`.
pub fn ensure_layout_fits(image: &RomImage, layout: &RomLayout) -> Result<(), SwapperError> {
    let required = layout.required_len();
    if image.len() < required {
        return Err(SwapperError::ImageTooSmall {
            len: image.len(),
            required,
        });
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn remove_temp_file(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        warn!(
            "Failed to remove temporary file {}: {}",
            temp_path.display(),
            e
        );
    }
}

/// Write `image` to `path`.
///
/// The bytes go to a sibling `.tmp` file which is renamed over `path` once
/// fully written, so an interrupted save never leaves a truncated ROM behind.
pub fn persist_image(image: &RomImage, path: &Path) -> Result<(), SwapperError> {
    let io_error = |source: std::io::Error| SwapperError::Io {
        path: path.to_path_buf(),
        source,
    };
    let temp_path = temp_path_for(path);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(io_error)?;

    let written = file
        .write_all(image.as_bytes())
        .and_then(|()| file.sync_all());
    drop(file);

    if let Err(source) = written.and_then(|()| fs::rename(&temp_path, path)) {
        remove_temp_file(&temp_path);
        return Err(io_error(source));
    }

    info!("ROM saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.z64");

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, SwapperError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_image(dir.path()).unwrap_err();
        assert!(matches!(err, SwapperError::Io { .. }));
    }

    #[test]
    fn test_persist_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.z64");
        let image = RomImage::new((0..=255).collect());

        persist_image(&image, &path).unwrap();

        assert_eq!(load_image(&path).unwrap(), image);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_persist_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.z64");
        fs::write(&path, vec![0xFF; 1024]).unwrap();

        persist_image(&RomImage::new(vec![1, 2, 3]), &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_rename_cleans_up_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let err = persist_image(&RomImage::new(vec![1, 2, 3]), &path).unwrap_err();

        assert!(matches!(err, SwapperError::Io { .. }));
        assert!(!temp_path_for(&path).exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_missing_temp_file_is_only_logged() {
        let dir = TempDir::new().unwrap();
        remove_temp_file(&dir.path().join("never-written.tmp"));
    }

    #[test]
    fn test_persist_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.z64");

        let err = persist_image(&RomImage::new(vec![0]), &path).unwrap_err();
        assert!(matches!(err, SwapperError::Io { .. }));
    }

    #[test]
    fn test_layout_fit() {
        let layout = RomLayout {
            resource_table_start: 0x10,
            resource_table_end: 0x20,
            par_table_base: 0,
        };
        let required = layout.required_len();

        assert!(ensure_layout_fits(&RomImage::zeroed(required), &layout).is_ok());
        assert!(matches!(
            ensure_layout_fits(&RomImage::zeroed(required - 1), &layout),
            Err(SwapperError::ImageTooSmall { len, required: r }) if len == required - 1 && r == required
        ));
    }
}
