//! Image saving utilities.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Encode `img` as PNG and replace the file at `path` with it.
///
/// The image is written to a temporary file in the same folder, which is then
/// renamed over `path`. If anything fails before the rename, `path` keeps its
/// old contents and the temporary file is removed. An existing target keeps
/// its permissions, and a read-only target is refused rather than replaced.
/// If `path` is a symlink, the file it points to is replaced and the link kept.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if encoding fails, or [`Error::Write`] if the
/// temporary file cannot be written or moved into place.
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    // Write through symlinks: the link stays, its target gets the new image.
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let permissions = match fs::metadata(&target) {
        Ok(meta) if meta.permissions().readonly() => {
            return Err(write_err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "file is read-only",
            )));
        }
        Ok(meta) => Some(meta.permissions()),
        Err(_) => None,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        PngEncoder::new(&mut writer)
            .write_image(
                img.as_raw(),
                img.width(),
                img.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| Error::ImageSave {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(write_err)?;
    }

    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;
    }

    tmp.persist(&target).map_err(|err| write_err(err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_written_file_decodes_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbaImage::from_pixel(5, 7, Rgba([200, 100, 50, 128]));

        save_png(&img, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.into_rgba8(), img);
    }

    #[test]
    fn test_overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        fs::write(&path, b"old contents").unwrap();

        save_png(&RgbaImage::new(2, 2), &path).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("icon.png")]);
        assert_ne!(fs::read(&path).unwrap(), b"old contents");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_writes_through_to_target() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.png");
        let link = dir.path().join("link.png");
        fs::write(&real, b"old contents").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        save_png(&RgbaImage::new(3, 3), &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let decoded = image::open(&real).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 3));
    }

    #[test]
    fn test_read_only_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.png");
        fs::write(&path, b"keep me").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        let result = save_png(&RgbaImage::new(2, 2), &path);

        assert!(matches!(result, Err(Error::Write { .. })));
        assert_eq!(fs::read(&path).unwrap(), b"keep me");

        // tempdir cleanup needs a writable file on some platforms
        let mut perms = fs::metadata(&path).unwrap().permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();
    }
}
