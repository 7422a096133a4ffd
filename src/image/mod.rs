//! Image loading, resampling, and saving utilities.

mod load;
mod resize;
mod save;

pub use load::load_rgba;
pub use resize::resize_to;
pub use save::save_png;

/// File name suffix (compared lower-cased) that marks a file for resizing.
pub const PNG_SUFFIX: &str = ".png";

/// Whether a file name qualifies for resizing.
///
/// Only the literal suffix is checked, case-insensitively. Contents are not sniffed.
#[must_use]
pub fn is_png_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(PNG_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_names() {
        assert!(is_png_name("icon.png"));
        assert!(is_png_name("ICON.PNG"));
        assert!(is_png_name("mixed.Png"));
        assert!(is_png_name("archive.tar.png"));
    }

    #[test]
    fn test_other_names() {
        assert!(!is_png_name("photo.jpg"));
        assert!(!is_png_name("notes.txt"));
        assert!(!is_png_name("icon.png.bak"));
        assert!(!is_png_name("png"));
    }
}
