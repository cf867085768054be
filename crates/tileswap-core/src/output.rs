//! Output file naming.

use std::path::{is_separator, Path, PathBuf};

/// Replace the extension of `input` with `.png`.
///
/// The extension is everything from the last `.` in the final path element.
/// Without a `.` in the final element, `.png` is appended. The file system is
/// never consulted, and paths that are not valid UTF-8 are handled
/// losslessly.
///
/// ```ignore
/// assert_eq!(png_output_path(Path::new("photo.jpg")), Path::new("photo.png"));
/// assert_eq!(png_output_path(Path::new("archive.tar.gz")), Path::new("archive.tar.png"));
/// assert_eq!(png_output_path(Path::new("noext")), Path::new("noext.png"));
/// ```
pub fn png_output_path(input: &Path) -> PathBuf {
    let raw = input.as_os_str().as_encoded_bytes();
    let name_start = raw
        .iter()
        .rposition(|&b| is_separator(b as char))
        .map_or(0, |i| i + 1);
    let name = &raw[name_start..];
    let is_file_name = input.file_name().map(|n| n.as_encoded_bytes()) == Some(name);

    match name.iter().rposition(|&b| b == b'.') {
        // Dotfile: the whole name is the extension
        Some(0) if is_file_name => input.with_file_name(".png"),
        Some(_) if is_file_name => input.with_extension("png"),
        // No dot, or a "." / ".." element
        _ => {
            let mut output = input.as_os_str().to_owned();
            output.push(".png");
            PathBuf::from(output)
        }
    }
}
