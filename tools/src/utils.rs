use std::path::Path;

/// The extension of a path argument, including the leading dot
///
/// This is everything from the last `.` onwards, looking at the argument as a whole rather
/// than just its file name. An argument without a `.`, or one that starts with its only `.`,
/// has no extension (so `.gb` on its own doesn't count as a `.gb` file).
pub fn extension(path: &str) -> &str {
    match path.rfind('.') {
        None | Some(0) => "",
        Some(index) => &path[index..],
    }
}

/// Does the path argument end in exactly this extension (e.g. `".gb"`)?
pub fn has_extension(path: &Path, extension: &str) -> bool {
    self::extension(&path.to_string_lossy()) == extension
}
