//! Output file naming.

use std::path::is_separator;

/// Derives the output base name from a scene script path.
///
/// Strips the directory portion, then the extension after the last `.`.
/// A leading dot is part of the name, so `.scene` stays `.scene`.
///
/// ```
/// use lumen_host::naming::output_base_name;
///
/// assert_eq!(output_base_name("scenes/cornell.lua"), "cornell");
/// assert_eq!(output_base_name("archive.tar.gz"), "archive.tar");
/// ```
pub fn output_base_name(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        // Path consisted only of separators.
        return path[..1].to_owned();
    }

    let base = trimmed.rsplit(is_separator).next().unwrap_or(trimmed);
    match base.rfind('.') {
        Some(dot) if dot > 0 => base[..dot].to_owned(),
        _ => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directory_and_extension() {
        assert_eq!(output_base_name("/home/me/scenes/spheres.lua"), "spheres");
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(output_base_name("a.b.c"), "a.b");
    }

    #[test]
    fn no_extension_is_kept_whole() {
        assert_eq!(output_base_name("dir/scene"), "scene");
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        assert_eq!(output_base_name(".hidden"), ".hidden");
        assert_eq!(output_base_name("dir/.hidden"), ".hidden");
    }

    #[test]
    fn trailing_dot_is_removed() {
        assert_eq!(output_base_name("scene."), "scene");
    }

    #[test]
    fn trailing_separator_is_ignored() {
        assert_eq!(output_base_name("out/render.d/"), "render");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(output_base_name(""), ".");
        assert_eq!(output_base_name("/"), "/");
    }
}
