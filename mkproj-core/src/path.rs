//! Path helpers producing host-independent, `/`-separated paths.

/// Canonicalize a path to use `/` separators (e.g., `"a\\b//c"` -> `"a/b/c"`).
///
/// Backslashes become forward slashes and runs of separators collapse into
/// one. A leading separator is kept, a trailing one is dropped.
pub fn canonicalize_separators(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut prev_sep = false;

    for c in path.chars() {
        if c == '/' || c == '\\' {
            if !prev_sep {
                result.push('/');
            }
            prev_sep = true;
        } else {
            result.push(c);
            prev_sep = false;
        }
    }

    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }
    result
}

/// Join two path segments with a single `/`, skipping empty segments.
pub fn join_path(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => canonicalize_separators(name),
        (_, true) => canonicalize_separators(prefix),
        _ => canonicalize_separators(&format!("{}/{}", prefix, name)),
    }
}

/// Resolve a module directory relative to the source root.
///
/// Both arguments are canonicalized first. Returns `None` when the module
/// lies outside the root, either because it is absolute and not under the
/// root or because `..` segments escape it. The root itself maps to `""`.
pub fn module_relative_path(source_root: &str, module_dir: &str) -> Option<String> {
    let root = canonicalize_separators(source_root);
    let module = canonicalize_separators(module_dir);

    let relative = if is_absolute_path(&module) {
        let stripped = module.strip_prefix(root.as_str())?;
        if !stripped.is_empty() && !stripped.starts_with('/') {
            // "/src/foo" must not match root "/src/f"
            return None;
        }
        stripped.trim_start_matches('/').to_string()
    } else {
        module
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }
    Some(segments.join("/"))
}

/// Split a file name into stem and extension.
///
/// `"icon.RC"` -> `("icon", "RC")`, `"Makefile"` -> `("Makefile", "")`.
/// A leading dot does not start an extension (`".gitignore"` has none).
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(pos) => (&name[..pos], &name[pos + 1..]),
    }
}

/// Whether a path is absolute on either a Unix or a Windows host.
pub fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/') || path.as_bytes().get(1) == Some(&b':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_mixed_separators() {
        assert_eq!(canonicalize_separators("a\\b/c"), "a/b/c");
        assert_eq!(canonicalize_separators("a\\\\b//c"), "a/b/c");
        assert_eq!(canonicalize_separators("engines\\scumm\\"), "engines/scumm");
        assert_eq!(canonicalize_separators("/abs/path"), "/abs/path");
        assert_eq!(canonicalize_separators("/"), "/");
        assert_eq!(canonicalize_separators(""), "");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a.cpp"), "a.cpp");
        assert_eq!(join_path("src", ""), "src");
        assert_eq!(join_path("../..", "engines\\a.cpp"), "../../engines/a.cpp");
        assert_eq!(join_path("src/", "/a.cpp"), "src/a.cpp");
    }

    #[test]
    fn test_module_relative_path_relative_inputs() {
        assert_eq!(module_relative_path(".", ".").as_deref(), Some(""));
        assert_eq!(
            module_relative_path(".", "engines/scumm").as_deref(),
            Some("engines/scumm")
        );
        assert_eq!(
            module_relative_path(".", "engines\\..\\common").as_deref(),
            Some("common")
        );
        assert_eq!(module_relative_path(".", "../outside"), None);
        assert_eq!(module_relative_path(".", "a/../../b"), None);
    }

    #[test]
    fn test_module_relative_path_absolute_inputs() {
        assert_eq!(
            module_relative_path("/src/scummvm", "/src/scummvm/engines").as_deref(),
            Some("engines")
        );
        assert_eq!(
            module_relative_path("/src/scummvm", "/src/scummvm").as_deref(),
            Some("")
        );
        assert_eq!(module_relative_path("/src/scummvm", "/src/scummvm2/x"), None);
        assert_eq!(module_relative_path("/src/scummvm", "/elsewhere"), None);
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("icon.rc"), ("icon", "rc"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension("Makefile"), ("Makefile", ""));
        assert_eq!(split_extension(".gitignore"), (".gitignore", ""));
    }

    #[test]
    fn test_is_absolute_path() {
        assert!(is_absolute_path("/usr/src"));
        assert!(is_absolute_path("C:\\scummvm"));
        assert!(!is_absolute_path("engines/sky"));
        assert!(!is_absolute_path(""));
    }
}
