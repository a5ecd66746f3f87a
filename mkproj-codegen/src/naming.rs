//! Library name normalization shared by every backend.

/// Normalize an external library name for linking.
///
/// Prebuilt toolchains ship the same library under different names, so the
/// first `_static` (or, failing that, the first `-static`) is removed and a
/// bare `zlib` becomes `libz`. Applied at emission time only.
///
/// ```
/// use mkproj_codegen::normalize_library_name;
///
/// assert_eq!(normalize_library_name("SDL_static"), "SDL");
/// assert_eq!(normalize_library_name("png-static"), "png");
/// assert_eq!(normalize_library_name("zlib"), "libz");
/// assert_eq!(normalize_library_name("GL"), "GL");
/// ```
pub fn normalize_library_name(name: &str) -> String {
    for suffix in ["_static", "-static"] {
        if let Some(pos) = name.find(suffix) {
            let mut out = String::with_capacity(name.len() - suffix.len());
            out.push_str(&name[..pos]);
            out.push_str(&name[pos + suffix.len()..]);
            return out;
        }
    }

    if name == "zlib" {
        return "libz".to_string();
    }

    name.to_string()
}
