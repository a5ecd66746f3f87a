//! Libraries CMake locates through its bundled `Find<Pkg>` modules.

use mkproj_codegen::normalize_library_name;

/// A library resolved through `Find_Package`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    /// Name accepted by `Include(Find<module>)` and `Find_Package(<module>)`
    pub module: &'static str,
    /// Variable holding the include directories
    pub include_var: &'static str,
    /// Variable holding the libraries to link
    pub library_var: &'static str,
    aliases: &'static [&'static str],
}

const PACKAGES: &[Package] = &[
    Package {
        module: "SDL",
        include_var: "SDL_INCLUDE_DIR",
        library_var: "SDL_LIBRARY",
        aliases: &["sdl"],
    },
    Package {
        module: "SDL2",
        include_var: "SDL2_INCLUDE_DIR",
        library_var: "SDL2_LIBRARY",
        aliases: &["sdl2"],
    },
    Package {
        module: "Freetype",
        include_var: "FREETYPE_INCLUDE_DIRS",
        library_var: "FREETYPE_LIBRARIES",
        aliases: &["freetype", "freetype2"],
    },
    Package {
        module: "ZLIB",
        include_var: "ZLIB_INCLUDE_DIRS",
        library_var: "ZLIB_LIBRARIES",
        aliases: &["zlib", "libz", "z"],
    },
    Package {
        module: "PNG",
        include_var: "PNG_INCLUDE_DIRS",
        library_var: "PNG_LIBRARIES",
        aliases: &["png", "libpng"],
    },
    Package {
        module: "JPEG",
        include_var: "JPEG_INCLUDE_DIR",
        library_var: "JPEG_LIBRARIES",
        aliases: &["jpeg", "libjpeg"],
    },
    Package {
        module: "Ogg",
        include_var: "OGG_INCLUDE_DIR",
        library_var: "OGG_LIBRARY",
        aliases: &["ogg", "libogg"],
    },
    Package {
        module: "Vorbis",
        include_var: "VORBIS_INCLUDE_DIR",
        library_var: "VORBIS_LIBRARY",
        aliases: &["vorbis", "libvorbis"],
    },
    Package {
        module: "FLAC",
        include_var: "FLAC_INCLUDE_DIR",
        library_var: "FLAC_LIBRARIES",
        aliases: &["flac", "libflac"],
    },
    Package {
        module: "MAD",
        include_var: "MAD_INCLUDE_DIR",
        library_var: "MAD_LIBRARIES",
        aliases: &["mad", "libmad"],
    },
];

/// Find the package for an external library name, if CMake knows it.
///
/// Static-variant suffixes are ignored, so `SDL_static` resolves to `SDL`.
pub fn find_package(library: &str) -> Option<&'static Package> {
    let key = normalize_library_name(library).to_lowercase();
    PACKAGES.iter().find(|p| p.aliases.contains(&key.as_str()))
}

/// Split libraries into known packages (deduplicated, first-seen order) and
/// the remaining names, normalized for direct linking.
pub fn partition(libraries: &[String]) -> (Vec<&'static Package>, Vec<String>) {
    let mut packages: Vec<&'static Package> = Vec::new();
    let mut others: Vec<String> = Vec::new();

    for library in libraries {
        match find_package(library) {
            Some(package) => {
                if !packages.contains(&package) {
                    packages.push(package);
                }
            }
            None => {
                let name = normalize_library_name(library);
                if !others.contains(&name) {
                    others.push(name);
                }
            }
        }
    }

    (packages, others)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn libs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_packages() {
        assert_eq!(find_package("sdl").map(|p| p.module), Some("SDL"));
        assert_eq!(find_package("SDL_static").map(|p| p.module), Some("SDL"));
        assert_eq!(find_package("zlib").map(|p| p.module), Some("ZLIB"));
        assert_eq!(find_package("freetype").map(|p| p.library_var), Some("FREETYPE_LIBRARIES"));
        assert_eq!(find_package("GL"), None);
    }

    #[test]
    fn test_partition_dedupes_and_normalizes() {
        let (packages, others) = partition(&libs(&["sdl", "GL", "SDL_static", "winmm-static", "GL"]));

        let modules: Vec<_> = packages.iter().map(|p| p.module).collect();
        assert_eq!(modules, ["SDL"]);
        assert_eq!(others, ["GL", "winmm"]);
    }
}
