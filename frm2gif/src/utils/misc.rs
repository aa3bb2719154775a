use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[macro_export]
macro_rules! err {
    ($e: ident) => {{
        use eyre::eyre;

        Err(eyre!($e))
    }};

    ($format_string: literal) => {{
        use eyre::eyre;

        Err(eyre!($format_string))
    }};

    ($($arg:tt)*) => {{
        use eyre::eyre;

        Err(eyre!($($arg)*))
    }};
}

/// Case insensitive. `extensions` are given without the dot.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(ext))
        })
}

/// Every file under `root` with one of `extensions`, sorted by path.
pub fn find_files_with_ext_recursively(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_extension(entry.path(), extensions))
        .map(|entry| entry.into_path())
        .collect()
}

/// `walk.frm` -> `walk`, `a.b.frm` -> `a.b`
pub fn file_stem_string(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    fn extensions() -> Vec<String> {
        vec!["frm".to_string(), "fr0".to_string()]
    }

    #[test]
    fn extension_case() {
        assert!(has_extension(Path::new("a/b/hmjmpsat.FRM"), &extensions()));
        assert!(has_extension(Path::new("hmjmpsat.fr0"), &extensions()));
        assert!(!has_extension(Path::new("hmjmpsat.fr1"), &extensions()));
        assert!(!has_extension(Path::new("frm"), &extensions()));
    }

    #[test]
    fn stem() {
        assert_eq!(file_stem_string(Path::new("x/walk.frm")).unwrap(), "walk");
        assert_eq!(file_stem_string(Path::new("a.b.frm")).unwrap(), "a.b");
    }

    #[test]
    fn find_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("critters").join("hero");

        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("walk.frm"), b"").unwrap();
        fs::write(dir.path().join("idle.FR0"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let found = find_files_with_ext_recursively(dir.path(), &extensions());

        assert_eq!(found.len(), 2);
        assert!(found.contains(&nested.join("walk.frm")));
        assert!(found.contains(&dir.path().join("idle.FR0")));
    }
}
