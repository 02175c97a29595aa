//! Output directory selection

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::model::DirectorySource;

/// Directory chosen for the output file and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectory {
    pub path: PathBuf,
    pub source: DirectorySource,
}

/// Pick the output directory.
///
/// Priority: `explicit` if it is an existing directory, then `from_env` if it
/// is an existing directory, then the parent of `input`. The last step always
/// succeeds; a bare file name yields an empty path (the current directory).
/// Writability is not checked.
pub fn resolve_output_directory(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
    input: &Path,
) -> ResolvedDirectory {
    let candidates = [
        (explicit, DirectorySource::Explicit),
        (from_env, DirectorySource::Environment),
    ];

    for (candidate, source) in candidates {
        let Some(dir) = candidate else {
            continue;
        };
        if dir.is_dir() {
            return ResolvedDirectory {
                path: dir.to_path_buf(),
                source,
            };
        }
        debug!(
            ?source,
            path = %dir.display(),
            "skipping output directory candidate, not a directory"
        );
    }

    ResolvedDirectory {
        path: input.parent().map(Path::to_path_buf).unwrap_or_default(),
        source: DirectorySource::InputDirectory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_directory_wins() {
        let explicit = TempDir::new().unwrap();
        let env = TempDir::new().unwrap();

        let resolved = resolve_output_directory(
            Some(explicit.path()),
            Some(env.path()),
            Path::new("/somewhere/else/movie.mkv"),
        );

        assert_eq!(resolved.path, explicit.path());
        assert_eq!(resolved.source, DirectorySource::Explicit);
    }

    #[test]
    fn test_invalid_explicit_falls_through_to_env() {
        let env = TempDir::new().unwrap();
        let missing = env.path().join("does-not-exist");

        let resolved =
            resolve_output_directory(Some(&missing), Some(env.path()), Path::new("movie.mkv"));

        assert_eq!(resolved.path, env.path());
        assert_eq!(resolved.source, DirectorySource::Environment);
    }

    #[test]
    fn test_explicit_file_is_not_a_directory() {
        let env = TempDir::new().unwrap();
        let file = env.path().join("movie.mkv");
        std::fs::write(&file, b"not a dir").unwrap();

        let resolved = resolve_output_directory(Some(&file), Some(env.path()), &file);

        assert_eq!(resolved.source, DirectorySource::Environment);
    }

    #[test]
    fn test_env_used_when_no_explicit() {
        let env = TempDir::new().unwrap();

        let resolved = resolve_output_directory(None, Some(env.path()), Path::new("/in/movie.mkv"));

        assert_eq!(resolved.path, env.path());
        assert_eq!(resolved.source, DirectorySource::Environment);
    }

    #[test]
    fn test_input_directory_fallback() {
        let input_dir = TempDir::new().unwrap();
        let input = input_dir.path().join("movie.mkv");
        let missing = input_dir.path().join("missing");

        let resolved = resolve_output_directory(Some(&missing), Some(&missing), &input);

        assert_eq!(resolved.path, input_dir.path());
        assert_eq!(resolved.source, DirectorySource::InputDirectory);
    }

    #[test]
    fn test_bare_file_name_yields_current_directory() {
        let resolved = resolve_output_directory(None, None, Path::new("movie.mkv"));

        assert_eq!(resolved.path, PathBuf::new());
        assert_eq!(resolved.source, DirectorySource::InputDirectory);
    }
}
