//! Removal of output left behind by a failed transcode

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::OverwritePolicy;

/// Whether `a` and `b` name the same file once both are made absolute.
///
/// A path that does not exist yet is resolved through its parent directory.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (canonical_location(a), canonical_location(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

fn canonical_location(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = std::fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}

/// Delete `output` after a failed run if ffmpeg may have written it.
///
/// A file that existed before the run is only removed under
/// [`OverwritePolicy::Always`]; with `Never` ffmpeg refuses to touch it.
/// The input file is never removed. Returns whether a file was removed.
pub fn discard_partial_output(
    output: &Path,
    input: &Path,
    existed_before: bool,
    policy: OverwritePolicy,
) -> bool {
    if same_file(output, input) {
        warn!(path = %output.display(), "output is the input file, not removing it");
        return false;
    }

    if existed_before && policy == OverwritePolicy::Never {
        debug!(path = %output.display(), "keeping pre-existing output");
        return false;
    }

    match std::fs::remove_file(output) {
        Ok(()) => {
            debug!(path = %output.display(), "removed partial output");
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            warn!(path = %output.display(), "could not remove partial output: {}", e);
            false
        }
    }
}
