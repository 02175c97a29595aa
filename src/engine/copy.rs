//! Stream copy (remux only)

/// Map every input stream and copy it without re-encoding
pub fn stream_args() -> Vec<String> {
    ["-map", "0", "-c", "copy"]
        .iter()
        .map(|arg| arg.to_string())
        .collect()
}
