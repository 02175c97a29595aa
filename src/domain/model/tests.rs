// Unit tests for domain models

use super::*;

#[test]
fn test_parsed_name_file_name() {
    let name = ParsedName {
        title: "The Matrix".to_string(),
        year: "1999".to_string(),
        source: "BluRay".to_string(),
        resolution: "1080p".to_string(),
    };
    assert_eq!(name.file_name(), "The Matrix (1999) BluRay 1080p.mp4");
    assert_eq!(name.to_string(), "The Matrix (1999) BluRay 1080p");
}

#[test]
fn test_fallback_file_name_replaces_extension() {
    assert_eq!(fallback_file_name(Path::new("randomfile.txt")), "randomfile.mp4");
    assert_eq!(
        fallback_file_name(Path::new("/media/in/Home Video.mkv")),
        "Home Video.mp4"
    );
    assert_eq!(fallback_file_name(Path::new("noext")), "noext.mp4");
}

#[test]
fn test_fallback_file_name_keeps_inner_dots() {
    assert_eq!(
        fallback_file_name(Path::new("some.release.name.mov")),
        "some.release.name.mp4"
    );
}

#[test]
fn test_invocation_mode_from_keep_audio() {
    assert_eq!(InvocationMode::from_keep_audio(true), InvocationMode::CopyAll);
    assert_eq!(
        InvocationMode::from_keep_audio(false),
        InvocationMode::TranscodeAudio(AudioTarget::AAC_STEREO)
    );
    assert!(!InvocationMode::CopyAll.converts_audio());
    assert!(InvocationMode::from_keep_audio(false).converts_audio());
}

#[test]
fn test_audio_target_defaults() {
    let target = AudioTarget::default();
    assert_eq!(target.codec, "aac");
    assert_eq!(target.bitrate, "320k");
    assert_eq!(target.channels, 2);
}

#[test]
fn test_output_target_path() {
    let target = OutputTarget::new("/srv/movies", "Movie (2021) WEBDL 720p.mp4");
    assert_eq!(
        target.path(),
        PathBuf::from("/srv/movies/Movie (2021) WEBDL 720p.mp4")
    );
}

#[test]
fn test_output_target_empty_directory_is_relative() {
    let target = OutputTarget::new("", "movie.mp4");
    assert_eq!(target.path(), PathBuf::from("movie.mp4"));
}

#[test]
fn test_remux_request_defaults() {
    let request = RemuxRequest::new("movie.mkv", None, false);
    assert!(!request.overwrite);
    assert!(request.mode.converts_audio());

    let request =
        RemuxRequest::new("movie.mkv", Some(PathBuf::from("/tmp")), true).with_overwrite(true);
    assert!(request.overwrite);
    assert_eq!(request.mode, InvocationMode::CopyAll);
}
