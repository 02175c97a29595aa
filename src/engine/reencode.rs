//! Audio re-encoding with video stream copy

use crate::domain::model::AudioTarget;

/// Copy the video streams and re-encode the audio streams to `target`
pub fn stream_args(target: &AudioTarget) -> Vec<String> {
    vec![
        "-map".to_string(),
        "0:v".to_string(),
        "-map".to_string(),
        "0:a".to_string(),
        "-c:v".to_string(),
        "copy".to_string(),
        "-c:a".to_string(),
        target.codec.to_string(),
        "-b:a".to_string(),
        target.bitrate.to_string(),
        "-ac".to_string(),
        target.channels.to_string(),
    ]
}
