//! Audio resource domain types

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::status::AudioStatus;

/// An audio resource added to a custom acoustic model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioResource {
    pub name: String,
    /// Total duration in seconds
    #[serde(default)]
    pub duration: f64,
    pub status: AudioStatus,
    #[serde(default)]
    pub details: Option<AudioDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDetails {
    /// `audio`, `archive` or `undetermined`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub codec: Option<String>,
    #[serde(default)]
    pub frequency: Option<u32>,
    #[serde(default)]
    pub compression: Option<String>,
}

/// Response of `GET /v1/acoustic_customizations/{id}/audio`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioResources {
    #[serde(default)]
    pub total_minutes_of_audio: f64,
    #[serde(default)]
    pub audio: Vec<AudioResource>,
}

/// Container format of an audio upload, derived from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Zip,
    TarGz,
    Wav,
    Flac,
    Mp3,
    Ogg,
}

impl AudioFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            return Some(AudioFormat::TarGz);
        }
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "zip" => Some(AudioFormat::Zip),
            "wav" => Some(AudioFormat::Wav),
            "flac" => Some(AudioFormat::Flac),
            "mp3" => Some(AudioFormat::Mp3),
            "ogg" => Some(AudioFormat::Ogg),
            _ => None,
        }
    }

    /// Value of the `Content-Type` header for this format
    pub fn content_type(&self) -> &'static str {
        match self {
            AudioFormat::Zip => "application/zip",
            AudioFormat::TarGz => "application/gzip",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Mp3 => "audio/mp3",
            AudioFormat::Ogg => "audio/ogg",
        }
    }

    /// Archives hold many audio files and can only be added to acoustic models
    pub fn is_archive(&self) -> bool {
        matches!(self, AudioFormat::Zip | AudioFormat::TarGz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            AudioFormat::from_path(Path::new("calls/batch.zip")),
            Some(AudioFormat::Zip)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("batch.tar.gz")),
            Some(AudioFormat::TarGz)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("Sample.WAV")),
            Some(AudioFormat::Wav)
        );
        assert_eq!(AudioFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(AudioFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(AudioFormat::Zip.content_type(), "application/zip");
        assert_eq!(AudioFormat::Wav.content_type(), "audio/wav");
        assert!(AudioFormat::TarGz.is_archive());
        assert!(!AudioFormat::Flac.is_archive());
    }

    #[test]
    fn test_parse_audio_resources() {
        let body = r#"{
            "total_minutes_of_audio": 11.45,
            "audio": [{
                "duration": 131,
                "name": "audio1",
                "details": {"codec": "pcm_s16le", "type": "audio", "frequency": 22050},
                "status": "ok"
            }]
        }"#;

        let resources: AudioResources = serde_json::from_str(body).unwrap();
        assert_eq!(resources.audio[0].status, AudioStatus::Ok);
        let details = resources.audio[0].details.as_ref().unwrap();
        assert_eq!(details.kind.as_deref(), Some("audio"));
        assert_eq!(details.frequency, Some(22050));
    }
}
