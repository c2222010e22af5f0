use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const IMAGE_ENDPOINT: &str = "/api/generate/image";
pub const VIDEO_ENDPOINT: &str = "/api/generate/video";

pub const DEFAULT_MODEL: &str = "auto";
pub const IMAGE_SIZE: u32 = 768;
pub const VIDEO_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Image,
    Video,
}

impl Mode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Image => IMAGE_ENDPOINT,
            Mode::Video => VIDEO_ENDPOINT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Image => "Image",
            Mode::Video => "Video",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Image => f.write_str("image"),
            Mode::Video => f.write_str("video"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRequest {
    pub prompt: String,
    pub seconds: u32,
    pub model: String,
}

/// Body of a generation POST. Serializes to the bare object for its mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    Image(ImageRequest),
    Video(VideoRequest),
}

impl GenerationRequest {
    /// The prompt is forwarded verbatim, empty or not.
    pub fn new(mode: Mode, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        match mode {
            Mode::Image => GenerationRequest::Image(ImageRequest {
                prompt,
                width: IMAGE_SIZE,
                height: IMAGE_SIZE,
                model: DEFAULT_MODEL.to_string(),
            }),
            Mode::Video => GenerationRequest::Video(VideoRequest {
                prompt,
                seconds: VIDEO_SECONDS,
                model: DEFAULT_MODEL.to_string(),
            }),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            GenerationRequest::Image(_) => Mode::Image,
            GenerationRequest::Video(_) => Mode::Video,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            GenerationRequest::Image(req) => &req.prompt,
            GenerationRequest::Video(req) => &req.prompt,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.mode().endpoint()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResponse {
    Image(ImageResponse),
    Video(VideoResponse),
}

impl GenerationResponse {
    /// Parses a success body with the shape expected for `mode`.
    pub fn decode(mode: Mode, body: &str) -> Result<Self, GenerationError> {
        let parsed = match mode {
            Mode::Image => serde_json::from_str(body).map(GenerationResponse::Image),
            Mode::Video => serde_json::from_str(body).map(GenerationResponse::Video),
        };
        parsed.map_err(|e| GenerationError::Decode(e.to_string()))
    }

    /// Informational note from the backend; empty strings count as absent.
    pub fn note(&self) -> Option<&str> {
        let note = match self {
            GenerationResponse::Image(resp) => resp.note.as_deref(),
            GenerationResponse::Video(resp) => resp.note.as_deref(),
        };
        note.filter(|n| !n.is_empty())
    }

    pub fn into_result_set(self) -> ResultSet {
        match self {
            GenerationResponse::Image(resp) => match resp.urls {
                Some(urls) if !urls.is_empty() => ResultSet::Images(urls),
                _ => ResultSet::Empty,
            },
            GenerationResponse::Video(resp) => match resp.url {
                Some(url) if !url.is_empty() => ResultSet::Video(url),
                _ => ResultSet::Empty,
            },
        }
    }
}

/// Media from the most recent accepted response. Images and video are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultSet {
    #[default]
    Empty,
    Images(Vec<String>),
    Video(String),
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResultSet::Empty)
    }
}
