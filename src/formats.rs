use crate::config::FormatRequest;
use crate::error::{FormatError, InvalidFormatError};

pub mod segment;

use segment::SegmentFormat;

/// An output container format understood by ffmpeg's `-f` flag.
pub trait Format: Sync {
    /// The user-facing name a request selects this format by.
    fn name(&self) -> &'static str;

    /// The token ffmpeg expects after `-f`.
    fn ffmpeg_name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn parameters(&self, request: &FormatRequest) -> Result<Vec<String>, FormatError> {
        Ok(base_parameters(self, request)?)
    }
}

/// Checks that `request` selects `format` and returns `-f <ffmpeg_name>`.
pub fn base_parameters<F: Format + ?Sized>(format: &F, request: &FormatRequest) -> Result<Vec<String>, InvalidFormatError> {
    match request.format() {
        Some(name) if name == format.name() => Ok(vec![
            String::from("-f"),
            String::from(format.ffmpeg_name()),
        ]),
        found => Err(InvalidFormatError::for_format(format.name(), found)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Container {
    Ogg,
    Avi,
    Matroska,
    WebM,
    Flv,
    QuickTime,
    MP4,
    MpegTs,
    MP3,
}

impl Format for Container {
    fn name(&self) -> &'static str {
        match self {
            Container::Ogg => "ogg",
            Container::Avi => "avi",
            Container::Matroska => "mkv",
            Container::WebM => "webm",
            Container::Flv => "flv",
            Container::QuickTime => "mov",
            Container::MP4 => "mp4",
            Container::MpegTs => "mpg",
            Container::MP3 => "mp3",
        }
    }

    fn ffmpeg_name(&self) -> &'static str {
        match self {
            Container::Ogg => "ogg",
            Container::Avi => "avi",
            Container::Matroska => "matroska",
            Container::WebM => "webm",
            Container::Flv => "flv",
            Container::QuickTime => "mov",
            Container::MP4 => "mp4",
            Container::MpegTs => "mpegts",
            Container::MP3 => "mp3",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Container::Ogg => "Ogg container, mostly used with Vorbis and Theora",
            Container::Avi => "AVI container, often used with DivX video",
            Container::Matroska => "Matroska container, often used with H.264 video",
            Container::WebM => "WebM, a Matroska subset carrying VP8 video and Vorbis audio",
            Container::Flv => "Flash Video container",
            Container::QuickTime => "QuickTime container, mostly H.264 for mobile platforms",
            Container::MP4 => "MP4 container, the default for H.264 video",
            Container::MpegTs => "MPEG transport stream, mainly for MPEG-1/2 video",
            Container::MP3 => "MP3, audio-only",
        }
    }
}

static FORMATS: [&dyn Format; 10] = [
    &Container::Ogg,
    &Container::Avi,
    &Container::Matroska,
    &Container::WebM,
    &Container::Flv,
    &Container::QuickTime,
    &Container::MP4,
    &Container::MpegTs,
    &Container::MP3,
    &SegmentFormat,
];

pub fn format_list() -> &'static [&'static dyn Format] {
    &FORMATS
}

pub fn format_names() -> Vec<&'static str> {
    FORMATS.iter().map(|f| f.name()).collect()
}

pub fn find_format(name: &str) -> Option<&'static dyn Format> {
    FORMATS.iter().copied().find(|f| f.name() == name)
}

/// Resolves the request's own `format` selector through the catalog and
/// builds that format's parameters.
pub fn parameters_for(request: &FormatRequest) -> Result<Vec<String>, FormatError> {
    let name = request.format().unwrap_or_default();
    match find_format(name) {
        Some(format) => format.parameters(request),
        None => Err(FormatError::UnsupportedFormat(String::from(name))),
    }
}
