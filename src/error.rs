use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum VizError {
    ParseError(ParseError),
    GridError(GridError),
    RenderError(RenderError),
    VideoError(VideoError),
    OperationError(String),
}

impl Error for VizError {}

impl From<ParseError> for VizError {
    fn from(e: ParseError) -> Self {
        Self::ParseError(e)
    }
}

impl From<GridError> for VizError {
    fn from(e: GridError) -> Self {
        Self::GridError(e)
    }
}

impl From<RenderError> for VizError {
    fn from(e: RenderError) -> Self {
        Self::RenderError(e)
    }
}

impl From<VideoError> for VizError {
    fn from(e: VideoError) -> Self {
        Self::VideoError(e)
    }
}

impl From<io::Error> for VizError {
    fn from(e: io::Error) -> Self {
        Self::OperationError(e.to_string())
    }
}

impl Display for VizError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::ParseError(e) => write!(f, "{e}"),
            Self::GridError(e) => write!(f, "{e}"),
            Self::RenderError(e) => write!(f, "{e}"),
            Self::VideoError(e) => write!(f, "{e}"),
            Self::OperationError(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    ReadError(String),
    TruncatedHeader(usize),
    EmptyBody,
    MissingField { line: usize, field: &'static str },
    InvalidNumber { line: usize, field: &'static str, value: String },
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::ReadError(s) => write!(f, "Read error: {s}"),
            Self::TruncatedHeader(n) => {
                write!(f, "Header ends after {n} line(s); the file is truncated")
            }
            Self::EmptyBody => write!(f, "No data rows after the header"),
            Self::MissingField { line, field } => {
                write!(f, "Missing field `{field}` at line {line}")
            }
            Self::InvalidNumber { line, field, value } => {
                write!(f, "Invalid number `{value}` for field `{field}` at line {line}")
            }
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        Self::ReadError(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GridError {
    NoValidSamples,
    ShapeMismatch((usize, usize), (usize, usize)),
    CoordinateMismatch,
}

impl Error for GridError {}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::NoValidSamples => write!(f, "No valid samples to build a grid from"),
            Self::ShapeMismatch((w0, h0), (w1, h1)) => {
                write!(f, "Grid shapes differ: {w0}x{h0} vs {w1}x{h1}")
            }
            Self::CoordinateMismatch => {
                write!(f, "Grids cover different longitude/latitude sets")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderError {
    Backend(String),
    Encode(String),
}

impl Error for RenderError {}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Backend(s) => write!(f, "Drawing error: {s}"),
            Self::Encode(s) => write!(f, "PNG encoding error: {s}"),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Encode(e.to_string())
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(e: png::EncodingError) -> Self {
        Self::Encode(e.to_string())
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for RenderError
where
    E: Error + Send + Sync,
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Backend(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoError {
    EncoderSpawn(String),
    EncoderExited(Option<i32>),
    WriteError(String),
    FrameSizeMismatch { expected: usize, actual: usize },
}

impl Error for VideoError {}

impl Display for VideoError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::EncoderSpawn(s) => {
                write!(f, "Could not start ffmpeg (is it installed?): {s}")
            }
            Self::EncoderExited(Some(code)) => {
                write!(f, "ffmpeg exited with status {code}")
            }
            Self::EncoderExited(None) => write!(f, "ffmpeg was killed by a signal"),
            Self::WriteError(s) => write!(f, "Error feeding frames to ffmpeg: {s}"),
            Self::FrameSizeMismatch { expected, actual } => {
                write!(f, "Frame holds {actual} byte(s), encoder expects {expected}")
            }
        }
    }
}

impl From<io::Error> for VideoError {
    fn from(e: io::Error) -> Self {
        Self::WriteError(e.to_string())
    }
}
