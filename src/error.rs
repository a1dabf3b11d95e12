use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WavetableError {
    #[error("invalid channel count: the WAV file declares zero channels")]
    NoChannels,

    #[error("cubic interpolation needs at least 4 input samples, got {found}")]
    TooFewSamples { found: usize },

    #[error("table length must be at least 2, got {0}")]
    InvalidTableLength(usize),

    #[error("array name '{0}' is not a valid C identifier")]
    InvalidArrayName(String),

    #[error("unknown interpolation '{0}' (expected catmull-rom or spline)")]
    UnknownInterpolation(String),
}
