//! Error types for appendage simulation

/// Errors raised by chain, curve and configuration contracts
#[derive(Debug, thiserror::Error)]
pub enum AppendageError {
    #[error("Spine has {len} points, at least {required} are required")]
    SpineTooShort { len: usize, required: usize },

    #[error("Attachment fraction {0} is outside [0, 1]")]
    InvalidAttachment(f32),

    #[error("Tail used before being connected to a spine")]
    NotConnected,

    #[error("Anchor {index} out of range, tail has {anchors}")]
    AnchorOutOfRange { index: usize, anchors: usize },

    #[error("Curve needs at least 2 control points, got {points}")]
    DegenerateCurve { points: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppendageError>;
