use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
    #[error("badge color was never set")]
    ColorUnset,
    #[error("unknown color resource: {0}")]
    UnknownColorResource(u32),
    #[error("invalid font data")]
    InvalidFont,
}

pub type Result<T> = std::result::Result<T, BadgeError>;
