pub type PlacegenResult<T> = Result<T, PlacegenError>;

#[derive(thiserror::Error, Debug)]
pub enum PlacegenError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("color error: {0}")]
    Color(String),

    #[error("raster error: {0}")]
    Raster(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacegenError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
