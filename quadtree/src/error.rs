use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("universe width/height must be finite and non-negative (width: {width}, height: {height})")]
    InvalidUniverseDims { width: f64, height: f64 },
    #[error("query radius scale must be finite and non-negative (scale: {scale})")]
    InvalidRadiusScale { scale: f64 },
    #[error("quadrant must be in 1..=4 (quadrant: {quadrant})")]
    InvalidQuadrant { quadrant: u8 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

pub fn validate_universe_dims(width: f64, height: f64) -> QuadtreeResult<()> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(QuadtreeError::InvalidUniverseDims { width, height });
    }
    Ok(())
}

pub fn validate_radius_scale(scale: f64) -> QuadtreeResult<()> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(QuadtreeError::InvalidRadiusScale { scale });
    }
    Ok(())
}
