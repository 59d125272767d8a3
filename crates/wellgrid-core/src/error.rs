use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellgridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch {source_ref}: {reason}")]
    Fetch { source_ref: String, reason: String },

    #[error("Could not decode image: {0}")]
    DecodeFailure(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid grid {cols}x{rows}: both dimensions must be at least 1")]
    InvalidGridSpec { cols: usize, rows: usize },

    #[error("Not enough candidates for a {cols}x{rows} grid: found {found}, need {required}")]
    InsufficientCandidates {
        cols: usize,
        rows: usize,
        found: usize,
        required: usize,
    },

    #[error(
        "No consistent {cols}x{rows} grid among {candidates} candidates \
         (pool sizes {min_pool}..={max_pool} tried)"
    )]
    GridNotResolvable {
        cols: usize,
        rows: usize,
        candidates: usize,
        min_pool: usize,
        max_pool: usize,
    },
}

pub type Result<T> = std::result::Result<T, WellgridError>;
