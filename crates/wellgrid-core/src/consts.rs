/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Alpha values at or below this are treated as fully transparent on decode.
pub const ALPHA_TRANSPARENT_MAX: u8 = 0;

/// Neutral gray (8-bit 18) written into transparent pixels before gradient detection.
pub const DEFAULT_GRADIENT_TRANSPARENT_FILL: f32 = 18.0 / 255.0;

/// Gaussian blur sigma ahead of gradient circle voting (7x7 kernel equivalent).
pub const DEFAULT_GRADIENT_BLUR_SIGMA: f32 = 1.4;

/// Gaussian blur sigma ahead of contour thresholding (5x5 kernel equivalent).
pub const DEFAULT_CONTOUR_BLUR_SIGMA: f32 = 1.1;

/// Fixed inverted-binarization level for the contour strategy (8-bit 82).
pub const DEFAULT_CONTOUR_THRESHOLD: f32 = 82.0 / 255.0;

/// Side length of the elliptical structuring element used for opening/closing.
pub const DEFAULT_STRUCTURING_ELEMENT_SIZE: usize = 5;

/// Opening iterations (noise removal).
pub const DEFAULT_OPEN_ITERATIONS: usize = 1;

/// Closing iterations (ring gap filling).
pub const DEFAULT_CLOSE_ITERATIONS: usize = 2;

/// Smallest accepted contour area as a fraction of the image area.
pub const DEFAULT_MIN_AREA_FRACTION: f64 = 0.002;

/// Largest accepted contour area as a fraction of the image area.
pub const DEFAULT_MAX_AREA_FRACTION: f64 = 0.06;

/// Circularity (4*pi*area/perimeter^2) a contour must exceed.
pub const DEFAULT_MIN_CIRCULARITY: f64 = 0.55;

/// Smallest enclosing-circle radius (pixels) kept by the contour strategy.
pub const DEFAULT_CONTOUR_MIN_RADIUS: f64 = 20.0;

/// Per-axis center distance (pixels) under which two candidates are duplicates.
pub const DEFAULT_DEDUP_TOLERANCE: f64 = 6.0;

/// Pool grows from `expected` up to `expected * DEFAULT_POOL_GROWTH_FACTOR`.
pub const DEFAULT_POOL_GROWTH_FACTOR: usize = 3;

/// Number of k-means++ restarts per axis.
pub const DEFAULT_KMEANS_ATTEMPTS: usize = 16;

/// Iteration cap per k-means restart.
pub const DEFAULT_KMEANS_MAX_ITERATIONS: usize = 120;

/// Largest center shift (pixels) that still counts as converged.
pub const DEFAULT_KMEANS_EPSILON: f64 = 0.2;

/// Seed for the k-means restart RNG.
pub const DEFAULT_KMEANS_SEED: u64 = 42;

/// Lower bound (pixels) of the row band used during assignment.
pub const DEFAULT_ROW_BAND_MIN_PX: f64 = 28.0;

/// Row band as a fraction of the smallest spacing between row centers.
pub const DEFAULT_ROW_BAND_SPACING_FRACTION: f64 = 0.28;

/// Slot coordinates are compared after rounding to 1/100 pixel.
pub const SLOT_COORD_SCALE: f64 = 100.0;

/// Fallback grid horizontal span as fractions of the image width.
pub const DEFAULT_FALLBACK_X_SPAN: [f64; 2] = [0.11, 0.89];

/// Fallback grid vertical span as fractions of the image height.
pub const DEFAULT_FALLBACK_Y_SPAN: [f64; 2] = [0.18, 0.76];

/// Fallback radius as a fraction of the shorter image side.
pub const DEFAULT_FALLBACK_RADIUS_FRACTION: f64 = 0.06;

/// Timeout for fetching remote panel images.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
