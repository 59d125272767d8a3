pub mod config;
pub mod fallback;
pub mod kmeans;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use config::{FallbackConfig, KMeansConfig, ResolverConfig, RowBandConfig};
pub use fallback::fallback_grid;
pub use normalize::{median_size_pct, normalize, normalize_all};
pub use resolver::{resolve, ResolvedGrid};
pub use types::{GridSpec, NormalizedSlot, Slot};
