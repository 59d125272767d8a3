pub mod image_io;
pub mod overlay;
pub mod source;

pub use image_io::{decode, load_panel, persist};
pub use overlay::draw_overlay;
pub use source::fetch_bytes;
