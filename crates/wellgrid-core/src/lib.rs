pub mod consts;
pub mod detection;
pub mod error;
pub mod filters;
pub mod frame;
pub mod grid;
pub mod io;
pub mod pipeline;
