pub mod detection;
pub mod pipeline;
pub mod quality;
pub mod shared;
