pub mod audio;
pub mod config;
pub mod convert;
pub mod error;
pub mod header;
pub mod normalize;
pub mod resample;
