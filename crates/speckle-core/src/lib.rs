pub mod config;
pub mod consts;
pub mod correlate;
pub mod error;
pub mod fft;
pub mod io;
pub mod speckle;
pub mod types;
