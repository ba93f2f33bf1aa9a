pub mod config;
pub mod correlate;
pub mod synth;
