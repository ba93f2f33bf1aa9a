mod dispatcher;
pub mod full;
pub mod partial;
pub mod peak;

pub use dispatcher::correlate_with;
pub use full::correlate;
pub use partial::partial_correlate;
