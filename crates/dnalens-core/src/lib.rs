pub mod analysis;
pub mod fallback;
pub mod layout;
pub mod operations;
pub mod presets;
pub mod validate;

pub use analysis::*;
pub use operations::SequenceStats;
pub use validate::*;
