pub mod builtin;
pub mod set;

pub use builtin::BUILTIN_IGNORE;
pub use set::{IgnoreSet, MergeOutcome};
