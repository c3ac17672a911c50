pub mod store;
pub mod types;

pub use store::{read_session, write_session, SessionStore};
pub use types::{SaveOutcome, WriteOutcome};
