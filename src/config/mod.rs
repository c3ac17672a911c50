pub mod paths;
pub mod persistence;
pub mod schema;

pub use paths::*;
pub use persistence::*;
pub use schema::*;

fn default_many_process_threshold() -> usize {
    190
}

fn default_baseline_release() -> u32 {
    10
}

fn default_user_file() -> String {
    MYIGNORE_FILENAME.to_string()
}
