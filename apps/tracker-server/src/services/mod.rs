//! Domain services: user directory, exercise log and log queries.

mod exercise_log;
mod log_query;
mod user_directory;

#[cfg(test)]
pub(crate) mod testing;

pub use exercise_log::{ExerciseFields, ExerciseLog};
pub use log_query::{LogFilters, LogQueryEngine};
pub use user_directory::UserDirectory;
