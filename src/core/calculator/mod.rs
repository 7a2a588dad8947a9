pub mod aggregate;
pub mod classify;
pub mod range;
pub mod summary;

pub use classify::WeekendPolicy;
