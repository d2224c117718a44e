mod aggregate;
pub mod models;
mod normalize;
mod progress;
mod score;

pub use aggregate::GliderAggregate;
pub use models::*;
pub use normalize::{MIN_ENTRIES, normalize_competition};
pub use progress::ScrapeProgress;
pub use score::Score;
