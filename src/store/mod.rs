mod score_files;

pub use score_files::{ScoreStore, comma_fields, parse_scores, sanitize_name};
