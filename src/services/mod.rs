pub mod housekeeping;
pub mod inspect;
pub mod plot;
pub mod scrape;
