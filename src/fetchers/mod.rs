mod comp_page;

pub use comp_page::CompetitionFetcher;
