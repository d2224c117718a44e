mod results_table;

pub use results_table::parse_results;
