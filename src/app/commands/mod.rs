pub mod constants;
pub mod summaries;
