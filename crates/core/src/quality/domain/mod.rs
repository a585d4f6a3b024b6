pub mod brightness;
pub mod classifier;
pub mod verdict;
pub mod verdict_debouncer;
