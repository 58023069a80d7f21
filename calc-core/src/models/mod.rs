mod calculator;
mod category;
mod search_result;

pub use calculator::Calculator;
pub use category::CalculatorCategory;
pub use search_result::SearchResult;
