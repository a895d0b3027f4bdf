pub mod answer;
pub mod decimals;
pub mod governance;
pub mod testing;
