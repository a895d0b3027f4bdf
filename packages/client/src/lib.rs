pub mod error;
pub mod format;
pub mod sell;
pub mod transactions;
