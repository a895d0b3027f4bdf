pub mod booster;
pub mod convex_strategy;
pub mod curve_pool;
pub mod swap_router;
pub mod token;
pub mod vault;
