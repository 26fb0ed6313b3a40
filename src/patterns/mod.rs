pub mod adapter;
pub mod decorator;
pub mod logger;
pub mod weather;
