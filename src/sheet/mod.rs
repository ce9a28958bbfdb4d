pub mod data;
pub mod export;
pub mod filter;
pub mod models;
