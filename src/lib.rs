pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod summary;
pub mod workbook;
