pub mod commands;
pub mod dto;
pub mod error;
mod ids;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
