pub mod client;
pub mod dto;
pub mod utils;

pub use client::AdserviceApi;
