//! Data Transfer Objects sent to the speech service

pub mod model;
pub mod recognize;
pub mod word;
