//! Core domain types
//!
//! These types mirror the JSON documents returned by the speech service.
//! They are deserialized leniently: fields the tools never read are left
//! out, and status values outside the documented set are preserved as
//! `Unknown` instead of failing the whole response.

pub mod audio;
pub mod corpus;
pub mod model;
pub mod recognition;
pub mod status;
pub mod word;
