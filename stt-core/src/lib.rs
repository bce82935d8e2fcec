//! STT Core
//!
//! Core types and abstractions for the speech-to-text customization tools.
//!
//! This crate contains:
//! - Domain types: remote resources (custom models, corpora, audio, words)
//!   and their status values
//! - DTOs: request bodies sent to the service
//! - Polling: waiting on a remote resource until it leaves a processing state

pub mod domain;
pub mod dto;
pub mod poll;
