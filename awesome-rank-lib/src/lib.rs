#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for awesome-rank
//!
//! This library consolidates all functionality for the awesome-rank tool, which reads an
//! "awesome list" hosted on GitHub, collects popularity and health facts about every repository
//! the list links to, and ranks those repositories against each other.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and report dispatch
//! - [`facts`]: Index parsing and metadata collection from the hosting API
//! - [`ranking`]: Decile-based composite scoring
//! - [`pipeline`]: The end-to-end discovery, collection and ranking run
//! - [`reports`]: Console and JSON renderings of the ranked entries

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

mod error;

pub mod commands;
pub mod facts;
pub mod pipeline;
pub mod ranking;
pub mod reports;

pub use crate::commands::{Host, run};
pub use crate::error::Error;
