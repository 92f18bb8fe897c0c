//! Cloud technology blog post generator.
//!
//! A topic goes to a hosted language model, whose reply is cleaned up and
//! checked into a [`models::BlogPost`]; a hosted image model can then
//! illustrate it.

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod models;
pub mod prompts;
pub mod sanitize;
pub mod web;
