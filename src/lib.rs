//! NutriX Client
//!
//! Streaming analysis client for the NutriX meal-photo nutrition analyzer.
//!
//! This crate provides the core implementation for the `nutrix` CLI tool:
//! an incremental consumer for the server's analysis event stream, the
//! display-state fold behind the live transcript and macro chart, and the
//! HTTP plumbing for uploads and PDF report requests.
//!
//! The interesting parts live in [`stream`] (record reassembly + event
//! decoding) and [`render`] (state fold + sanitized highlighting);
//! [`session`] ties them to a blocking reader.

pub mod api;
pub mod commands;
pub mod output;
pub mod render;
pub mod session;
pub mod stream;
pub mod utils;
