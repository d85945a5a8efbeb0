//! Compare the dependency versions a project declares against the versions its
//! Spring Boot release already manages.
//!
//! # Modules
//!
//! - [`manifest`]: pom.xml and JSON SBOM discovery, parsing, and Spring Boot detection
//! - [`reference`]: Spring Boot reference tables, fetched from the docs site and cached on disk
//! - [`reconcile`]: Matching declared packages and properties against a reference table
//! - [`check`]: End-to-end check runs producing a [`report::Report`]
//! - [`report`]: Text and JSON rendering
//! - [`config`]: Configuration file and defaults
//! - [`logging`]: tracing subscriber setup

pub mod check;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod reconcile;
pub mod reference;
pub mod report;
