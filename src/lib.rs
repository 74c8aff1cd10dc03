//! Tagsmith - build-time translation tooling for LVGL XML user interfaces.
//!
//! Turns a per-locale YAML catalog into an XML catalog plus lv_i18n C
//! tables, and annotates UI markup with translation tag attributes.
//!
//! ## Module Structure
//!
//! - `catalog`: catalog data model, YAML/XML loading, validation
//! - `cli`: command-line interface layer
//! - `config`: configuration file loading and parsing
//! - `emit`: XML and C source/header renderers
//! - `error`: typed errors for unreadable or malformed inputs
//! - `markup`: span-preserving translation tag migration
//! - `pipeline`: load -> validate -> emit orchestration
//! - `utils`: shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod markup;
pub mod pipeline;
pub mod utils;
