//! Locpull - translation puller for native string resources
//!
//! Locpull is a CLI tool and library that exports a translation catalog from
//! a remote localization service and re-renders it into platform-native
//! string-resource files: Apple `.strings`/`.stringsdict`, Android
//! `strings.xml`, and a generated source-code string table. It honors
//! per-context grouping, cross-context placeholders, plural forms, language
//! aliasing, and templated output paths, and only ever overwrites files that
//! already exist.
//!
//! ## Module Structure
//!
//! - `catalog`: Translation records, plural forms, and context grouping
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `error`: Fatal error taxonomy for pull runs
//! - `paths`: Destination path templating and overrides
//! - `pipeline`: The fetch/render/write orchestration
//! - `placeholder`: Cross-context placeholder substitution
//! - `remote`: Remote service client and the `TranslationSource` trait
//! - `render`: The four output-format renderers
//! - `reporter`: Per-file progress reporting
//! - `sink`: Existence-checked file output

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod placeholder;
pub mod remote;
pub mod render;
pub mod reporter;
pub mod sink;
