#![forbid(unsafe_code)]
//! Convert Robot Framework translations created at Crowdin into Python code
//! usable with Robot Framework's language configuration.
//!
//! Each input is a YAML export describing one natural language's translated
//! headers, settings, BDD prefixes, and boolean words. The output is one
//! Python module with a `robot.conf.Language` subclass per input language:
//!
//! ```python
//! robot --language Lang.py tests.robot
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langgen::convert_files;
//!
//! convert_files(["Finnish.yml", "German.yml"], "languages.py")?;
//! # Ok::<(), langgen::Error>(())
//! ```
//!
//! The export schema is fixed: the canonical setting, header, and BDD
//! prefix names are enumerated in [`schema`], and every key is validated at
//! load time. A missing canonical key fails the whole batch before any
//! output is written.

pub mod converter;
pub mod document;
pub mod error;
pub mod render;
pub mod schema;

pub use converter::{Converter, convert_files};
pub use document::{LanguageDef, derive_class_name};
pub use error::Error;
pub use render::PREAMBLE;
