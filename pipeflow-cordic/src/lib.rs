//! Pipelined CORDIC engine: fixed-point rotation and vectoring cores with valid-ready interfaces.
//!
//! A core is a chain of `iterations + 1` registers. The preprocessor fills register 0, every CORDIC iteration fills
//! the next register, and the output stage compensates the gain and truncates the last register to the boundary width.
//! All arithmetic is integer shift-add on two's complement values of configured widths.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(deprecated_in_future)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::bare_urls)]

pub mod config;
pub mod constants;
pub mod cordic;
pub mod error;
pub mod fixed;
pub mod gain;
pub mod preprocess;
pub mod rotation;
pub mod stage;
pub mod types;
pub mod vectoring;

pub use config::*;
pub use constants::{ConstantTable, ATAN_TABLE_LEN, HEADROOM_BITS, PIPELINE_REGISTERS};
pub use cordic::*;
pub use error::*;
pub use gain::*;
pub use pipeflow::{Cycle, Ready, Valid};
pub use preprocess::*;
pub use rotation::*;
pub use stage::*;
pub use types::*;
pub use vectoring::*;
