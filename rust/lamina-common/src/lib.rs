//! Core definitions (error taxonomy and common helpers), relied upon by all lamina-* crates.
#![feature(error_generic_member_access)]

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
