//! Application runtime for platter.
//!
//! Keeps the binary entrypoint minimal: terminal lifecycle lives in
//! [`terminal`], the event loop in [`runtime`].

mod runtime;
mod terminal;

pub use runtime::run;
