//! # walrus-rt-core
//!
//! Safe Rust implementations of the Walrus runtime I/O primitives.
//!
//! The Walrus compiler emits native code that calls five runtime symbols:
//! four "print a value" operations and one "read an integer" operation.
//! This crate holds the pure halves of those operations: renderers that
//! produce the exact output bytes, and a scanner that consumes one decimal
//! integer token from an arbitrary byte source. No `unsafe` code is
//! permitted at the crate level; the fd-facing `extern "C"` boundary lives
//! in `walrus-rt-abi`.

#![deny(unsafe_code)]

pub mod render;
pub mod scan;
