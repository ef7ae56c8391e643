//! Storage helpers for service layer
//!
//! JSON document read/write shared by file-backed stores.

pub mod json_file;
