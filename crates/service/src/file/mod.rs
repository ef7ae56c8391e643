//! File-backed store implementations.

pub mod asset_store;
