// file: src/logging/mod.rs
// version: 1.0.0
// guid: 0a95c7e3-6d21-4f84-bc50-38e1a9d46f72

//! Logging infrastructure

pub mod logger;
