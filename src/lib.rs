// src/lib.rs

//! Internal library for create-app – not published on crates.io

pub mod app_controller;
pub mod common;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{ScaffoldConfig, ScaffoldConfigBuilder},
    customize::rename_in_manifest,
    manager::PackageManager,
};
