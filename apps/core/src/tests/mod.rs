//! Test Module
//!
//! Cross-module test suite for the PromptSmith core.
//!
//! ## Test Categories
//! - `craft_tests`: End-to-end classification and ranking scenarios
//! - `remote_tests`: Remote generation and local fallback behavior
