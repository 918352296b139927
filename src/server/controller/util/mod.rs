//! Utility functions for controller request handling.
//!
//! This module provides reusable helper functions used across controllers,
//! currently session-to-account resolution for protected endpoints.

pub mod principal;
