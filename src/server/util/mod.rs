//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks,
//! currently lexical validation helpers shared by request payload validators.

pub mod validate;
