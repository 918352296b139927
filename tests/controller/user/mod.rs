//! Tests for user controller endpoints.
//!
//! This module contains integration tests for user-related HTTP endpoints,
//! including platform role retrieval for dashboard routing.

mod get_user_role;
