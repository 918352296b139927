//! Tests for authentication controller endpoints.
//!
//! This module contains integration tests for authentication-related HTTP endpoints,
//! including account registration, email/password login, logout functionality, and
//! authenticated user information retrieval.

mod login;
mod logout;
mod register;
mod user;
