//! Error types and error reporting for the parser.
//!
//! This module defines the diagnostics the parser records while it works:
//!
//! - Error structures carrying the offending token position
//! - Specific error variants for each grammar failure
//! - Error formatting and helpful suggestions

pub mod errors;
