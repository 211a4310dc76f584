//! Domain layer for DDD Audit
//!
//! Architecture: Domain Model - Pure audit entities independent of the file system
//! - Findings are value objects describing one flagged CSS declaration
//! - Reports aggregate findings per audited file, never across files
//! - Errors describe every fatal condition of an audit run

pub mod findings;

// Re-export main domain types for convenience
pub use findings::*;
