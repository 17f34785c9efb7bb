//! Tests for configuration types.
