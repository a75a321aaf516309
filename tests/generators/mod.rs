//! Tests for the random graph sources.
