//! Tests for the experiment registry and the comparison pipeline.
mod random_network_pipeline;
