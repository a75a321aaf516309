//! Tests for the multivariate Gaussian sampler.
