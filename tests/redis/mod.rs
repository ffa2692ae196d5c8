//! Store adapter tests against a live Redis at `127.0.0.1:6379`.
//!
//! Compiled only with the `redis-test` feature.

mod limiter_store;
