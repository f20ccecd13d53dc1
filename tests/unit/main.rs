//! Unit test suite entry point.

mod config_tests;
mod engine_tests;
mod roundtrip_props;
