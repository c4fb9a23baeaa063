//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against the simulated tag in `mock_hw`.  All tests run on the host
//! (x86_64) with no real hardware required.

mod display_tests;
mod main_loop_tests;
mod mock_hw;
mod presence_scenarios;
