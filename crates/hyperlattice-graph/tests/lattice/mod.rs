//! Integration test modules.

mod addressing_tests;
mod navigation_tests;
mod session_tests;
