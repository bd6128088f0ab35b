//! Integration tests driving the public engine and JSON adapter

mod api_tests;
mod loan_tests;
