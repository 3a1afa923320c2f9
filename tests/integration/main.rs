//! Integration tests for the newyear CLI


mod ask_test;
mod cli_test;
mod interrupt_test;
