//! Integration tests for the serveconf options resolver

mod config_integration;
mod resolver_precedence;
mod test_utils;
