//! Test modules for coinlens
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `api_test` - API client, envelopes and wire types
//!   - `app_test` - Slot bookkeeping, load states and keyboard routing
//!   - `news_test` - News adapters, favorites and sentiment filter
//!   - `dashboard_test` - Formatting helpers and dashboard slots
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `workflow_test` - Approval workflow end to end against fixtures
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run specific test module
//! cargo test workflow_test
//! ```



#[cfg(test)]
pub mod news_test;

#[cfg(test)]
pub mod dashboard_test;

#[cfg(test)]
pub mod workflow_test;
