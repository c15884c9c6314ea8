//! Reusable UI components for the coinlens terminal interface

pub mod charts;
pub mod modals;
pub mod tables;
