//! Paper Explorer - research-paper metadata cleaning, summaries and charts
//!
//! Data flows one way: load -> clean -> filter -> aggregate -> present.

pub mod charts;
pub mod data;
pub mod gui;
pub mod report;
pub mod stats;
