//! Browser automation drivers for Answerbox.

pub mod browser;
