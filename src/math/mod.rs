//! Mathematical utilities for the jump model

/// Triangle areas and point containment
pub mod geometry;
