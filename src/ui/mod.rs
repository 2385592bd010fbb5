//! Terminal-facing rendering: themes, box geometry, and frame buffering.
//!
//! Everything here is pure string building. Writing to the terminal happens
//! behind the `app::Console` seam so rendering can be tested without a TTY.

pub mod boxes;
pub mod frame;
pub mod settings;
pub mod theme;
