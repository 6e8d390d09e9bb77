//! Shared utility modules used across Quern components.

pub mod sliding_window;

pub use sliding_window::SlidingWindow;
