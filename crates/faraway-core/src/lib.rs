//! # faraway-core
//!
//! Core library for the Faraway save analyzer.
//!
//! This crate provides:
//! - Save file location (explicit path or platform default)
//! - Save file loading into an immutable byte buffer
//! - The save layout (offset table and slot rotations) per feature
//! - Feature extraction into fixed-size slot arrays
//! - Table rendering with swappable marker styles

pub mod error;
pub mod extract;
pub mod layout;
pub mod locate;
pub mod render;
pub mod save;

pub use error::{Error, Result};
pub use extract::{FeatureArray, KEY_LEVELS, extract, keys_by_level, rotate_left};
pub use layout::{Feature, FeatureLayout, MIN_SAVE_LEN, Segment, View};
pub use locate::{PathEnv, Platform, SAVE_FILE_NAME, locate, resolve_default_path};
pub use render::{AnsiStyle, Marker, MarkerStyle, PlainStyle, Renderer};
pub use save::SaveBuffer;
