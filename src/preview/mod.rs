//! Transcript preview for the fuzzy finder's side pane

pub mod render;

pub use render::{
    ASSISTANT_MARKER, TARGET_MARKER, USER_MARKER, render_preview, render_preview_with_home,
};
