//! DOM rendering module
//!
//! A pure view-model layer (`frame`) plus the browser-only element
//! plumbing (`dom`). The sim never sees any of this.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
pub use frame::{RenderFrame, SegmentView, heading_degrees};
