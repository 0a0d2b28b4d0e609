//! Client-side enhancements for a static blog.
//!
//! This crate is compiled to WebAssembly and loaded by otherwise static,
//! server-rendered pages. It owns the blog's two progressive enhancements:
//! a light/dark theme toggle persisted to `localStorage`, and a deferred
//! loader for the third-party comment widget that only fetches the embed
//! when the reader asks for it (click or deep link). Neither behavior is
//! load-bearing; a page without the WASM module, or without the expected
//! elements, renders fine.
//!
//! The repository also carries the blog's markdown content fixtures under
//! `content/blog/`; those are consumed by the page layer, not by this crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Comment widget state machine (pure, natively tested) |
//! | [`dom`] | Browser wiring: element lookup, listeners, [`widget::Action`] execution |
//! | [`net`] | Comment-count fetch from the comment service |
//! | [`theme`] | Light/dark theme preference and toggle |
//! | [`consts`] | Shared element ids, storage keys, and tuning constants |

use wasm_bindgen::prelude::wasm_bindgen;

pub mod consts;
pub mod dom;
pub mod net;
pub mod theme;
pub mod widget;

/// Module entry point; wires both page behaviors once the WASM loads.
#[wasm_bindgen(start)]
pub fn start() {
    dom::boot();
}
