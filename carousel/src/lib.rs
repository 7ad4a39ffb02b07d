//! Infinite-loop carousel controller for the campus site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It takes a
//! server-rendered strip of items, splices in a clone of the last item before
//! the first and a clone of the first after the last, and keeps an index state
//! machine in step with the viewport's scroll position so that prev/next wrap
//! around without a visible jump.
//!
//! All decisions live in [`engine::CarouselCore`], which has no browser
//! dependencies and is unit tested natively. `dom`, built only for `wasm32`,
//! is a thin layer that turns DOM events into engine calls and engine
//! [`engine::Action`]s into scroll and class updates.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::CarouselCore`]: navigation, settle, resize, placement |
//! | [`state`] | Index state and its named transitions |
//! | [`geometry`] | Centering math over a [`geometry::Layout`] |
//! | [`input`] | Intents, key mapping, swipe tracking |
//! | [`registry`] | Active-carousel registry for routing page-wide events |
//! | [`timers`] | Per-kind pending timer slots; replacing one cancels the old |
//! | [`config`] | Per-widget timing overrides from `data-carousel` |
//! | `dom` | Browser binding and wasm entry points (`wasm32` only) |
//! | [`consts`] | Role markers and default timings |

pub mod config;
pub mod consts;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod registry;
pub mod state;
pub mod timers;
