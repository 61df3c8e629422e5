//! Procedural starfield engine for the star-myth explorer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. From a
//! text seed it generates a deterministic field of stars, joins near
//! neighbours into constellation lines, and tiles the result across an
//! infinite pannable, zoomable sky. Clicking a star selects it and asks the
//! myth service for its story. The host page only forwards DOM events and
//! shows the text the engine hands back.
//!
//! Everything except [`engine::Engine`], [`render`] and the browser bindings
//! is plain Rust and runs under `cargo test` without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`rng`] | Seeded sine-hash generator |
//! | [`star`] | Star type and field generation |
//! | [`links`] | Constellation lines between nearest neighbours |
//! | [`camera`] | Pan/zoom view transform, tile range and wrapping |
//! | [`tiles`] | Frame planning: which tiles, lines and stars to draw |
//! | [`render`] | Canvas 2D execution of planned frames |
//! | [`hit`] | Star picking under a screen point |
//! | [`input`] | Pointer and wheel event types, gesture state |
//! | [`myth`] | Myth requests, responses and staleness tracking |
//! | [`seed`] | Seed validation |
//! | [`config`] | Tunable generation and interaction settings |
//! | [`consts`] | Shared constants (zoom step, colours, defaults) |

#[cfg(feature = "browser")]
pub mod bindings;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod links;
pub mod myth;
pub mod render;
pub mod rng;
pub mod seed;
pub mod star;
pub mod tiles;
