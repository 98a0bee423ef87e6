//! Free-transform pinboard interaction engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a pinboard surface: translating raw pointer events into
//! board mutations, maintaining the pan viewport over the fixed-extent board,
//! hit-testing items at their current transformed extent, and projecting
//! model state to on-screen placements. The host layer is responsible only
//! for wiring DOM events to the engine, rendering the resulting placements,
//! and persisting commits via the [`persist`] boundary.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event-driven [`engine::EngineCore`] and host [`engine::Action`]s |
//! | [`item`] | Pinned-item model and the in-memory board store |
//! | [`camera`] | Pan viewport and board/screen coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`geom`] | Pure gesture math: angles, rotation deltas, corner-drag scaling |
//! | [`hit`] | Hit-testing against items and their handles |
//! | [`render`] | Projection of board state to screen placements |
//! | [`persist`] | Board load/save boundary |
//! | [`ingest`] | Image ingestion contract (cover-crop to the pin frame) |
//! | [`dom`] | Browser glue: document-level gesture capture as an RAII guard |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants (scale bounds, extents, handle sizes) |

pub mod camera;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod ingest;
pub mod input;
pub mod item;
pub mod persist;
pub mod render;
