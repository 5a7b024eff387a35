// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Offline ray-traced image renderer core.
//!
//! This crate turns a flattened per-frame scene description
//! ([`scene::RenderData`]) into a rendered RGBA8 framebuffer via
//! Whitted-style recursive ray tracing: object-space implicit-surface
//! intersection, Phong shading with shadows and texture mapping,
//! mirror reflection, stochastic supersampling, and an optional
//! post-process blur.
//!
//! # Key entry points
//!
//! - [`scene::assemble`] - build a [`scene::Scene`] from one frame's
//!   [`scene::RenderData`]
//! - [`scheduler::render`] - render an assembled scene to a framebuffer
//! - [`blur::apply_blur`] - the optional post-process pass
//! - [`config::RenderConfig`] - feature toggles and sample counts
//!
//! # Architecture
//!
//! Scene graph parsing and keyframe interpolation are the caller's
//! responsibility; this crate starts from the already-flattened
//! [`scene::RenderData`] for a single frame. [`scene::assemble`] loads
//! referenced textures into a [`texture::TextureCache`] and builds the
//! world-space primitive, light, and camera lists. [`scheduler::render`]
//! then dispatches one [`tracer::trace_ray`] call per sample per pixel,
//! optionally in parallel across [`rayon`]'s thread pool, using a
//! per-pixel-seeded RNG so output is reproducible regardless of thread
//! scheduling.

pub mod blur;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod light;
pub mod primitive;
pub mod ray;
pub mod scene;
pub mod scheduler;
pub mod shading;
pub mod solvers;
pub mod texture;
pub mod tracer;
