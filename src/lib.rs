//! Describe a UI in plain English, get a rendered mock-up.
//!
//! A prompt becomes a flat [`model::Document`] of typed nodes, either from a
//! remote generation service or the local rule-based [`generator`]. The
//! document renders as an editable preview, static HTML, or a JSX component.

pub mod backend;
pub mod config;
pub mod editor;
pub mod generator;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod remote;
pub mod render;
pub mod server;
