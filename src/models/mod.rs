//! Data models on both sides of the conversion.
//!
//! Source side: the serialized design-document tree (`node` and the
//! attribute records it is built from). Target side: page-builder elements,
//! their settings and the page document. `messages` covers the UI/plugin
//! boundary.

pub mod keyword;

pub mod colors;
pub mod common;
pub mod effects;
pub mod layout;
pub mod mixed;
pub mod node;
pub mod paint;
pub mod text;

pub mod element;
pub mod messages;
pub mod page;
pub mod settings;
