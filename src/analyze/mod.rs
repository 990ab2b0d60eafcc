//! The five resolvers and the style-keyword deriver.
//!
//! Each resolver reads the shared [`RawStyleSignals`](crate::signals::RawStyleSignals)
//! bundle and produces one schema section. They are mutually independent:
//! none observes another's output, so their run order never affects the
//! result. Ambiguity is resolved by per-field fallbacks: a resolver
//! never fails, it degrades.

pub mod color;
pub mod component;
pub mod image;
pub mod layout;
pub mod summary;
pub mod typography;
