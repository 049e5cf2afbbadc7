//! Disambiguates bus stops that share a name by labelling each one with a
//! direction, either from its position relative to its namesakes or from the
//! route relations that serve it.

pub mod direction;
pub mod pipeline;
pub mod prelude;
pub mod relations;
pub mod rename;
pub mod repository;
pub mod shared;
pub mod stops;
