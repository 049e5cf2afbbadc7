mod label;
mod rename;

pub use label::*;
pub use rename::*;
