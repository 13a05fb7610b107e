pub mod artifact;
pub mod dependency;
pub mod facet;
pub mod kind;
pub mod label;
pub mod target;

pub use artifact::*;
pub use dependency::*;
pub use facet::*;
pub use kind::*;
pub use label::*;
pub use target::*;
