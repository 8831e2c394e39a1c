//! Concrete version source implementations

mod mojang;
mod vexyhost;

pub use mojang::MojangSource;
pub use vexyhost::VexyhostSource;
