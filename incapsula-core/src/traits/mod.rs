//! Trait definitions

mod resource;

pub use resource::Resource;
