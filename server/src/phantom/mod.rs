pub mod noop_phantom;
#[allow(clippy::module_inception)]
pub mod phantom;
pub mod phantom_entity;
pub mod phantom_impl;

mod relative_offsets;
