pub mod phantom_registry;
pub mod phantom_tracker;
