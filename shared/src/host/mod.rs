pub mod capabilities;
pub mod host_adapter;
pub mod transport;
