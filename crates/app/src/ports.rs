//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the command core and the outside world.
//! Commands only hold a reference to a port implementation and trigger its
//! operations; they never look at how the device works.

pub mod device;

pub use device::Device;
