//! Shared test utilities

pub mod fixtures;
pub mod mock_loader;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_loader::MockInventoryLoader;
