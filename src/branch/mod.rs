//! Branch context of an analysis run
//!
//! Resolution of the branch/pull-request configuration, validation of the
//! branch settings and the branch identity derived from them.

mod config;
mod entity;
mod resolve;
mod validate;

pub use config::BranchConfiguration;
pub use entity::Branch;
pub use resolve::resolve;
pub use validate::{MAX_BRANCH_NAME_LENGTH, validate};
