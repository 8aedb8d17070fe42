// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only commit access; cg never writes to the repository.

mod repo;

pub use repo::{get_commit_message, get_commit_range, Repository};
