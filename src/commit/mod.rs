// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message module.

mod message;

pub use message::CommitMessage;
