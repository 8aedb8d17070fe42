// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command-line interface module.

pub mod args;
pub mod dispatch;

pub use args::{Cli, Commands, OutputFormat};
pub use dispatch::run;
