//! CLI command implementations.

mod check;
mod common;
mod generate;
mod list;
mod render;
mod trace;

pub use check::{CheckArgs, run_check};
pub use common::{GlobalArgs, ResourceArgs, Workspace};
pub use generate::{GenerateArgs, run_generate};
pub use list::{ListArgs, run_list};
pub use render::{RenderArgs, run_render};
pub use trace::{TraceArgs, run_trace};
