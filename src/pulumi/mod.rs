pub mod cli;

pub use cli::{current_stack, select_stack, PulumiError};
