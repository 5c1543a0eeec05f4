pub mod completions;
pub mod flatten;
