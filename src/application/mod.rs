// Application layer: text formats and the end-to-end solve use case

pub mod orchestrator;
pub mod text_format;

pub use orchestrator::solve_it;
pub use text_format::{parse_instance, parse_result, render_result};
