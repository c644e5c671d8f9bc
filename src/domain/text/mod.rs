pub mod process;

pub use process::{process_input, ProcessTextOutput};
