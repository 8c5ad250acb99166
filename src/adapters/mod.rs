//! UI adapters
//!
//! Thin bindings between UI events and the core. Rendering and clipboard
//! access are traits so the adapters run without a real front end.

mod checker;
mod generator;

pub use checker::{PasswordChecker, StrengthView};
pub use generator::{Clipboard, ClipboardError, GeneratorOption, GeneratorPanel, GeneratorView};
