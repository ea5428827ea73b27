pub mod side_effects;

pub use side_effects::{Clipboard, ClipboardError, FileSaver};
