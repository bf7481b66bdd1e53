//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app` und der Binary gelesen werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{CONFIG_FILE_NAME, EXPORT_VARIABLE_NAME};
