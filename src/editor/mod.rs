pub mod config;
pub mod exchanges;

pub use config::{ConfigEditor, EditorState};
pub use exchanges::{ExchangeEditor, RegistryError};
