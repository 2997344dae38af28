//! Configuration loader and schema types.
//!
//! Settings describe where the shared app-group state lives, how the widget
//! timeline is shaped and which deep links the extensions emit.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
