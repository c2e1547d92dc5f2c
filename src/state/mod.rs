//! Application state module

mod forms;
mod models;
mod query;
mod view_state;

pub use forms::*;
pub use models::*;
pub use query::*;
pub use view_state::*;
