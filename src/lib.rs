//! rastty (workspace facade crate).
//!
//! This package keeps the `rastty::{core,input,obj,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use rastty_core as core;
pub use rastty_input as input;
pub use rastty_obj as obj;
pub use rastty_term as term;
pub use rastty_types as types;
