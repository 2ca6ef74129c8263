//! This module has all the types and functions associated with polylines, their shape
//! classification and intersection queries.
pub mod internal;
mod pline;
mod pline_types;
mod shape_type;

pub use pline::*;
pub use pline_types::*;
pub use shape_type::*;
