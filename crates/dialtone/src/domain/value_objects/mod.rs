//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod call_status;
mod direction;
mod linked_reference;
mod medium;

pub use call_status::*;
pub use direction::*;
pub use linked_reference::*;
pub use medium::*;
