//! Board core - list membership, hand-off and tooltip lifecycle
//!
//! - `OverlayItem` - one transient tooltip
//! - `ListEntry` - one project inside a list
//! - `CategoryList` - the ordered entries of one category
//! - `Coordinator` - wires the two lists together

pub mod coordinator;
pub mod entry;
pub mod list;
pub mod overlay;

pub use coordinator::Coordinator;
