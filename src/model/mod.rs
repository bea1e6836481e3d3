//! Model layer - plain data shared by the board and the UI
//!
//! - `Category` - Active or Finished
//! - `ProjectId` / `ProjectSeed` - project identity and initial content
//! - `ModalStack` - dialog overlay management

pub mod category;
pub mod modal;
pub mod project;

// Re-export commonly used types
pub use category::Category;
pub use project::{load_seeds, sample_seeds, ProjectId, ProjectSeed};
