/*!
## Rust Menu Module

This Rust module is the interactive core of the tour: the topic table,
menu rendering, choice parsing and the dispatcher.

*/

/// Width of banners and rules.
pub const WIDTH: usize = 60;

mod choice;
mod error;
mod runtime;
mod topic;

pub mod render;

pub use choice::Choice;
pub use error::Error;
pub use runtime::Event;
pub use runtime::Runtime;
pub use topic::find;
pub use topic::max_id;
pub use topic::Topic;
pub use topic::EXIT;
pub use topic::TOPICS;
