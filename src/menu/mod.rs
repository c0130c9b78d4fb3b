//! The interactive menu loop
//!
//! The menu is the program's only surface: it renders six numbered options,
//! reads one choice per iteration, and dispatches to the account held by
//! the session.

pub mod choice;
pub mod session;

pub use choice::MenuChoice;
pub use session::MenuSession;
