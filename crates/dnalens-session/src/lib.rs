//! Session state for one run of the assistant: analysis history, the stored
//! API credential and the simulated chat.

pub mod chat;
pub mod credentials;
pub mod history;
pub mod session;

pub use chat::*;
pub use credentials::*;
pub use history::History;
pub use session::*;
