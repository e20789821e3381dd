//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod console;
pub mod link;

pub use console::{console_task, BoardConsole};
pub use link::{link_rx_task, link_tx_task};
