//! HTTP wire contract shared by server and client.

mod messages;

pub use messages::*;
