//! Mutation Events
//!
//! Topic naming and the broker that fans mutation payloads out to
//! subscribers.

mod broker;
mod topics;

pub use broker::{BroadcastBroker, Broker, EventMessage};
pub use topics::{topics_for, TopicAction, TopicScope};
