//! Ticks service payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CallbackWorkflow;

/// Workflow registering a tick listener on an exchange/pair stream.
pub const REGISTER_LISTENER_WORKFLOW: &str = "RegisterTicksListenerWorkflow";
/// Workflow removing a tick listener.
pub const UNREGISTER_LISTENER_WORKFLOW: &str = "UnregisterTicksListenerWorkflow";

/// A workflow that receives ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerParams {
    /// Listener identity, used to unregister.
    pub id: Uuid,
    /// Workflow called with every tick.
    pub callback: CallbackWorkflow,
}

impl ListenerParams {
    /// Listener with a fresh ID.
    #[must_use]
    pub fn new(callback: CallbackWorkflow) -> Self {
        Self {
            id: Uuid::new_v4(),
            callback,
        }
    }
}

/// Parameters of [`REGISTER_LISTENER_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterListenerParams {
    /// Listener to register.
    pub listener: ListenerParams,
    /// Exchange name.
    pub exchange: String,
    /// Trading pair.
    pub pair: String,
}

/// Parameters of [`UNREGISTER_LISTENER_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregisterListenerParams {
    /// Listener to remove.
    pub listener_id: Uuid,
    /// Exchange name.
    pub exchange: String,
    /// Trading pair.
    pub pair: String,
}
