//! Action vocabulary for the task-list reducer.

use super::{Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A requested transition of the task list.
///
/// Actions arriving from outside the crate as `{"type": ..., "payload": ...}`
/// envelopes decode leniently: an unknown or absent `type`, or a payload of
/// the wrong shape, becomes [`TaskAction::Unrecognized`], which the reducer
/// treats as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ActionEnvelope", into = "ActionEnvelope")]
pub enum TaskAction {
    /// Append a task to the end of the list.
    Add(Task),
    /// Remove the task with the given identifier.
    Delete(TaskId),
    /// Invert the completion flag of the task with the given identifier.
    Toggle(TaskId),
    /// Any other action shape.
    Unrecognized,
}

impl TaskAction {
    /// Wire name of the `add` action.
    pub const ADD: &'static str = "add";
    /// Wire name of the `delete` action.
    pub const DELETE: &'static str = "delete";
    /// Wire name of the `toggle` action.
    pub const TOGGLE: &'static str = "toggle";

    /// Decodes an action from its JSON envelope.
    ///
    /// Input that is not valid JSON decodes to [`TaskAction::Unrecognized`].
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or(Self::Unrecognized)
    }

    /// Returns the wire name of the action, if it has one.
    #[must_use]
    pub const fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Add(_) => Some(Self::ADD),
            Self::Delete(_) => Some(Self::DELETE),
            Self::Toggle(_) => Some(Self::TOGGLE),
            Self::Unrecognized => None,
        }
    }
}

/// Untyped `{"type", "payload"}` envelope used on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Action discriminator.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Action payload: a task for `add`, an identifier otherwise.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl From<ActionEnvelope> for TaskAction {
    fn from(envelope: ActionEnvelope) -> Self {
        let ActionEnvelope { kind, payload } = envelope;
        match kind.as_deref() {
            Some(Self::ADD) => serde_json::from_value(payload).map_or(Self::Unrecognized, Self::Add),
            Some(Self::DELETE) => {
                serde_json::from_value(payload).map_or(Self::Unrecognized, Self::Delete)
            }
            Some(Self::TOGGLE) => {
                serde_json::from_value(payload).map_or(Self::Unrecognized, Self::Toggle)
            }
            _ => Self::Unrecognized,
        }
    }
}

impl From<TaskAction> for ActionEnvelope {
    fn from(action: TaskAction) -> Self {
        let kind = action.kind().map(str::to_owned);
        let payload = match action {
            TaskAction::Add(task) => serde_json::to_value(task).unwrap_or_default(),
            TaskAction::Delete(id) | TaskAction::Toggle(id) => Value::from(id.value()),
            TaskAction::Unrecognized => Value::Null,
        };
        Self { kind, payload }
    }
}
