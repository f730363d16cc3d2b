use serde_json::Value;

/// A provider notification that has passed signature verification.
///
/// There is no public constructor: the only way to obtain one is through the
/// webhook verifier, so an unverified body can never be handed around as a
/// parsed event.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    event_type: String,
    data: Value,
}

impl WebhookEvent {
    pub(crate) fn new(event_type: String, data: Value) -> Self {
        Self { event_type, data }
    }

    /// The provider's event type string, e.g. `charge.success`.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The event payload.
    pub fn data(&self) -> &Value {
        &self.data
    }
}
