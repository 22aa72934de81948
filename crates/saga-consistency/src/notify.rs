//! Pending notification buffer.
//!
//! Handlers stage side-channel notifications ("a section changed", "a hint
//! needs resolving") here during dispatch; the turn runner drains the buffer
//! after the turn completes and hands the batch to the transport
//! collaborator.
//!
//! This is an explicit owned buffer, instantiated per session or per turn
//! and passed by reference to handlers — lifetime is visible at the call
//! site, and independent buffers cannot leak events into each other.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use saga_core::changes::SemanticPropagationHint;

/// A side-channel notification staged during dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    /// A content section was written.
    #[serde(rename = "section_changed")]
    SectionChanged {
        /// Scope containing the section.
        scope: String,
        /// Section that changed.
        #[serde(rename = "sectionId")]
        section_id: String,
    },

    /// A semantic hint awaits resolution by the generative service.
    #[serde(rename = "semantic_hint")]
    SemanticHint {
        /// Scope the hint applies to.
        scope: String,
        /// The hint itself.
        hint: SemanticPropagationHint,
    },
}

/// Append/drain buffer for pending notifications.
#[derive(Debug, Default)]
pub struct NotificationBuffer {
    pending: Mutex<Vec<Notification>>,
}

impl NotificationBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a notification for delivery after the turn.
    pub fn append(&self, notification: Notification) {
        self.pending.lock().push(notification);
    }

    /// Drain all staged notifications, in append order.
    #[must_use]
    pub fn drain_all(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.lock())
    }

    /// Number of staged notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn section_changed(section_id: &str) -> Notification {
        Notification::SectionChanged {
            scope: "scene-1".into(),
            section_id: section_id.into(),
        }
    }

    #[test]
    fn starts_empty() {
        let buffer = NotificationBuffer::new();
        assert!(buffer.is_empty());
        assert!(buffer.drain_all().is_empty());
    }

    #[test]
    fn drain_returns_in_append_order() {
        let buffer = NotificationBuffer::new();
        buffer.append(section_changed("setup"));
        buffer.append(section_changed("developments"));

        let drained = buffer.drain_all();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], section_changed("setup"));
        assert_eq!(drained[1], section_changed("developments"));
    }

    #[test]
    fn drain_empties_the_buffer() {
        let buffer = NotificationBuffer::new();
        buffer.append(section_changed("setup"));
        let _ = buffer.drain_all();
        assert!(buffer.is_empty());
        assert!(buffer.drain_all().is_empty());
    }

    #[test]
    fn independent_buffers_do_not_leak() {
        let one = NotificationBuffer::new();
        let two = NotificationBuffer::new();
        one.append(section_changed("setup"));
        assert!(two.is_empty());
    }

    #[test]
    fn notification_serde_tags() {
        let value = serde_json::to_value(section_changed("setup")).unwrap();
        assert_eq!(value["type"], "section_changed");
        assert_eq!(value["sectionId"], "setup");
    }
}
