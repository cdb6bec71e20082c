//! Event admission filtering.

use std::collections::HashSet;

use authrelay_events::{AdminEvent, EventKind, OperationKind, ResourceKind, UserEvent};

use crate::config::FilterConfig;

/// Decides which events are forwarded to the configured targets.
///
/// Admission is include-list based: a kind missing from the corresponding
/// enabled set is dropped, and an empty set admits nothing.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    enabled_events: HashSet<EventKind>,
    enabled_operations: HashSet<OperationKind>,
    enabled_resources: HashSet<ResourceKind>,
}

impl EventFilter {
    /// Creates a filter from its configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            enabled_events: config.enabled_event_kinds,
            enabled_operations: config.enabled_operation_kinds,
            enabled_resources: config.enabled_resource_kinds,
        }
    }

    /// Checks whether a user event should be forwarded.
    pub fn allows_user(&self, event: &UserEvent) -> bool {
        self.enabled_events.contains(&event.kind)
    }

    /// Checks whether an admin event should be forwarded.
    ///
    /// Both the operation and the touched resource must be enabled.
    pub fn allows_admin(&self, event: &AdminEvent) -> bool {
        self.enabled_operations.contains(&event.operation)
            && self.enabled_resources.contains(&event.resource)
    }
}
