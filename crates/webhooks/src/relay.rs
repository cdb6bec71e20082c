//! Relay composition - the hook surface a host wires its listener to.

use authrelay_events::{AdminEvent, UserEvent};

use crate::dispatch::WebhookDispatcher;
use crate::filter::EventFilter;

/// Filters incoming events and forwards the accepted ones.
///
/// Never returns an error: the relay's failure policy is strictly log and
/// continue, so a host can call it from its event-processing path without
/// any risk of destabilizing unrelated functionality.
pub struct EventRelay {
    filter: EventFilter,
    dispatcher: WebhookDispatcher,
}

impl EventRelay {
    /// Creates a relay from a filter and a dispatcher.
    pub fn new(filter: EventFilter, dispatcher: WebhookDispatcher) -> Self {
        Self { filter, dispatcher }
    }

    /// Handles a user event: admits it through the filter, then delivers.
    pub async fn on_user_event(&self, event: &UserEvent) {
        if !self.filter.allows_user(event) {
            tracing::debug!(kind = %event.kind, "user event not enabled, skipping");
            return;
        }
        self.dispatcher.dispatch_user(event).await;
    }

    /// Handles an admin event: admits it through the filter, then delivers.
    pub async fn on_admin_event(&self, event: &AdminEvent) {
        if !self.filter.allows_admin(event) {
            tracing::debug!(
                operation = %event.operation,
                resource = %event.resource,
                "admin event not enabled, skipping"
            );
            return;
        }
        self.dispatcher.dispatch_admin(event).await;
    }

    /// Returns the filter.
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Returns the dispatcher.
    pub fn dispatcher(&self) -> &WebhookDispatcher {
        &self.dispatcher
    }
}
