//! Subscription registry: event kind → ordered handler list.
//!
//! Reactions to [`AppEvent`]s are registered here instead of being
//! hard-wired into one delegate object. Handlers receive the context they
//! act on and report whether the application should terminate.

use std::collections::HashMap;

use tracing::debug;

use super::types::AppEvent;

/// Outcome of running handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Terminate,
}

impl Flow {
    /// `Terminate` wins over `Continue`.
    pub fn merge(self, other: Flow) -> Flow {
        if self == Flow::Terminate || other == Flow::Terminate {
            Flow::Terminate
        } else {
            Flow::Continue
        }
    }
}

/// A reaction to an event.
pub type Handler<C> = Box<dyn FnMut(&mut C) -> Flow>;

/// Maps each event kind to the handlers subscribed to it.
pub struct Subscriptions<C> {
    handlers: HashMap<AppEvent, Vec<Handler<C>>>,
}

impl<C> Subscriptions<C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Subscribe `handler` to `event`. Handlers run in subscription order.
    pub fn on<F>(&mut self, event: AppEvent, handler: F) -> &mut Self
    where
        F: FnMut(&mut C) -> Flow + 'static,
    {
        self.handlers.entry(event).or_default().push(Box::new(handler));
        self
    }

    /// Number of handlers subscribed to `event`.
    pub fn handler_count(&self, event: AppEvent) -> usize {
        self.handlers.get(&event).map_or(0, Vec::len)
    }

    /// Run every handler subscribed to `event`.
    pub fn dispatch(&mut self, event: AppEvent, ctx: &mut C) -> Flow {
        let Some(handlers) = self.handlers.get_mut(&event) else {
            debug!(?event, "no subscribers");
            return Flow::Continue;
        };
        debug!(?event, handlers = handlers.len(), "{}", event.description());
        handlers
            .iter_mut()
            .fold(Flow::Continue, |flow, handler| flow.merge(handler(ctx)))
    }

    /// Dispatch a batch of events in order. Events after one that requests
    /// termination are dropped.
    pub fn dispatch_all<I>(&mut self, events: I, ctx: &mut C) -> Flow
    where
        I: IntoIterator<Item = AppEvent>,
    {
        for event in events {
            if self.dispatch(event, ctx) == Flow::Terminate {
                return Flow::Terminate;
            }
        }
        Flow::Continue
    }
}

impl<C> Default for Subscriptions<C> {
    fn default() -> Self {
        Self::new()
    }
}
