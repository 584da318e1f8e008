use std::{fmt, sync::Arc};

use tokio::sync::mpsc;

/// Capability for delivering messages of type `M` to whoever drives the unit tree
///
/// An address is cheap to clone and carries no state of its own beyond the
/// delivery rule. Composites never store addresses; they are rebuilt on every
/// render pass.
pub struct Address<M> {
    deliver: Arc<dyn Fn(M) + Send + Sync>,
}

impl<M: 'static> Address<M> {
    /// Create an address from an arbitrary delivery function
    pub fn new(deliver: impl Fn(M) + Send + Sync + 'static) -> Self {
        Self {
            deliver: Arc::new(deliver),
        }
    }

    /// Root address backed by the driver's message channel
    ///
    /// Messages sent after the receiving side is gone are dropped.
    pub fn from_sender(tx: mpsc::UnboundedSender<M>) -> Self
    where
        M: Send,
    {
        Self::new(move |msg| {
            if tx.send(msg).is_err() {
                tracing::debug!("message dropped: driver channel is closed");
            }
        })
    }

    /// Deliver a message
    pub fn send(&self, msg: M) {
        (self.deliver)(msg)
    }

    /// Build a forwarding address for a child
    ///
    /// Delivering `m` through the returned address is the same as delivering
    /// `tag(m)` through `self`.
    pub fn forward<C>(&self, tag: impl Fn(C) -> M + Send + Sync + 'static) -> Address<C>
    where
        C: 'static,
    {
        let parent = Arc::clone(&self.deliver);
        Address {
            deliver: Arc::new(move |msg| parent(tag(msg))),
        }
    }

    /// Bind `msg` to this address so a view element can emit it later
    pub fn trigger(&self, msg: M) -> Trigger
    where
        M: Clone + Send + Sync,
    {
        let address = self.clone();
        Trigger::new(move || address.send(msg.clone()))
    }
}

impl<M> Clone for Address<M> {
    fn clone(&self) -> Self {
        Self {
            deliver: Arc::clone(&self.deliver),
        }
    }
}

impl<M> fmt::Debug for Address<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("message", &std::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}

/// A pre-bound message emission attached to an interactive view element
#[derive(Clone)]
pub struct Trigger {
    fire: Arc<dyn Fn() + Send + Sync>,
}

impl Trigger {
    pub fn new(fire: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            fire: Arc::new(fire),
        }
    }

    pub fn fire(&self) {
        (self.fire)()
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Trigger")
    }
}
