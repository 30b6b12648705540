use std::{
    fmt::{Debug, Display},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

/// The identity of one container.
///
/// Every call to the container factory mints a new id, so two containers built from the same
/// computation never see each other's providers. There is no public constructor: an id can only be
/// obtained from an existing container, which makes it usable as an absence marker.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(u64);

impl ChannelId {
    pub(crate) fn next() -> Self {
        // Zero is never handed out
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Debug for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChannelId({})", self.0)
    }
}

impl Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One provider's entry in the context tree.
///
/// Dioxus resolves contexts by type, so every provider of a value type shares the same context slot
/// and the nearest one would hide providers of *other* containers with that value type. Each link
/// therefore remembers the link that was visible when it was mounted, and lookups walk outwards until
/// they reach the link for their own channel.
pub(crate) struct Link<T> {
    channel: ChannelId,
    slot: T,
    outer: Option<Rc<Link<T>>>,
}

impl<T: Clone> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel,
            slot: self.slot.clone(),
            outer: self.outer.clone(),
        }
    }
}

impl<T> Link<T> {
    pub(crate) fn new(channel: ChannelId, slot: T, outer: Option<Link<T>>) -> Self {
        Self {
            channel,
            slot,
            outer: outer.map(Rc::new),
        }
    }

    /// Find the nearest slot published on `channel`, starting at this link.
    pub(crate) fn find(&self, channel: ChannelId) -> Option<&T> {
        let mut link = Some(self);
        while let Some(current) = link {
            if current.channel == channel {
                return Some(&current.slot);
            }
            link = current.outer.as_deref();
        }
        None
    }

    /// How many links are visible from here, this one included.
    #[cfg(test)]
    fn depth(&self) -> usize {
        1 + self.outer.as_ref().map_or(0, |outer| outer.depth())
    }
}
