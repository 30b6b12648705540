use crate::{use_container_provider, ChannelId, ContainerResult};
use dioxus::prelude::*;
use std::fmt::Debug;

/// A handle to a piece of state that is computed by a provider and shared with everything below it.
///
/// A container pairs a computation (usually a function that calls hooks) with a private channel. Mount
/// a [`crate::ContainerProvider`] to run the computation and publish its result, then read the result
/// anywhere below it with [`Container::use_container`].
///
/// Containers are `Copy` and can be stored in a `static`:
///
/// ```rust, no_run
/// # #![allow(non_snake_case)]
/// use dioxus::prelude::*;
/// use dioxus_container::prelude::*;
/// use std::sync::LazyLock;
///
/// #[derive(Clone, Copy, PartialEq)]
/// struct Counter {
///     count: Signal<i32>,
/// }
///
/// fn use_counter(initial: Option<i32>) -> Counter {
///     Counter { count: use_signal(|| initial.unwrap_or_default()) }
/// }
///
/// static COUNTER: LazyLock<Container<i32, Counter>> =
///     LazyLock::new(|| Container::new("Counter", use_counter));
///
/// fn App() -> Element {
///     rsx! {
///         ContainerProvider::<i32, Counter> { container: *COUNTER, initial_state: 2,
///             CounterDisplay {}
///         }
///     }
/// }
///
/// fn CounterDisplay() -> Element {
///     let mut counter = COUNTER.use_container();
///     rsx! {
///         button { onclick: move |_| counter.count -= 1, "-" }
///         span { "{counter.count}" }
///         button { onclick: move |_| counter.count += 1, "+" }
///     }
/// }
/// ```
pub struct Container<S, V> {
    computation: fn(Option<S>) -> V,
    channel: ChannelId,
    display_name: &'static str,
}

/// Create a new container. See [`Container::new`].
pub fn create_container<S: 'static, V: 'static>(
    display_name: &'static str,
    computation: fn(Option<S>) -> V,
) -> Container<S, V> {
    Container::new(display_name, computation)
}

impl<S: 'static, V: 'static> Container<S, V> {
    /// Create a new container with its own channel.
    ///
    /// `display_name` is used in debug output and in the [`crate::MissingProvider`] error. Calling this
    /// twice with the same computation gives two containers that do not share providers.
    pub fn new(display_name: &'static str, computation: fn(Option<S>) -> V) -> Self {
        let container = Self {
            computation,
            channel: ChannelId::next(),
            display_name,
        };
        tracing::trace!(
            "created container {} on channel {}",
            display_name,
            container.channel
        );
        container
    }

    /// Create an independent container that shares this container's computation and name.
    pub fn new_instance(&self) -> Self {
        Self::new(self.display_name, self.computation)
    }

    /// The name this container was created with.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// The channel this container publishes on.
    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub(crate) fn compute(&self, initial_state: Option<S>) -> V {
        (self.computation)(initial_state)
    }

    /// Wrap a component so that it always renders inside a fresh instance of this container.
    ///
    /// The returned closure is itself a component. Each mount of it runs the computation without an
    /// initial state and then renders `component` in the same scope, so `component` and everything
    /// below it read that instance.
    pub fn with_container<P, F>(self, component: F) -> impl Fn(P) -> Element + Clone + 'static
    where
        F: Fn(P) -> Element + Clone + 'static,
        V: Clone + PartialEq,
    {
        move |props| {
            use_container_provider(self, None);
            component(props)
        }
    }
}

impl<S: 'static, V: Clone + 'static> Container<S, V> {
    /// Read the value published by the nearest provider of this container.
    ///
    /// This is a hook and follows the rules of hooks.
    ///
    /// # Panics
    ///
    /// Panics if there is no provider for this container above the current component. Inside a
    /// `VirtualDom` the panic is caught and surfaces as a render error for the nearest error
    /// boundary. Use [`Container::try_use_container`] to handle that case instead.
    #[track_caller]
    pub fn use_container(&self) -> V {
        crate::use_container(*self)
    }

    /// Read the value published by the nearest provider of this container, or report that there is none.
    ///
    /// This is a hook and follows the rules of hooks.
    pub fn try_use_container(&self) -> ContainerResult<V> {
        crate::try_use_container(*self)
    }
}

impl<S, V> Clone for Container<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for Container<S, V> {}

impl<S, V> PartialEq for Container<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.channel == other.channel
    }
}

impl<S, V> Eq for Container<S, V> {}

impl<S, V> std::hash::Hash for Container<S, V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.channel.hash(state);
    }
}

impl<S, V> Debug for Container<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("display_name", &self.display_name)
            .field("channel", &self.channel)
            .finish()
    }
}
