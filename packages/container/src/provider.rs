use crate::{channel::Link, Container};
use dioxus::prelude::*;

/// Run a container's computation in the current component and publish the result to everything below it.
///
/// The computation runs on every render. When its result differs from the published value, the new
/// value is published and every component that read the old one re-renders. The value lives as long
/// as the current component is mounted; remounting starts over with fresh hook state.
///
/// Prefer [`ContainerProvider`] unless the component that owns the state also needs to render it.
///
/// A component must keep passing the same container to this hook for as long as it is mounted.
pub fn use_container_provider<S: 'static, V: Clone + PartialEq + 'static>(
    container: Container<S, V>,
    initial_state: Option<S>,
) -> V {
    let value = container.compute(initial_state);

    let (channel, mut slot) = use_hook(|| {
        // Look outwards before providing so that this link never points at itself
        let outer = try_consume_context::<Link<Signal<V>>>();
        let slot = Signal::new(value.clone());
        provide_context(Link::new(container.channel(), slot, outer));
        tracing::trace!(
            "providing container {} on channel {}",
            container.display_name(),
            container.channel()
        );
        (container.channel(), slot)
    });

    debug_assert_eq!(
        channel,
        container.channel(),
        "the container of a mounted provider cannot change"
    );

    // Consumers subscribe to the slot, so only write when there is something new to see
    if *slot.peek() != value {
        slot.set(value.clone());
    }

    value
}

/// The props for [`ContainerProvider`].
#[derive(Props)]
pub struct ContainerProviderProps<
    S: Clone + PartialEq + 'static,
    V: Clone + PartialEq + 'static,
> {
    /// The container to provide.
    container: Container<S, V>,

    /// Passed to the computation on every render.
    initial_state: Option<S>,

    /// The subtree that can read the container.
    children: Element,
}

impl<S, V> Clone for ContainerProviderProps<S, V>
where
    S: Clone + PartialEq + 'static,
    V: Clone + PartialEq + 'static,
{
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            initial_state: self.initial_state.clone(),
            children: self.children.clone(),
        }
    }
}

impl<S, V> PartialEq for ContainerProviderProps<S, V>
where
    S: Clone + PartialEq + 'static,
    V: Clone + PartialEq + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
            && self.initial_state == other.initial_state
            && self.children == other.children
    }
}

/// Compute a container's value and share it with the children of this component.
///
/// Providers nest: a provider below another provider of the same container shadows it for its own
/// children only. Providers of other containers in between are transparent.
///
/// ```rust, ignore
/// rsx! {
///     ContainerProvider::<i32, Counter> { container: *COUNTER, initial_state: 2,
///         CounterDisplay {}
///         ContainerProvider::<i32, Counter> { container: *COUNTER, initial_state: 5,
///             // sees 5
///             CounterDisplay {}
///         }
///     }
/// }
/// ```
#[allow(non_snake_case)]
pub fn ContainerProvider<S: Clone + PartialEq + 'static, V: Clone + PartialEq + 'static>(
    props: ContainerProviderProps<S, V>,
) -> Element {
    let ContainerProviderProps {
        container,
        initial_state,
        children,
    } = props;

    use_container_provider(container, initial_state);

    children
}
