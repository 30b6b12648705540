use crate::{channel::Link, Container, ContainerResult, MissingProvider};
use dioxus::prelude::*;

/// Read the value published by the nearest provider of `container`, or report that there is none.
///
/// The provider is looked up once, when the calling component mounts. The value itself is read on
/// every call and subscribes the calling component, so it re-renders whenever the provider publishes
/// a different value.
///
/// A provider whose computation returned `None` (or any other "empty" value) still counts as a
/// provider. Only a missing provider is an error.
pub fn try_use_container<S: 'static, V: Clone + 'static>(
    container: Container<S, V>,
) -> ContainerResult<V> {
    let slot = use_hook(|| {
        let slot = try_consume_context::<Link<Signal<V>>>()
            .and_then(|link| link.find(container.channel()).cloned());

        if slot.is_none() {
            tracing::trace!(
                "container {} ({}) has no provider above this component",
                container.display_name(),
                container.channel()
            );
        }

        slot
    });

    match slot {
        Some(slot) => Ok(slot.read().clone()),
        None => Err(MissingProvider {
            container: container.display_name(),
        }),
    }
}

/// Read the value published by the nearest provider of `container`.
///
/// # Panics
///
/// Panics if there is no provider for `container` above the current component. Inside a
/// [`VirtualDom`] the panic is caught like any other panic in a component body and turns into a
/// render error for the nearest [`ErrorBoundary`]; use [`try_use_container`] to handle it yourself.
#[track_caller]
pub fn use_container<S: 'static, V: Clone + 'static>(container: Container<S, V>) -> V {
    match try_use_container(container) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// The props for [`ContainerConsumer`].
#[derive(Props)]
pub struct ContainerConsumerProps<S: 'static, V: Clone + 'static> {
    /// The container to read.
    container: Container<S, V>,

    /// Called with the current value on every render.
    render: Callback<V, Element>,
}

impl<S: 'static, V: Clone + 'static> Clone for ContainerConsumerProps<S, V> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            render: self.render,
        }
    }
}

impl<S: 'static, V: Clone + 'static> PartialEq for ContainerConsumerProps<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container && self.render == other.render
    }
}

/// Render a container's value through a callback instead of a hook.
///
/// Without a provider the callback is never called and the component fails with
/// [`MissingProvider`], which bubbles up to the nearest error boundary.
///
/// ```rust, ignore
/// rsx! {
///     ContainerConsumer::<i32, Counter> {
///         container: *COUNTER,
///         render: move |counter: Counter| rsx! { "{counter.count}" },
///     }
/// }
/// ```
#[allow(non_snake_case)]
pub fn ContainerConsumer<S: 'static, V: Clone + 'static>(
    props: ContainerConsumerProps<S, V>,
) -> Element {
    let value = try_use_container(props.container)?;
    props.render.call(value)
}
