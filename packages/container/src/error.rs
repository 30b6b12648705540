/// Returned when a container is read from a component that has no enclosing provider for it.
///
/// This is a wiring mistake rather than a data condition, so there is nothing to retry. Propagate it
/// with `?` from a component and it will bubble up to the nearest `ErrorBoundary`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("component must be wrapped with <{container}.Provider>")]
pub struct MissingProvider {
    /// The display name of the container that was looked up.
    pub container: &'static str,
}

/// A result whose error is [`MissingProvider`].
pub type ContainerResult<T> = Result<T, MissingProvider>;
