#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod channel;
pub use channel::ChannelId;

mod container;
pub use container::*;

mod consumer;
pub use consumer::*;

mod error;
pub use error::*;

mod provider;
pub use provider::*;

/// Everything needed to create, provide and read containers.
pub mod prelude {
    pub use crate::{
        create_container, try_use_container, use_container, use_container_provider, Container,
        ContainerConsumer, ContainerProvider, MissingProvider,
    };
}
