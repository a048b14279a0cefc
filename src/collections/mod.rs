pub mod error;

pub use error::ContainerError;

#[cfg(feature = "collections_adapter")]
pub mod adapter;
#[cfg(feature = "collections_adapter")]
pub use adapter::{ContainerCommon, QueueLike, QueueOfStacks, StackLike, StackOfQueues};

#[cfg(feature = "collections_linked")]
pub mod linked;
#[cfg(feature = "collections_linked")]
pub use linked::{LinkedQueue, LinkedStack};
