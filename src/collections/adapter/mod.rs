use std::convert::Infallible;

pub mod container_common;
pub mod queue;
pub mod queue_of_stacks;
pub mod stack;
pub mod stack_of_queues;

pub use container_common::ContainerCommon;
pub use queue::QueueLike;
pub use queue_of_stacks::QueueOfStacks;
pub use stack::StackLike;
pub use stack_of_queues::StackOfQueues;

/// Unwraps the result of pushing into an unbounded buffer.
#[inline(always)]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
