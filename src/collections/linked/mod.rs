pub mod list_queue;
pub mod list_stack;

pub use list_queue::LinkedQueue;
pub use list_stack::LinkedStack;
