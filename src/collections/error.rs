#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    #[error("Container is empty")]
    EmptyContainer,
}
