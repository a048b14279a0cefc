#[cfg(feature = "collections")]
pub mod collections;
