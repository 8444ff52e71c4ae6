use thiserror::Error;

/// A collaborator handed the carousel an index space or index it cannot hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("carousel needs at least one card")]
    EmptyCarousel,
    #[error("index {index} is out of range for {size} cards")]
    IndexOutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
