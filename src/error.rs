use thiserror::Error;

/// Errors produced by fallible [`Deque`](crate::Deque) operations.
///
/// Out-of-range *reads* are not errors; [`Deque::at`](crate::Deque::at)
/// returns `None` for them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    #[error("negative deque size: {0}")]
    InvalidSize(isize),
    #[error("deque size {0} exceeds the maximum length")]
    TooLarge(usize),
    #[error("index {index} out of range for deque of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DequeError::InvalidSize(-1).to_string(),
            "negative deque size: -1"
        );
        assert_eq!(
            DequeError::IndexOutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 out of range for deque of length 3"
        );
    }
}
