use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("section {index} has z-index {current}, which does not sit above {previous}")]
    OutOfOrder {
        index: usize,
        previous: i32,
        current: i32,
    },
}

/// Z-indices for a stack of `len` sections in document order, starting at 1.
pub fn stack_z_indices(len: usize) -> Vec<i32> {
    (1..=len as i32).collect()
}

/// Every section must cover the one before it.
pub fn validate_stack(z_indices: &[i32]) -> Result<(), StackError> {
    for (index, pair) in z_indices.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(StackError::OutOfOrder {
                index: index + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_indices_are_strictly_increasing() {
        for len in 0..12 {
            let z = stack_z_indices(len);
            assert_eq!(z.len(), len);
            assert_eq!(validate_stack(&z), Ok(()));
        }
    }

    #[test]
    fn duplicate_index_is_reported() {
        assert_eq!(
            validate_stack(&[1, 2, 2, 3]),
            Err(StackError::OutOfOrder { index: 2, previous: 2, current: 2 })
        );
    }

    #[test]
    fn inverted_index_is_reported() {
        assert_eq!(
            validate_stack(&[1, 5, 4]),
            Err(StackError::OutOfOrder { index: 2, previous: 5, current: 4 })
        );
    }
}
