use super::error::IndexError;

/// Maps a negative index onto its position counted from `length`,
/// so `-1` addresses the last element. Non-negative indices pass through.
pub fn normalize(index: isize, length: usize) -> isize {
    if index < 0 {
        length as isize + index
    } else {
        index
    }
}

/// Normalizes `index` and checks it against `0..length`.
pub fn check(index: isize, length: usize) -> Result<usize, IndexError> {
    let index = normalize(index, length);
    if index < 0 || index as usize >= length {
        Err(IndexError::new(length, index))
    } else {
        Ok(index as usize)
    }
}
