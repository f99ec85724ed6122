// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed-size paging for grid layouts

use crate::error::{LingoError, Result};

/// Split `items` into consecutive pages of `size` elements.
///
/// Every page holds exactly `size` elements except the last, which holds
/// the remainder. No empty page is ever produced, so an empty input gives
/// an empty list. A `size` of zero is rejected.
pub fn paginate<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(LingoError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NINE: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn pages_of_four() {
        assert_eq!(
            paginate(&NINE, 4).unwrap(),
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9]]
        );
    }

    #[test]
    fn pages_of_three() {
        assert_eq!(
            paginate(&NINE, 3).unwrap(),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
        );
    }

    #[test]
    fn pages_of_two() {
        assert_eq!(
            paginate(&NINE, 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8], vec![9]]
        );
    }

    #[test]
    fn empty_input_has_no_pages() {
        let empty: [i32; 0] = [];
        assert!(paginate(&empty, 3).unwrap().is_empty());
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(matches!(
            paginate(&NINE, 0),
            Err(LingoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn pages_concatenate_back_to_input() {
        let words: Vec<String> = (0..23).map(|i| format!("w{}", i)).collect();
        for size in 1..=25 {
            let pages = paginate(&words, size).unwrap();
            assert_eq!(pages.len(), words.len().div_ceil(size));
            let (last, full) = pages.split_last().unwrap();
            assert!(full.iter().all(|page| page.len() == size));
            assert!(!last.is_empty() && last.len() <= size);
            assert_eq!(pages.concat(), words);
        }
    }
}
