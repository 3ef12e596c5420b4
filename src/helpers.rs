//! Scalar and array helpers meant for build-time constants.
//!
//! Everything here is a `const fn` where the language allows it, so widths and
//! tables can be computed in `const` items.

use std::cmp;

/// Fixed-size array of signed integers, as taken by [`bubble_sort`].
pub type IntArray<const N: usize> = [i32; N];

/// Returns the greatest of three integers.
pub const fn max3(a: i32, b: i32, c: i32) -> i32 {
    let ab = if a > b { a } else { b };
    if ab > c {
        ab
    } else {
        c
    }
}

/// [`max3`] for any totally ordered type.
pub fn max3_by_ord<T: Ord>(a: T, b: T, c: T) -> T {
    cmp::max(a, cmp::max(b, c))
}

/// Direction for [`bubble_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sorts a constant array in the given order.
///
/// Not stable, and quadratic; intended for small tables of constants.
pub const fn bubble_sort<const N: usize>(
    mut values: IntArray<N>,
    order: SortOrder,
) -> IntArray<N> {
    let descending = matches!(order, SortOrder::Descending);
    let mut end = N;
    while end > 1 {
        let mut swapped = false;
        let mut i = 0;
        while i + 1 < end {
            let (a, b) = (values[i], values[i + 1]);
            let out_of_order = if descending { a < b } else { a > b };
            if out_of_order {
                values[i] = b;
                values[i + 1] = a;
                swapped = true;
            }
            i += 1;
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
    values
}
