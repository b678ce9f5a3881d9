//! Quarter turns of 3x3 matrices.
//!
//! Nothing here knows what the elements are; the same routines reorder the
//! cubelet handles of every face regardless of its axis.

/// A 3x3 matrix stored row-major.
pub type Matrix3<T> = [[T; 3]; 3];

/// Rotate `m` 90 degrees clockwise in place, so that afterwards
/// `m[i][j]` holds what `m[2 - j][i]` held before.
///
/// A clockwise quarter turn is a row reversal followed by a transpose.
pub fn rotate_cw<T>(m: &mut Matrix3<T>) {
    reverse_rows(m);
    transpose(m);
}

/// Swap row `i` with row `2 - i`. Whole rows move; elements are untouched.
pub fn reverse_rows<T>(m: &mut Matrix3<T>) {
    m.swap(0, 2);
}

/// Mirror `m` across its main diagonal in place.
pub fn transpose<T>(m: &mut Matrix3<T>) {
    for j in 1..3 {
        let (upper, lower) = m.split_at_mut(j);
        for (i, row) in upper.iter_mut().enumerate() {
            std::mem::swap(&mut row[j], &mut lower[0][i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled() -> Matrix3<char> {
        [['a', 'b', 'c'], ['d', 'e', 'f'], ['g', 'h', 'i']]
    }

    #[test]
    fn rotate_matches_formula() {
        let old = labeled();
        let mut new = old;
        rotate_cw(&mut new);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(new[i][j], old[2 - j][i]);
            }
        }
        assert_eq!(new, [['g', 'd', 'a'], ['h', 'e', 'b'], ['i', 'f', 'c']]);
    }

    #[test]
    fn four_rotations_are_identity() {
        let mut m = labeled();
        rotate_cw(&mut m);
        assert_ne!(m, labeled());
        for _ in 0..3 {
            rotate_cw(&mut m);
        }
        assert_eq!(m, labeled());
    }

    #[test]
    fn reverse_rows_keeps_row_contents() {
        let mut m = labeled();
        reverse_rows(&mut m);
        assert_eq!(m, [['g', 'h', 'i'], ['d', 'e', 'f'], ['a', 'b', 'c']]);
    }

    #[test]
    fn transpose_swaps_each_pair_once() {
        let mut m = labeled();
        transpose(&mut m);
        assert_eq!(m, [['a', 'd', 'g'], ['b', 'e', 'h'], ['c', 'f', 'i']]);
        transpose(&mut m);
        assert_eq!(m, labeled());
    }

    #[test]
    fn works_on_non_copy_elements() {
        let mut m: Matrix3<String> =
            std::array::from_fn(|i| std::array::from_fn(|j| format!("{i}{j}")));
        rotate_cw(&mut m);
        assert_eq!(m[0][0], "20");
        assert_eq!(m[0][2], "00");
        assert_eq!(m[2][2], "02");
    }
}
