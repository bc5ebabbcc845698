//! Displayed score smoothing

/// Move the displayed score one unit toward the real score
#[inline]
pub fn animate(displayed: u32, score: u32) -> u32 {
    match displayed.cmp(&score) {
        std::cmp::Ordering::Less => displayed + 1,
        std::cmp::Ordering::Greater => displayed - 1,
        std::cmp::Ordering::Equal => displayed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_steps_one_unit() {
        assert_eq!(animate(3, 10), 4);
        assert_eq!(animate(10, 3), 9);
        assert_eq!(animate(7, 7), 7);
    }

    proptest! {
        #[test]
        fn converges_in_distance_ticks(displayed in 0u32..5000, score in 0u32..5000) {
            let mut shown = displayed;
            let mut gap = displayed.abs_diff(score);
            for _ in 0..displayed.abs_diff(score) {
                shown = animate(shown, score);
                let next_gap = shown.abs_diff(score);
                prop_assert!(next_gap < gap);
                gap = next_gap;
            }
            prop_assert_eq!(shown, score);
            prop_assert_eq!(animate(shown, score), score);
        }
    }
}
