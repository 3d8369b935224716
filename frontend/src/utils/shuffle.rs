/// Fisher-Yates shuffle. `random` must return values in `[0, 1)`.
pub fn shuffle<T>(items: &mut [T], mut random: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = ((random() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

pub fn browser_random() -> f64 {
    web_sys::js_sys::Math::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_every_element() {
        let mut values = [0, 1, 2, 3, 4, 5, 6, 7];
        let mut seed = 0.37_f64;
        shuffle(&mut values, || {
            seed = (seed * 9301.0 + 0.49297).fract();
            seed
        });
        let mut sorted = values;
        sorted.sort();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn zero_source_rotates_deterministically() {
        let mut values = [0, 1, 2, 3];
        shuffle(&mut values, || 0.0);
        assert_eq!(values, [1, 2, 3, 0]);
    }

    #[test]
    fn out_of_range_source_stays_in_bounds() {
        let mut values = [1, 2, 3];
        shuffle(&mut values, || 1.0);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, || 0.5);
        let mut one = [9];
        shuffle(&mut one, || 0.5);
        assert_eq!(one, [9]);
    }
}
