pub const CELSIUS: [f64; 4] = [-40.0, 0.0, 37.0, 100.0];

pub fn to_fahrenheit(temps: &[f64]) -> Vec<f64> {
    temps.iter().map(|t| t * 1.8 + 32.0).collect()
}

/// Folds without a seed: the first item starts the accumulator.
pub fn inject<T, I, F>(items: I, f: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    items.into_iter().reduce(f)
}

pub fn running_sum(nums: &[i64]) -> Option<i64> {
    inject(nums.iter().copied(), |sum, i| sum + i)
}

/// The accumulator survives only when strictly longer, so ties go to the later word.
pub fn longest<'a>(words: &[&'a str]) -> Option<&'a str> {
    inject(words.iter().copied(), |longest_so_far, word| {
        if longest_so_far.chars().count() > word.chars().count() {
            longest_so_far
        } else {
            word
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit() {
        let expected = [-40.0, 32.0, 98.6, 212.0];
        let got = to_fahrenheit(&CELSIUS);
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-9, "{g} != {e}");
        }
    }

    #[test]
    fn running_sum_of_small_list() {
        assert_eq!(running_sum(&[1, 5, 7]), Some(13));
        assert_eq!(running_sum(&[]), None);
    }

    #[test]
    fn longest_word_wins() {
        assert_eq!(longest(&["cat", "sheep", "bear"]), Some("sheep"));
        assert_eq!(longest(&["ox", "yak", "emu"]), Some("emu"));
    }

    #[test]
    fn inject_seeds_with_first_item() {
        let product = inject(vec![2, 3, 4], |acc, x| acc * x);
        assert_eq!(product, Some(24));
        assert_eq!(inject(Vec::<i32>::new(), |a, b| a + b), None);
    }
}
