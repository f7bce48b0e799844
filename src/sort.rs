//! The two classroom array sorts. Both are in place and quadratic; bubble
//! sort stops early once a pass makes no swap.

/// Adjacent-swap passes. Each pass floats the largest remaining element to
/// the end of the unsorted prefix, which then shrinks by one.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len - pass - 1 {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selects the minimum of the unsorted suffix and swaps it into place.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if items[j] < items[min] {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn bubble_sorts_integers() {
        let mut values = vec![5, 1, 4, 2, 8];
        bubble_sort(&mut values);
        assert_eq!(values, vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn selection_sorts_integers() {
        let mut values = vec![64, 25, 12, 22, 11];
        selection_sort(&mut values);
        assert_eq!(values, vec![11, 12, 22, 25, 64]);
    }

    #[test]
    fn both_handle_empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        bubble_sort(&mut empty);
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        bubble_sort(&mut one);
        selection_sort(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn sorted_input_is_untouched() {
        let mut values: Vec<i64> = (0..50).collect();
        let expected = values.clone();
        bubble_sort(&mut values);
        assert_eq!(values, expected);
        selection_sort(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn agrees_with_std_sort_on_random_input() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let values: Vec<i64> = (0..64).map(|_| rng.gen_range(-1000, 1000)).collect();
            let mut expected = values.clone();
            expected.sort();

            let mut by_bubble = values.clone();
            bubble_sort(&mut by_bubble);
            assert_eq!(by_bubble, expected);

            let mut by_selection = values;
            selection_sort(&mut by_selection);
            assert_eq!(by_selection, expected);
        }
    }

    // The five-word dictionary drill: sorting owned strings is the same
    // routine instantiated at String.
    #[test]
    fn sorts_words_lexicographically() {
        let mut words: Vec<String> = vec!["pear", "apple", "plum", "fig", "banana"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        bubble_sort(&mut words);
        assert_eq!(words, vec!["apple", "banana", "fig", "pear", "plum"]);
    }
}
