/// Lazy stream of every ordering of the input, via Heap's algorithm.
/// Order among permutations is unspecified but deterministic for a fixed input.
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    depth: usize,
    started: bool,
}

pub fn permutations_of<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        items: items.to_vec(),
        counters: vec![0; items.len()],
        depth: 1,
        started: false,
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }
        while self.depth < self.items.len() {
            if self.counters[self.depth] < self.depth {
                if self.depth % 2 == 0 {
                    self.items.swap(0, self.depth);
                } else {
                    self.items.swap(self.counters[self.depth], self.depth);
                }
                self.counters[self.depth] += 1;
                self.depth = 1;
                return Some(self.items.clone());
            }
            self.counters[self.depth] = 0;
            self.depth += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::permutations_of;

    #[test]
    fn seven_elements_give_5040_distinct_orderings() {
        let labels = ["a", "b", "c", "d", "e", "f", "g"];
        let all: Vec<Vec<&str>> = permutations_of(&labels).collect();
        assert_eq!(all.len(), 5040);
        let distinct: HashSet<Vec<&str>> = all.iter().cloned().collect();
        assert_eq!(distinct.len(), 5040);
        for ordering in &all {
            let sorted = ordering.iter().copied().sorted().collect_vec();
            assert_eq!(sorted, labels.to_vec());
        }
    }

    #[test]
    fn matches_itertools_permutations() {
        let items = [1, 2, 3, 4];
        let ours: HashSet<Vec<i32>> = permutations_of(&items).collect();
        let oracle: HashSet<Vec<i32>> =
            items.iter().copied().permutations(items.len()).collect();
        assert_eq!(ours, oracle);
    }

    #[test]
    fn trivial_inputs_yield_one_ordering() {
        assert_eq!(permutations_of::<u8>(&[]).collect_vec(), vec![Vec::<u8>::new()]);
        assert_eq!(permutations_of(&[42]).collect_vec(), vec![vec![42]]);
    }
}
