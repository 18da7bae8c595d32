//! Chain searches over the word graph
//!
//! - `shortest_chain`: breadth-first, minimum number of words
//! - `chain_of_length`: depth-limited, exactly the requested number of words

pub mod exact;
pub mod node;
pub mod shortest;

pub use exact::{chain_of_length, exceeds_distance_bound};
pub use node::{NodeArena, NodeId, SearchNode};
pub use shortest::shortest_chain;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::graph::{AdjacencyRelation, WordIndex};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    /// Every word of `len` letters over `alphabet`, each kept with probability 0.6,
    /// in shuffled order
    fn random_dictionary(rng: &mut StdRng, alphabet: &[char], len: usize) -> Vec<String> {
        let mut words = vec![String::new()];
        for _ in 0..len {
            words = words
                .iter()
                .flat_map(|prefix| alphabet.iter().map(move |c| format!("{prefix}{c}")))
                .collect();
        }
        words.retain(|_| rng.random_bool(0.6));
        words.shuffle(rng);
        words
    }

    /// Graph distance in words, computed straight from pairwise distances
    fn reference_distance(words: &[String], start: &str, target: &str) -> Option<usize> {
        let words: Vec<Word> = words.iter().map(Word::new).collect();
        let mut seen = vec![false; words.len()];
        let mut queue = VecDeque::new();

        let start_pos = words.iter().position(|w| w.text() == start)?;
        seen[start_pos] = true;
        queue.push_back((start_pos, 1));

        while let Some((pos, cost)) = queue.pop_front() {
            if words[pos].text() == target {
                return Some(cost);
            }
            for (next, word) in words.iter().enumerate() {
                if !seen[next] && words[pos].is_adjacent(word) {
                    seen[next] = true;
                    queue.push_back((next, cost + 1));
                }
            }
        }
        None
    }

    /// Whether any simple chain of exactly `length` words exists
    fn reference_exact_exists(words: &[String], start: &str, target: &str, length: usize) -> bool {
        fn extend(words: &[Word], path: &mut Vec<usize>, target: &str, length: usize) -> bool {
            let last = &words[*path.last().unwrap()];
            if path.len() == length {
                return last.text() == target;
            }
            if path.len() > 1 && last.text() == target {
                return false;
            }
            for next in 0..words.len() {
                if !path.contains(&next) && last.is_adjacent(&words[next]) {
                    path.push(next);
                    if extend(words, path, target, length) {
                        return true;
                    }
                    path.pop();
                }
            }
            false
        }

        let words: Vec<Word> = words.iter().map(Word::new).collect();
        let Some(start_pos) = words.iter().position(|w| w.text() == start) else {
            return false;
        };
        if length == 0 {
            return false;
        }
        extend(&words, &mut vec![start_pos], target, length)
    }

    fn pick<'a>(rng: &mut StdRng, words: &'a [String]) -> &'a str {
        &words[rng.random_range(0..words.len())]
    }

    #[test]
    fn shortest_chain_matches_reference_distance() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..40 {
            let words = random_dictionary(&mut rng, &['a', 'b', 'c'], 3);
            if words.is_empty() {
                continue;
            }
            let index = WordIndex::from_lines(&words);
            let adjacency = AdjacencyRelation::build(&index);

            for _ in 0..10 {
                let start = pick(&mut rng, &words);
                let target = pick(&mut rng, &words);
                let expected = reference_distance(&words, start, target);

                match shortest_chain(&index, &adjacency, start, target) {
                    Ok(chain) => {
                        assert_eq!(Some(chain.len()), expected, "{start} -> {target}");
                        assert_eq!(chain.first(), Some(start));
                        assert_eq!(chain.last(), Some(target));
                        assert!(chain.is_valid_ladder(), "{chain}");
                    }
                    Err(_) => assert_eq!(expected, None, "{start} -> {target}"),
                }
            }
        }
    }

    #[test]
    fn exact_chain_matches_reference_existence() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..40 {
            let words = random_dictionary(&mut rng, &['a', 'b'], 3);
            if words.is_empty() {
                continue;
            }
            let index = WordIndex::from_lines(&words);
            let adjacency = AdjacencyRelation::build(&index);

            for _ in 0..10 {
                let start = pick(&mut rng, &words);
                let target = pick(&mut rng, &words);
                let length = rng.random_range(1..=7);
                let exists = reference_exact_exists(&words, start, target, length);

                match chain_of_length(&index, &adjacency, start, target, length) {
                    Ok(chain) => {
                        assert!(exists);
                        assert_eq!(chain.len(), length);
                        assert_eq!(chain.first(), Some(start));
                        assert_eq!(chain.last(), Some(target));
                        assert!(chain.is_valid_ladder(), "{chain}");
                    }
                    Err(_) => assert!(!exists, "{start} -> {target} in {length}"),
                }
            }
        }
    }

    #[test]
    fn searches_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = random_dictionary(&mut rng, &['a', 'b', 'c'], 3);
        let index = WordIndex::from_lines(&words);
        let adjacency = AdjacencyRelation::build(&index);

        for start in &words {
            for target in &words {
                let first = shortest_chain(&index, &adjacency, start, target);
                let again = shortest_chain(&index, &adjacency, start, target);
                assert_eq!(first, again);

                let first = chain_of_length(&index, &adjacency, start, target, 4);
                let again = chain_of_length(&index, &adjacency, start, target, 4);
                assert_eq!(first, again);
            }
        }
    }

    #[test]
    fn adjacency_is_symmetric_on_random_dictionaries() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..10 {
            let words = random_dictionary(&mut rng, &['a', 'b', 'c', 'd'], 2);
            let index = WordIndex::from_lines(&words);
            let adjacency = AdjacencyRelation::build(&index);

            for i in 0..index.len() {
                assert!(!adjacency.contains(i, i));
                for &j in adjacency.neighbors(i) {
                    assert!(adjacency.contains(j, i));
                }
            }
        }
    }
}
