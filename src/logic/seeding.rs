//! Bracket sizing and the standard first-round seed pairing.

/// Smallest power of two >= `n` (1 for `n == 0`).
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Number of winners-bracket rounds for a power-of-two bracket size.
pub fn winners_rounds(bracket_size: usize) -> u32 {
    bracket_size.trailing_zeros()
}

/// Seed order of the first round, top to bottom, for a bracket of `size` slots.
///
/// Built by doubling `[1, 2]`: each seed `p` is followed by its mirror `2·len + 1 − p`.
/// `[1, 2] -> [1, 4, 2, 3] -> [1, 8, 4, 5, 2, 7, 3, 6]`.
pub fn seed_order(size: usize) -> Vec<u32> {
    let mut positions: Vec<u32> = vec![1, 2];
    while positions.len() < size {
        let sum = positions.len() as u32 * 2 + 1;
        positions = positions.iter().flat_map(|&p| [p, sum - p]).collect();
    }
    positions
}

/// First-round pairs in bracket order. Seeds 1 and 2 land in different halves,
/// 1-4 in different quarters, and so on.
pub fn seed_pairs(size: usize) -> Vec<(u32, u32)> {
    if size < 2 {
        return Vec::new();
    }
    seed_order(size)
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_power_of_two_rounds_up() {
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(7), 8);
        assert_eq!(next_power_of_two(8), 8);
        assert_eq!(next_power_of_two(9), 16);
        assert_eq!(winners_rounds(32), 5);
    }

    #[test]
    fn eight_seed_pairs() {
        assert_eq!(seed_pairs(8), vec![(1, 8), (4, 5), (2, 7), (3, 6)]);
        assert_eq!(seed_pairs(2), vec![(1, 2)]);
        assert_eq!(seed_pairs(4), vec![(1, 4), (2, 3)]);
    }

    #[test]
    fn every_pair_sums_to_size_plus_one() {
        for k in 1..=7 {
            let size = 1usize << k;
            let pairs = seed_pairs(size);
            assert_eq!(pairs.len(), size / 2);
            for (a, b) in pairs {
                assert_eq!((a + b) as usize, size + 1);
            }
        }
    }

    #[test]
    fn top_seeds_split_across_sections() {
        for k in 2..=7 {
            let size = 1usize << k;
            let order = seed_order(size);
            // For every section size, seeds 1..=sections must each sit in their own section.
            let mut sections = 2;
            while sections <= size / 2 {
                let width = size / sections;
                let mut seen = vec![false; sections];
                for seed in 1..=sections as u32 {
                    let idx = order.iter().position(|&s| s == seed).unwrap() / width;
                    assert!(!seen[idx], "size {size}: seed {seed} shares section {idx}");
                    seen[idx] = true;
                }
                sections *= 2;
            }
        }
    }
}
