//! Mask penalty scoring
//!
//! N1: each run of 5+ same-colored modules in a row or column costs 3, plus 1 per extra module.
//! N2: each 2x2 same-colored block costs 3 (overlapping blocks count separately).
//! N3: each 1:1:3:1:1 finder-like pattern with 4 light modules on one side costs 40.
//! N4: 10 per full 5% step the dark ratio strays from 50%.

use crate::models::BitMatrix;

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

// dark-light-dark x3-light-dark followed or preceded by four light, in an 11-bit window
const FINDER_LIKE: [u16; 2] = [0x05D, 0x5D0];

/// Total penalty of a finished module grid (lower is better)
pub fn penalty_score(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let rows: Vec<Vec<bool>> = (0..size).map(|y| modules.row(y)).collect();
    let columns: Vec<Vec<bool>> = (0..size)
        .map(|x| (0..size).map(|y| modules.get(x, y)).collect())
        .collect();

    let lines = rows.iter().chain(columns.iter());
    let line_score: u32 = lines.map(|line| run_penalty(line) + finder_penalty(line)).sum();

    line_score + block_penalty(&rows) + balance_penalty(modules)
}

fn run_penalty(line: &[bool]) -> u32 {
    let mut score = 0;
    let mut run = 1;
    for pair in line.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run == 5 {
                score += PENALTY_N1;
            } else if run > 5 {
                score += 1;
            }
        } else {
            run = 1;
        }
    }
    score
}

fn finder_penalty(line: &[bool]) -> u32 {
    let mut score = 0;
    let mut bits: u16 = 0;
    for (x, &dark) in line.iter().enumerate() {
        bits = ((bits << 1) & 0x7FF) | dark as u16;
        if x >= 10 && FINDER_LIKE.contains(&bits) {
            score += PENALTY_N3;
        }
    }
    score
}

fn block_penalty(rows: &[Vec<bool>]) -> u32 {
    rows.windows(2)
        .map(|pair| {
            let (top, bottom) = (&pair[0], &pair[1]);
            (0..top.len().saturating_sub(1))
                .filter(|&x| {
                    let c = top[x];
                    top[x + 1] == c && bottom[x] == c && bottom[x + 1] == c
                })
                .count() as u32
                * PENALTY_N2
        })
        .sum()
}

fn balance_penalty(modules: &BitMatrix) -> u32 {
    let total = modules.width() * modules.height();
    let dark = modules.count_ones();
    let mut score = 0;
    let mut k = 0;
    while dark * 20 < (9 - k) * total || dark * 20 > (11 + k) * total {
        score += PENALTY_N4;
        k += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_run_penalty() {
        assert_eq!(run_penalty(&line("0000")), 0);
        assert_eq!(run_penalty(&line("00000")), 3);
        assert_eq!(run_penalty(&line("0000000")), 5);
        assert_eq!(run_penalty(&line("11111011111")), 6);
    }

    #[test]
    fn test_finder_penalty() {
        assert_eq!(finder_penalty(&line("00001011101")), 40);
        assert_eq!(finder_penalty(&line("10111010000")), 40);
        assert_eq!(finder_penalty(&line("000010111010000")), 80);
        assert_eq!(finder_penalty(&line("0001011101")), 0);
    }

    #[test]
    fn test_block_penalty() {
        let rows = vec![line("110"), line("110"), line("111")];
        // Top-left block, and the all-dark bottom-left block
        assert_eq!(block_penalty(&rows), 6);
    }

    #[test]
    fn test_balance_penalty() {
        let mut m = BitMatrix::square(10);
        // 0% dark: nine full steps below 45%
        assert_eq!(balance_penalty(&m), 90);
        for i in 0..50 {
            m.set(i % 10, i / 10, true);
        }
        assert_eq!(balance_penalty(&m), 0);
        for i in 50..56 {
            m.set(i % 10, i / 10, true);
        }
        // 56% dark: one full step past 55%
        assert_eq!(balance_penalty(&m), 10);
    }

    #[test]
    fn test_all_light_symbol() {
        // 21x21 all light: every line is one run of 21 -> 3 + 16 each,
        // 400 blocks, nine balance steps
        let m = BitMatrix::square(21);
        let expected = 42 * 19 + 400 * 3 + 90;
        assert_eq!(penalty_score(&m), expected);
    }
}
