//https://cses.fi/problemset/task/1633
use std::collections::VecDeque;
use std::num::IntErrorKind;

use log::{trace, warn};

use crate::{InputError, Scanner, Writer};

pub const MODULUS: u64 = 1_000_000_007;

/// Faces of the die, i.e. the largest part a composition may use.
pub const FACES: usize = 6;

/// Largest accepted target.
pub const MAX_N: u64 = 1_000_000;

/// Targets up to this size are answered from the full table; larger ones use
/// the constant-memory window.
pub const TABLE_LIMIT: usize = 1 << 16;

pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<(), InputError> {
    let n = read_target(input)?;

    let result = if n <= TABLE_LIMIT {
        tabulate(n)[n]
    } else {
        count_ways(n)
    };

    out.println(result);
    Ok(())
}

fn read_target(input: &mut Scanner) -> Result<usize, InputError> {
    let token = input.token()?;
    let n: i64 = token.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange {
            value: token.clone(),
            limit: MAX_N,
        },
        IntErrorKind::NegOverflow => InputError::Negative(token.clone()),
        _ => InputError::Malformed {
            token: token.clone(),
            expected: "integer",
        },
    })?;

    if n < 0 {
        warn!("rejecting negative target {}", n);
        return Err(InputError::Negative(token));
    }
    if n as u64 > MAX_N {
        warn!("rejecting target {} above {}", n, MAX_N);
        return Err(InputError::OutOfRange {
            value: token,
            limit: MAX_N,
        });
    }
    Ok(n as usize)
}

// Count the number of ways to construct sum n by throwing a dice one or more times.
// Each throw produces a result between 1 and 6, answer modulo 10^9 + 7.
//
//   ways[0] = 1  → {}
//   ways[1] = 1  → {1}
//   ways[2] = 2  → {1,1}, {2}
//   ways[3] = 4  → {1,1,1}, {1,2}, {2,1}, {3}
//   ...
//   ways[i] = ways[i-1] + ... + ways[i-6]  (indices below 0 are skipped)
//
// Only the last six entries are live at any point, so a rolling window suffices.
pub fn count_ways(n: usize) -> u64 {
    trace!("counting {} through a rolling window", n);
    let mut window: VecDeque<u64> = VecDeque::with_capacity(FACES);
    let mut last = 1;
    window.push_back(last);

    for _ in 0..n {
        last = window.iter().fold(0, |acc, ways| (acc + ways) % MODULUS);
        if window.len() == FACES {
            window.pop_front();
        }
        window.push_back(last);
    }
    last
}

/// Bottom-up table of `ways[0..=n]`.
///
/// Allocates `n + 1` entries, so `n` must leave room for that. Callers keep it
/// at or below [`TABLE_LIMIT`]; [`count_ways`] covers larger targets.
pub fn tabulate(n: usize) -> Vec<u64> {
    let len = n.saturating_add(1);
    trace!("tabulating {} entries", len);
    let mut ways = vec![0; len];
    ways[0] = 1;

    for i in 1..=n {
        for face in 1..=FACES.min(i) {
            ways[i] = (ways[i] + ways[i - face]) % MODULUS;
        }
    }
    ways
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::verify_all_tests;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn run(input: &str) -> Result<String, InputError> {
        let mut scanner = Scanner::new(Cursor::new(input.to_string()));
        let mut out = Writer::new();
        solve(&mut scanner, &mut out)?;
        Ok(out.into_string().unwrap())
    }

    // Direct enumeration of every sequence of throws summing to n.
    fn enumerate(n: usize) -> u64 {
        if n == 0 {
            return 1;
        }
        (1..=FACES.min(n)).map(|face| enumerate(n - face)).sum()
    }

    #[test]
    fn test_under_6() {
        // Example: n=3 should have 4 ways: [1,1,1], [1,2], [2,1], [3]
        assert_eq!(count_ways(3), 4);
        assert_eq!(count_ways(6), 32);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(count_ways(0), 1);
        assert_eq!(count_ways(1), 1);
        assert_eq!(count_ways(2), 2);
        assert_eq!(count_ways(7), 63);
        assert_eq!(count_ways(50), 660_641_036);
    }

    #[test]
    fn test_matches_enumeration() {
        for n in 0..=20 {
            assert_eq!(count_ways(n), enumerate(n), "n = {}", n);
        }
    }

    #[test]
    fn test_largest_target() {
        assert_eq!(count_ways(MAX_N as usize), 874_273_980);
    }

    #[test]
    fn test_solve_output() {
        assert_eq!(run("7\n").unwrap(), "63\n");
        assert_eq!(run("  0  ").unwrap(), "1\n");
    }

    #[test]
    fn test_table_and_window_answer_alike() {
        for n in [TABLE_LIMIT - 1, TABLE_LIMIT, TABLE_LIMIT + 1] {
            let expected = format!("{}\n", tabulate(n + 1)[n]);
            assert_eq!(run(&n.to_string()).unwrap(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(run(""), Err(InputError::Missing)));
        assert!(matches!(run("-1"), Err(InputError::Negative(_))));
        assert!(matches!(run("seven"), Err(InputError::Malformed { .. })));
        assert!(matches!(run("3.5"), Err(InputError::Malformed { .. })));
        assert!(matches!(run("1000001"), Err(InputError::OutOfRange { .. })));
        assert!(matches!(
            run("99999999999999999999999"),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_data_cases() {
        verify_all_tests("dynamic_programming", "dice_combinations", solve);
    }

    proptest! {
        #[test]
        fn table_follows_recurrence(n in 1usize..2000) {
            let ways = tabulate(n);
            prop_assert_eq!(ways[0], 1);
            for i in 1..=n {
                let expected = (1..=FACES.min(i)).map(|face| ways[i - face]).sum::<u64>() % MODULUS;
                prop_assert_eq!(ways[i], expected);
            }
        }

        #[test]
        fn window_agrees_with_table(n in 0usize..5000) {
            let ways = count_ways(n);
            prop_assert_eq!(ways, tabulate(n)[n]);
            prop_assert!(ways < MODULUS);
            prop_assert_eq!(ways, count_ways(n));
        }
    }
}
