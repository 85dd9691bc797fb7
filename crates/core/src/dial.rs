//! Modular dial tracker.
//!
//! A dial with positions `0..100` starts at [`START_POSITION`] and is turned
//! by a sequence of `L<n>` / `R<n>` commands. Two counting rules are
//! supported:
//!
//! - [`count_zero_landings`]: how many commands leave the dial on zero.
//! - [`count_zero_passes`]: how many times the dial reaches zero at all,
//!   including every wrap performed in the middle of a command.

use std::fmt;
use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;

use crate::error::{Error, Result};

/// Number of positions on the dial.
pub const DIAL_SIZE: i64 = 100;

/// Position the dial points at before the first command.
pub const START_POSITION: i64 = 50;

/// Example input shipped with the puzzle.
pub const EXAMPLE: &str = include_str!("../fixtures/dial.txt");

/// Known `(part1, part2)` answers for [`EXAMPLE`].
pub const EXAMPLE_ANSWERS: (u64, u64) = (3, 6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// A single rotation of the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub magnitude: u64,
}

impl Command {
    pub fn left(magnitude: u64) -> Self {
        Self {
            direction: Direction::Left,
            magnitude,
        }
    }

    pub fn right(magnitude: u64) -> Self {
        Self {
            direction: Direction::Right,
            magnitude,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.letter(), self.magnitude)
    }
}

/// Extract every `L<digits>` / `R<digits>` token from `input`, in order.
///
/// Anything between tokens (newlines, commas, prose) is ignored. A token whose
/// magnitude doesn't fit in a `u64` is rejected.
pub fn parse_commands(input: &str) -> Result<Vec<Command>> {
    static RE_COMMAND: OnceLock<Regex> = OnceLock::new();
    let re = RE_COMMAND.get_or_init(|| Regex::new(r"([LR])([0-9]+)").unwrap());

    let commands = re
        .captures_iter(input)
        .map(|caps| {
            let direction = Direction::from_letter(&caps[1])
                .ok_or_else(|| Error::InvalidInput(format!("unknown direction {}", &caps[1])))?;
            let magnitude = caps[2]
                .parse::<u64>()
                .map_err(|e| Error::InvalidInput(format!("magnitude {}: {}", &caps[0], e)))?;
            Ok(Command {
                direction,
                magnitude,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed {} dial commands", commands.len());
    Ok(commands)
}

/// Current state of the dial. The position is always in `0..DIAL_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: START_POSITION,
        }
    }
}

impl Dial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position, wrapped into `0..DIAL_SIZE`.
    pub fn at(position: i64) -> Self {
        Self {
            position: position.rem_euclid(DIAL_SIZE),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Apply `command` and report whether the dial now rests on zero.
    pub fn rotate(&mut self, command: &Command) -> bool {
        // Only the magnitude modulo the dial size affects the final position.
        let step = (command.magnitude % DIAL_SIZE as u64) as i64;
        let delta = match command.direction {
            Direction::Left => -step,
            Direction::Right => step,
        };
        self.position = (self.position + delta).rem_euclid(DIAL_SIZE);
        trace!("rotate {command} -> {}", self.position);
        self.position == 0
    }

    /// Apply `command` and return how many times zero was reached on the way.
    ///
    /// Full revolutions beyond the first are counted up front. The remaining
    /// `1..=100` clicks are applied to the raw position, and one more hit is
    /// counted if the result is zero or had to be wrapped back into range.
    /// Turning left from zero starts from 100 so that a short left turn isn't
    /// mistaken for a wrap.
    pub fn sweep(&mut self, command: &Command) -> u64 {
        let mut hits = 0;
        let mut remaining = command.magnitude;

        // Same as repeatedly taking 100 off while more than 100 remain.
        if remaining > DIAL_SIZE as u64 {
            let wraps = (remaining - 1) / DIAL_SIZE as u64;
            hits += wraps;
            remaining -= wraps * DIAL_SIZE as u64;
        }
        let remaining = remaining as i64;

        let raw = match command.direction {
            Direction::Left => {
                let from = if self.position == 0 {
                    DIAL_SIZE
                } else {
                    self.position
                };
                from - remaining
            }
            Direction::Right => self.position + remaining,
        };

        let normalized = raw.rem_euclid(DIAL_SIZE);
        self.position = normalized;
        if normalized == 0 || normalized != raw {
            hits += 1;
        }

        trace!("sweep {command} -> {} ({hits} hits)", self.position);
        hits
    }
}

/// Part 1: number of commands after which the dial rests on zero.
pub fn count_zero_landings(commands: &[Command]) -> u64 {
    let mut dial = Dial::new();
    commands
        .iter()
        .filter(|command| dial.rotate(command))
        .count() as u64
}

/// Part 2: number of times the dial reaches zero, including mid-turn wraps.
pub fn count_zero_passes(commands: &[Command]) -> u64 {
    let mut dial = Dial::new();
    commands.iter().map(|command| dial.sweep(command)).sum()
}

/// Parse `input` and compute both answers.
pub fn solve(input: &str) -> Result<(u64, u64)> {
    let commands = parse_commands(input)?;
    Ok((count_zero_landings(&commands), count_zero_passes(&commands)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Click-by-click simulation used as a reference for `sweep`.
    fn clicks_on_zero(start: i64, command: &Command) -> u64 {
        let step = match command.direction {
            Direction::Left => -1,
            Direction::Right => 1,
        };
        let mut position = start;
        let mut hits = 0;
        for _ in 0..command.magnitude {
            position = (position + step).rem_euclid(DIAL_SIZE);
            if position == 0 {
                hits += 1;
            }
        }
        hits
    }

    // ============================================================================
    // parse_commands tests
    // ============================================================================

    #[test]
    fn test_parse_commands_example() {
        let commands = parse_commands(EXAMPLE).unwrap();
        assert_eq!(commands.len(), 10);
        assert_eq!(commands[0], Command::left(68));
        assert_eq!(commands[2], Command::right(48));
        assert_eq!(commands[9], Command::left(82));
    }

    #[test]
    fn test_parse_commands_ignores_surrounding_text() {
        let commands = parse_commands("turn L5, then R250!\n x9 Q3 L").unwrap();
        assert_eq!(commands, vec![Command::left(5), Command::right(250)]);
    }

    #[test]
    fn test_parse_commands_skips_non_ascii_digits() {
        let commands = parse_commands("L5٣ R٣ L50").unwrap();
        assert_eq!(commands, vec![Command::left(5), Command::left(50)]);
    }

    #[test]
    fn test_parse_commands_empty() {
        assert!(parse_commands("").unwrap().is_empty());
        assert!(parse_commands("no tokens here").unwrap().is_empty());
    }

    #[test]
    fn test_parse_commands_overflow() {
        let err = parse_commands("R99999999999999999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::left(68).to_string(), "L68");
        assert_eq!(Command::right(0).to_string(), "R0");
    }

    // ============================================================================
    // Part 1 tests
    // ============================================================================

    #[test]
    fn test_count_zero_landings_example() {
        let commands = parse_commands(EXAMPLE).unwrap();
        assert_eq!(count_zero_landings(&commands), EXAMPLE_ANSWERS.0);
    }

    #[test]
    fn test_rotate_wraps_both_ways() {
        let mut dial = Dial::new();
        assert!(!dial.rotate(&Command::left(68)));
        assert_eq!(dial.position(), 82);
        assert!(!dial.rotate(&Command::right(48)));
        assert_eq!(dial.position(), 30);
        assert!(dial.rotate(&Command::left(230)));
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_rotate_zero_magnitude_off_zero() {
        let mut dial = Dial::new();
        assert!(!dial.rotate(&Command::left(0)));
        assert!(!dial.rotate(&Command::right(0)));
        assert_eq!(dial.position(), START_POSITION);
    }

    #[test]
    fn test_rotate_zero_magnitude_on_zero_counts() {
        let mut dial = Dial::at(0);
        assert!(dial.rotate(&Command::right(0)));
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_rotate_huge_magnitude() {
        let mut dial = Dial::new();
        dial.rotate(&Command::right(u64::MAX));
        assert_eq!(dial.position(), (50 + (u64::MAX % 100) as i64) % 100);
    }

    // ============================================================================
    // Part 2 tests
    // ============================================================================

    #[test]
    fn test_count_zero_passes_example() {
        let commands = parse_commands(EXAMPLE).unwrap();
        assert_eq!(count_zero_passes(&commands), EXAMPLE_ANSWERS.1);
    }

    #[test]
    fn test_sweep_exactly_one_revolution() {
        let mut dial = Dial::new();
        assert_eq!(dial.sweep(&Command::right(100)), 1);
        assert_eq!(dial.position(), 50);

        let mut dial = Dial::new();
        assert_eq!(dial.sweep(&Command::left(100)), 1);
        assert_eq!(dial.position(), 50);
    }

    #[test]
    fn test_sweep_one_revolution_from_zero() {
        let mut dial = Dial::at(0);
        assert_eq!(dial.sweep(&Command::left(100)), 1);
        assert_eq!(dial.position(), 0);

        let mut dial = Dial::at(0);
        assert_eq!(dial.sweep(&Command::right(100)), 1);
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_sweep_short_left_from_zero_does_not_count() {
        let mut dial = Dial::at(0);
        assert_eq!(dial.sweep(&Command::left(5)), 0);
        assert_eq!(dial.position(), 95);
    }

    #[test]
    fn test_sweep_landing_on_zero() {
        let mut dial = Dial::new();
        assert_eq!(dial.sweep(&Command::left(50)), 1);
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_sweep_multiple_revolutions() {
        let mut dial = Dial::at(10);
        assert_eq!(dial.sweep(&Command::left(300)), 3);
        assert_eq!(dial.position(), 10);

        let mut dial = Dial::new();
        assert_eq!(dial.sweep(&Command::right(1000)), 10);
        assert_eq!(dial.position(), 50);
    }

    #[test]
    fn test_sweep_zero_magnitude() {
        let mut dial = Dial::new();
        assert_eq!(dial.sweep(&Command::left(0)), 0);
        assert_eq!(dial.sweep(&Command::right(0)), 0);
        assert_eq!(dial.position(), START_POSITION);

        // Sitting on zero, a zero-length turn still counts once.
        let mut dial = Dial::at(0);
        assert_eq!(dial.sweep(&Command::left(0)), 1);
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_sweep_huge_magnitude() {
        let mut dial = Dial::new();
        let hits = dial.sweep(&Command::right(10_000_000_000_000));
        assert_eq!(hits, 100_000_000_000);
        assert_eq!(dial.position(), 50);
    }

    #[test]
    fn test_solve_example() {
        assert_eq!(solve(EXAMPLE).unwrap(), EXAMPLE_ANSWERS);
        assert_eq!(solve(EXAMPLE).unwrap(), solve(EXAMPLE).unwrap());
    }

    // ============================================================================
    // Properties
    // ============================================================================

    fn any_command() -> impl Strategy<Value = Command> {
        (any::<bool>(), 0u64..1000).prop_map(|(left, magnitude)| {
            if left {
                Command::left(magnitude)
            } else {
                Command::right(magnitude)
            }
        })
    }

    proptest! {
        #[test]
        fn proptest_rotate_stays_on_dial(commands in prop::collection::vec(any_command(), 0..50)) {
            let mut dial = Dial::new();
            for command in &commands {
                dial.rotate(command);
                prop_assert!((0..DIAL_SIZE).contains(&dial.position()));
            }
        }

        #[test]
        fn proptest_sweep_matches_click_simulation(start in 0i64..100, command in any_command()) {
            prop_assume!(command.magnitude > 0);
            let mut dial = Dial::at(start);
            let hits = dial.sweep(&command);
            prop_assert_eq!(hits, clicks_on_zero(start, &command));
            prop_assert!((0..DIAL_SIZE).contains(&dial.position()));
        }

        #[test]
        fn proptest_sweep_split_invariant(
            start in 0i64..100,
            left in any::<bool>(),
            first in 1u64..500,
            second in 1u64..500,
        ) {
            let (whole, a, b) = if left {
                (Command::left(first + second), Command::left(first), Command::left(second))
            } else {
                (Command::right(first + second), Command::right(first), Command::right(second))
            };

            let mut once = Dial::at(start);
            let mut twice = Dial::at(start);
            let hits_once = once.sweep(&whole);
            let hits_twice = twice.sweep(&a) + twice.sweep(&b);

            prop_assert_eq!(hits_once, hits_twice);
            prop_assert_eq!(once.position(), twice.position());
        }
    }
}
