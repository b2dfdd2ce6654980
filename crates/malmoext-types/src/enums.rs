//! Small fixed vocabularies: agent kinds, times of day, and compass headings.
//!
//! Integer values follow the engine's conventions. Times of day are absolute
//! tick marks within a 24000-tick day; headings are yaw angles where 0 faces
//! South and positive angles turn towards West.

use crate::structs::Vector;
use crate::taxonomy::{Taxonomy, vocabulary};

/// Number of ticks in one full day cycle.
pub const TICKS_PER_DAY: u64 = 24_000;

/// Number of ticks per real-time second.
pub const TICKS_PER_SECOND: u64 = 20;

// ---------------------------------------------------------------------------
// Agent type
// ---------------------------------------------------------------------------

vocabulary! {
    /// Who controls a participant in a mission.
    pub enum AgentType: str as "agent type" {
        /// Computer-controlled. The member name is `Cpu` while the engine
        /// spelling (and `Display`) is `CPU`.
        Cpu => "CPU",
        Human => "Human",
    }
}

// ---------------------------------------------------------------------------
// Time of day
// ---------------------------------------------------------------------------

vocabulary! {
    /// A named mark within the day cycle.
    ///
    /// Declaration order matches tick order, so the derived `Ord` sorts marks
    /// from the start of the day. The cycle itself wraps: [`TimeOfDay::next`]
    /// after `Midnight` is `Dawn`.
    pub enum TimeOfDay: i32 as "time of day" {
        /// Sunrise, tick 0.
        Dawn => 0,
        /// Sun at its highest, tick 6000.
        Noon => 6000,
        /// Sunset, tick 12000.
        Sunset => 12000,
        /// Middle of the night, tick 18000.
        Midnight => 18000,
    }
}

impl TimeOfDay {
    /// Tick offset of this mark from the start of the day.
    pub fn ticks(self) -> u64 {
        u64::try_from(self.as_i32()).unwrap_or(0)
    }

    /// The latest mark at or before `world_time` within its day.
    pub fn at_tick(world_time: u64) -> Self {
        let tick = tick_within_day(world_time);
        Self::members()
            .iter()
            .rev()
            .find(|mark| mark.ticks() <= tick)
            .copied()
            .unwrap_or(Self::Dawn)
    }

    /// The mark that follows this one, wrapping from `Midnight` to `Dawn`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dawn => Self::Noon,
            Self::Noon => Self::Sunset,
            Self::Sunset => Self::Midnight,
            Self::Midnight => Self::Dawn,
        }
    }

    /// Ticks from `world_time` until the next occurrence of this mark.
    ///
    /// Returns 0 when `world_time` sits exactly on the mark.
    pub fn ticks_until(self, world_time: u64) -> u64 {
        let now = tick_within_day(world_time);
        let target = self.ticks();
        if target >= now {
            target.saturating_sub(now)
        } else {
            TICKS_PER_DAY.saturating_sub(now).saturating_add(target)
        }
    }
}

/// Offset of `world_time` within its day.
const fn tick_within_day(world_time: u64) -> u64 {
    match world_time.checked_rem(TICKS_PER_DAY) {
        Some(tick) => tick,
        None => 0,
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

vocabulary! {
    /// A compass heading expressed as an engine yaw angle in degrees.
    pub enum Direction: i32 as "direction" {
        /// Facing negative Z, yaw 180.
        North => 180,
        /// Facing positive X, yaw -90.
        East => -90,
        /// Facing positive Z, yaw 0.
        South => 0,
        /// Facing negative X, yaw 90.
        West => 90,
    }
}

impl Direction {
    /// The heading as a floating-point yaw.
    pub const fn yaw(self) -> f64 {
        match self {
            Self::North => 180.0,
            Self::East => -90.0,
            Self::South => 0.0,
            Self::West => 90.0,
        }
    }

    /// The compass heading closest to an arbitrary yaw angle.
    ///
    /// Any finite angle is accepted and normalized into one turn first.
    /// Quadrant boundaries belong to the heading clockwise of them. Returns
    /// `None` for NaN or infinite input.
    pub fn from_yaw(yaw: f64) -> Option<Self> {
        if !yaw.is_finite() {
            return None;
        }
        let turn = yaw.rem_euclid(360.0);
        let heading = if !(45.0..315.0).contains(&turn) {
            Self::South
        } else if turn < 135.0 {
            Self::West
        } else if turn < 225.0 {
            Self::North
        } else {
            Self::East
        };
        Some(heading)
    }

    /// The heading pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit displacement one block along this heading.
    pub const fn unit_vector(self) -> Vector {
        match self {
            Self::North => Vector::new(0.0, 0.0, -1.0),
            Self::East => Vector::new(1.0, 0.0, 0.0),
            Self::South => Vector::new(0.0, 0.0, 1.0),
            Self::West => Vector::new(-1.0, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_type_uses_engine_spelling() {
        assert_eq!(AgentType::try_parse("CPU").ok(), Some(AgentType::Cpu));
        assert!(!AgentType::contains("cpu"));
        assert_eq!(AgentType::Human.as_str(), "Human");
        assert_eq!(AgentType::Cpu.name(), "Cpu");
        assert_eq!(AgentType::Cpu.to_string(), "CPU");
    }

    #[test]
    fn times_of_day_increase_within_one_day() {
        let marks = TimeOfDay::members();
        for pair in marks.windows(2) {
            if let [earlier, later] = pair {
                assert!(earlier < later);
                assert!(earlier.as_i32() < later.as_i32());
            }
        }
        for mark in marks {
            assert!(mark.ticks() < TICKS_PER_DAY);
            assert_eq!(i64::from(mark.as_i32()), i64::try_from(mark.ticks()).unwrap_or(-1));
        }
    }

    #[test]
    fn at_tick_picks_latest_mark() {
        assert_eq!(TimeOfDay::at_tick(0), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::at_tick(5_999), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::at_tick(6_000), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::at_tick(13_000), TimeOfDay::Sunset);
        assert_eq!(TimeOfDay::at_tick(23_999), TimeOfDay::Midnight);
        assert_eq!(TimeOfDay::at_tick(24_000 * 3 + 6_500), TimeOfDay::Noon);
    }

    #[test]
    fn next_wraps_around_the_day() {
        assert_eq!(TimeOfDay::Dawn.next(), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::Midnight.next(), TimeOfDay::Dawn);
    }

    #[test]
    fn ticks_until_is_cyclic() {
        assert_eq!(TimeOfDay::Noon.ticks_until(0), 6_000);
        assert_eq!(TimeOfDay::Noon.ticks_until(6_000), 0);
        assert_eq!(TimeOfDay::Dawn.ticks_until(18_000), 6_000);
        assert_eq!(TimeOfDay::Sunset.ticks_until(24_000 + 13_000), 23_000);
        assert_eq!(TimeOfDay::Midnight.ticks_until(23_999), 18_001);
        assert_eq!(TimeOfDay::Dawn.ticks_until(u64::MAX), 8_385);
        assert_eq!(TimeOfDay::at_tick(u64::MAX), TimeOfDay::Sunset);
    }

    #[test]
    fn direction_values_follow_engine_yaw() {
        assert_eq!(Direction::try_from(180).ok(), Some(Direction::North));
        assert_eq!(Direction::try_from(-90).ok(), Some(Direction::East));
        assert_eq!(i32::from(Direction::West), 90);
        assert!(Direction::try_from(270).is_err());
    }

    #[test]
    fn from_yaw_snaps_to_nearest_heading() {
        assert_eq!(Direction::from_yaw(0.0), Some(Direction::South));
        assert_eq!(Direction::from_yaw(44.9), Some(Direction::South));
        assert_eq!(Direction::from_yaw(45.0), Some(Direction::West));
        assert_eq!(Direction::from_yaw(-180.0), Some(Direction::North));
        assert_eq!(Direction::from_yaw(270.0), Some(Direction::East));
        assert_eq!(Direction::from_yaw(-90.0), Some(Direction::East));
        assert_eq!(Direction::from_yaw(-30.0), Some(Direction::South));
        assert_eq!(Direction::from_yaw(f64::NAN), None);
        for heading in Direction::members() {
            assert_eq!(Direction::from_yaw(heading.yaw()), Some(*heading));
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for heading in Direction::members() {
            assert_ne!(heading.opposite(), *heading);
            assert_eq!(heading.opposite().opposite(), *heading);
        }
    }

    #[test]
    fn unit_vectors_agree_with_yaw_convention() {
        let origin = Vector::ORIGIN;
        for heading in Direction::members() {
            let step = heading.unit_vector();
            let yaw = origin.yaw_towards(step);
            assert_eq!(yaw.and_then(Direction::from_yaw), Some(*heading));
        }
    }
}
