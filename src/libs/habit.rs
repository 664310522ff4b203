//! Habit records and their daily state machine.
//!
//! A habit is either a single daily goal (done / not done) or a countable
//! goal with a numeric target. The goal kind is a tagged enum, so a single
//! habit cannot carry a target count and a countable one cannot carry a
//! completion flag. All forward transitions are guarded and report success
//! with a boolean; callers skip persistence when a transition fails.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily goal kind, stored with an internal `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HabitGoal {
    Single { completed: bool },
    Countable { current: u32, target: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub goal: HabitGoal,
    pub last_updated: String, // %Y-%m-%d
}

impl Habit {
    pub fn single(name: &str) -> Self {
        Self::create(name, HabitGoal::Single { completed: false })
    }

    pub fn countable(name: &str, target: u32) -> Self {
        Self::create(name, HabitGoal::Countable { current: 0, target })
    }

    fn create(name: &str, goal: HabitGoal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            goal,
            last_updated: today_string(),
        }
    }

    /// Marks a single-goal habit as done. Fails (no mutation) when the
    /// habit is already done or tracks a count.
    pub fn complete(&mut self) -> bool {
        let changed = match &mut self.goal {
            HabitGoal::Single { completed } if !*completed => {
                *completed = true;
                true
            }
            _ => false,
        };
        if changed {
            self.touch();
        }
        changed
    }

    /// Resets today's progress directly, bypassing the guarded transitions.
    /// The guarded API only moves forward; un-marking is a plain reset and
    /// leaves the update stamp alone.
    pub fn uncomplete(&mut self) {
        match &mut self.goal {
            HabitGoal::Single { completed } => *completed = false,
            HabitGoal::Countable { current, .. } => *current = 0,
        }
    }

    /// Adds one to a countable habit. Fails (no mutation) at the target or
    /// on a single-goal habit.
    pub fn increment(&mut self) -> bool {
        let changed = match &mut self.goal {
            HabitGoal::Countable { current, target } if *current < *target => {
                *current += 1;
                true
            }
            _ => false,
        };
        if changed {
            self.touch();
        }
        changed
    }

    /// Removes one from a countable habit. Fails (no mutation) at zero or
    /// on a single-goal habit.
    pub fn decrement(&mut self) -> bool {
        let changed = match &mut self.goal {
            HabitGoal::Countable { current, .. } if *current > 0 => {
                *current -= 1;
                true
            }
            _ => false,
        };
        if changed {
            self.touch();
        }
        changed
    }

    /// Zeroes today's progress and stamps the record, used by the
    /// day-rollover reset.
    pub fn reset_daily(&mut self, today: &str) {
        self.uncomplete();
        self.last_updated = today.to_string();
    }

    pub fn completed_today(&self) -> bool {
        match &self.goal {
            HabitGoal::Single { completed } => *completed,
            HabitGoal::Countable { current, target } => current >= target,
        }
    }

    /// Progress for today in percent: 0 or 100 for single goals, a clamped
    /// ratio for countable ones. A zero target reads as 0 rather than
    /// dividing by it.
    pub fn progress_percent(&self) -> f64 {
        match &self.goal {
            HabitGoal::Single { completed } => {
                if *completed {
                    100.0
                } else {
                    0.0
                }
            }
            HabitGoal::Countable { current, target } => {
                if *target == 0 {
                    return 0.0;
                }
                (*current as f64 / *target as f64 * 100.0).min(100.0)
            }
        }
    }

    /// Current and target count, for countable goals only.
    pub fn counts(&self) -> Option<(u32, u32)> {
        match self.goal {
            HabitGoal::Countable { current, target } => Some((current, target)),
            HabitGoal::Single { .. } => None,
        }
    }

    pub fn goal_label(&self) -> &'static str {
        match self.goal {
            HabitGoal::Single { .. } => "single",
            HabitGoal::Countable { .. } => "countable",
        }
    }

    /// Today's progress as table text: "2/8" for counts, "done" or
    /// "not done" for single goals.
    pub fn today_label(&self) -> String {
        match self.goal {
            HabitGoal::Countable { current, target } => format!("{}/{}", current, target),
            HabitGoal::Single { completed } => {
                if completed {
                    "done".to_string()
                } else {
                    "not done".to_string()
                }
            }
        }
    }

    fn touch(&mut self) {
        self.last_updated = today_string();
    }
}

/// Today's local calendar date as the stamp format used throughout.
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Case-insensitive lookup by id or name.
pub fn find_index(habits: &[Habit], ident: &str) -> Option<usize> {
    let needle = ident.to_lowercase();
    habits.iter().position(|h| h.id == ident || h.name.to_lowercase() == needle)
}

/// Share of habits completed today, in percent. Zero when the list is empty.
pub fn overall_completion(habits: &[Habit]) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }
    let completed = habits.iter().filter(|h| h.completed_today()).count();
    completed as f64 / habits.len() as f64 * 100.0
}
