#[cfg(test)]
mod tests {
    use ritmo::libs::habit::{self, Habit, HabitGoal};

    #[test]
    fn test_single_habit_completion() {
        let mut habit = Habit::single("Meditate");
        assert_eq!(habit.goal, HabitGoal::Single { completed: false });
        assert!(!habit.completed_today());
        assert_eq!(habit.progress_percent(), 0.0);

        // First completion succeeds
        assert!(habit.complete());
        assert!(habit.completed_today());
        assert_eq!(habit.progress_percent(), 100.0);

        // Completing again is rejected
        assert!(!habit.complete());
        assert!(habit.completed_today());
    }

    #[test]
    fn test_complete_rejected_on_countable() {
        let mut habit = Habit::countable("Drink Water", 8);
        assert!(!habit.complete());
        assert_eq!(habit.counts(), Some((0, 8)));
    }

    #[test]
    fn test_countable_increment_stops_at_target() {
        let mut habit = Habit::countable("Push-ups", 2);

        assert!(habit.increment());
        assert!(habit.increment());
        assert_eq!(habit.counts(), Some((2, 2)));
        assert!(habit.completed_today());

        // At the target the count stays put
        assert!(!habit.increment());
        assert_eq!(habit.counts(), Some((2, 2)));
    }

    #[test]
    fn test_countable_decrement_stops_at_zero() {
        let mut habit = Habit::countable("Stretch", 3);

        assert!(!habit.decrement());
        assert_eq!(habit.counts(), Some((0, 3)));

        habit.increment();
        assert!(habit.decrement());
        assert_eq!(habit.counts(), Some((0, 3)));
    }

    #[test]
    fn test_count_transitions_rejected_on_single() {
        let mut habit = Habit::single("Meditate");
        assert!(!habit.increment());
        assert!(!habit.decrement());
        assert!(!habit.completed_today());
    }

    #[test]
    fn test_progress_percent_clamped() {
        let mut habit = Habit::countable("Read pages", 4);
        habit.increment();
        assert_eq!(habit.progress_percent(), 25.0);

        // Progress past the target reads as 100, never more
        habit.goal = HabitGoal::Countable { current: 9, target: 4 };
        assert_eq!(habit.progress_percent(), 100.0);

        // A zero target never divides
        habit.goal = HabitGoal::Countable { current: 3, target: 0 };
        assert_eq!(habit.progress_percent(), 0.0);
    }

    #[test]
    fn test_uncomplete_keeps_update_stamp() {
        let mut habit = Habit::single("Meditate");
        habit.complete();
        habit.last_updated = "2024-05-01".to_string();

        habit.uncomplete();
        assert!(!habit.completed_today());
        assert_eq!(habit.last_updated, "2024-05-01");
    }

    #[test]
    fn test_reset_daily_stamps_record() {
        let mut habit = Habit::countable("Drink Water", 8);
        habit.increment();
        habit.increment();

        habit.reset_daily("2024-06-15");
        assert_eq!(habit.counts(), Some((0, 8)));
        assert_eq!(habit.last_updated, "2024-06-15");
    }

    #[test]
    fn test_today_label() {
        let mut single = Habit::single("Meditate");
        assert_eq!(single.today_label(), "not done");
        single.complete();
        assert_eq!(single.today_label(), "done");

        let mut countable = Habit::countable("Drink Water", 8);
        countable.increment();
        assert_eq!(countable.today_label(), "1/8");
    }

    #[test]
    fn test_find_index_by_id_and_name() {
        let habits = vec![Habit::single("Meditate"), Habit::countable("Drink Water", 8)];

        assert_eq!(habit::find_index(&habits, &habits[1].id), Some(1));
        assert_eq!(habit::find_index(&habits, "meditate"), Some(0));
        assert_eq!(habit::find_index(&habits, "DRINK WATER"), Some(1));
        assert_eq!(habit::find_index(&habits, "missing"), None);
    }

    #[test]
    fn test_overall_completion() {
        assert_eq!(habit::overall_completion(&[]), 0.0);

        let mut habits = vec![
            Habit::single("Meditate"),
            Habit::single("Exercise"),
            Habit::countable("Drink Water", 1),
        ];
        habits[0].complete();
        habits[2].increment();

        // Two of three habits are done today
        let percent = habit::overall_completion(&habits);
        assert!((percent - 200.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_goal_serialization_uses_internal_tag() {
        let habit = Habit::countable("Drink Water", 8);
        let json = serde_json::to_value(&habit).unwrap();

        // The goal kind is flattened into the record with a `type` tag
        assert_eq!(json["type"], "countable");
        assert_eq!(json["current"], 0);
        assert_eq!(json["target"], 8);
        assert!(json.get("goal").is_none());

        let back: Habit = serde_json::from_value(json).unwrap();
        assert_eq!(back, habit);
    }

    #[test]
    fn test_new_habit_stamped_today() {
        let habit = Habit::single("Meditate");
        assert_eq!(habit.last_updated, habit::today_string());
        assert!(!habit.id.is_empty());
    }
}
