#[cfg(test)]
mod tests {
    use ritmo::libs::habit::{Habit, HabitGoal};
    use ritmo::libs::note::ReadingNote;
    use ritmo::libs::reading;
    use ritmo::libs::store::{Store, KEY_HABITS, KEY_READING_NOTES};
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ReadingTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ReadingTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ReadingTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ReadingTestContext)]
    #[test]
    #[serial]
    fn test_session_creates_missing_habit(_ctx: &mut ReadingTestContext) {
        let mut store = Store::open().unwrap();

        let progress = reading::log_session(&mut store).unwrap();
        assert_eq!(progress, (1, 1));

        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Reading");
        assert_eq!(habits[0].counts(), Some((1, 1)));
        assert!(habits[0].completed_today());
    }

    #[test_context(ReadingTestContext)]
    #[test]
    #[serial]
    fn test_session_matches_name_case_insensitively(_ctx: &mut ReadingTestContext) {
        let mut store = Store::open().unwrap();
        let habits = vec![Habit::single("Meditate"), Habit::countable("reading", 3)];
        store.save_collection(KEY_HABITS, &habits).unwrap();

        let progress = reading::log_session(&mut store).unwrap();
        assert_eq!(progress, (1, 3));

        // No duplicate habit appears and the rest stay untouched
        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Meditate");
        assert_eq!(habits[1].name, "reading");
        assert_eq!(habits[1].counts(), Some((1, 3)));
    }

    #[test_context(ReadingTestContext)]
    #[test]
    #[serial]
    fn test_session_converts_single_goal_habit(_ctx: &mut ReadingTestContext) {
        let mut store = Store::open().unwrap();
        let mut habit = Habit::single("Reading");
        habit.complete();
        store.save_collection(KEY_HABITS, &[habit]).unwrap();

        // Conversion restarts progress at zero before crediting the session
        let progress = reading::log_session(&mut store).unwrap();
        assert_eq!(progress, (1, 1));

        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits[0].goal, HabitGoal::Countable { current: 1, target: 1 });
    }

    #[test_context(ReadingTestContext)]
    #[test]
    #[serial]
    fn test_session_at_target_reports_without_overflow(_ctx: &mut ReadingTestContext) {
        let mut store = Store::open().unwrap();

        reading::log_session(&mut store).unwrap();
        let progress = reading::log_session(&mut store).unwrap();
        assert_eq!(progress, (1, 1));

        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits[0].counts(), Some((1, 1)));
    }

    #[test_context(ReadingTestContext)]
    #[test]
    #[serial]
    fn test_notes_round_trip(_ctx: &mut ReadingTestContext) {
        let mut store = Store::open().unwrap();
        let mut notes: Vec<ReadingNote> = store.load_collection(KEY_READING_NOTES).unwrap();
        assert!(notes.is_empty());

        // Newest first, like the journal entries
        notes.insert(0, ReadingNote::new("Chapter 3 was great"));
        notes.insert(0, ReadingNote::new("Started a new book"));
        store.save_collection(KEY_READING_NOTES, &notes).unwrap();

        let store = Store::open().unwrap();
        let loaded: Vec<ReadingNote> = store.load_collection(KEY_READING_NOTES).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "Started a new book");
        assert_eq!(loaded[1].text, "Chapter 3 was great");
    }
}
