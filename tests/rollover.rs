#[cfg(test)]
mod tests {
    use ritmo::libs::data_storage::DataStorage;
    use ritmo::libs::habit::{self, Habit};
    use ritmo::libs::rollover;
    use ritmo::libs::store::{Store, KEY_HABITS, STORE_FILE_NAME};
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RolloverTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RolloverTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RolloverTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(RolloverTestContext)]
    #[test]
    #[serial]
    fn test_first_open_resets_and_sets_marker(_ctx: &mut RolloverTestContext) {
        let mut store = Store::open().unwrap();
        let mut habit = Habit::countable("Drink Water", 8);
        habit.increment();
        habit.increment();
        store.save_collection(KEY_HABITS, &[habit]).unwrap();

        // No marker yet, so the first check counts as a new day
        assert!(rollover::check_and_reset(&mut store).unwrap());

        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits[0].counts(), Some((0, 8)));
        assert_eq!(habits[0].last_updated, habit::today_string());
        assert_eq!(store.last_open_date(), Some(habit::today_string()));
    }

    #[test_context(RolloverTestContext)]
    #[test]
    #[serial]
    fn test_same_day_is_a_no_op(_ctx: &mut RolloverTestContext) {
        let mut store = Store::open().unwrap();
        assert!(rollover::check_and_reset(&mut store).unwrap());

        // Progress made after the reset survives further checks today
        let mut habit = Habit::countable("Drink Water", 8);
        habit.increment();
        store.save_collection(KEY_HABITS, &[habit]).unwrap();

        assert!(!rollover::check_and_reset(&mut store).unwrap());
        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits[0].counts(), Some((1, 8)));
    }

    #[test_context(RolloverTestContext)]
    #[test]
    #[serial]
    fn test_stale_marker_resets_all_habits(_ctx: &mut RolloverTestContext) {
        let mut store = Store::open().unwrap();
        let mut water = Habit::countable("Drink Water", 8);
        water.increment();
        let mut meditate = Habit::single("Meditate");
        meditate.complete();
        store.save_collection(KEY_HABITS, &[water, meditate]).unwrap();
        store.set_last_open_date("2020-01-01").unwrap();

        assert!(rollover::check_and_reset(&mut store).unwrap());

        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(habits[0].counts(), Some((0, 8)));
        assert!(!habits[1].completed_today());
        assert_eq!(store.last_open_date(), Some(habit::today_string()));
    }

    #[test_context(RolloverTestContext)]
    #[test]
    #[serial]
    fn test_corrupt_habits_skip_reset_but_advance_marker(_ctx: &mut RolloverTestContext) {
        let mut store = Store::open().unwrap();
        store.set_last_open_date("2020-01-01").unwrap();

        // Corrupt the habit collection directly on disk
        let path = DataStorage::new().get_path(STORE_FILE_NAME).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let mut doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        doc[KEY_HABITS] = serde_json::json!(42);
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        let mut store = Store::open().unwrap();
        assert!(!rollover::check_and_reset(&mut store).unwrap());

        // The corrupt value is still on disk, but the marker moved on
        assert!(store.load_collection::<Habit>(KEY_HABITS).is_err());
        assert_eq!(store.last_open_date(), Some(habit::today_string()));

        // The next check is an ordinary same-day no-op
        assert!(!rollover::check_and_reset(&mut store).unwrap());
    }
}
