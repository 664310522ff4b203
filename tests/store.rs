#[cfg(test)]
mod tests {
    use ritmo::libs::data_storage::DataStorage;
    use ritmo::libs::habit::Habit;
    use ritmo::libs::mood::MoodEntry;
    use ritmo::libs::store::{Store, StoreError, KEY_HABITS, KEY_MOODS, STORE_FILE_NAME};
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_collection_round_trip(_ctx: &mut StoreTestContext) {
        let mut store = Store::open().unwrap();
        let habits = vec![Habit::countable("Drink Water", 8), Habit::single("Meditate")];
        store.save_collection(KEY_HABITS, &habits).unwrap();

        // Re-open from disk and verify order survived
        let store = Store::open().unwrap();
        let loaded: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(loaded, habits);
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_missing_key_loads_empty(_ctx: &mut StoreTestContext) {
        let store = Store::open().unwrap();
        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert!(habits.is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_corrupt_key_is_isolated(_ctx: &mut StoreTestContext) {
        let mut store = Store::open().unwrap();
        let moods = vec![MoodEntry::new("😊", None)];
        store.save_collection(KEY_MOODS, &moods).unwrap();

        // Corrupt the habits key directly on disk
        let path = DataStorage::new().get_path(STORE_FILE_NAME).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let mut doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        doc[KEY_HABITS] = serde_json::json!({ "not": "a list" });
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        let store = Store::open().unwrap();
        let err = store.load_collection::<Habit>(KEY_HABITS).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        // The warning loader substitutes an empty working copy
        let fallback: Vec<Habit> = store.load_collection_or_warn(KEY_HABITS);
        assert!(fallback.is_empty());

        // Other keys are unaffected
        let loaded: Vec<MoodEntry> = store.load_collection(KEY_MOODS).unwrap();
        assert_eq!(loaded, moods);
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_settings_defaults(_ctx: &mut StoreTestContext) {
        let store = Store::open().unwrap();
        assert!(!store.hydration_enabled());
        assert_eq!(store.hydration_interval_minutes(), 60);
        assert_eq!(store.theme_color(), "#F8BBD9");
        assert_eq!(store.app_name(), "Habbit Tracker");
        assert!(store.last_open_date().is_none());
        assert!(!store.demo_data_loaded());
        assert!(!store.onboarding_done());
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_settings_persist_across_reopen(_ctx: &mut StoreTestContext) {
        let mut store = Store::open().unwrap();
        store.set_hydration_enabled(true).unwrap();
        store.set_hydration_interval_minutes(120).unwrap();
        store.set_theme_color("#6750A4").unwrap();
        store.set_app_name("My Tracker").unwrap();
        store.set_profile_name("Alex").unwrap();

        let store = Store::open().unwrap();
        assert!(store.hydration_enabled());
        assert_eq!(store.hydration_interval_minutes(), 120);
        assert_eq!(store.theme_color(), "#6750A4");
        assert_eq!(store.app_name(), "My Tracker");
        assert_eq!(store.profile_name(), "Alex");
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_clear_all_empties_document(_ctx: &mut StoreTestContext) {
        let mut store = Store::open().unwrap();
        store.save_collection(KEY_HABITS, &[Habit::single("Meditate")]).unwrap();
        store.set_hydration_enabled(true).unwrap();
        store.set_last_open_date("2024-06-15").unwrap();

        store.clear_all().unwrap();

        let store = Store::open().unwrap();
        let habits: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert!(habits.is_empty());
        assert!(!store.hydration_enabled());
        assert!(store.last_open_date().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_clear_settings_keeps_records(_ctx: &mut StoreTestContext) {
        let mut store = Store::open().unwrap();
        let habits = vec![Habit::single("Meditate")];
        store.save_collection(KEY_HABITS, &habits).unwrap();
        store.set_theme_color("#6750A4").unwrap();
        store.set_onboarding_done(true).unwrap();
        store.set_last_open_date("2024-06-15").unwrap();

        store.clear_settings().unwrap();

        let store = Store::open().unwrap();
        let loaded: Vec<Habit> = store.load_collection(KEY_HABITS).unwrap();
        assert_eq!(loaded, habits);
        assert_eq!(store.theme_color(), "#F8BBD9");
        assert!(!store.onboarding_done());

        // The rollover marker stays, so removing settings does not trigger a reset
        assert_eq!(store.last_open_date().as_deref(), Some("2024-06-15"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    #[serial]
    fn test_non_object_document_rejected(_ctx: &mut StoreTestContext) {
        let path = DataStorage::new().get_path(STORE_FILE_NAME).unwrap();
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(Store::open().is_err());
    }
}
