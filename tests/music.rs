#[cfg(test)]
mod tests {
    use ritmo::libs::music::{self, MusicAction, MusicLog};

    const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

    fn log_ago(action: MusicAction, minutes: u32, millis_ago: i64) -> MusicLog {
        let mut log = MusicLog::new(action, minutes);
        log.timestamp -= millis_ago;
        log
    }

    #[test]
    fn test_quick_action_minutes() {
        assert_eq!(MusicAction::Listen.quick_minutes(), 10);
        assert_eq!(MusicAction::Sing.quick_minutes(), 10);
        assert_eq!(MusicAction::Playlist.quick_minutes(), 1);

        let log = MusicLog::quick(MusicAction::Playlist);
        assert_eq!(log.minutes, 1);
        assert_eq!(log.action, MusicAction::Playlist);
        assert!(log.song.is_none());
    }

    #[test]
    fn test_detailed_log_carries_fields() {
        let log = MusicLog::detailed(
            25,
            Some("Clair de Lune".to_string()),
            Some("Calm".to_string()),
            Some(7),
            Some("Evening practice".to_string()),
        );

        assert_eq!(log.action, MusicAction::Log);
        assert_eq!(log.minutes, 25);
        assert_eq!(log.song.as_deref(), Some("Clair de Lune"));
        assert_eq!(log.emotion.as_deref(), Some("Calm"));
        assert_eq!(log.intensity, Some(7));
        assert_eq!(log.notes.as_deref(), Some("Evening practice"));
    }

    #[test]
    fn test_action_names() {
        assert_eq!(MusicAction::Listen.to_string(), "listen");
        assert_eq!(MusicAction::Log.to_string(), "log");

        // Stored form matches the display form
        let json = serde_json::to_value(MusicAction::Timer).unwrap();
        assert_eq!(json, serde_json::json!("timer"));
    }

    #[test]
    fn test_week_minutes_window() {
        let logs = vec![
            log_ago(MusicAction::Listen, 30, 0),
            log_ago(MusicAction::Sing, 20, 2 * MILLIS_PER_DAY),
            log_ago(MusicAction::Log, 99, 8 * MILLIS_PER_DAY),
        ];

        let stats = music::stats(&logs);
        assert_eq!(stats.week_minutes, 50);
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        assert_eq!(music::stats(&[]).day_streak, 0);

        // Yesterday alone is no streak; today has no log
        let yesterday_only = vec![log_ago(MusicAction::Listen, 10, MILLIS_PER_DAY)];
        assert_eq!(music::stats(&yesterday_only).day_streak, 0);

        // Today and yesterday, then a gap before the older log
        let logs = vec![
            log_ago(MusicAction::Listen, 10, 0),
            log_ago(MusicAction::Sing, 10, MILLIS_PER_DAY),
            log_ago(MusicAction::Listen, 10, 3 * MILLIS_PER_DAY),
        ];
        assert_eq!(music::stats(&logs).day_streak, 2);
    }

    #[test]
    fn test_minutes_today() {
        let logs = vec![
            log_ago(MusicAction::Listen, 15, 0),
            log_ago(MusicAction::Sing, 5, 0),
            log_ago(MusicAction::Log, 99, 2 * MILLIS_PER_DAY),
        ];

        assert_eq!(music::minutes_today(&logs), 20);
    }

    #[test]
    fn test_logs_last_days_window_and_order() {
        let recent = log_ago(MusicAction::Listen, 10, 0);
        let older = log_ago(MusicAction::Sing, 10, 6 * MILLIS_PER_DAY);
        let stale = log_ago(MusicAction::Log, 10, 9 * MILLIS_PER_DAY);

        let logs = vec![stale, older.clone(), recent.clone()];
        let window = music::logs_last_days(&logs, 7);

        assert_eq!(window.len(), 2);
        assert_eq!(window[0], recent);
        assert_eq!(window[1], older);
    }

    #[test]
    fn test_optional_fields_skipped_in_storage() {
        let quick = MusicLog::quick(MusicAction::Listen);
        let json = serde_json::to_value(&quick).unwrap();

        assert_eq!(json["action"], "listen");
        assert_eq!(json["minutes"], 10);
        assert!(json.get("song").is_none());
        assert!(json.get("emotion").is_none());
        assert!(json.get("intensity").is_none());
        assert!(json.get("notes").is_none());
    }
}
