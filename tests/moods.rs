#[cfg(test)]
mod tests {
    use ritmo::libs::mood::{self, MoodEntry, MOOD_EMOJIS};

    const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
    const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

    fn entry_ago(emoji: &str, millis_ago: i64) -> MoodEntry {
        let mut entry = MoodEntry::new(emoji, None);
        entry.timestamp -= millis_ago;
        entry
    }

    #[test]
    fn test_summary_counts_and_totals() {
        let entries = vec![
            entry_ago("😊", MILLIS_PER_HOUR),
            entry_ago("😐", 2 * MILLIS_PER_HOUR),
            entry_ago("😊", 3 * MILLIS_PER_HOUR),
        ];

        let summary = mood::summary_text(&entries);
        assert_eq!(
            summary,
            "Mood Summary (Last 7 Days):\n\n😊: 2 times\n😐: 1 times\n\nTotal entries: 3"
        );
    }

    #[test]
    fn test_summary_ties_keep_first_seen_order() {
        // Two dominant entries, then two tied emojis; the tie order follows
        // which emoji appears first walking newest to oldest
        let entries = vec![
            entry_ago("😄", MILLIS_PER_HOUR),
            entry_ago("😢", 2 * MILLIS_PER_HOUR),
            entry_ago("😐", 3 * MILLIS_PER_HOUR),
            entry_ago("😐", 4 * MILLIS_PER_HOUR),
        ];

        let summary = mood::summary_text(&entries);
        assert_eq!(
            summary,
            "Mood Summary (Last 7 Days):\n\n😐: 2 times\n😄: 1 times\n😢: 1 times\n\nTotal entries: 4"
        );
    }

    #[test]
    fn test_summary_placeholder_when_window_empty() {
        assert_eq!(mood::summary_text(&[]), "No mood entries in the last 7 days.");

        // Entries outside the seven-day window do not count
        let stale = vec![entry_ago("😊", 8 * MILLIS_PER_DAY)];
        assert_eq!(mood::summary_text(&stale), "No mood entries in the last 7 days.");
    }

    #[test]
    fn test_last_days_window_and_order() {
        let recent = entry_ago("😊", MILLIS_PER_HOUR);
        let older = entry_ago("😐", 6 * MILLIS_PER_DAY);
        let stale = entry_ago("😢", 8 * MILLIS_PER_DAY);

        // Stored oldest first on purpose; the result re-sorts newest first
        let entries = vec![stale, older.clone(), recent.clone()];
        let window = mood::moods_last_days(&entries, 7);

        assert_eq!(window.len(), 2);
        assert_eq!(window[0], recent);
        assert_eq!(window[1], older);
    }

    #[test]
    fn test_daily_counts_cover_every_day() {
        let today_a = MoodEntry::new("😊", None);
        let today_b = MoodEntry::new("😄", None);
        let earlier = entry_ago("😐", 3 * MILLIS_PER_DAY);

        let counts = mood::daily_counts(&[today_a.clone(), today_b, earlier.clone()], 7);

        assert_eq!(counts.len(), 7);
        // Oldest day first, today last
        assert!(counts[0].0 < counts[6].0);
        assert_eq!(counts[6].0, today_a.recorded_date().unwrap());
        assert_eq!(counts[6].1, 2);

        let earlier_day = counts
            .iter()
            .find(|(date, _)| Some(*date) == earlier.recorded_date())
            .unwrap();
        assert_eq!(earlier_day.1, 1);

        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_note_skipped_when_absent() {
        let bare = MoodEntry::new("😊", None);
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("note").is_none());

        let noted = MoodEntry::new("😄", Some("Great workout!".to_string()));
        let json = serde_json::to_value(&noted).unwrap();
        assert_eq!(json["note"], "Great workout!");

        let back: MoodEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back.note.as_deref(), Some("Great workout!"));
    }

    #[test]
    fn test_emoji_palette_size() {
        assert_eq!(MOOD_EMOJIS.len(), 12);
        assert!(MOOD_EMOJIS.contains(&"😊"));
        assert!(MOOD_EMOJIS.contains(&"🤬"));
    }
}
