#[derive(Debug, Clone)]
pub enum Message {
    // === HABIT MESSAGES ===
    HabitCreated(String),
    HabitUpdated(String),
    HabitDeleted(String),
    HabitNotFound(String),
    HabitsHeader,
    NoHabitsFound,
    HabitCompleted(String),
    HabitAlreadyCompleted(String),
    HabitCountsProgress(String), // single-goal action used on a countable habit
    HabitNotCountable(String),   // count action used on a single-goal habit
    HabitUnmarked(String),
    HabitIncremented(String, u32, u32), // name, current, target
    HabitAtTarget(String),
    HabitDecremented(String, u32, u32), // name, current, target
    HabitAtZero(String),
    ConfirmHabitDelete(String),
    EditingHabit(String),
    PromptHabitName,
    HabitNameEmpty,
    SelectHabitGoal,
    PromptHabitTarget,
    HabitTargetRange,
    SelectHabit,
    SelectHabitAction,

    // === MOOD MESSAGES ===
    MoodLogged(String), // emoji
    MoodUpdated,
    MoodDeleted,
    MoodNotFound(String),
    NoMoodsFound,
    MoodsHeader(i64), // day window
    MoodTrendHeader,
    SelectMoodEmoji,
    SelectMoodEntry,
    SelectMoodAction,
    PromptMoodNote,
    ConfirmMoodDelete,

    // === MUSIC MESSAGES ===
    MusicLogged(String, u32), // action label, minutes
    NoMusicLogs,
    MusicLogsHeader(i64), // day window
    MusicStatsHeader,
    MusicWeekTotal(u32),
    MusicStreak(u32),
    PromptSongTitle,
    SelectMusicEmotion,
    PromptMusicIntensity,
    MusicIntensityRange,
    PromptMusicMinutes,
    PromptMusicNotes,
    SelectMusicAction,

    // === READING MESSAGES ===
    ReadingSessionLogged(u32, u32), // current, target
    NoteSaved,
    NoteEmpty,
    NoNotesFound,
    NotesHeader,
    PromptNoteText,
    SelectReadAction,

    // === TIMER MESSAGES ===
    TimerStarted(u64), // minutes
    TimerFinished(u64),
    TimerCancelled,

    // === STORE MESSAGES ===
    StoreParseError(String),  // file path
    StoreCorruptKey(String),  // key
    NewDayReset(String),      // date
    StoreCleared,

    // === SETTINGS MESSAGES ===
    SelectSettingsSections,
    PromptProfileName,
    PromptProfileEmail,
    PromptAppName,
    SelectThemeColor,
    PromptHydrationEnabled,
    SelectHydrationInterval,
    SettingsSaved,
    SettingsRemoved,
    InvalidHexColor(String),
    InvalidInterval,
    AppNameEmpty,

    // === REMINDER MESSAGES ===
    RemindStarted(u64), // interval minutes
    RemindDisabled,
    RemindStopped,
    HydrationNudge,

    // === DEMO & RESET MESSAGES ===
    DemoDataLoaded,
    DemoAlreadyLoaded,
    ConfirmReset,
    OperationCancelled,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data type, format
    ExportingAllData,
    ExportCompleted(String), // file path

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // date
    OverallCompletion(usize, usize, f64), // completed, total, percent
    TodayMoodsHeader,
    TodayMusicMinutes(u32),
}
