pub mod demo;
pub mod export;
pub mod habit;
pub mod init;
pub mod mood;
pub mod music;
pub mod read;
pub mod remind;
pub mod reset;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Set up profile, appearance, and reminders")]
    Init(init::InitArgs),
    #[command(about = "Track daily habits")]
    Habit(habit::HabitArgs),
    #[command(about = "Journal your mood")]
    Mood(mood::MoodArgs),
    #[command(about = "Log music listening and practice")]
    Music(music::MusicArgs),
    #[command(about = "Log reading sessions and notes")]
    Read(read::ReadArgs),
    #[command(about = "Today's habits, moods, and music at a glance")]
    Sum,
    #[command(about = "Run hydration reminders in the foreground")]
    Remind(remind::RemindArgs),
    #[command(about = "Export tracked data")]
    Export(export::ExportArgs),
    #[command(about = "Load demo data")]
    Demo(demo::DemoArgs),
    #[command(about = "Delete all tracked data")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Habit(args) => habit::cmd(args),
            Commands::Mood(args) => mood::cmd(args),
            Commands::Music(args) => music::cmd(args).await,
            Commands::Read(args) => read::cmd(args).await,
            Commands::Sum => sum::cmd(),
            Commands::Remind(args) => remind::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
            Commands::Demo(args) => demo::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
