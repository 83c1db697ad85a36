// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use app_config::CorrectionConfig;
use app_controller::Controller;
use dictionary::{dictionary_language_for, WordListDictionary};
use file_utils::FileManager;

mod app_config;
mod app_controller;
mod correction;
mod dictionary;
mod errors;
mod file_utils;
mod similarity;
mod stamp;
mod subtitle_processor;
mod sync;
mod timecode;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum StampCommands {
    /// Insert a creator stamp as entry #1, re-indexing existing entries
    Add {
        /// SRT file to stamp
        file: PathBuf,

        /// Stamp start time (HH:MM:SS,mmm)
        #[arg(long, default_value = "00:00:05,000")]
        start: String,

        /// Stamp end time (HH:MM:SS,mmm)
        #[arg(long, default_value = "00:00:15,000")]
        end: String,

        /// Stamp text
        #[arg(long)]
        text: String,
    },

    /// Remove the creator stamp and re-index remaining entries
    Remove {
        /// SRT file to unstamp
        file: PathBuf,
    },

    /// Check whether a stamp interval would collide with existing entries
    Check {
        /// SRT file to check
        file: PathBuf,

        /// Stamp start time (HH:MM:SS,mmm)
        #[arg(long, default_value = "00:00:05,000")]
        start: String,

        /// Stamp end time (HH:MM:SS,mmm)
        #[arg(long, default_value = "00:00:15,000")]
        end: String,
    },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show entry count, duration and a preview of a subtitle file
    Info {
        /// SRT file to inspect
        file: PathBuf,
    },

    /// Replace the text of a single entry, preserving its timestamps
    Edit {
        /// SRT file to edit
        file: PathBuf,

        /// Index of the entry to edit
        #[arg(long)]
        index: usize,

        /// New entry text (use \n for line breaks)
        #[arg(long)]
        text: String,
    },

    /// Manage the creator stamp of a subtitle file
    Stamp {
        #[command(subcommand)]
        command: StampCommands,
    },

    /// Run the correction pipeline over a subtitle file
    Correct {
        /// SRT file to correct
        file: PathBuf,

        /// Replacement spec, e.g. "|=I,`='"
        #[arg(long, default_value = "")]
        replacements: String,

        /// Comma-separated characters and words to ignore
        #[arg(long, default_value = "")]
        ignore: String,

        /// Subtitle language code (e.g. 'en', 'no')
        #[arg(long, default_value = "en")]
        language: String,

        /// Word-list file for the spell-check stage, one word per line
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Skip the replacement stage
        #[arg(long)]
        no_replacements: bool,

        /// Skip the invalid-character scan
        #[arg(long)]
        no_charset: bool,

        /// Skip the spell-check stage
        #[arg(long)]
        no_spelling: bool,
    },

    /// Compare two subtitle files and suggest an alignment offset
    Sync {
        /// Reference SRT file
        reference: PathBuf,

        /// Target SRT file to be aligned
        target: PathBuf,

        /// Apply the suggested offset to the target file
        #[arg(long)]
        apply: bool,
    },

    /// Generate shell completions for srtkit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srtkit - SubRip subtitle toolkit
///
/// Parses, stamps, corrects and synchronizes SRT subtitle files produced by
/// extraction and OCR tools.
#[derive(Parser, Debug)]
#[command(name = "srtkit")]
#[command(version = "0.1.0")]
#[command(about = "SRT subtitle stamping, correction and synchronization")]
#[command(long_about = "srtkit manages SRT subtitle files: creator stamping with collision checks,
staged OCR text correction, and cross-track synchronization.

EXAMPLES:
    srtkit info movie.srt                              # Show entry count and preview
    srtkit stamp add movie.srt --text 'Subs prepared by srtkit'
    srtkit stamp check movie.srt --start 00:00:05,000 --end 00:00:15,000
    srtkit correct movie.srt --replacements '|=I' --dictionary words.txt
    srtkit sync reference.srt target.srt --apply       # Align target to reference
    srtkit completions bash > srtkit.bash              # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Emit machine-readable JSON reports
    #[arg(long, global = true)]
    json: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn parse_time_arg(text: &str, name: &str) -> Result<u64> {
    let ms = timecode::parse(text);
    if ms == 0 && text != "00:00:00,000" {
        return Err(anyhow!("Invalid {} time: {:?} (expected HH:MM:SS,mmm)", name, text));
    }
    Ok(ms)
}

fn print_report<T: serde::Serialize>(report: &T, json: bool, human: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        human();
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srtkit", &mut std::io::stdout());
            Ok(())
        }

        Commands::Info { file } => {
            let controller = Controller::new();
            let info = controller.info(&file)?;
            print_report(&info, cli.json, || {
                println!("Entries:  {}", info.entry_count);
                if let Some(duration) = &info.duration {
                    println!("Duration: {}", duration);
                }
                if let Some(preview) = &info.preview {
                    println!("\n{}", preview);
                }
            })
        }

        Commands::Edit { file, index, text } => {
            let controller = Controller::new();
            let text = text.replace("\\n", "\n");
            controller.edit_entry(&file, index, &text)?;
            println!("Updated entry {}", index);
            Ok(())
        }

        Commands::Stamp { command } => run_stamp(command, cli.json),

        Commands::Correct {
            file,
            replacements,
            ignore,
            language,
            dictionary,
            no_replacements,
            no_charset,
            no_spelling,
        } => {
            let mut config = CorrectionConfig::from_compact(&replacements, &ignore, &language)?;
            config.replacements_enabled = !no_replacements;
            config.charset_scan_enabled = !no_charset;
            config.spelling_enabled = !no_spelling;

            let word_list = dictionary
                .map(|path| -> Result<WordListDictionary> {
                    let text = FileManager::read_to_string_lossy(&path)
                        .with_context(|| format!("Failed to load dictionary: {:?}", path))?;
                    Ok(WordListDictionary::from_text(
                        dictionary_language_for(&config.language),
                        &text,
                    ))
                })
                .transpose()?;

            let controller = Controller::with_config(config)?;
            let outcome = controller.correct(
                &file,
                word_list.as_ref().map(|d| d as &dyn dictionary::Dictionary),
            )?;

            print_report(&outcome, cli.json, || {
                println!("Replacements made:  {}", outcome.replacements_made);
                println!("Invalid characters: {}", outcome.invalid_char_count);
                println!("Spelling issues:    {}", outcome.spelling_count);
                if outcome.has_image_source {
                    println!("An image source (.sup) exists for visual verification");
                }
                for issue in &outcome.issues {
                    match issue {
                        correction::CorrectionIssue::InvalidCharacter(i) => {
                            println!(
                                "  [char] entry {} pos {}: {:?} in {:?}",
                                i.entry_index, i.position, i.character, i.text
                            );
                        }
                        correction::CorrectionIssue::Spelling(i) => {
                            println!(
                                "  [word] entry {} pos {}: {:?} (suggestions: {})",
                                i.entry_index,
                                i.position,
                                i.word,
                                i.suggestions.join(", ")
                            );
                        }
                    }
                }
            })
        }

        Commands::Sync {
            reference,
            target,
            apply,
        } => {
            let controller = Controller::new();
            let report = controller.sync(&reference, &target)?;

            print_report(&report, cli.json, || {
                println!(
                    "Matched {} of {} target entries against {} reference entries",
                    report.matches.len(),
                    report.target_count,
                    report.reference_count
                );
                println!("Suggested offset: {}ms", report.suggested_offset_ms);
            })?;

            if apply {
                controller.apply_offset(&target, -report.suggested_offset_ms)?;
                println!("Applied {}ms to {:?}", -report.suggested_offset_ms, target);
            }
            Ok(())
        }
    }
}

fn run_stamp(command: StampCommands, json: bool) -> Result<()> {
    let controller = Controller::new();

    match command {
        StampCommands::Add {
            file,
            start,
            end,
            text,
        } => {
            let start_ms = parse_time_arg(&start, "start")?;
            let end_ms = parse_time_arg(&end, "end")?;
            controller.add_stamp(&file, start_ms, end_ms, &text)?;
            println!("Creator stamp added");
            Ok(())
        }

        StampCommands::Remove { file } => {
            controller.remove_stamp(&file)?;
            println!("Creator stamp removed");
            Ok(())
        }

        StampCommands::Check { file, start, end } => {
            let start_ms = parse_time_arg(&start, "start")?;
            let end_ms = parse_time_arg(&end, "end")?;
            let check = controller.check_stamp(&file, start_ms, end_ms)?;

            print_report(&check, json, || {
                if check.already_stamped {
                    println!("A creator stamp already exists");
                }
                if check.collision {
                    println!(
                        "Collides with entries: {}",
                        check
                            .overlapping
                            .iter()
                            .map(|i| i.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                } else {
                    println!("No collision");
                }
            })
        }
    }
}
