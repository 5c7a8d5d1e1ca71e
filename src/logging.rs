//! Logger setup on top of `env_logger`.
//!
//! Lines look like `2024/05/01 12:00:00 WARN  message`. The destination is a
//! file (appended to), or `stdout`/`stderr`. `TESSALATRIX_LOG` overrides the
//! configured level with the usual `env_logger` filter syntax.
//!
//! The console targets share the terminal with the game screen. Between
//! [`hold_console`] and [`release_console`] their records are buffered in
//! memory and written out once the terminal has been restored.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};

use crate::config::LogLevel;

pub const LOG_ENV: &str = "TESSALATRIX_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn parse(target: &str) -> Self {
        match target.trim() {
            t if t.eq_ignore_ascii_case("stdout") => LogTarget::Stdout,
            t if t.eq_ignore_ascii_case("stderr") => LogTarget::Stderr,
            path => LogTarget::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleStream {
    Stdout,
    Stderr,
}

impl ConsoleStream {
    fn write_all(self, bytes: &[u8]) -> io::Result<()> {
        match self {
            ConsoleStream::Stdout => io::stdout().lock().write_all(bytes),
            ConsoleStream::Stderr => io::stderr().lock().write_all(bytes),
        }
    }

    fn flush(self) -> io::Result<()> {
        match self {
            ConsoleStream::Stdout => io::stdout().flush(),
            ConsoleStream::Stderr => io::stderr().flush(),
        }
    }
}

/// Records held back while the terminal belongs to the game.
static HELD: Mutex<Option<Vec<u8>>> = Mutex::new(None);
static CONSOLE: OnceLock<ConsoleStream> = OnceLock::new();

fn held() -> std::sync::MutexGuard<'static, Option<Vec<u8>>> {
    HELD.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Console sink for `env_logger` that honours [`hold_console`].
struct ConsoleWriter {
    stream: ConsoleStream,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(buffer) = held().as_mut() {
            buffer.extend_from_slice(buf);
            return Ok(buf.len());
        }
        self.stream.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if held().is_some() {
            return Ok(());
        }
        self.stream.flush()
    }
}

/// Start buffering console log output. File targets are unaffected.
pub fn hold_console() {
    held().get_or_insert_with(Vec::new);
}

/// Stop buffering and write out everything held since [`hold_console`].
pub fn release_console() {
    let bytes = take_held();
    if bytes.is_empty() {
        return;
    }
    if let Some(stream) = CONSOLE.get() {
        let _ = stream.write_all(&bytes).and_then(|()| stream.flush());
    }
}

fn take_held() -> Vec<u8> {
    held().take().unwrap_or_default()
}

fn console_target(stream: ConsoleStream) -> Target {
    let _ = CONSOLE.set(stream);
    Target::Pipe(Box::new(ConsoleWriter { stream }))
}

pub fn timestamp(now: DateTime<Local>) -> String {
    now.format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Install the global logger.
///
/// Returns false when the requested destination could not be used. Logging
/// then goes to stderr instead, or nowhere if a logger was already installed.
pub fn init(level: LogLevel, target: &str) -> bool {
    let mut builder = Builder::new();
    builder
        .filter_level(level.filter())
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                timestamp(Local::now()),
                record.level(),
                record.args()
            )
        });

    let mut ok = true;
    match LogTarget::parse(target) {
        LogTarget::Stdout => {
            builder.target(console_target(ConsoleStream::Stdout));
        }
        LogTarget::Stderr => {
            builder.target(console_target(ConsoleStream::Stderr));
        }
        LogTarget::File(path) => match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(err) => {
                eprintln!("tessalatrix: cannot open log file {}: {err}", path.display());
                builder.target(console_target(ConsoleStream::Stderr));
                ok = false;
            }
        },
    }

    builder.try_init().is_ok() && ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn target_keywords() {
        assert_eq!(LogTarget::parse("stdout"), LogTarget::Stdout);
        assert_eq!(LogTarget::parse(" STDERR "), LogTarget::Stderr);
        assert_eq!(
            LogTarget::parse("logs/game.log"),
            LogTarget::File(PathBuf::from("logs/game.log"))
        );
    }

    #[test]
    fn held_console_output_is_buffered_until_release() {
        hold_console();
        let mut writer = ConsoleWriter {
            stream: ConsoleStream::Stderr,
        };
        writer.write_all(b"first\n").unwrap();
        writer.write_all(b"second\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(take_held(), b"first\nsecond\n");
        assert!(held().is_none());
    }

    #[test]
    fn timestamp_format() {
        let t = Local.with_ymd_and_hms(2024, 5, 1, 7, 8, 9).unwrap();
        assert_eq!(timestamp(t), "2024/05/01 07:08:09");
    }
}
