use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{AppError, display_command};
use crate::ports::{CommandOutput, CommandRunner};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log timestamps are rendered at a fixed UTC+8 offset.
const LOG_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Runs real subprocesses, logging each command line and echoing its output.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Returns the raw combined bytes alongside the decoded output.
    fn spawn_and_collect(argv: &[&str], cwd: &Path) -> io::Result<(Vec<u8>, CommandOutput)> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

        // stdout and stderr share one pipe so their interleaving is preserved.
        let (mut reader, writer) = io::pipe()?;
        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        let mut child = command.spawn()?;
        // The parent's copies of the write end must be closed before reading to EOF.
        drop(command);

        let mut buf = Vec::new();
        let read = reader.read_to_end(&mut buf);
        let status = child.wait()?;
        read?;

        let output = CommandOutput {
            combined: String::from_utf8_lossy(&buf).into_owned(),
            success: status.success(),
            status: status.to_string(),
        };
        Ok((buf, output))
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, AppError> {
        println!("{}", format_run_line(Utc::now(), argv));

        let (raw, output) = Self::spawn_and_collect(argv, cwd)?;
        let mut stdout = io::stdout().lock();
        echo_output(&mut stdout, &raw)?;
        stdout.flush()?;
        Ok(output)
    }
}

/// Write captured bytes verbatim, terminating a trailing partial line.
fn echo_output<W: Write>(out: &mut W, raw: &[u8]) -> io::Result<()> {
    if raw.is_empty() {
        return Ok(());
    }
    out.write_all(raw)?;
    if !raw.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn format_run_line(now: DateTime<Utc>, argv: &[&str]) -> String {
    let stamp = match FixedOffset::east_opt(LOG_UTC_OFFSET_SECS) {
        Some(offset) => now.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string(),
        None => now.format(TIMESTAMP_FORMAT).to_string(),
    };
    format!("[{}] Run CMD: {}", stamp, display_command(argv))
}
