//! Match supervision: spawn both bots, route their output, record the gamelog

use std::collections::HashSet;
use std::fs::{self, File};
use std::future::Future;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::error::{MmError, MmResult};

/// How long to keep reading after both bots exit. Background children of a
/// bot can hold its pipes open indefinitely.
const DRAIN_GRACE: Duration = Duration::from_secs(1);

use super::args::{ArgConfig, OutputSource};
use super::gamelog::{BotExit, GameEvent, GameRecord, MatchResult, Stream};

/// Final state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub bot_a: BotExit,
    pub bot_b: BotExit,
    pub timed_out: bool,
}

impl MatchOutcome {
    pub fn result(&self) -> MatchResult {
        if self.timed_out {
            MatchResult::Timeout
        } else if self.bot_a.success && self.bot_b.success {
            MatchResult::Completed
        } else {
            MatchResult::BotError
        }
    }
}

#[derive(Debug)]
struct BotLine {
    source: OutputSource,
    stream: Stream,
    text: String,
}

struct RoutedFile {
    sources: HashSet<OutputSource>,
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Fan-out of every source to the terminal and mapped files.
struct OutputSink {
    print: HashSet<OutputSource>,
    echo_to_stderr: bool,
    files: Vec<RoutedFile>,
}

impl OutputSink {
    fn open(args: &ArgConfig) -> MmResult<Self> {
        let print = args.print.iter().flatten().copied().collect();

        let mut files = Vec::new();
        for mapping in args.output.iter().flatten() {
            if let Some(parent) = mapping.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = File::create(&mapping.path)?;
            files.push(RoutedFile {
                sources: mapping.sources.iter().copied().collect(),
                path: mapping.path.clone(),
                writer: BufWriter::new(file),
            });
        }

        Ok(Self {
            print,
            echo_to_stderr: args.echo_to_stderr,
            files,
        })
    }

    fn emit(&mut self, source: OutputSource, stream: Stream, text: &str) -> MmResult<()> {
        if self.print.contains(&source) {
            match stream {
                Stream::Stdout if !self.echo_to_stderr => println!("[{}] {}", source, text),
                _ => eprintln!("[{}] {}", source, text),
            }
        }

        for file in self.files.iter_mut().filter(|f| f.sources.contains(&source)) {
            if file.sources.len() > 1 && source != OutputSource::Gamelog {
                writeln!(file.writer, "[{}] {}", source, text)?;
            } else {
                writeln!(file.writer, "{}", text)?;
            }
        }
        Ok(())
    }

    fn record(&mut self, event: GameEvent) -> MmResult<()> {
        let line = GameRecord::now(event).to_line();
        self.emit(OutputSource::Gamelog, Stream::Stdout, &line)
    }

    fn line(&mut self, line: BotLine) -> MmResult<()> {
        self.emit(line.source, line.stream, &line.text)?;
        self.record(GameEvent::BotOutput {
            source: line.source,
            stream: line.stream,
            line: line.text,
        })
    }

    fn finish(mut self) -> MmResult<()> {
        for file in &mut self.files {
            file.writer.flush()?;
            tracing::debug!(path = %file.path.display(), "closed output file");
        }
        Ok(())
    }
}

fn spawn_bot(
    path: &Path,
    workdir: Option<&Path>,
    source: OutputSource,
    tx: &mpsc::UnboundedSender<BotLine>,
) -> MmResult<Child> {
    let mut command = Command::new(path);
    if let Some(dir) = workdir {
        command.current_dir(dir);
    }
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| MmError::Spawn {
            program: path.display().to_string(),
            source,
        })?;

    tracing::info!(bot = %source, path = %path.display(), pid = ?child.id(), "spawned bot");

    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(forward_lines(stdout, source, Stream::Stdout, tx.clone()));
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(forward_lines(stderr, source, Stream::Stderr, tx.clone()));
    }

    Ok(child)
}

async fn forward_lines<R: AsyncRead + Unpin>(
    reader: R,
    source: OutputSource,
    stream: Stream,
    tx: mpsc::UnboundedSender<BotLine>,
) {
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(text)) => {
                if tx.send(BotLine { source, stream, text }).is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(bot = %source, error = %e, "stopped reading bot output");
                break;
            }
        }
    }
}

fn deadline_timer(deadline: Option<Instant>) -> impl Future<Output = ()> {
    async move {
        match deadline {
            Some(at) => tokio::time::sleep_until(at).await,
            None => std::future::pending().await,
        }
    }
}

fn drain_ready(
    rx: &mut mpsc::UnboundedReceiver<BotLine>,
    sink: &mut OutputSink,
) -> MmResult<()> {
    while let Ok(line) = rx.try_recv() {
        sink.line(line)?;
    }
    Ok(())
}

/// Run a match between `args.bot_a` and `args.bot_b`.
pub async fn run(args: ArgConfig) -> MmResult<MatchOutcome> {
    let mut sink = OutputSink::open(&args)?;
    sink.record(GameEvent::MatchStart {
        bot_a: args.bot_a.display().to_string(),
        bot_b: args.bot_b.display().to_string(),
    })?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let workdir = args.workdir.as_deref();
    let mut bot_a = spawn_bot(&args.bot_a, workdir, OutputSource::BotA, &tx)?;
    let mut bot_b = spawn_bot(&args.bot_b, workdir, OutputSource::BotB, &tx)?;
    drop(tx);

    let timer = deadline_timer(args.timeout.map(|t| Instant::now() + t));
    tokio::pin!(timer);

    let mut exit_a: Option<BotExit> = None;
    let mut exit_b: Option<BotExit> = None;
    let mut output_open = true;
    let mut timed_out = false;

    loop {
        let (Some(a), Some(b)) = (exit_a, exit_b) else {
            tokio::select! {
                msg = rx.recv(), if output_open => match msg {
                    Some(line) => sink.line(line)?,
                    None => output_open = false,
                },
                status = bot_a.wait(), if exit_a.is_none() => {
                    let exit = BotExit::from(status?);
                    sink.record(GameEvent::BotExit { source: OutputSource::BotA, exit })?;
                    exit_a = Some(exit);
                },
                status = bot_b.wait(), if exit_b.is_none() => {
                    let exit = BotExit::from(status?);
                    sink.record(GameEvent::BotExit { source: OutputSource::BotB, exit })?;
                    exit_b = Some(exit);
                },
                _ = &mut timer, if !timed_out => {
                    tracing::warn!("match timed out, stopping bots");
                    timed_out = true;
                    let _ = bot_a.start_kill();
                    let _ = bot_b.start_kill();
                },
            }
            continue;
        };

        // Both bots are gone; drain what they already wrote. After a timeout,
        // orphaned grandchildren may keep the pipes open, so stop immediately.
        if timed_out {
            drain_ready(&mut rx, &mut sink)?;
        } else {
            let drained = tokio::time::timeout(DRAIN_GRACE, async {
                while let Some(line) = rx.recv().await {
                    sink.line(line)?;
                }
                Ok::<_, MmError>(())
            })
            .await;
            match drained {
                Ok(result) => result?,
                Err(_) => {
                    tracing::warn!("bot output still open after both bots exited, detaching");
                    drain_ready(&mut rx, &mut sink)?;
                }
            }
        }

        let outcome = MatchOutcome {
            bot_a: a,
            bot_b: b,
            timed_out,
        };
        sink.record(GameEvent::MatchEnd {
            result: outcome.result(),
            bot_a: a,
            bot_b: b,
        })?;
        sink.finish()?;
        tracing::info!(result = ?outcome.result(), "match finished");
        return Ok(outcome);
    }
}
