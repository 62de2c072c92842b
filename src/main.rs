use std::io::Stdout;
use std::ops::ControlFlow;
use std::time::Duration;
use std::{fs, io};

use clap::{Parser, ValueEnum};
use fern::FormatCallback;
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::format_description::well_known::Iso8601;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};

use crate::game::constants::DEFAULT_TICK_MILLIS;
use crate::game::{Banner, Playfield, Session};
use crate::host::{CueSink, FrameSink, InputBuffer, SessionTally};
use crate::protocol::HostCommand;
use crate::ticker::TickDriver;

mod game;
mod host;
mod protocol;
mod ticker;

type HostSession = Session<StdRng, FrameSink<Stdout>, CueSink<Stdout>>;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Width of the playfield, in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Height of the playfield, in pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Duration of a simulation tick, in milliseconds.
    ///
    /// Speeds are expressed per tick, so changing this changes the pace of the game.
    #[arg(long, default_value_t = DEFAULT_TICK_MILLIS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Seed the random number generator, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this number of ticks.
    #[arg(long, value_name = "TICKS")]
    max_ticks: Option<u64>,

    /// Stream frames and cues to stdout as CBOR messages. Printed logging then always goes to stderr.
    #[arg(long)]
    frames: bool,

    /// Set the folder path.
    ///
    /// The given path can be absolute or relative.
    /// The program will attempt to create all the folders nested in the path.
    #[arg(long, short, default_value = "./log/", value_name = "PATH")]
    log_folder: String,

    /// Set where the printed logging is outputted.
    #[arg(value_enum, long, short, default_value_t)]
    console_channel: ConsoleChannel,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
enum ConsoleChannel {
    /// Print to stdout
    Out,
    /// Print to stderr
    #[default]
    Err,
}

impl Cli {
    /// Where printed logging actually goes : stdout is reserved for the CBOR stream when frames are requested.
    fn effective_console_channel(&self) -> ConsoleChannel {
        if self.frames {
            ConsoleChannel::Err
        } else {
            self.console_channel
        }
    }
}

/// The tokio-ran main function runs a game session until it is told to stop. All errors are logged, the [`Result`]
/// returned is only given for command-line environments.
#[tokio::main]
async fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    let console_channel = cli.effective_console_channel();
    setup_logger(cli.log_folder, console_channel)
        .map_err(|e| eprintln!("Error while configuring logging : {e:?}"))?;
    if console_channel != cli.console_channel {
        log::warn!("Frames are streamed to stdout, printing logs to stderr instead.");
    }
    let playfield = Playfield::new(cli.width, cli.height)
        .map_err(|e| log::error!("Invalid playfield configuration : {e}."))?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (mut renderer, cues) = if cli.frames {
        (FrameSink::Cbor(io::stdout()), CueSink::new(Some(io::stdout())))
    } else {
        (FrameSink::Discard, CueSink::new(None))
    };
    renderer
        .describe_playfield(&playfield)
        .map_err(|e| log::error!("Failed to describe the playfield : {e}."))?;
    log::info!(
        "Session started on a {}x{} playfield, ticking every {} ms.",
        playfield.width(),
        playfield.height(),
        cli.tick_ms
    );
    let session = Session::new(playfield, rng, renderer, cues);
    let ticker = TickDriver::new(Duration::from_millis(cli.tick_ms), cli.max_ticks);
    run_until_signaled(session, ticker).await
}

/// Set up the global logger to log to stdout/stderr and to a file named as the current timestamp.
fn setup_logger(log_folder: String, console_channel: ConsoleChannel) -> io::Result<()> {
    // Configure log output on the given console
    let console_config = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .format(format_log);
    let console_config = match console_channel {
        ConsoleChannel::Out => console_config.chain(io::stdout()),
        ConsoleChannel::Err => console_config.chain(io::stderr()),
    };

    // Configure log output in rotating log files
    let rotator = make_rotator(log_folder)?;
    let file_config = fern::Dispatch::new()
        .level(log::LevelFilter::Trace)
        .format(format_log)
        .chain(rotator as Box<dyn io::Write + Send>);

    fern::Dispatch::new()
        .chain(console_config)
        .chain(file_config)
        .apply()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Make the rotating file middleware to give to the logger.
fn make_rotator(log_folder: String) -> io::Result<Box<FileRotate<AppendCount>>> {
    fs::create_dir_all(&log_folder)?;
    let log_file_path = log_folder + "/" + &utc_now_wrapper() + ".log";
    let rotator = Box::new(FileRotate::new(
        log_file_path,
        AppendCount::new(10),
        ContentLimit::Lines(4000),
        Compression::None,
        #[cfg(unix)]
        None,
    ));
    Ok(rotator)
}

/// The function given to the logging crate [`fern`] to format messages.
fn format_log(out: FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        utc_now_wrapper(),
        record.level(),
        &record
            .target()
            .chars()
            .take_while(|&c| c != ':')
            .collect::<String>(),
        message
    ))
}

/// Create a [`String`] of the current time in the UTC timezone, with a default in case of error.
fn utc_now_wrapper() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME)
        .unwrap_or(String::from("invalid date"))
}

/// Step the session on every tick, feeding it the host commands read in between, until an interrupt or terminate
/// signal is received, the host quits or the maximum number of ticks is reached.
async fn run_until_signaled(mut session: HostSession, mut ticker: TickDriver) -> Result<(), ()> {
    let (mut sigint_handler, mut sigterm_handler) = match signal(SignalKind::interrupt())
        .and_then(|si| signal(SignalKind::terminate()).map(|st| (si, st)))
    {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to create the signal handlers with error : {e:?}.");
            return Err(());
        }
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut input = InputBuffer::default();
    let mut shown_banner = None;
    let mut tally = SessionTally::default();
    let res = loop {
        tokio::select! {
            biased;
            signal = sigint_handler.recv() => match signal {
                Some(()) => {
                    log::info!("Received an interrupt signal.");
                    break Ok(());
                }
                None => {
                    log::error!("The interrupt signal handler stopped working, have to stop now.");
                    break Err(());
                }
            },
            signal = sigterm_handler.recv() => match signal {
                Some(()) => {
                    log::info!("Received a terminate signal.");
                    break Ok(());
                }
                None => {
                    log::error!("The terminate signal handler stopped working, have to stop now.");
                    break Err(());
                }
            },
            tick = ticker.next_tick() => match tick {
                Some(_) => {
                    match session.step(input.take()) {
                        Ok(report) => tally.record(&report, session.state().scoreboard()),
                        Err(e) => {
                            log::error!("Failed to render a frame : {e}.");
                            break Err(());
                        }
                    }
                    announce_banner(&session, &mut shown_banner);
                }
                None => {
                    log::info!("Reached the maximum number of ticks.");
                    break Ok(());
                }
            },
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match line.parse::<HostCommand>() {
                    Ok(command) => {
                        if let ControlFlow::Break(()) = input.push(command) {
                            log::info!("The host asked to quit.");
                            break Ok(());
                        }
                    }
                    Err(e) => log::warn!("Ignoring the host command `{line}` : {e}."),
                },
                Ok(None) => {
                    log::info!("Standard input closed, no more commands will be read.");
                    stdin_open = false;
                }
                Err(e) => {
                    log::warn!("Failed to read from standard input : {e}.");
                    stdin_open = false;
                }
            },
        }
    };
    let [left, right] = session.state().scoreboard().scores();
    log::info!(
        "Stopped after {} ticks in the {:?} phase, score {left}-{right}. Exiting.",
        ticker.ticks(),
        session.state().phase()
    );
    tally.log_summary();
    res
}

/// Log the banner over the playfield whenever it changes.
fn announce_banner(session: &HostSession, shown_banner: &mut Option<Banner>) {
    let banner = session.state().banner();
    if banner != *shown_banner {
        if let Some(b) = banner {
            log::info!("{} {}", b.text(), b.sub_text());
        }
        *shown_banner = banner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_keep_stdout_for_themselves() {
        let cli = Cli::parse_from(["paddle-battle", "--frames", "--console-channel", "out"]);
        assert_eq!(cli.effective_console_channel(), ConsoleChannel::Err);

        let cli = Cli::parse_from(["paddle-battle", "--console-channel", "out"]);
        assert_eq!(cli.effective_console_channel(), ConsoleChannel::Out);

        let cli = Cli::parse_from(["paddle-battle", "--frames"]);
        assert_eq!(cli.effective_console_channel(), ConsoleChannel::Err);
    }
}
