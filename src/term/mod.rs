/*!
## Terminal

Command line handling, the interactive shell, and program files.

*/

use crate::lang::{Error, LineNumber};
use crate::mach::{Event, Listing, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const BANNER: &str = concat!("TINY BASIC ", env!("CARGO_PKG_VERSION"), " READY");

/// Line-numbered BASIC interpreter.
///
/// With files, they are loaded and run. The shell only starts
/// afterwards when the program ended with STOP.
#[derive(Parser, Debug)]
#[command(name = "basic", version)]
struct Cli {
    /// Program files, merged in order
    files: Vec<String>,

    /// Do not print the banner
    #[arg(short, long)]
    quiet: bool,
}

pub fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut runtime = Runtime::default();
    runtime.set_interrupt(interrupted);

    if !cli.files.is_empty() {
        let result = batch(&mut runtime, &cli.files);
        if let Err(error) = &result {
            eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
        }
        if !runtime.stopped() {
            std::process::exit(if result.is_ok() { 0 } else { 1 });
        }
    }
    if let Err(error) = main_loop(&mut runtime, cli.quiet) {
        eprintln!("{}", error);
    }
}

fn batch(runtime: &mut Runtime, files: &[String]) -> Result<(), Error> {
    let mut listing = runtime.listing().clone();
    for filename in files {
        load(filename, &mut listing)?;
        debug!(%filename, lines = listing.len(), "loaded");
    }
    runtime.set_listing(listing);
    runtime.run()
}

fn main_loop(runtime: &mut Runtime, quiet: bool) -> std::io::Result<()> {
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    if !quiet {
        command.write_fmt(format_args!("{}\n\n", BANNER))?;
    }

    loop {
        let saved_completer = command.completer();
        command.set_completer(Arc::new(LineCompleter::new(runtime.listing().clone())));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        command.set_completer(saved_completer);
        if !string.trim().is_empty() {
            command.add_history_unique(string.clone());
        }
        match runtime.enter(&string) {
            Event::Stopped => {}
            Event::Bye => break,
            Event::Errors(error) => report(&command, &error)?,
            Event::Load(filename) => {
                let mut listing = runtime.listing().clone();
                match load(&filename, &mut listing) {
                    Ok(()) => {
                        runtime.set_listing(listing);
                        command.write_fmt(format_args!("FILE LOADED\n"))?;
                    }
                    Err(error) => report(&command, &error)?,
                }
            }
            Event::Save(filename) => match save(runtime.listing(), &filename) {
                Ok(()) => command.write_fmt(format_args!("FILE SAVED\n"))?,
                Err(error) => report(&command, &error)?,
            },
        }
    }
    Ok(())
}

fn report<Term: Terminal>(command: &Interface<Term>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

/// Tab after a bare line number brings back that line for editing.
struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let line = self.listing.get(num)?;
        let mut comp = Completion::simple(format!("{} {}", line.number(), line.text()));
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

/// Merges the lines of a program file into `listing`. Every line of
/// the file must start with a line number.
pub fn load(filename: &str, listing: &mut Listing) -> Result<(), Error> {
    let reader = BufReader::new(File::open(filename)?);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Err(error) = listing.load_str(&line) {
            return Err(error.message(&format!("IN LINE {} OF THE FILE", index + 1)));
        }
    }
    Ok(())
}

/// Writes `listing` in LIST format.
pub fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    let mut file = File::create(filename)?;
    write!(file, "{}", listing)?;
    file.flush()?;
    Ok(())
}
