//! Interactive play on stdin/stdout.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use colored::Colorize;
use wage_core::Sound;
use wage_engine::{OutputSink, SoundPlayer};

/// Narration straight to stdout.
struct Console;

impl OutputSink for Console {
    fn write(&mut self, text: &str) {
        print!("{text}");
    }
}

/// Sound cues shown as dimmed text.
struct ConsoleSound;

impl SoundPlayer for ConsoleSound {
    fn play(&mut self, sound: &Sound) {
        println!("{}", format!("[{}]", sound.name).dimmed());
    }
}

pub fn run(path: &Path, seed: u64) -> Result<(), String> {
    let mut engine = super::load_engine(path, seed)?
        .with_output(Console)
        .with_sound_player(ConsoleSound);

    let name = engine.world().meta.name.clone();
    println!("{}", name.bold());
    engine.process_turn(None, None);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    loop {
        if engine.player_scene().is_none() {
            println!("{}", "The game is over.".red().bold());
            break;
        }
        if interactive {
            print!("{} ", ">".bold());
            io::stdout().flush().map_err(|e| e.to_string())?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }
        engine.process_turn(Some(input), None);
    }
    Ok(())
}
