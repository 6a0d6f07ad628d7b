//! Presentation-side collaborators: the narration sink, sound playback and
//! the command-menu callback.
//!
//! The engine owns boxed trait objects. The recording implementations here
//! share their buffer through an `Rc`, so a clone kept by the caller sees
//! everything the engine wrote.

use std::cell::RefCell;
use std::rc::Rc;

use wage_core::Sound;

/// Append-only consumer of narration text.
pub trait OutputSink {
    /// Append a chunk of text. The engine terminates every line itself.
    fn write(&mut self, text: &str);
}

/// Plays sound resources.
pub trait SoundPlayer {
    /// Play a resolved sound.
    fn play(&mut self, sound: &Sound);
}

/// Receives command-menu updates requested by scripts.
pub trait MenuCallbacks {
    /// Replace the commands menu. The format is opaque to the engine.
    fn set_commands_menu(&mut self, format: &str);
}

/// An in-memory [`OutputSink`].
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: Rc<RefCell<String>>,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.text.borrow().clone()
    }

    /// Written lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.text.borrow().lines().map(str::to_string).collect()
    }

    /// Return the contents and clear the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.text.borrow_mut())
    }
}

impl OutputSink for TextBuffer {
    fn write(&mut self, text: &str) {
        self.text.borrow_mut().push_str(text);
    }
}

/// A [`SoundPlayer`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSound;

impl SoundPlayer for SilentSound {
    fn play(&mut self, _sound: &Sound) {}
}

/// A [`SoundPlayer`] that records the names of played sounds.
#[derive(Debug, Clone, Default)]
pub struct SoundLog {
    played: Rc<RefCell<Vec<String>>>,
}

impl SoundLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the sounds played so far, in order.
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SoundPlayer for SoundLog {
    fn play(&mut self, sound: &Sound) {
        self.played.borrow_mut().push(sound.name.clone());
    }
}

/// A [`MenuCallbacks`] that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMenu;

impl MenuCallbacks for NoMenu {
    fn set_commands_menu(&mut self, _format: &str) {}
}

/// A [`MenuCallbacks`] that records every requested format.
#[derive(Debug, Clone, Default)]
pub struct MenuLog {
    formats: Rc<RefCell<Vec<String>>>,
}

impl MenuLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested formats, in order.
    pub fn formats(&self) -> Vec<String> {
        self.formats.borrow().clone()
    }
}

impl MenuCallbacks for MenuLog {
    fn set_commands_menu(&mut self, format: &str) {
        self.formats.borrow_mut().push(format.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_buffer_clones_share_contents() {
        let buffer = TextBuffer::new();
        let mut writer = buffer.clone();
        writer.write("one\n");
        writer.write("two\n");
        assert_eq!(buffer.lines(), vec!["one", "two"]);
        assert_eq!(buffer.take(), "one\ntwo\n");
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn sound_log_records_names() {
        let log = SoundLog::new();
        let mut player = log.clone();
        player.play(&Sound::new("clang"));
        assert_eq!(log.played(), vec!["clang"]);
    }

    #[test]
    fn menu_log_records_formats() {
        let log = MenuLog::new();
        let mut menu = log.clone();
        menu.set_commands_menu("#Open;Close");
        assert_eq!(log.formats(), vec!["#Open;Close"]);
    }
}
