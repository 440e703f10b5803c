//! Audio cues triggered by move outcomes.
//!
//! Only the cue events and their tone parameters live here; producing sound
//! is up to a [`CueSink`]. A sink that cannot play must stay silent rather
//! than fail, since cues never affect the game.

use std::io::Write;

use tictac_engine::MoveOutcome;
use tracing::{debug, instrument};

/// Something worth a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Cue {
    /// A mark was placed.
    MovePlaced,
    /// The turn passed to the other mark.
    TurnSwitched,
    /// A line was completed.
    Win,
    /// The board filled without a line.
    Draw,
}

/// Oscillator shape for a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave.
    Square,
    /// Sawtooth wave.
    Sawtooth,
}

/// A short synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: f32,
    /// Length in seconds.
    pub duration_secs: f32,
    /// Oscillator shape.
    pub waveform: Waveform,
}

impl Cue {
    /// Returns the tone for this cue.
    pub fn tone(self) -> Tone {
        let (frequency_hz, duration_secs, waveform) = match self {
            Cue::MovePlaced => (800.0, 0.1, Waveform::Sawtooth),
            Cue::TurnSwitched => (600.0, 0.1, Waveform::Sawtooth),
            Cue::Win => (523.0, 0.3, Waveform::Square),
            Cue::Draw => (440.0, 0.2, Waveform::Sine),
        };
        Tone {
            frequency_hz,
            duration_secs,
            waveform,
        }
    }

    /// Cues for a move outcome, in the order they play.
    #[instrument]
    pub fn for_outcome(outcome: &MoveOutcome) -> Vec<Cue> {
        match outcome {
            MoveOutcome::Continued { .. } => vec![Cue::MovePlaced, Cue::TurnSwitched],
            MoveOutcome::Won { .. } => vec![Cue::MovePlaced, Cue::Win],
            MoveOutcome::Draw => vec![Cue::MovePlaced, Cue::Draw],
            MoveOutcome::Invalid(_) => Vec::new(),
        }
    }
}

/// Plays cues.
pub trait CueSink {
    /// Plays one cue. Must not block the game or fail.
    fn play(&mut self, cue: Cue);
}

/// Sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl CueSink for SilentSink {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell when a game ends.
///
/// Terminals cannot pitch a bell, so move and turn cues are skipped.
#[derive(Debug, Default)]
pub struct TerminalBell<W> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if !matches!(cue, Cue::Win | Cue::Draw) {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            debug!(error = %e, %cue, "Bell unavailable");
        }
    }
}
