//! Sound cues
//!
//! Two short procedurally generated tones: "pong" for bounces and "score" for points.
//! When no audio backend is available the game runs silently.

use thiserror::Error;

use crate::sim::GameEvent;

/// Sounds the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball bounced off a wall or paddle
    Pong,
    /// A point was scored
    Score,
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio unavailable: {0}")]
    AssetUnavailable(String),
}

/// Something that can play a cue without blocking the game loop
pub trait SoundPlayer {
    fn play(&self, cue: SoundCue);
}

/// Player used when audio could not be set up
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue) {}
}

/// Cue to play for a game event, if any
pub fn cue_for(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::WallBounce | GameEvent::PaddleHit(_) => Some(SoundCue::Pong),
        GameEvent::Scored(_) => Some(SoundCue::Score),
        GameEvent::MatchWon(_) | GameEvent::Served => None,
    }
}

/// Open the platform audio backend, falling back to silence
pub fn load_player() -> Box<dyn SoundPlayer> {
    match open_backend() {
        Ok(player) => player,
        Err(e) => {
            log::warn!("{} - sound disabled", e);
            Box::new(SilentPlayer)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_backend() -> Result<Box<dyn SoundPlayer>, AudioError> {
    Ok(Box::new(web::WebAudioPlayer::new()?))
}

#[cfg(not(target_arch = "wasm32"))]
fn open_backend() -> Result<Box<dyn SoundPlayer>, AudioError> {
    Err(AudioError::AssetUnavailable(
        "no audio backend on this platform".to_string(),
    ))
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioPlayer;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioError, SoundCue, SoundPlayer};

    /// Web Audio backend: each cue is a short oscillator burst
    pub struct WebAudioPlayer {
        ctx: AudioContext,
        volume: f32,
    }

    impl WebAudioPlayer {
        pub fn new() -> Result<Self, AudioError> {
            let ctx = AudioContext::new()
                .map_err(|e| AudioError::AssetUnavailable(format!("{:?}", e)))?;
            Ok(Self { ctx, volume: 0.8 })
        }

        /// Create an oscillator with gain envelope
        fn create_osc(&self, freq: f32, osc_type: OscillatorType) -> Option<(OscillatorNode, GainNode)> {
            let osc = self.ctx.create_oscillator().ok()?;
            let gain = self.ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&self.ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Bounce - short square blip
        fn play_pong(&self) {
            let Some((osc, gain)) = self.create_osc(440.0, OscillatorType::Square) else {
                return;
            };
            let t = self.ctx.current_time();

            gain.gain().set_value_at_time(self.volume * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.1).ok();
        }

        /// Point - two rising notes
        fn play_score(&self) {
            for (i, freq) in [520.0, 780.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(*freq, OscillatorType::Triangle) {
                    let t = self.ctx.current_time() + delay;
                    gain.gain().set_value_at_time(self.volume * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.25).ok();
                }
            }
        }
    }

    impl SoundPlayer for WebAudioPlayer {
        fn play(&self, cue: SoundCue) {
            // Browsers keep the context suspended until a user gesture
            if self.ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = self.ctx.resume();
            }
            match cue {
                SoundCue::Pong => self.play_pong(),
                SoundCue::Score => self.play_score(),
            }
        }
    }
}
