//! Audio session lifecycle.
//!
//! `AudioSession` owns the codec driver and the speaker-amplifier enable
//! pin and sequences them around playback: the amplifier comes up before
//! the codec, and the codec is quiesced before the amplifier input goes
//! away. The actual PCM streaming (decoder, I2S transport) is an external
//! collaborator — it only requires the session to be `Active` for the
//! duration of playback.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use es8311::{CodecError, Es8311, MasterClock, RegisterBus};
use thiserror_no_std::Error;

/// Current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Codec powered off, amplifier disabled.
    Idle,
    /// Amplifier enabled and codec bring-up started; playback may run.
    Active,
}

/// Errors returned by [`AudioSession`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// The codec driver reported a failure.
    #[error("codec failure: {0}")]
    Codec(#[from] CodecError),
    /// The amplifier-enable pin could not be driven.
    #[error("amplifier enable pin failed")]
    Amplifier,
    /// The operation requires an active session.
    #[error("session is not active")]
    NotActive,
}

/// Playback session: amplifier-enable pin plus codec power lifecycle.
///
/// The amplifier pin is an explicit, owned resource — it is raised as the
/// first step of [`start`](AudioSession::start) and lowered as the last
/// step of [`stop`](AudioSession::stop), never as a side effect of module
/// initialization.
pub struct AudioSession<P, C, D, A>
where
    P: RegisterBus,
    C: MasterClock,
    D: DelayNs,
    A: OutputPin,
{
    codec: Es8311<P, C, D>,
    amp_enable: A,
    state: SessionState,
}

impl<P, C, D, A> AudioSession<P, C, D, A>
where
    P: RegisterBus,
    C: MasterClock,
    D: DelayNs,
    A: OutputPin,
{
    /// Create an idle session around a constructed codec driver.
    pub fn new(codec: Es8311<P, C, D>, amp_enable: A) -> Self {
        Self {
            codec,
            amp_enable,
            state: SessionState::Idle,
        }
    }

    /// Current [`SessionState`].
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Shared access to the codec driver.
    pub fn codec(&self) -> &Es8311<P, C, D> {
        &self.codec
    }

    /// Exclusive access to the codec driver (e.g. for register diagnostics).
    pub fn codec_mut(&mut self) -> &mut Es8311<P, C, D> {
        &mut self.codec
    }

    /// Bring the audio path up: amplifier on, codec powered, volume set.
    ///
    /// The session becomes `Active` as soon as the amplifier is enabled, so
    /// a bring-up that fails midway can still be cleaned by
    /// [`stop`](AudioSession::stop). No rollback happens here.
    ///
    /// # Errors
    ///
    /// [`SessionError::Amplifier`] if the enable pin cannot be driven;
    /// codec failures propagate as [`SessionError::Codec`].
    pub fn start(&mut self, volume: i32) -> Result<(), SessionError> {
        self.amp_enable
            .set_high()
            .map_err(|_| SessionError::Amplifier)?;
        self.state = SessionState::Active;
        self.codec.power_on()?;
        self.codec.set_volume(volume)?;
        Ok(())
    }

    /// Tear the audio path down: codec quiesced first, amplifier off last.
    ///
    /// Idempotent: stopping an idle session is a no-op. The amplifier pin
    /// is lowered even when the codec power-off fails; the first error is
    /// returned and the session always ends `Idle`.
    ///
    /// # Errors
    ///
    /// Codec tear-down failures as [`SessionError::Codec`];
    /// [`SessionError::Amplifier`] if the enable pin cannot be lowered.
    pub fn stop(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Idle {
            return Ok(());
        }
        let power = self.codec.power_off().map_err(SessionError::Codec);
        let amp = self
            .amp_enable
            .set_low()
            .map_err(|_| SessionError::Amplifier);
        self.state = SessionState::Idle;
        power.and(amp)
    }

    /// Change the playback volume (clamped 0–100%).
    ///
    /// # Errors
    ///
    /// [`SessionError::NotActive`] outside an active session; codec
    /// failures propagate.
    pub fn set_volume(&mut self, percent: i32) -> Result<(), SessionError> {
        if self.state != SessionState::Active {
            return Err(SessionError::NotActive);
        }
        self.codec.set_volume(percent)?;
        Ok(())
    }
}
