use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SpinConfig;
use crate::constants::DEFAULT_CHOICES;
use crate::palette::Palette;
use crate::segments::{short_angle_dist, Segment, SegmentSet};
use crate::validation::{clamp_friction, clamp_power, ControlError};

/// Simulation state of the wheel.
///
/// `spinning == false` always implies `velocity == 0`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinState {
    /// Accumulated rotation in radians, unbounded across spins.
    pub angle: f64,
    /// Radians per tick. Always forward.
    pub velocity: f64,
    pub spinning: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Observable transitions of the engine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpinEvent {
    Started { velocity: f64 },
    Ended { winner: String },
}

/// Owns the spin state and the current segment snapshot. All mutation goes
/// through `start_spin` and `tick`; segment changes replace the snapshot.
#[derive(Debug, Clone)]
pub struct SpinEngine {
    config: SpinConfig,
    state: SpinState,
    choices: Vec<String>,
    palette: Palette,
    segments: SegmentSet,
    last_winner: Option<Segment>,
    last_friction_error: Option<ControlError>,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new(SpinConfig::default(), &DEFAULT_CHOICES, Palette::default())
    }
}

impl SpinEngine {
    pub fn new<S: AsRef<str>>(config: SpinConfig, choices: &[S], palette: Palette) -> Self {
        let config = config.validated();
        let choices: Vec<String> = choices.iter().map(|c| c.as_ref().to_string()).collect();
        let segments = SegmentSet::build(&choices, config.pointer_angle, Some(&palette));

        Self {
            config,
            state: SpinState {
                angle: config.pointer_angle,
                velocity: 0.0,
                spinning: false,
            },
            choices,
            palette,
            segments,
            last_winner: None,
            last_friction_error: None,
        }
    }

    pub fn start_spin(&mut self, power: f64) -> Option<SpinEvent> {
        self.start_spin_with_rng(power, &mut rand::thread_rng())
    }

    /// Arms a spin with `velocity = U(low, high) * power`. Ignored while a
    /// spin is already running.
    pub fn start_spin_with_rng<R: Rng + ?Sized>(
        &mut self,
        power: f64,
        rng: &mut R,
    ) -> Option<SpinEvent> {
        if self.state.spinning {
            log::debug!("Spin requested while already spinning, ignoring");
            return None;
        }

        let power = clamp_power(power);
        if let Some(e) = power.error {
            log::warn!("{}, spinning with power {}", e, power.value);
        }

        let factor = rng.gen_range(self.config.low_factor..self.config.high_factor);
        Some(self.launch(factor * power.value))
    }

    fn launch(&mut self, velocity: f64) -> SpinEvent {
        self.state.velocity = velocity;
        self.state.spinning = true;
        self.last_winner = None;
        log::info!("Spin started with velocity {:.4} rad/tick", velocity);
        SpinEvent::Started { velocity }
    }

    /// Advances one frame. `friction` is read fresh every call.
    pub fn tick(&mut self, friction: f64) -> Option<SpinEvent> {
        if !self.state.spinning {
            return None;
        }

        let friction = clamp_friction(friction);
        if friction.error != self.last_friction_error {
            if let Some(e) = friction.error {
                log::warn!("{}, using friction {}", e, friction.value);
            }
            self.last_friction_error = friction.error;
        }

        self.state.angle += self.state.velocity;
        self.state.velocity *= friction.value;

        if self.state.velocity.abs() < self.config.settle_threshold {
            Some(self.settle())
        } else {
            None
        }
    }

    fn settle(&mut self) -> SpinEvent {
        self.state.velocity = 0.0;
        self.state.spinning = false;

        let winner = self.segments.winner_at(self.state.angle).clone();
        // Snap onto the middle of the winning segment, never more than half a turn
        self.state.angle += short_angle_dist(self.state.angle, winner.midpoint());

        log::info!("Wheel settled on {:?}", winner.name);
        let name = winner.name.clone();
        self.last_winner = Some(winner);
        SpinEvent::Ended { winner: name }
    }

    pub fn set_choices<S: AsRef<str>>(&mut self, choices: &[S]) {
        self.choices = choices.iter().map(|c| c.as_ref().to_string()).collect();
        self.rebuild_segments();
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.rebuild_segments();
    }

    fn rebuild_segments(&mut self) {
        self.segments =
            SegmentSet::build(&self.choices, self.config.pointer_angle, Some(&self.palette));
        log::debug!("Rebuilt {} wheel segments", self.segments.len());
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    pub fn phase(&self) -> SpinPhase {
        if self.state.spinning {
            SpinPhase::Spinning
        } else {
            SpinPhase::Idle
        }
    }

    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Segment currently under the pointer.
    pub fn current_segment(&self) -> &Segment {
        self.segments.winner_at(self.state.angle)
    }

    /// Winner of the most recent completed spin, cleared when a new spin starts.
    pub fn last_winner(&self) -> Option<&Segment> {
        self.last_winner.as_ref()
    }
}
