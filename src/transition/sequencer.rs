//! Fade-in / hold / fade-out sequencing over a fadeable surface.
//!
//! A `TransitionSequencer` owns one run of a `TransitionSequence`. It is
//! advanced once per frame with that frame's delta time and writes the
//! resulting opacity to the surface it was started on. When the fade-out
//! finishes it hands out the completion payload exactly once.

use serde::Deserialize;

use super::error::TransitionError;
use super::surface::FadeableSurface;

/// Durations of the three timed phases, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FadeTimings {
    pub fade_in: f32,
    pub hold: f32,
    pub fade_out: f32,
}

impl FadeTimings {
    pub const fn new(fade_in: f32, hold: f32, fade_out: f32) -> Self {
        Self { fade_in, hold, fade_out }
    }

    /// Timings with only a hold phase, for plain delays.
    pub const fn hold_only(hold: f32) -> Self {
        Self::new(0.0, hold, 0.0)
    }

    /// Reject negative or non-finite durations.
    pub fn validate(&self) -> Result<(), TransitionError> {
        for (phase, value) in [
            ("fade-in", self.fade_in),
            ("hold", self.hold),
            ("fade-out", self.fade_out),
        ] {
            if !value.is_finite() {
                return Err(TransitionError::NonFiniteDuration { phase, value });
            }
            if value < 0.0 {
                return Err(TransitionError::NegativeDuration { phase, value });
            }
        }
        Ok(())
    }

    /// Total length of the sequence.
    pub fn total(&self) -> f32 {
        self.fade_in + self.hold + self.fade_out
    }

    /// Attach a completion payload, producing a runnable sequence.
    pub fn then<C>(self, on_complete: C) -> TransitionSequence<C> {
        TransitionSequence { timings: self, on_complete }
    }
}

/// A transition to run: timings plus what happens when it is over.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSequence<C> {
    pub timings: FadeTimings,
    /// Invoked (or handed out) once, after fade-out finishes.
    pub on_complete: C,
}

/// Phase of a running sequence. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    FadeIn,
    Hold,
    FadeOut,
    Done,
}

/// Outcome of `TransitionSequencer::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Running,
    Completed,
}

/// Outcome of `TransitionSequencer::advance`.
#[derive(Debug, PartialEq)]
pub enum Progress<C> {
    /// Still fading or holding.
    Running,
    /// Reached `Done` on this call; here is the completion payload.
    Finished(C),
    /// Already done before this call. Nothing happened.
    Spent,
}

/// One running instance of a transition sequence.
#[derive(Debug)]
pub struct TransitionSequencer<C> {
    timings: FadeTimings,
    on_complete: Option<C>,
    phase: Phase,
    elapsed_in_phase: f32,
    start_opacity: f32,
    current_opacity: f32,
}

impl<C> TransitionSequencer<C> {
    /// Begin a sequence in `FadeIn`, continuing from the surface's current opacity.
    ///
    /// The (clamped) starting opacity is written back to the surface
    /// immediately.
    pub fn start<S: FadeableSurface + ?Sized>(
        sequence: TransitionSequence<C>,
        target: &mut S,
    ) -> Result<Self, TransitionError> {
        sequence.timings.validate()?;

        let start_opacity = clamp_opacity(target.opacity());
        target.set_opacity(start_opacity);

        Ok(Self {
            timings: sequence.timings,
            on_complete: Some(sequence.on_complete),
            phase: Phase::FadeIn,
            elapsed_in_phase: 0.0,
            start_opacity,
            current_opacity: start_opacity,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_in_phase(&self) -> f32 {
        self.elapsed_in_phase
    }

    pub fn opacity(&self) -> f32 {
        self.current_opacity
    }

    pub fn start_opacity(&self) -> f32 {
        self.start_opacity
    }

    pub fn timings(&self) -> FadeTimings {
        self.timings
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by `delta` seconds and write the new opacity to `target`.
    ///
    /// Zero-length phases are passed through within the same call. Negative
    /// or NaN deltas count as zero.
    pub fn advance<S: FadeableSurface + ?Sized>(
        &mut self,
        delta: f32,
        target: &mut S,
    ) -> Progress<C> {
        if self.phase == Phase::Done {
            return Progress::Spent;
        }

        if delta > 0.0 {
            self.elapsed_in_phase += delta;
        }

        loop {
            match self.phase {
                Phase::FadeIn => {
                    let t = fraction(self.elapsed_in_phase, self.timings.fade_in);
                    self.current_opacity = lerp(self.start_opacity, 1.0, t);
                    if self.elapsed_in_phase < self.timings.fade_in {
                        break;
                    }
                    self.current_opacity = 1.0;
                    self.enter(Phase::Hold);
                }
                Phase::Hold => {
                    if self.elapsed_in_phase < self.timings.hold {
                        break;
                    }
                    self.enter(Phase::FadeOut);
                }
                Phase::FadeOut => {
                    let t = fraction(self.elapsed_in_phase, self.timings.fade_out);
                    self.current_opacity = lerp(1.0, 0.0, t);
                    if self.elapsed_in_phase < self.timings.fade_out {
                        break;
                    }
                    self.current_opacity = 0.0;
                    self.enter(Phase::Done);
                }
                Phase::Done => break,
            }
        }

        target.set_opacity(self.current_opacity);

        if self.phase != Phase::Done {
            return Progress::Running;
        }
        match self.on_complete.take() {
            Some(on_complete) => Progress::Finished(on_complete),
            None => Progress::Spent,
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed_in_phase = 0.0;
    }
}

impl<C: FnOnce()> TransitionSequencer<C> {
    /// Advance by `delta` seconds, calling the completion callback when the
    /// sequence finishes.
    pub fn tick<S: FadeableSurface + ?Sized>(&mut self, delta: f32, target: &mut S) -> TickResult {
        match self.advance(delta, target) {
            Progress::Running => TickResult::Running,
            Progress::Finished(on_complete) => {
                on_complete();
                TickResult::Completed
            }
            Progress::Spent => TickResult::Completed,
        }
    }
}

fn fraction(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).min(1.0)
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const EPSILON: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn fade_in_ends_at_full_opacity() {
        let mut surface = 0.0_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(1.0, 5.0, 1.0).then(()), &mut surface)
                .unwrap();

        for _ in 0..4 {
            sequencer.advance(0.25, &mut surface);
        }

        assert_eq!(sequencer.phase(), Phase::Hold);
        assert_eq!(surface, 1.0);
        assert_eq!(sequencer.elapsed_in_phase(), 0.0);
    }

    #[test]
    fn opacity_is_monotonic_per_phase() {
        let deltas = [0.1, 0.0, 0.37, 0.05, 0.6, 0.2, 0.0, 0.9, 0.15, 0.33, 0.41, 0.08, 1.2, 0.9];
        let mut surface = 0.0_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(1.5, 0.5, 2.0).then(()), &mut surface)
                .unwrap();

        let mut last_phase = sequencer.phase();
        let mut last_opacity = surface;
        for delta in deltas {
            sequencer.advance(delta, &mut surface);
            let phase = sequencer.phase();
            assert!(phase >= last_phase, "phase regressed");

            if phase == last_phase {
                match phase {
                    Phase::FadeIn => assert!(surface >= last_opacity),
                    Phase::Hold => assert_eq!(surface, last_opacity),
                    Phase::FadeOut => assert!(surface <= last_opacity),
                    Phase::Done => {}
                }
            }
            last_phase = phase;
            last_opacity = surface;
        }
        assert_eq!(last_phase, Phase::Done);
    }

    #[test]
    fn completion_fires_once() {
        let fired = Cell::new(0);
        let mut surface = 0.0_f32;
        let mut sequencer = TransitionSequencer::start(
            FadeTimings::new(0.5, 0.5, 0.5).then(|| fired.set(fired.get() + 1)),
            &mut surface,
        )
        .unwrap();

        let mut completed_at = None;
        for i in 0..10 {
            if sequencer.tick(0.5, &mut surface) == TickResult::Completed && completed_at.is_none() {
                completed_at = Some(i);
            }
        }

        assert_eq!(completed_at, Some(2));
        assert_eq!(fired.get(), 1);
        assert_eq!(sequencer.tick(1.0, &mut surface), TickResult::Completed);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn all_zero_durations_complete_in_one_tick() {
        let fired = Cell::new(false);
        let mut surface = 0.4_f32;
        let mut sequencer = TransitionSequencer::start(
            FadeTimings::new(0.0, 0.0, 0.0).then(|| fired.set(true)),
            &mut surface,
        )
        .unwrap();

        assert_eq!(sequencer.tick(0.0, &mut surface), TickResult::Completed);
        assert!(fired.get());
        assert_eq!(sequencer.phase(), Phase::Done);
        assert_eq!(surface, 0.0);
    }

    #[test]
    fn two_one_two_example_sequence() {
        let mut surface = 0.0_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(2.0, 1.0, 2.0).then(()), &mut surface)
                .unwrap();

        let mut observed = Vec::new();
        let mut results = Vec::new();
        for _ in 0..5 {
            let progress = sequencer.advance(1.0, &mut surface);
            results.push(matches!(progress, Progress::Finished(())));
            observed.push(surface);
        }

        let expected = [0.5, 1.0, 1.0, 0.5, 0.0];
        for (got, want) in observed.iter().zip(expected) {
            assert!(approx(*got, want), "got {observed:?}");
        }
        assert_eq!(results, [false, false, false, false, true]);
    }

    #[test]
    fn fade_in_resumes_from_partial_opacity() {
        let mut surface = 0.3_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(1.0, 1.0, 1.0).then(()), &mut surface)
                .unwrap();
        assert!(approx(sequencer.start_opacity(), 0.3));

        sequencer.advance(0.5, &mut surface);
        assert!(approx(surface, 0.65));
        sequencer.advance(0.25, &mut surface);
        assert!(approx(surface, 0.825));
    }

    #[test]
    fn zero_hold_cascades_into_fade_out() {
        let mut surface = 0.0_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(1.0, 0.0, 2.0).then(()), &mut surface)
                .unwrap();

        sequencer.advance(1.0, &mut surface);
        assert_eq!(sequencer.phase(), Phase::FadeOut);
        assert_eq!(surface, 1.0);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut surface = 0.0_f32;
        let err = TransitionSequencer::start(FadeTimings::new(1.0, -0.5, 1.0).then(()), &mut surface)
            .unwrap_err();

        assert_eq!(
            err,
            TransitionError::NegativeDuration { phase: "hold", value: -0.5 }
        );
    }

    #[test]
    fn non_finite_duration_is_rejected() {
        let mut surface = 0.0_f32;
        let result =
            TransitionSequencer::start(FadeTimings::new(f32::NAN, 0.0, 0.0).then(()), &mut surface);

        assert!(matches!(
            result,
            Err(TransitionError::NonFiniteDuration { phase: "fade-in", .. })
        ));
    }

    #[test]
    fn negative_delta_does_not_advance() {
        let mut surface = 0.0_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(1.0, 1.0, 1.0).then(()), &mut surface)
                .unwrap();

        sequencer.advance(0.5, &mut surface);
        sequencer.advance(-3.0, &mut surface);
        sequencer.advance(f32::NAN, &mut surface);

        assert_eq!(sequencer.phase(), Phase::FadeIn);
        assert!(approx(sequencer.elapsed_in_phase(), 0.5));
        assert!(approx(surface, 0.5));
    }

    #[test]
    fn start_clamps_and_writes_opacity() {
        let mut surface = 1.7_f32;
        let sequencer =
            TransitionSequencer::start(FadeTimings::new(1.0, 1.0, 1.0).then(()), &mut surface)
                .unwrap();

        assert_eq!(surface, 1.0);
        assert_eq!(sequencer.opacity(), 1.0);
        assert_eq!(sequencer.phase(), Phase::FadeIn);
    }

    #[test]
    fn spent_sequencer_leaves_surface_alone() {
        let mut surface = 0.0_f32;
        let mut sequencer =
            TransitionSequencer::start(FadeTimings::new(0.0, 0.0, 0.0).then("done"), &mut surface)
                .unwrap();

        assert_eq!(sequencer.advance(0.0, &mut surface), Progress::Finished("done"));
        surface = 0.6;
        assert_eq!(sequencer.advance(1.0, &mut surface), Progress::Spent);
        assert_eq!(surface, 0.6);
    }
}
