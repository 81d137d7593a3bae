//! # Swipe-to-Delete
//!
//! Each visible history row owns a [`SwipeController`], a small state machine
//! that turns a continuous horizontal drag into either a confirmed delete or
//! a snap back.
//!
//! ```text
//!            |dx| > 10, |dy| <= 8
//!   Idle ─────────────────────────▶ Dragging
//!    ▲                               │     │
//!    │ animation done   dx >= -150   │     │ dx < -150
//!    └──────────── Returning ◀───────┘     ▼
//!                     ▲            PendingConfirm ──confirm──▶ AnimatingDelete ──▶ Delete(ts)
//!                     └───────cancel───────┘
//! ```
//!
//! Gesture input is cumulative translation since touch-down, in pixels;
//! negative x is leftward. Time only moves through [`SwipeController::advance`],
//! so animations are deterministic and the controller never touches a clock.
//!
//! Controllers live in a [`SwipeRegistry`] keyed by record timestamp. They are
//! created the first time a row is touched and dropped once the row leaves the
//! rendered window.

use log::debug;
use std::collections::HashMap;
use std::time::Duration;

/// Horizontal travel needed before the row starts following the finger.
pub const ACTIVATION_OFFSET: f32 = 10.0;
/// Vertical travel that hands the touch to the list scroll instead.
pub const FAIL_OFFSET_Y: f32 = 8.0;
/// Release further left than this asks for delete confirmation.
pub const SWIPE_THRESHOLD: f32 = -150.0;
/// Where the row rests while the confirmation prompt is up.
pub const PENDING_OFFSET: f32 = -80.0;
/// Offset at which the delete affordance starts to appear.
pub const AFFORDANCE_START: f32 = -20.0;
pub const DELETE_ANIMATION: Duration = Duration::from_millis(250);
pub const RETURN_ANIMATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    PendingConfirm,
    AnimatingDelete,
    Returning,
}

/// Something the row's owner has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeEffect {
    /// Show the blocking "delete this item?" prompt.
    ShowConfirm,
    /// The row has left the screen; delete the record with this timestamp.
    Delete(i64),
}

/// How much of the red delete action is revealed behind the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteAffordance {
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Touch {
    Up,
    Undecided,
    Abandoned,
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Animation {
    fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    fn step(&mut self, dt: Duration) -> (f32, bool) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from + (self.to - self.from) * t, false)
    }
}

#[derive(Debug, Clone)]
pub struct SwipeController {
    id: i64,
    row_width: f32,
    phase: SwipePhase,
    offset: f32,
    touch: Touch,
    animation: Option<Animation>,
    delete_fired: bool,
}

impl SwipeController {
    /// `row_width` is how far left the row travels when it is deleted.
    pub fn new(id: i64, row_width: f32) -> Self {
        Self {
            id,
            row_width: row_width.abs(),
            phase: SwipePhase::Idle,
            offset: 0.0,
            touch: Touch::Up,
            animation: None,
            delete_fired: false,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    fn accepts_input(&self) -> bool {
        !matches!(
            self.phase,
            SwipePhase::PendingConfirm | SwipePhase::AnimatingDelete
        )
    }

    fn set_phase(&mut self, phase: SwipePhase) {
        if self.phase != phase {
            debug!("row {}: {:?} -> {:?}", self.id, self.phase, phase);
            self.phase = phase;
        }
    }

    pub fn touch_down(&mut self) {
        if self.accepts_input() {
            self.touch = Touch::Undecided;
        }
    }

    /// Feed the cumulative translation since touch-down.
    pub fn touch_move(&mut self, dx: f32, dy: f32) {
        if !self.accepts_input() {
            return;
        }
        if self.phase != SwipePhase::Dragging {
            if self.touch != Touch::Undecided {
                return;
            }
            if dy.abs() > FAIL_OFFSET_Y {
                self.touch = Touch::Abandoned;
                return;
            }
            if dx.abs() <= ACTIVATION_OFFSET {
                return;
            }
            self.animation = None;
            self.set_phase(SwipePhase::Dragging);
        }
        self.offset = dx.min(0.0);
    }

    /// Finger lifted with cumulative horizontal translation `dx`.
    pub fn touch_up(&mut self, dx: f32) -> Option<SwipeEffect> {
        self.touch = Touch::Up;
        if self.phase != SwipePhase::Dragging {
            return None;
        }
        if dx < SWIPE_THRESHOLD {
            self.offset = PENDING_OFFSET;
            self.set_phase(SwipePhase::PendingConfirm);
            Some(SwipeEffect::ShowConfirm)
        } else {
            self.start_return();
            None
        }
    }

    /// A complete horizontal drag: down, move to `dx`, release.
    pub fn swipe(&mut self, dx: f32) -> Option<SwipeEffect> {
        self.touch_down();
        self.touch_move(dx, 0.0);
        self.touch_up(dx)
    }

    /// The user accepted the prompt. Returns false outside `PendingConfirm`.
    pub fn confirm(&mut self) -> bool {
        if self.phase != SwipePhase::PendingConfirm {
            return false;
        }
        self.animation = Some(Animation::new(
            self.offset,
            -self.row_width,
            DELETE_ANIMATION,
        ));
        self.set_phase(SwipePhase::AnimatingDelete);
        true
    }

    /// The user dismissed the prompt. Returns false outside `PendingConfirm`.
    pub fn cancel(&mut self) -> bool {
        if self.phase != SwipePhase::PendingConfirm {
            return false;
        }
        self.start_return();
        true
    }

    fn start_return(&mut self) {
        self.animation = Some(Animation::new(self.offset, 0.0, RETURN_ANIMATION));
        self.set_phase(SwipePhase::Returning);
    }

    /// Move running animations forward by `dt`.
    ///
    /// Yields [`SwipeEffect::Delete`] once, when the delete animation ends.
    pub fn advance(&mut self, dt: Duration) -> Option<SwipeEffect> {
        let mut animation = self.animation?;
        let (offset, done) = animation.step(dt);
        self.offset = offset;
        if !done {
            self.animation = Some(animation);
            return None;
        }
        self.animation = None;

        match self.phase {
            SwipePhase::Returning => {
                self.offset = 0.0;
                self.set_phase(SwipePhase::Idle);
                None
            }
            SwipePhase::AnimatingDelete if !self.delete_fired => {
                self.delete_fired = true;
                Some(SwipeEffect::Delete(self.id))
            }
            _ => None,
        }
    }

    pub fn affordance(&self) -> DeleteAffordance {
        let reveal = (AFFORDANCE_START - self.offset) / (AFFORDANCE_START - SWIPE_THRESHOLD);
        DeleteAffordance {
            opacity: reveal.clamp(0.0, 1.0),
            scale: (self.offset / SWIPE_THRESHOLD).clamp(0.0, 1.0),
        }
    }
}

/// Per-row controllers for the rows currently on screen.
#[derive(Debug)]
pub struct SwipeRegistry {
    row_width: f32,
    rows: HashMap<i64, SwipeController>,
}

impl SwipeRegistry {
    pub fn new(row_width: f32) -> Self {
        Self {
            row_width,
            rows: HashMap::new(),
        }
    }

    /// The controller for the row with `timestamp`, created on first use.
    pub fn row(&mut self, timestamp: i64) -> &mut SwipeController {
        let width = self.row_width;
        self.rows
            .entry(timestamp)
            .or_insert_with(|| SwipeController::new(timestamp, width))
    }

    pub fn get(&self, timestamp: i64) -> Option<&SwipeController> {
        self.rows.get(&timestamp)
    }

    pub fn remove(&mut self, timestamp: i64) -> Option<SwipeController> {
        self.rows.remove(&timestamp)
    }

    /// Drop controllers whose rows are no longer rendered.
    pub fn retain_visible(&mut self, visible: &[i64]) {
        self.rows.retain(|ts, _| visible.contains(ts));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
