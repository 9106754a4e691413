//! Gesture scripts: a surface size plus a list of steps replayed against a
//! headless switcher.

use serde::{Deserialize, Serialize};
use switcher::{SwitchChanged, SwitchState, Switcher, SwitcherStyle};
use switcher_core::{DrawCommand, Event, RecordingSurface};

/// Upper bound on frames a `settle` step will tick.
const MAX_SETTLE_FRAMES: u32 = 10_000;

/// A replayable gesture script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Script {
    #[serde(default = "default_width")]
    pub(crate) width: i32,
    #[serde(default = "default_height")]
    pub(crate) height: i32,
    #[serde(default = "default_frame_ms")]
    pub(crate) frame_ms: u32,
    pub(crate) steps: Vec<Step>,
}

const fn default_width() -> i32 {
    100
}

const fn default_height() -> i32 {
    40
}

const fn default_frame_ms() -> u32 {
    16
}

/// One scripted step: a pointer event fed to the widget as-is, or a
/// host-side action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Step {
    Event(Event),
    Action(Action),
}

/// Host-side actions that are not pointer input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Action {
    SetState { state: SwitchState },
    Tick { frames: u32 },
    Settle,
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Report {
    pub(crate) changes: Vec<StepChange>,
    pub(crate) frames: u32,
    pub(crate) state: SwitchState,
    pub(crate) thumb_position: i32,
    pub(crate) background_blend: u8,
    pub(crate) animating: bool,
    pub(crate) paint: Vec<DrawCommand>,
}

/// A committed transition and the step that caused it.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct StepChange {
    pub(crate) step: usize,
    pub(crate) state: SwitchState,
}

impl Script {
    pub(crate) fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Replay every step and paint the final frame.
    pub(crate) fn replay(&self, style: SwitcherStyle) -> Report {
        let surface = RecordingSurface::new(self.width, self.height);
        let mut switcher = Switcher::with_style(surface, style);
        let mut changes = Vec::new();
        let mut frames = 0;

        for (index, step) in self.steps.iter().enumerate() {
            let changed: Option<SwitchChanged> = match *step {
                Step::Event(event) => switcher.handle_event(&event),
                Step::Action(Action::SetState { state }) => switcher.set_state(state),
                Step::Action(Action::Tick { frames: count }) => {
                    for _ in 0..count {
                        if !switcher.tick(self.frame_ms) {
                            break;
                        }
                        frames += 1;
                    }
                    None
                }
                Step::Action(Action::Settle) => {
                    let mut ticked = 0;
                    while ticked < MAX_SETTLE_FRAMES && switcher.tick(self.frame_ms) {
                        ticked += 1;
                    }
                    frames += ticked;
                    None
                }
            };
            if let Some(change) = changed {
                log::info!("step {index}: switch {}", change.state);
                changes.push(StepChange {
                    step: index,
                    state: change.state,
                });
            }
        }

        switcher.paint();
        Report {
            changes,
            frames,
            state: switcher.state(),
            thumb_position: switcher.thumb_position(),
            background_blend: switcher.background_blend(),
            animating: switcher.is_animating(),
            paint: switcher.surface_mut().take_commands(),
        }
    }
}
