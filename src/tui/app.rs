//! Application state for the estimator TUI.

use super::actions::{determine_action, Action, ActionContext};
use crate::core::{EstimatorInputs, Indicator, LczType, TweakField};
use crate::evaluation::{evaluate_explained, Evaluation};
use crossterm::event::KeyEvent;

/// A focusable input control, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Indicator(Indicator),
    Zone,
    TweakToggle,
    Tweak(TweakField),
}

impl Control {
    pub fn label(self) -> String {
        match self {
            Self::Indicator(indicator) => indicator.label(),
            Self::Zone => "Select LCZ Type".to_string(),
            Self::TweakToggle => "Enable Urban Prototype Tweaking".to_string(),
            Self::Tweak(field) => field.label().to_string(),
        }
    }
}

/// Main application state.
///
/// Every input change goes through [`EstimatorApp::dispatch`], which
/// re-evaluates the inputs from scratch before the next frame is drawn.
pub struct EstimatorApp {
    /// Current control values
    inputs: EstimatorInputs,
    /// Values restored by reset
    initial: EstimatorInputs,
    /// Index into `visible_controls()`
    focus: usize,
    help_visible: bool,
    /// Evaluation of `inputs`; never stale after `dispatch` returns
    evaluation: Evaluation,
    /// Set when the next loop iteration must draw
    needs_redraw: bool,
}

impl EstimatorApp {
    pub fn new(initial: EstimatorInputs) -> Self {
        Self {
            inputs: initial,
            initial,
            focus: 0,
            help_visible: false,
            evaluation: evaluate_explained(&initial),
            needs_redraw: true,
        }
    }

    /// Controls currently shown; the tweak sliders only while enabled.
    pub fn visible_controls(&self) -> Vec<Control> {
        let mut controls: Vec<Control> = Indicator::ALL.into_iter().map(Control::Indicator).collect();
        controls.push(Control::Zone);
        controls.push(Control::TweakToggle);
        if self.inputs.tweak_enabled {
            controls.extend(TweakField::ALL.into_iter().map(Control::Tweak));
        }
        controls
    }

    pub fn focused_control(&self) -> Control {
        let controls = self.visible_controls();
        controls[self.focus.min(controls.len() - 1)]
    }

    pub fn inputs(&self) -> &EstimatorInputs {
        &self.inputs
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Handle keyboard input and return true if the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctx = ActionContext {
            help_visible: self.help_visible,
        };
        match determine_action(key, ctx) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Apply one action. Returns true if the app should quit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusPrevious => self.move_focus(-1),
            Action::FocusNext => self.move_focus(1),
            Action::Increase => self.adjust(1),
            Action::Decrease => self.adjust(-1),
            Action::Activate => self.activate(),
            Action::Reset => self.update_inputs(self.initial),
            Action::ToggleHelp => self.help_visible = !self.help_visible,
        }
        self.needs_redraw = true;
        false
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.visible_controls().len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(count) as usize;
    }

    fn adjust(&mut self, delta: i64) {
        let mut next = self.inputs;
        match self.focused_control() {
            Control::Indicator(indicator) => {
                let value = indicator.range().step_by(next.indicators.get(indicator), delta);
                next.indicators = next.indicators.with(indicator, value);
            }
            Control::Zone => next.lcz = cycle_zone(next.lcz, delta),
            Control::TweakToggle => next.tweak_enabled = !next.tweak_enabled,
            Control::Tweak(field) => {
                let value = field.range().step_by(next.tweak.get(field), delta);
                next.tweak = next.tweak.with(field, value);
            }
        }
        self.update_inputs(next);
    }

    fn activate(&mut self) {
        match self.focused_control() {
            Control::TweakToggle | Control::Zone => self.adjust(1),
            Control::Indicator(_) | Control::Tweak(_) => {}
        }
    }

    /// Replace the inputs and re-evaluate.
    fn update_inputs(&mut self, inputs: EstimatorInputs) {
        if inputs == self.inputs {
            return;
        }
        self.inputs = inputs;
        self.evaluation = evaluate_explained(&self.inputs);
        // Hiding the tweak sliders can leave focus past the end
        self.focus = self.focus.min(self.visible_controls().len() - 1);
        log::debug!("inputs changed, score now {}", self.evaluation.metric);
    }

    /// Check if a redraw is needed and clear the flag
    pub fn take_needs_redraw(&mut self) -> bool {
        let needs = self.needs_redraw;
        self.needs_redraw = false;
        needs
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}

fn cycle_zone(lcz: LczType, delta: i64) -> LczType {
    if delta >= 0 {
        lcz.next()
    } else {
        lcz.previous()
    }
}
