use winit::event::{ElementState, MouseButton};

/// Turns raw left-button transitions into clicks.
///
/// A click is a release that follows a press. Releases without a prior press
/// (e.g. the button went down outside the window) are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClickTracker {
    pressed: bool,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a button transition, returns `true` when it completes a click.
    pub fn update(&mut self, button: MouseButton, state: ElementState) -> bool {
        if button != MouseButton::Left {
            return false;
        }

        match state {
            ElementState::Pressed => {
                self.pressed = true;
                false
            }
            ElementState::Released => std::mem::take(&mut self.pressed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release_is_a_click() {
        let mut tracker = ClickTracker::new();
        assert!(!tracker.update(MouseButton::Left, ElementState::Pressed));
        assert!(tracker.update(MouseButton::Left, ElementState::Released));
    }

    #[test]
    fn release_alone_is_not_a_click() {
        let mut tracker = ClickTracker::new();
        assert!(!tracker.update(MouseButton::Left, ElementState::Released));
    }

    #[test]
    fn second_release_is_not_a_click() {
        let mut tracker = ClickTracker::new();
        tracker.update(MouseButton::Left, ElementState::Pressed);
        assert!(tracker.update(MouseButton::Left, ElementState::Released));
        assert!(!tracker.update(MouseButton::Left, ElementState::Released));
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut tracker = ClickTracker::new();
        assert!(!tracker.update(MouseButton::Right, ElementState::Pressed));
        assert!(!tracker.update(MouseButton::Right, ElementState::Released));
        // A right press must not arm the left button
        assert!(!tracker.update(MouseButton::Left, ElementState::Released));
    }
}
