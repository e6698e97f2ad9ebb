use tracing::debug;

/// Which way the current leaf turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Forward,
    Backward,
}

/// Handle for one started transition. Completion is only accepted from
/// the token of the transition currently in flight, so a timer that
/// outlives its album session (reload, unmount) cannot commit anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipToken {
    epoch: u64,
}

/// Page-turn state machine for one album session.
///
/// `visible` only ever advances through a completed transition; while a
/// transition is in flight every further intent is dropped, so the page
/// indicator and the rendered imagery cannot drift apart under rapid
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    sheet_count: usize,
    visible: usize,
    target: usize,
    direction: FlipDirection,
    animating: bool,
    epoch: u64,
}

impl Navigator {
    pub fn new(sheet_count: usize) -> Self {
        Self {
            sheet_count,
            visible: 0,
            target: 0,
            direction: FlipDirection::Forward,
            animating: false,
            epoch: 0,
        }
    }

    /// New sheet list loaded: back to the first sheet, idle. Bumps the
    /// epoch so any sleeping completion timer from the previous list is
    /// invalidated.
    pub fn reset(&mut self, sheet_count: usize) {
        self.sheet_count = sheet_count;
        self.visible = 0;
        self.target = 0;
        self.animating = false;
        self.epoch += 1;
    }

    pub fn visible_index(&self) -> usize {
        self.visible
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    pub fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    pub fn can_go_next(&self) -> bool {
        !self.animating && self.visible + 1 < self.sheet_count
    }

    pub fn can_go_previous(&self) -> bool {
        !self.animating && self.visible > 0
    }

    /// Start flipping to the next sheet. Returns the completion token,
    /// or `None` when the intent is dropped (already animating, or at
    /// the last sheet).
    pub fn go_next(&mut self) -> Option<FlipToken> {
        if !self.can_go_next() {
            return None;
        }
        Some(self.start(self.visible + 1, FlipDirection::Forward))
    }

    /// Start flipping to the previous sheet, symmetric to [`go_next`].
    ///
    /// [`go_next`]: Navigator::go_next
    pub fn go_previous(&mut self) -> Option<FlipToken> {
        if !self.can_go_previous() {
            return None;
        }
        Some(self.start(self.visible - 1, FlipDirection::Backward))
    }

    fn start(&mut self, target: usize, direction: FlipDirection) -> FlipToken {
        self.target = target;
        self.direction = direction;
        self.animating = true;
        self.epoch += 1;
        debug!(
            from = self.visible,
            to = self.target,
            ?direction,
            "starting page flip"
        );
        FlipToken { epoch: self.epoch }
    }

    /// Commit the in-flight transition: `visible` becomes `target` and
    /// the machine returns to idle. Returns whether the commit applied.
    /// Stale tokens and completions while idle are ignored.
    pub fn complete(&mut self, token: FlipToken) -> bool {
        if !self.animating || token.epoch != self.epoch {
            debug!(token = token.epoch, current = self.epoch, "dropping stale flip completion");
            return false;
        }
        self.visible = self.target;
        self.animating = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_at_first_sheet_is_a_no_op() {
        let mut nav = Navigator::new(4);
        assert!(nav.go_previous().is_none());
        assert_eq!(nav.visible_index(), 0);
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_forward_flip_commits_once() {
        let mut nav = Navigator::new(4);

        let token = nav.go_next().expect("idle at 0 of 4 should accept next");
        assert!(nav.is_animating());
        assert_eq!(nav.visible_index(), 0);
        assert_eq!(nav.target_index(), 1);
        assert_eq!(nav.direction(), FlipDirection::Forward);

        // Second intent while animating is dropped.
        assert!(nav.go_next().is_none());
        assert_eq!(nav.target_index(), 1);

        assert!(nav.complete(token));
        assert_eq!(nav.visible_index(), 1);
        assert!(!nav.is_animating());

        // Duplicate completion signal is ignored.
        assert!(!nav.complete(token));
        assert_eq!(nav.visible_index(), 1);
    }

    #[test]
    fn test_forward_at_last_sheet_is_a_no_op() {
        let mut nav = Navigator::new(2);
        let token = nav.go_next().unwrap();
        assert!(nav.complete(token));
        assert_eq!(nav.visible_index(), 1);

        assert!(nav.go_next().is_none());
        assert!(!nav.is_animating());

        // Still a no-op mid-animation on the way back.
        let _token = nav.go_previous().unwrap();
        assert!(nav.go_next().is_none());
    }

    #[test]
    fn test_backward_flip_mirrors_forward() {
        let mut nav = Navigator::new(3);
        let token = nav.go_next().unwrap();
        nav.complete(token);

        let token = nav.go_previous().unwrap();
        assert_eq!(nav.direction(), FlipDirection::Backward);
        assert_eq!(nav.target_index(), 0);
        assert!(nav.complete(token));
        assert_eq!(nav.visible_index(), 0);
    }

    #[test]
    fn test_reset_invalidates_in_flight_completion() {
        let mut nav = Navigator::new(5);
        let token = nav.go_next().unwrap();

        // Album reloads mid-flip; the sleeping timer still holds `token`.
        nav.reset(2);
        assert!(!nav.complete(token));
        assert_eq!(nav.visible_index(), 0);
        assert!(!nav.is_animating());
        assert_eq!(nav.sheet_count(), 2);
    }

    #[test]
    fn test_controls_disabled_while_animating() {
        let mut nav = Navigator::new(3);
        assert!(nav.can_go_next());
        assert!(!nav.can_go_previous());

        let token = nav.go_next().unwrap();
        assert!(!nav.can_go_next());
        assert!(!nav.can_go_previous());

        nav.complete(token);
        assert!(nav.can_go_next());
        assert!(nav.can_go_previous());
    }

    #[test]
    fn test_empty_sheet_list_accepts_no_intents() {
        let mut nav = Navigator::new(0);
        assert!(nav.go_next().is_none());
        assert!(nav.go_previous().is_none());
    }
}
