/// Which way a committed swipe moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// One in-progress pointer gesture. Exists only between pointer-down and
/// pointer-up, or until its first committed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start: f64,
    current: f64,
}

impl DragSession {
    pub fn start(x: f64) -> Self {
        Self { start: x, current: x }
    }

    pub fn moved_to(self, x: f64) -> Self {
        Self { current: x, ..self }
    }

    pub fn diff(&self) -> f64 {
        self.current - self.start
    }

    /// Direction to step once the pointer has travelled strictly further than
    /// `threshold`. Dragging right (positive diff) goes back, like a swipe.
    pub fn commit_direction(&self, threshold: f64) -> Option<Direction> {
        let diff = self.diff();
        // NaN never commits
        if !(diff.abs() > threshold) {
            return None;
        }
        if diff > 0.0 {
            Some(Direction::Backward)
        } else {
            Some(Direction::Forward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drag_does_not_commit() {
        let session = DragSession::start(100.0).moved_to(70.0);
        assert_eq!(session.diff(), -30.0);
        assert_eq!(session.commit_direction(50.0), None);
    }

    #[test]
    fn exactly_threshold_does_not_commit() {
        let session = DragSession::start(100.0).moved_to(150.0);
        assert_eq!(session.commit_direction(50.0), None);
    }

    #[test]
    fn swipe_left_moves_forward() {
        let session = DragSession::start(100.0).moved_to(40.0);
        assert_eq!(session.commit_direction(50.0), Some(Direction::Forward));
    }

    #[test]
    fn swipe_right_moves_backward() {
        let session = DragSession::start(10.0).moved_to(90.0);
        assert_eq!(session.commit_direction(50.0), Some(Direction::Backward));
    }

    #[test]
    fn nan_coordinate_never_commits() {
        let session = DragSession::start(0.0).moved_to(f64::NAN);
        assert_eq!(session.commit_direction(50.0), None);
    }
}
