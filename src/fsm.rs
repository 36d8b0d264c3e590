/// Minimal finite-state-machine container.
///
/// Tracks the current state and how long it has been held. Transition rules
/// live in the system that drives the machine, not in the machine itself.
///
/// # Usage
/// ```
/// use hopper::fsm::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Door { Open, Closed }
///
/// let mut fsm = StateMachine::new(Door::Closed);
/// fsm.tick(0.5);
/// if fsm.elapsed > 0.25 { fsm.go(Door::Open); }
/// assert_eq!(fsm.state, Door::Open);
/// assert_eq!(fsm.elapsed, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateMachine<S> {
    pub state: S,
    /// Seconds spent in the current state. Reset to 0.0 on each transition.
    pub elapsed: f32,
}

impl<S> StateMachine<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            elapsed: 0.0,
        }
    }

    /// Transition to `next` only if it is a **different variant** from the
    /// current state (compared by discriminant). Returns whether it fired.
    pub fn go(&mut self, next: S) -> bool {
        if std::mem::discriminant(&self.state) == std::mem::discriminant(&next) {
            return false;
        }
        self.state = next;
        self.elapsed = 0.0;
        true
    }

    /// Advance the time-in-state counter by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}
