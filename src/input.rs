/// What the player wants to do this tick, as sampled by the host loop.
///
/// The simulation never reads devices itself; the caller fills one of these
/// in before each `step`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlIntent {
    /// -1.0 (left) ..= 1.0 (right); 0.0 stands still.
    pub move_direction: f32,
    pub jump: bool,
    pub attack: bool,
}

impl ControlIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn walk(direction: f32) -> Self {
        Self {
            move_direction: direction.clamp(-1.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_attack(mut self, attack: bool) -> Self {
        self.attack = attack;
        self
    }
}
