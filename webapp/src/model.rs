/// What a press on one of the screen's controls asks the counter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Reset,
}

/// The screen's only piece of state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Applies `action` and returns whether the count changed.
    ///
    /// Increment saturates at `u64::MAX`, so a press there is a no-op.
    pub fn apply(&mut self, action: CounterAction) -> bool {
        let next = match action {
            CounterAction::Increment => self.count.saturating_add(1),
            CounterAction::Reset => 0,
        };
        let changed = next != self.count;
        self.count = next;
        changed
    }

    pub fn label(&self) -> String {
        format!("Count: {}", self.count)
    }
}
