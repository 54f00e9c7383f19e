/// Step counter of a multi-step form, always within `1..=total`.
///
/// Moving forward is never blocked by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    current: usize,
    total: usize,
}

impl WizardState {
    /// `total` is raised to 1 when given as 0.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Jumps to `step`, clamped to the valid range.
    pub fn go_to(&mut self, step: usize) {
        self.current = step.clamp(1, self.total);
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Completion ratio in percent, for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        ((self.current * 100) / self.total) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_are_clamped() {
        let mut wizard = WizardState::new(3);
        wizard.previous();
        assert_eq!(wizard.current(), 1);
        wizard.next();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.current(), 3);
        assert!(wizard.is_last());
        wizard.previous();
        assert_eq!(wizard.current(), 2);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut wizard = WizardState::new(4);
        wizard.go_to(0);
        assert_eq!(wizard.current(), 1);
        wizard.go_to(9);
        assert_eq!(wizard.current(), 4);
    }

    #[test]
    fn test_zero_steps_becomes_single_step() {
        let wizard = WizardState::new(0);
        assert_eq!(wizard.total(), 1);
        assert!(wizard.is_first() && wizard.is_last());
        assert_eq!(wizard.progress_percent(), 100);
    }
}
