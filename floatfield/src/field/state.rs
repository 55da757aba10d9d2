/// Visual state of a field, driven by focus, enablement and validation.
///
/// Transitions:
///
/// - `Error` is sticky. Focus changes leave it alone; only a passing
///   validation or a cleared error slot leaves it.
/// - `Disabled` preempts everything while the host keeps the field
///   disabled, and re-enabling always lands on `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    #[default]
    Idle,
    Focused,
    Error,
    Disabled,
}

impl FieldState {
    /// State when the field first appears.
    pub fn initial(enabled: bool) -> Self {
        if enabled { Self::Idle } else { Self::Disabled }
    }

    /// Focus gained or lost.
    pub fn on_focus_change(self, focused: bool) -> Self {
        match self {
            Self::Disabled | Self::Error => self,
            _ if focused => Self::Focused,
            _ => Self::Idle,
        }
    }

    /// The error slot was set (`has_error`) or cleared.
    pub fn on_error_change(self, has_error: bool, focused: bool) -> Self {
        match self {
            Self::Disabled => self,
            _ if has_error => Self::Error,
            _ if focused => Self::Focused,
            _ => Self::Idle,
        }
    }

    /// The host enabled or disabled the field.
    pub fn on_enabled_change(self, enabled: bool) -> Self {
        Self::initial(enabled)
    }

    /// Whether this is the error state.
    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_survives_focus_changes() {
        let state = FieldState::Error;
        assert_eq!(state.on_focus_change(true), FieldState::Error);
        assert_eq!(state.on_focus_change(false), FieldState::Error);
    }

    #[test]
    fn test_error_clears_to_focus_or_idle() {
        assert_eq!(
            FieldState::Error.on_error_change(false, true),
            FieldState::Focused
        );
        assert_eq!(
            FieldState::Error.on_error_change(false, false),
            FieldState::Idle
        );
    }

    #[test]
    fn test_disabled_preempts() {
        let state = FieldState::Disabled;
        assert_eq!(state.on_focus_change(true), FieldState::Disabled);
        assert_eq!(state.on_error_change(true, false), FieldState::Disabled);
        assert_eq!(state.on_enabled_change(true), FieldState::Idle);
        assert_eq!(FieldState::Error.on_enabled_change(false), FieldState::Disabled);
    }

    #[test]
    fn test_focus_cycle() {
        let state = FieldState::initial(true).on_focus_change(true);
        assert_eq!(state, FieldState::Focused);
        assert_eq!(state.on_focus_change(false), FieldState::Idle);
    }
}
