//! Copy for the full-page route transition screen.

use super::spinner::LoadingOptions;

/// Heading shown when the caller does not supply one.
pub const DEFAULT_TRANSITION_MESSAGE: &str = "Preparing your experience...";
/// Fixed sentence rendered beneath the heading.
pub const TRANSITION_DETAIL: &str = "Please wait while we get everything ready for you.";

/// Text block rendered under the spinner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionCopy {
    /// Caller-supplied heading.
    pub heading: String,
    /// Constant explanatory sentence.
    pub detail: &'static str,
}

impl TransitionCopy {
    /// Build the copy block around `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            heading: message.into(),
            detail: TRANSITION_DETAIL,
        }
    }

    /// Spinner settings the screen embeds: the indicator's own defaults, inline.
    #[must_use]
    pub fn spinner() -> LoadingOptions {
        LoadingOptions::default()
    }
}

impl Default for TransitionCopy {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_copy_is_verbatim() {
        let copy = TransitionCopy::default();
        assert_eq!(copy.heading, "Preparing your experience...");
        assert_eq!(
            copy.detail,
            "Please wait while we get everything ready for you."
        );
    }

    #[test]
    fn custom_message_keeps_fixed_detail() {
        let copy = TransitionCopy::new("Loading reports");
        assert_eq!(copy.heading, "Loading reports");
        assert_eq!(copy.detail, TRANSITION_DETAIL);
    }

    #[test]
    fn embedded_spinner_is_inline_default() {
        let spinner = TransitionCopy::spinner();
        assert_eq!(spinner, LoadingOptions::default());
        assert!(!spinner.full_screen);
    }
}
