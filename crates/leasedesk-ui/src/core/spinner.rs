//! Spinner sizing/colour tokens and the loading indicator view model.
//!
//! # Design
//! - Every accepted size and colour key has a table entry.
//! - Free-form keys resolve through [`SpinnerSize::from_key`] and
//!   [`SpinnerColor::from_key`], which substitute the defaults (`md`, `blue`)
//!   independently instead of producing partial styling.
//! - Rendering decisions live in [`LoadingView`] so they can be tested off-DOM.

use std::str::FromStr;

use super::ParseKeyError;

/// Caption shown under the spinner unless overridden.
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// Spinner footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpinnerSize {
    /// Small, for inline use.
    Sm,
    /// Medium (default).
    #[default]
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl SpinnerSize {
    /// All size keys, smallest first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Sm, Self::Md, Self::Lg, Self::Xl]
    }

    /// Key accepted in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Width/height classes.
    #[must_use]
    pub const fn dimension(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Md => "h-8 w-8",
            Self::Lg => "h-12 w-12",
            Self::Xl => "h-16 w-16",
        }
    }

    /// Border weight class.
    #[must_use]
    pub const fn border_weight(self) -> &'static str {
        match self {
            Self::Sm | Self::Md => "border-2",
            Self::Lg | Self::Xl => "border-4",
        }
    }

    /// Lenient lookup; unknown keys resolve to [`SpinnerSize::Md`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for SpinnerSize {
    type Err = ParseKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| ParseKeyError::new("size", value))
    }
}

/// Spinner hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpinnerColor {
    /// Blue (default).
    #[default]
    Blue,
    /// Indigo.
    Indigo,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Neutral gray.
    Gray,
}

impl SpinnerColor {
    /// All colour keys.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Blue,
            Self::Indigo,
            Self::Green,
            Self::Purple,
            Self::Gray,
        ]
    }

    /// Key accepted in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }

    /// Border colour class for the spinner ring.
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Blue => "border-blue-600",
            Self::Indigo => "border-indigo-600",
            Self::Green => "border-green-600",
            Self::Purple => "border-purple-600",
            Self::Gray => "border-gray-600",
        }
    }

    /// Matching text colour class for the caption.
    #[must_use]
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600",
            Self::Indigo => "text-indigo-600",
            Self::Green => "text-green-600",
            Self::Purple => "text-purple-600",
            Self::Gray => "text-gray-600",
        }
    }

    /// Lenient lookup; unknown keys resolve to [`SpinnerColor::Blue`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for SpinnerColor {
    type Err = ParseKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|color| color.as_str() == value)
            .ok_or_else(|| ParseKeyError::new("color", value))
    }
}

/// Inputs accepted by the loading indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingOptions {
    /// Spinner footprint.
    pub size: SpinnerSize,
    /// Spinner hue.
    pub color: SpinnerColor,
    /// Whether the caption is rendered.
    pub show_text: bool,
    /// Caption copy.
    pub text: String,
    /// Wrap the output in a viewport-covering overlay.
    pub full_screen: bool,
}

impl Default for LoadingOptions {
    fn default() -> Self {
        Self {
            size: SpinnerSize::default(),
            color: SpinnerColor::default(),
            show_text: true,
            text: DEFAULT_LOADING_TEXT.to_string(),
            full_screen: false,
        }
    }
}

/// Caption node resolved for a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caption {
    /// Copy to show.
    pub text: String,
    /// Class list, including the colour's text token.
    pub class: String,
}

/// Everything the loading indicator needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingView {
    /// Class list for the spinner element.
    pub spinner_class: String,
    /// Class list for the element wrapping spinner and caption.
    pub body_class: &'static str,
    /// Caption, present only when text is shown.
    pub caption: Option<Caption>,
    /// Overlay class list, present only for full-screen rendering.
    pub overlay_class: Option<&'static str>,
    /// ARIA role carried by the spinner element.
    pub spinner_role: &'static str,
    /// Live-region politeness carried by the spinner element.
    pub spinner_live: &'static str,
}

/// ARIA role of the spinner, whatever the configuration.
pub const SPINNER_ROLE: &str = "status";
/// Live-region hint of the spinner, whatever the configuration.
pub const SPINNER_LIVE: &str = "polite";

/// Container for spinner plus caption.
pub const BODY_CLASS: &str = "flex flex-col items-center justify-center gap-3";
/// Fixed, semi-opaque layer covering the viewport.
pub const OVERLAY_CLASS: &str =
    "fixed inset-0 z-50 flex items-center justify-center bg-white/80 backdrop-blur-sm";

impl LoadingView {
    /// Resolve the tokens for `options`.
    #[must_use]
    pub fn resolve(options: &LoadingOptions) -> Self {
        let spinner_class = format!(
            "animate-spin rounded-full border-solid border-t-transparent {} {} {}",
            options.size.dimension(),
            options.size.border_weight(),
            options.color.border_color(),
        );
        let caption = options.show_text.then(|| Caption {
            text: options.text.clone(),
            class: format!("text-sm font-medium {}", options.color.text_color()),
        });
        Self {
            spinner_class,
            body_class: BODY_CLASS,
            caption,
            overlay_class: options.full_screen.then_some(OVERLAY_CLASS),
            spinner_role: SPINNER_ROLE,
            spinner_live: SPINNER_LIVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dimension, border weight, border colour, text colour.
    type Tokens = (&'static str, &'static str, &'static str, &'static str);

    fn expected_tokens(size: SpinnerSize, color: SpinnerColor) -> Tokens {
        let (dimension, weight) = match size {
            SpinnerSize::Sm => ("h-4 w-4", "border-2"),
            SpinnerSize::Md => ("h-8 w-8", "border-2"),
            SpinnerSize::Lg => ("h-12 w-12", "border-4"),
            SpinnerSize::Xl => ("h-16 w-16", "border-4"),
        };
        let (border, text) = match color {
            SpinnerColor::Blue => ("border-blue-600", "text-blue-600"),
            SpinnerColor::Indigo => ("border-indigo-600", "text-indigo-600"),
            SpinnerColor::Green => ("border-green-600", "text-green-600"),
            SpinnerColor::Purple => ("border-purple-600", "text-purple-600"),
            SpinnerColor::Gray => ("border-gray-600", "text-gray-600"),
        };
        (dimension, weight, border, text)
    }

    #[test]
    fn every_size_and_color_combination_matches_table() {
        let mut seen = 0;
        for size in SpinnerSize::all() {
            for color in SpinnerColor::all() {
                assert_eq!(SpinnerSize::from_key(size.as_str()), size);
                assert_eq!(SpinnerColor::from_key(color.as_str()), color);
                let (dimension, weight, border, text) = expected_tokens(size, color);
                assert_eq!(size.dimension(), dimension);
                assert_eq!(size.border_weight(), weight);
                assert_eq!(color.border_color(), border);
                assert_eq!(color.text_color(), text);

                let view = LoadingView::resolve(&LoadingOptions {
                    size,
                    color,
                    ..LoadingOptions::default()
                });
                assert!(view.spinner_class.contains(dimension));
                assert!(view.spinner_class.contains(weight));
                assert!(view.spinner_class.contains(border));
                assert!(view.caption.unwrap().class.contains(text));
                seen += 1;
            }
        }
        assert_eq!(seen, SpinnerSize::all().len() * SpinnerColor::all().len());
        assert_eq!(seen, 20);
    }

    #[test]
    fn spinner_is_always_a_polite_status_region() {
        for size in SpinnerSize::all() {
            for color in SpinnerColor::all() {
                for show_text in [true, false] {
                    for full_screen in [true, false] {
                        let view = LoadingView::resolve(&LoadingOptions {
                            size,
                            color,
                            show_text,
                            full_screen,
                            ..LoadingOptions::default()
                        });
                        assert_eq!(view.spinner_role, "status");
                        assert_eq!(view.spinner_live, "polite");
                    }
                }
            }
        }
    }

    #[test]
    fn defaults_match_contract() {
        let options = LoadingOptions::default();
        assert_eq!(options.size, SpinnerSize::Md);
        assert_eq!(options.color, SpinnerColor::Blue);
        assert!(options.show_text);
        assert_eq!(options.text, "Loading...");
        assert!(!options.full_screen);
    }

    #[test]
    fn unknown_keys_fall_back_independently() {
        assert_eq!(SpinnerSize::from_key("huge"), SpinnerSize::Md);
        assert_eq!(SpinnerSize::from_key("LG"), SpinnerSize::Md);
        assert_eq!(SpinnerColor::from_key("red"), SpinnerColor::Blue);
        assert_eq!(SpinnerSize::from_key("xl"), SpinnerSize::Xl);
        assert_eq!(SpinnerColor::from_key("teal"), SpinnerColor::Blue);
        assert_eq!(SpinnerColor::from_key("green"), SpinnerColor::Green);

        let err = "huge".parse::<SpinnerSize>().unwrap_err();
        assert_eq!(err.to_string(), "unknown size `huge`");
        let err = "red".parse::<SpinnerColor>().unwrap_err();
        assert_eq!(err.field, "color");
    }

    #[test]
    fn caption_follows_show_text() {
        let shown = LoadingView::resolve(&LoadingOptions::default());
        assert_eq!(shown.caption.map(|c| c.text), Some("Loading...".to_string()));

        let hidden = LoadingView::resolve(&LoadingOptions {
            show_text: false,
            text: "Syncing".into(),
            ..LoadingOptions::default()
        });
        assert!(hidden.caption.is_none());
    }

    #[test]
    fn overlay_follows_full_screen() {
        let inline = LoadingView::resolve(&LoadingOptions::default());
        assert!(inline.overlay_class.is_none());

        let overlay = LoadingView::resolve(&LoadingOptions {
            full_screen: true,
            ..LoadingOptions::default()
        });
        let class = overlay.overlay_class.unwrap();
        assert!(class.contains("fixed"));
        assert!(class.contains("inset-0"));
    }

    #[test]
    fn large_purple_syncing_example() {
        let view = LoadingView::resolve(&LoadingOptions {
            size: SpinnerSize::Lg,
            color: SpinnerColor::Purple,
            text: "Syncing".into(),
            ..LoadingOptions::default()
        });
        assert!(view.spinner_class.contains("h-12 w-12"));
        assert!(view.spinner_class.contains("border-4"));
        assert!(view.spinner_class.contains("border-purple-600"));
        let caption = view.caption.unwrap();
        assert_eq!(caption.text, "Syncing");
        assert!(caption.class.contains("text-purple-600"));
        assert!(view.overlay_class.is_none());
    }
}
