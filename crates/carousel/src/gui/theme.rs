use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{Srgba, WithAlpha};

const DECK_CSS: &str = "
.carousel-drawing-area {
    background-color: @theme_bg_color;
}
";

/// Colors the deck borrows from the GTK theme. Label and shadow keep a fixed
/// alpha so cards stay readable whatever the theme sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub title: Srgba<f64>,
    pub label: Srgba<f64>,
    pub shadow: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            title: Srgba::new(1.0, 1.0, 1.0, 1.0),
            label: Srgba::new(0.2, 0.2, 0.2, 0.9),
            shadow: Srgba::new(0.0, 0.0, 0.0, 0.08),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let named = |name: &str| context.lookup_color(name).map(to_srgba);
        Self::resolve(
            named("theme_selected_fg_color"),
            named("theme_fg_color"),
            named("shade_color"),
        )
    }

    fn resolve(
        title: Option<Srgba<f64>>,
        label: Option<Srgba<f64>>,
        shadow: Option<Srgba<f64>>,
    ) -> Self {
        let fallback = Self::default();
        Self {
            title: title.unwrap_or(fallback.title),
            label: label.map_or(fallback.label, |c| c.with_alpha(fallback.label.alpha)),
            shadow: shadow.map_or(fallback.shadow, |c| c.with_alpha(fallback.shadow.alpha)),
        }
    }
}

fn to_srgba(rgba: gdk::RGBA) -> Srgba<f64> {
    Srgba::new(
        f64::from(rgba.red()),
        f64::from(rgba.green()),
        f64::from(rgba.blue()),
        f64::from(rgba.alpha()),
    )
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(DECK_CSS);

    match gdk::Display::default() {
        Some(display) => gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => log::warn!("No display, deck CSS not installed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_theme_colors_fall_back() {
        assert_eq!(ThemeColors::resolve(None, None, None), ThemeColors::default());
    }

    #[test]
    fn test_theme_alpha_is_pinned_for_label_and_shadow() {
        let fg = to_srgba(gdk::RGBA::new(0.5, 0.25, 0.0, 1.0));
        let colors = ThemeColors::resolve(Some(fg), Some(fg), Some(fg));

        assert_eq!(colors.title, fg);
        assert_eq!(colors.label.color, fg.color);
        assert_eq!(colors.label.alpha, 0.9);
        assert_eq!(colors.shadow.alpha, 0.08);
    }
}
