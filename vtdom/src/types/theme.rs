use super::color::{oklch_to_rgb, rgb_to_oklch};
use super::{Color, ColorOp, Rgb};

/// Named color variables, resolved per draw call. Widgets reference colors by
/// name (`Color::Var`) so no widget ever owns or outlives a theme object.
pub trait Theme {
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Bare-minimum readable defaults.
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "background" => Some(Color::rgb(0, 0, 0)),
            "foreground" => Some(Color::rgb(230, 230, 230)),
            _ => None,
        }
    }
}

/// Resolves any [`Color`] down to a concrete [`Rgb`] against a theme.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    pub fn resolve(&self, color: &Color) -> Rgb {
        match color {
            Color::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Color::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Color::Var(name) => match self.theme.resolve(name) {
                Some(resolved) => self.resolve(&resolved),
                None => {
                    log::warn!("unresolved theme color {name:?}");
                    Rgb::default()
                }
            },
            Color::Derived { base, op } => {
                let base = self.resolve(base);
                let (l, c, h) = rgb_to_oklch(base);
                let l = match op {
                    ColorOp::Lighten(amount) => (l + amount).clamp(0.0, 1.0),
                    ColorOp::Darken(amount) => (l - amount).clamp(0.0, 1.0),
                };
                oklch_to_rgb(l, c, h)
            }
        }
    }
}
