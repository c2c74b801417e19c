/// A color as written by widget code. `Var` names are resolved against the
/// active [`Theme`](super::Theme) at draw time, so widgets never hold onto a
/// theme object.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
    Var(&'static str),
    Derived { base: Box<Color>, op: ColorOp },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
}

/// Concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn var(name: &'static str) -> Self {
        Self::Var(name)
    }

    pub fn lighten(self, amount: f32) -> Self {
        Self::Derived {
            base: Box::new(self),
            op: ColorOp::Lighten(amount),
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        Self::Derived {
            base: Box::new(self),
            op: ColorOp::Darken(amount),
        }
    }
}

pub(crate) fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

pub(crate) fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
    let oklch: Oklch = srgb.into_color();
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}
