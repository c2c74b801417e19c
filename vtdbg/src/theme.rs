use vtdom::{Color, Theme};

/// The debugger's palette: near-neutral darks with a slight magenta cast,
/// desaturated green for node type names, desaturated magenta for property
/// names. Derived entries brighten their base per draw.
pub struct DebuggerTheme;

impl Theme for DebuggerTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "window.background" => Some(Color::rgb(13, 12, 12)),
            "widget.background" => Some(Color::rgb(27, 24, 25)),
            "toolbar.background" => Some(Color::rgb(40, 36, 38)),
            "outline" => Some(Color::rgb(230, 230, 230)),
            "outline.focused" => Some(Color::var("outline").lighten(0.05)),
            "error" => Some(Color::rgb(179, 79, 77)),
            "type.text" => Some(Color::rgb(179, 204, 199)),
            "prop.text" => Some(Color::rgb(204, 179, 188)),
            "hint.text" => Some(Color::rgb(140, 140, 140)),
            "text" => Some(Color::rgb(204, 204, 204)),
            "highlight.text" => Some(Color::rgb(217, 217, 217)),
            "highlight.fill" => Some(Color::rgb(146, 135, 139)),
            "selected.bg" => Some(Color::rgb(54, 48, 50)),
            "selected.bg.prop" => Some(Color::var("selected.bg").lighten(0.05)),
            "hover.bg" => Some(Color::var("selected.bg").lighten(0.05)),
            "hover.bg.prop" => Some(Color::var("selected.bg.prop").lighten(0.05)),
            "menu.text" => Some(Color::rgb(182, 175, 178)),
            _ => None,
        }
    }
}
