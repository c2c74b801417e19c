//! Top-level entry point. The window hides on close instead of tearing the
//! debugger down, so an embedder can pop it back up with its state intact.

use std::rc::Rc;

use log::info;
use vtdom::{Color, Element, Event, Key, LayoutResult, Size, Style};
use vtree::{UndoManager, ValueTree};

use crate::panel::MainPanel;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;
pub const MAX_WIDTH: u16 = 200;
pub const MAX_HEIGHT: u16 = 60;

/// What the embedder's event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    Continue,
    Quit,
}

pub struct DebuggerWindow {
    panel: MainPanel,
    visible: bool,
}

impl Default for DebuggerWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl DebuggerWindow {
    /// An empty debugger; bind a tree later with [`set_source`](Self::set_source).
    pub fn new() -> Self {
        Self {
            panel: MainPanel::new(None),
            visible: true,
        }
    }

    pub fn with_tree(tree: ValueTree, undo: Option<Rc<UndoManager>>) -> Self {
        let mut panel = MainPanel::new(undo);
        panel.set_tree(Some(tree));
        Self {
            panel,
            visible: true,
        }
    }

    /// Rebind the inspected tree at any time.
    pub fn set_source(&mut self, tree: Option<ValueTree>) {
        self.panel.set_tree(tree);
    }

    pub fn panel(&self) -> &MainPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut MainPanel {
        &mut self.panel
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// A close request hides the window; nothing is destroyed.
    pub fn close_requested(&mut self) {
        info!("debugger hidden");
        self.visible = false;
    }

    /// Build the frame for a terminal of the given size. The window clamps
    /// itself to its size envelope.
    pub fn build(&mut self, term_width: u16, term_height: u16) -> Element {
        if !self.visible {
            return Element::col()
                .id("window-hidden")
                .child(
                    Element::text("value tree debugger hidden, F1 shows it")
                        .id("hidden-hint")
                        .style(Style::new().foreground(Color::var("hint.text"))),
                );
        }

        let width = term_width.clamp(MIN_WIDTH, MAX_WIDTH);
        let height = term_height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        Element::col()
            .id("window")
            .width(Size::Fixed(width))
            .height(Size::Fixed(height))
            .child(self.panel.build())
    }

    pub fn handle_event(&mut self, event: &Event, layout: &LayoutResult) -> WindowStatus {
        if let Event::Key { key, modifiers } = event {
            if *key == Key::Char('q') && modifiers.ctrl {
                return WindowStatus::Quit;
            }
            if *key == Key::F(1) && !self.visible {
                self.show();
                return WindowStatus::Continue;
            }
        }

        if !self.visible {
            return WindowStatus::Continue;
        }

        let consumed = self.panel.handle_event(event, layout);

        if !consumed {
            if let Event::Key {
                key: Key::Escape, ..
            } = event
            {
                self.close_requested();
            }
        }
        WindowStatus::Continue
    }
}
