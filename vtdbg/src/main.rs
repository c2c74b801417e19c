use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use vtdbg::theme::DebuggerTheme;
use vtdbg::window::{DebuggerWindow, WindowStatus};
use vtdom::Terminal;
use vtree::{Identifier, UndoManager, ValueTree, Var};

fn ident(name: &str) -> Identifier {
    name.parse().expect("demo identifiers are valid")
}

fn sample_tree() -> ValueTree {
    let root = ValueTree::new(ident("Project"));
    root.set_property(&ident("name"), "demo session", None);
    root.set_property(&ident("revision"), 5, None);

    let settings = ValueTree::new(ident("Settings"));
    settings.set_property(&ident("sampleRate"), 48_000i64, None);
    settings.set_property(&ident("gain"), 0.75, None);
    settings.set_property(&ident("muted"), false, None);
    settings.set_property(&ident("session"), Var::Undefined, None);

    let tracks = ValueTree::new(ident("Tracks"));
    for (name, len) in [("drums", 128), ("bass", 96), ("keys", 64)] {
        let track = ValueTree::new(ident("Track"));
        track.set_property(&ident("label"), name, None);
        track.set_property(&ident("length"), len, None);
        track.set_property(&ident("data"), Var::Binary(vec![0; 16]), None);
        tracks.add_child(track, None, None);
    }

    root.add_child(settings, None, None);
    root.add_child(tracks, None, None);
    root
}

fn main() -> std::io::Result<()> {
    // Stdout is the UI, so logs go to a file
    let log_file = File::create("vtdbg.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("logger initializes once");

    let undo = Rc::new(UndoManager::new());
    let mut window = DebuggerWindow::with_tree(sample_tree(), Some(Rc::clone(&undo)));

    let theme = DebuggerTheme;
    let mut terminal = Terminal::new()?;

    loop {
        let (width, height) = terminal.size();
        let frame = window.build(width, height);
        terminal.render(&frame, &theme)?;

        for event in terminal.poll(Some(Duration::from_millis(50)))? {
            let layout = terminal.layout().clone();
            if window.handle_event(&event, &layout) == WindowStatus::Quit {
                return Ok(());
            }
        }
    }
}
