//! keynav demo - on-screen keyboard driven by command words
//!
//! Commands come from the arguments (`keynav-demo right hide 3 click`) or,
//! when there are none, from stdin, one per line.

mod command;

use std::io::{self, BufRead};

use keynav::geometry::{Rect, Viewport};
use keynav::{ClickOutcome, ElementId, FocusController, NavAction, NavConfig, Scene, SceneElement};
use tracing_subscriber::EnvFilter;

use command::{parse_words, Command};

const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
const KEY_SIZE: f64 = 40.0;
const KEY_GAP: f64 = 8.0;

/// Keyboard layout with a space bar and a help link under it
fn keyboard() -> Scene {
    let mut scene = Scene::new(Viewport::new(520.0, 260.0));
    for (row, keys) in ROWS.iter().enumerate() {
        let indent = row as f64 * KEY_SIZE / 2.0;
        for (col, key) in keys.chars().enumerate() {
            let rect = Rect::from_xywh(
                indent + col as f64 * (KEY_SIZE + KEY_GAP),
                row as f64 * (KEY_SIZE + KEY_GAP),
                KEY_SIZE,
                KEY_SIZE,
            );
            scene.add_element(SceneElement::new(rect).label(&key.to_string()).clickable());
        }
    }
    let bottom = ROWS.len() as f64 * (KEY_SIZE + KEY_GAP);
    scene.add_element(
        SceneElement::new(Rect::from_xywh(100.0, bottom, 280.0, KEY_SIZE))
            .label("space")
            .clickable(),
    );
    scene.add_element(
        SceneElement::new(Rect::from_xywh(400.0, bottom + KEY_SIZE + KEY_GAP, 80.0, 20.0))
            .label("help")
            .link("https://example.com/help"),
    );
    scene
}

fn describe(nav: &FocusController<Scene>, id: Option<ElementId>) -> String {
    match id {
        Some(id) => {
            let label = nav
                .host()
                .element(id)
                .and_then(|el| el.label.clone())
                .unwrap_or_default();
            format!("{id} {label}")
        }
        None => "nothing".to_string(),
    }
}

/// Run one command. Returns false to stop.
fn run(nav: &mut FocusController<Scene>, command: Command) -> bool {
    match command {
        Command::Nav(NavAction::Activate) => match nav.click() {
            ClickOutcome::Native => println!("pressed {}", describe(nav, nav.focused())),
            ClickOutcome::Navigated(target) => println!("navigate to {target}"),
            ClickOutcome::Ignored => println!("nothing to click"),
        },
        Command::Nav(action) => nav.perform(action),
        Command::Focus(id) => {
            nav.focus(id);
        }
        Command::Hover(id) => {
            nav.pointer_enter(id);
        }
        Command::Hide(id) | Command::Show(id) => {
            let hidden = matches!(command, Command::Hide(_));
            if !nav.host_mut().set_hidden(id, hidden) {
                tracing::warn!("No element {}", id);
            }
            nav.on_structure_changed();
        }
        Command::Remove(id) => {
            if nav.host_mut().remove(id).is_none() {
                tracing::warn!("No element {}", id);
            }
            nav.on_structure_changed();
        }
        Command::Scroll(dx, dy) => {
            nav.host_mut().scroll_by(dx, dy);
            nav.on_structure_changed();
        }
        Command::Activate => nav.activate(),
        Command::Deactivate => nav.deactivate(),
        Command::Refresh => nav.refresh_list(),
        Command::Print => {}
        Command::Quit => return false,
    }
    for event in nav.host_mut().take_events() {
        tracing::debug!("Host event: {:?}", event);
    }
    let state = if nav.is_activated() { "on" } else { "off" };
    println!("[{state}] focus: {}", describe(nav, nav.focused()));
    true
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut nav = FocusController::new(keyboard(), NavConfig::new().manual());
    tracing::info!(
        "keynav demo ready: {} focusable elements",
        nav.candidates().len()
    );
    println!("focus: {}", describe(&nav, nav.focused()));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for command in parse_words(args.iter().map(String::as_str))? {
            if !run(&mut nav, command) {
                break;
            }
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !run(&mut nav, command) {
                    break;
                }
            }
            Err(err) => eprintln!("error: {err:#}"),
        }
    }
    Ok(())
}
