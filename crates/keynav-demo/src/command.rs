//! Demo commands
//!
//! One command per word group: `right`, `down`, `click`, `hide 3`,
//! `scroll 0 40`, ... A word list such as `right hide 3 click` splits into
//! commands by how many arguments each command word takes.

use std::str::FromStr;

use anyhow::{bail, Context};
use keynav::{ElementId, NavAction};

/// A harness command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Nav(NavAction),
    Focus(ElementId),
    Hover(ElementId),
    Hide(ElementId),
    Show(ElementId),
    Remove(ElementId),
    Scroll(f64, f64),
    Activate,
    Deactivate,
    Refresh,
    Print,
    Quit,
}

fn element(arg: Option<&str>) -> anyhow::Result<ElementId> {
    let raw = arg.context("missing element id")?;
    let id = raw
        .trim_start_matches('#')
        .parse::<u32>()
        .with_context(|| format!("invalid element id {raw:?}"))?;
    Ok(ElementId(id))
}

fn offset(arg: Option<&str>) -> anyhow::Result<f64> {
    let raw = arg.context("missing scroll offset")?;
    raw.parse::<f64>()
        .with_context(|| format!("invalid scroll offset {raw:?}"))
}

/// Number of arguments following a command word
fn arity(name: &str) -> usize {
    match name {
        "focus" | "hover" | "hide" | "show" | "remove" => 1,
        "scroll" => 2,
        _ => 0,
    }
}

/// Split a flat word list into commands.
pub fn parse_words<'a>(words: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Vec<Command>> {
    let mut words = words.into_iter();
    let mut commands = Vec::new();
    while let Some(name) = words.next() {
        let mut line = name.to_string();
        for _ in 0..arity(name) {
            let arg = words
                .next()
                .with_context(|| format!("{name:?} expects {} argument(s)", arity(name)))?;
            line.push(' ');
            line.push_str(arg);
        }
        commands.push(line.parse()?);
    }
    Ok(commands)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            bail!("empty command");
        };
        let command = match name {
            "focus" => Command::Focus(element(words.next())?),
            "hover" => Command::Hover(element(words.next())?),
            "hide" => Command::Hide(element(words.next())?),
            "show" => Command::Show(element(words.next())?),
            "remove" => Command::Remove(element(words.next())?),
            "scroll" => Command::Scroll(offset(words.next())?, offset(words.next())?),
            "on" => Command::Activate,
            "off" => Command::Deactivate,
            "refresh" => Command::Refresh,
            "print" | "state" => Command::Print,
            "quit" | "exit" => Command::Quit,
            other => Command::Nav(other.parse()?),
        };
        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?} after {name:?}");
        }
        Ok(command)
    }
}
