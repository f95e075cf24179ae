// SPDX-License-Identifier: MPL-2.0
//! Command-line flags, interactive commands and the text rendering of a card.

use crate::config::Config;
use crate::deck::Key;
use crate::domain::news::{Comment, ItemId, NewsItem, ReactionKind};
use crate::error::{Error, Result};
use crate::gesture::{GestureEvent, GestureSample};
use crate::navigation::NavigationInfo;
use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::fmt;
use std::time::SystemTime;

pub const USAGE: &str = "\
newsdeck - swipe through the news from a terminal

USAGE:
    newsdeck [OPTIONS]

OPTIONS:
    --base-url <URL>     News backend to read from
    --limit <N>          Number of items to load per refresh
    --config-dir <DIR>   Directory holding settings.toml
    --data-dir <DIR>     Directory holding saved reactions
    -v, --verbose        Show debug logs on stderr
    -h, --help           Print this help
";

pub const COMMANDS: &str = "\
n, next, up            next card (same as swiping up)
p, prev, down          previous card (same as swiping down)
swipe X0 Y0 X1 Y1 MS   replay a drag from (X0,Y0) to (X1,Y1) lasting MS
like, dislike          react to the current card
comments               show comments on the current card
c TEXT                 comment on the current card
open ID                jump to the card with this id
r, refresh             reload the feed
h, help                show this list
q, quit                exit";

/// Startup flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub base_url: Option<String>,
    pub limit: Option<u32>,
    pub config_dir: Option<String>,
    pub data_dir: Option<String>,
    pub verbose: bool,
    pub help: bool,
}

impl Flags {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Flags {
            help: args.contains(["-h", "--help"]),
            verbose: args.contains(["-v", "--verbose"]),
            base_url: args.opt_value_from_str("--base-url")?,
            limit: args.opt_value_from_str("--limit")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            data_dir: args.opt_value_from_str("--data-dir")?,
        };

        let rest = args.finish();
        if let Some(extra) = rest.first() {
            return Err(Error::Config(format!(
                "unexpected argument: {}",
                extra.to_string_lossy()
            )));
        }
        Ok(flags)
    }

    /// Lets flags take precedence over values from `settings.toml`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.feed.base_url = Some(base_url.clone());
        }
        if let Some(limit) = self.limit {
            config.feed.limit = Some(limit);
        }
    }
}

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Key(Key),
    /// A replayed drag: start and end events for the gesture tracker.
    Swipe([GestureEvent; 2]),
    React(ReactionKind),
    Comments,
    Comment(String),
    Open(ItemId),
    Refresh,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(word) => write!(f, "unknown command '{word}' (try 'help')"),
            CommandError::MissingArgument(what) => write!(f, "missing {what}"),
            CommandError::InvalidNumber(raw) => write!(f, "not a number: {raw}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    pub fn parse(line: &str) -> std::result::Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "n" | "next" | "up" => Command::Key(Key::ArrowUp),
            "p" | "prev" | "down" => Command::Key(Key::ArrowDown),
            "swipe" => Command::Swipe(parse_swipe(rest)?),
            "like" => Command::React(ReactionKind::Like),
            "dislike" => Command::React(ReactionKind::Dislike),
            "comments" => Command::Comments,
            "c" | "comment" => Command::Comment(rest.to_string()),
            "open" if rest.is_empty() => return Err(CommandError::MissingArgument("item id")),
            "open" => Command::Open(ItemId::new(rest)),
            "r" | "refresh" => Command::Refresh,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

fn parse_swipe(args: &str) -> std::result::Result<[GestureEvent; 2], CommandError> {
    let mut numbers = args.split_whitespace();
    let mut next_f32 = |what: &'static str| -> std::result::Result<f32, CommandError> {
        let raw = numbers.next().ok_or(CommandError::MissingArgument(what))?;
        raw.parse()
            .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
    };

    let (x0, y0, x1, y1) = (next_f32("x0")?, next_f32("y0")?, next_f32("x1")?, next_f32("y1")?);
    let raw_ms = numbers
        .next()
        .ok_or(CommandError::MissingArgument("duration in ms"))?;
    let ms: u64 = raw_ms
        .parse()
        .map_err(|_| CommandError::InvalidNumber(raw_ms.to_string()))?;

    Ok([
        GestureEvent::Start {
            sample: GestureSample::at_millis(x0, y0, 0),
            contacts: 1,
        },
        GestureEvent::release(GestureSample::at_millis(x1, y1, ms)),
    ])
}

fn format_time(at: SystemTime) -> String {
    DateTime::<Utc>::from(at).format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Renders the visible card, or a placeholder when the deck is empty.
#[must_use]
pub fn render_card(
    item: Option<&NewsItem>,
    info: NavigationInfo,
    mine: Option<ReactionKind>,
) -> String {
    let Some(item) = item else {
        return "No news yet. Type 'r' to refresh.".to_string();
    };

    let index = info.current_index.map_or(0, |i| i + 1);
    let mut lines = vec![format!("[{}/{}] {}", index, info.total_count, item.title)];
    lines.extend(
        [item.summary.as_str(), item.link.as_str()]
            .into_iter()
            .filter(|text| !text.is_empty())
            .map(str::to_string),
    );
    if let Some(image) = &item.image {
        lines.push(format!("image: {image}"));
    }

    let mut counts = format!(
        "likes {}  dislikes {}",
        item.counts.likes, item.counts.dislikes
    );
    if let Some(kind) = mine {
        counts.push_str(&format!("  (you: {})", kind.as_str()));
    }
    lines.push(counts);

    if let Some(at) = item.created_at {
        lines.push(format_time(at));
    }
    lines.push(format!(
        "{}{}",
        if info.has_previous { "< prev " } else { "" },
        if info.has_next { "next >" } else { "" }
    ));
    lines.join("\n")
}

#[must_use]
pub fn render_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "No comments yet.".to_string();
    }
    comments
        .iter()
        .map(|comment| match comment.created_at {
            Some(at) => format!("- {} ({})", comment.text, format_time(at)),
            None => format!("- {}", comment.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
