//! Inline color markup for log lines.
//!
//! A log line may carry color hints as tags: `[green]` opens a green
//! region and `[-]` resets to the default color. Only the color names in
//! [`NamedColor`] are recognised; any other bracketed text is kept
//! literally, so messages such as `dial tcp [::1]:80` survive intact.
//!
//! The core only produces markup; the log panel parses it back into
//! styled segments.

/// Tag that closes a colored region.
pub const RESET_TAG: &str = "[-]";

/// Color names understood by the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    White,
    Gray,
}

impl NamedColor {
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Cyan => "cyan",
            NamedColor::Magenta => "magenta",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(NamedColor::Red),
            "green" => Some(NamedColor::Green),
            "yellow" => Some(NamedColor::Yellow),
            "blue" => Some(NamedColor::Blue),
            "cyan" => Some(NamedColor::Cyan),
            "magenta" => Some(NamedColor::Magenta),
            "white" => Some(NamedColor::White),
            "gray" | "grey" => Some(NamedColor::Gray),
            _ => None,
        }
    }
}

/// A run of text in a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub color: Option<NamedColor>,
    pub text: String,
}

/// Wrap `text` in a color region. Uncolored text is returned as is.
pub fn colorize(color: Option<NamedColor>, text: &str) -> String {
    match color {
        Some(color) => format!("[{}]{}{}", color.name(), text, RESET_TAG),
        None => text.to_string(),
    }
}

/// Split a marked-up line into colored segments. Empty runs are dropped.
pub fn parse(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Option<NamedColor> = None;
    let mut text = String::new();
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        let (before, from_open) = rest.split_at(open);
        text.push_str(before);

        let Some(close) = from_open.find(']') else {
            rest = from_open;
            break;
        };
        let tag = &from_open[1..close];
        let next = if tag == "-" {
            Some(None)
        } else {
            NamedColor::from_name(tag).map(Some)
        };

        match next {
            Some(color) => {
                flush(&mut segments, current, &mut text);
                current = color;
            }
            None => text.push_str(&from_open[..=close]),
        }
        rest = &from_open[close + 1..];
    }

    text.push_str(rest);
    flush(&mut segments, current, &mut text);
    segments
}

fn flush(segments: &mut Vec<Segment>, color: Option<NamedColor>, text: &mut String) {
    if !text.is_empty() {
        segments.push(Segment {
            color,
            text: std::mem::take(text),
        });
    }
}
