//! Inline style markup → styled ratatui text.
//!
//! Recognised tags: `[fg]`, `[fg:bg]`, `[fg:attrs]`, `[fg:bg:attrs]` and the
//! reset tag `[-]`. Attribute letters: `b` bold, `d` dim, `i` italic,
//! `u` underline, `r` reversed. Anything else in brackets is literal text.

use battop_theme::ColorTag;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Convert a multi-line marked-up string into styled text.
pub fn to_text(markup: &str) -> Text<'static> {
    Text::from(markup.split('\n').map(to_line).collect::<Vec<_>>())
}

/// Convert one line of markup into a styled [`Line`].
pub fn to_line(markup: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut style = Style::default();
    let mut current = String::new();
    let mut rest = markup;

    while let Some(open) = rest.find('[') {
        current.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let parsed = after
            .find(']')
            .and_then(|close| parse_tag(&after[..close]).map(|s| (s, close)));

        match parsed {
            Some((next, close)) => {
                if !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), style));
                }
                style = next;
                rest = &after[close + 1..];
            }
            None => {
                current.push('[');
                rest = after;
            }
        }
    }
    current.push_str(rest);
    if !current.is_empty() {
        spans.push(Span::styled(current, style));
    }

    Line::from(spans)
}

fn parse_tag(tag: &str) -> Option<Style> {
    if tag == "-" {
        return Some(Style::default());
    }

    let mut parts = tag.split(':');
    let fg = ColorTag::from_name(parts.next()?)?;
    let mut style = Style::default().fg(fg.to_ratatui());

    for (pos, part) in parts.enumerate() {
        if part.is_empty() || part == "-" {
            continue;
        }
        if pos == 0 {
            if let Some(bg) = ColorTag::from_name(part) {
                style = style.bg(bg.to_ratatui());
                continue;
            }
        }
        style = style.add_modifier(parse_attrs(part)?);
    }

    Some(style)
}

fn parse_attrs(attrs: &str) -> Option<Modifier> {
    attrs.chars().try_fold(Modifier::empty(), |acc, c| {
        let m = match c {
            'b' => Modifier::BOLD,
            'd' => Modifier::DIM,
            'i' => Modifier::ITALIC,
            'u' => Modifier::UNDERLINED,
            'r' => Modifier::REVERSED,
            _ => return None,
        };
        Some(acc | m)
    })
}

/// Strip all recognised tags, leaving the visible text.
pub fn plain(markup: &str) -> String {
    to_text(markup)
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn spans(line: &Line<'_>) -> Vec<(String, Style)> {
        line.spans
            .iter()
            .map(|s| (s.content.to_string(), s.style))
            .collect()
    }

    #[test]
    fn color_then_reset() {
        let line = to_line("[gray]axis[-] plot");
        assert_eq!(
            spans(&line),
            vec![
                ("axis".to_string(), Style::default().fg(Color::Gray)),
                (" plot".to_string(), Style::default()),
            ]
        );
    }

    #[test]
    fn bold_variants() {
        let bold_yellow = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        assert_eq!(spans(&to_line("[yellow:b] V [-]"))[0], (" V ".to_string(), bold_yellow));

        let bold_white = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        assert_eq!(spans(&to_line("[white::b]hdr[-]"))[0], ("hdr".to_string(), bold_white));
    }

    #[test]
    fn background_color() {
        let style = Style::default().fg(Color::White).bg(Color::Red);
        assert_eq!(spans(&to_line("[white:red]!"))[0], ("!".to_string(), style));
    }

    #[test]
    fn unknown_tags_stay_literal() {
        let line = to_line("[magenta]x [ok [green]y");
        assert_eq!(
            spans(&line),
            vec![
                ("[magenta]x [ok ".to_string(), Style::default()),
                ("y".to_string(), Style::default().fg(Color::Green)),
            ]
        );
    }

    #[test]
    fn multi_line_and_plain() {
        let text = to_text("[cyan]a[-]\n\n[red]b[-]");
        assert_eq!(text.lines.len(), 3);
        assert_eq!(plain("[cyan]Make:[-]  SMP\n[gray]x[-]"), "Make:  SMP\nx");
    }

    #[test]
    fn chart_glyphs_survive() {
        assert_eq!(plain("[gray]   5.20 ┤[-] [white]o/*│[-]"), "   5.20 ┤ o/*│");
    }
}
