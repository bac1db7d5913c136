//! Plain-text board renderer.

use owo_colors::{OwoColorize, Stream};

use crate::board::{BoardViewModel, CardDetail, CardView, GroupBody, GroupView, HeaderBadge};
use crate::board::{OwnerBadge, PriorityBadge, StatusBadge};
use crate::meta::ColorToken;
use crate::types::{GroupDimension, OrderDimension, ViewOptions};

use super::{glyph_symbol, paint};

const AVAILABLE_DOT: &str = "●";
const AWAY_DOT: &str = "○";

/// Render the whole board as lines of text.
///
/// Groups are separated by a blank line. No line carries trailing spaces.
/// With `use_color` unset the output is always plain; otherwise colors follow
/// terminal support and the global color override.
pub fn render_board(vm: &BoardViewModel, use_color: bool) -> String {
    let mut output = String::new();

    if let Some(err) = &vm.load_error {
        let line = format!("Could not load tickets: {err}");
        output.push_str(&paint(&line, ColorToken::Red, use_color));
        output.push('\n');
    }

    output.push_str(&format!(
        "Grouping: {} | Ordering: {}\n",
        vm.options.group, vm.options.order
    ));

    for group in &vm.groups {
        output.push('\n');
        render_group(&mut output, group, use_color);
    }

    output.push('\n');
    output.push_str(&format!(
        "{} of {} tickets shown\n",
        vm.shown_tickets, vm.total_tickets
    ));
    output
}

fn render_group(output: &mut String, group: &GroupView, use_color: bool) {
    let header = if use_color {
        group
            .header
            .if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    } else {
        group.header.clone()
    };
    let badge = header_badge_text(&group.badge, use_color);
    let line = join_parts(vec![badge, header, format!("({})", group.count)]);
    output.push_str(&line);
    output.push('\n');

    match &group.body {
        GroupBody::Placeholder { text } => {
            output.push_str(&format!("  {}\n", paint(text, ColorToken::Dimmed, use_color)));
        }
        GroupBody::Cards { cards } => {
            for card in cards {
                render_card(output, card, use_color);
            }
        }
    }
}

fn render_card(output: &mut String, card: &CardView, use_color: bool) {
    let id = if use_color {
        card.id
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    } else {
        card.id.clone()
    };
    output.push_str(&join_parts(vec![format!("  {id}"), card.title.clone()]));
    output.push('\n');

    let detail = detail_text(&card.detail, use_color);
    if !detail.is_empty() {
        output.push_str(&format!("    {detail}\n"));
    }

    if !card.tags.is_empty() {
        let tags = paint(&card.tag_text(), ColorToken::Gray, use_color);
        output.push_str(&format!("    {tags}\n"));
    }
}

fn detail_text(detail: &CardDetail, use_color: bool) -> String {
    let parts = match detail {
        CardDetail::ByStatus { priority, owner } => vec![
            priority_text(priority, use_color),
            format_avatar(owner, use_color),
        ],
        CardDetail::ByUser { status, priority } => vec![
            status_text(status, use_color),
            priority_text(priority, use_color),
        ],
        CardDetail::ByPriority { status, owner } => vec![
            status_text(status, use_color),
            format_avatar(owner, use_color),
        ],
    };
    join_parts(parts)
}

fn header_badge_text(badge: &HeaderBadge, use_color: bool) -> String {
    match badge {
        HeaderBadge::Status { glyph, color } | HeaderBadge::Priority { glyph, color } => {
            paint(glyph_symbol(glyph), *color, use_color)
        }
        HeaderBadge::User {
            initials,
            available,
        } => format_avatar(
            &OwnerBadge {
                initials: initials.clone(),
                available: *available,
            },
            use_color,
        ),
    }
}

fn priority_text(badge: &PriorityBadge, use_color: bool) -> String {
    let symbol = paint(glyph_symbol(badge.glyph), badge.color, use_color);
    join_parts(vec![symbol, badge.label.to_string()])
}

fn status_text(badge: &StatusBadge, use_color: bool) -> String {
    let symbol = match (badge.glyph, badge.color) {
        (Some(glyph), Some(color)) => paint(glyph_symbol(glyph), color, use_color),
        (Some(glyph), None) => glyph_symbol(glyph).to_string(),
        (None, _) => String::new(),
    };
    join_parts(vec![symbol, badge.label.clone()])
}

/// Initials followed by an availability dot; empty for an unresolved owner.
pub fn format_avatar(owner: &OwnerBadge, use_color: bool) -> String {
    if owner.initials.is_empty() {
        return String::new();
    }
    let dot = if owner.available {
        paint(AVAILABLE_DOT, ColorToken::Green, use_color)
    } else {
        paint(AWAY_DOT, ColorToken::Gray, use_color)
    };
    format!("{} {}", owner.initials, dot)
}

/// Render the current options and the legal values for each.
pub fn render_options(options: ViewOptions) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "grouping: {} (one of: {})\n",
        options.group,
        GroupDimension::ALL_STRINGS.join(", ")
    ));
    output.push_str(&format!(
        "ordering: {} (one of: {})\n",
        options.order,
        OrderDimension::ALL_STRINGS.join(", ")
    ));
    output
}

fn join_parts(parts: Vec<String>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
