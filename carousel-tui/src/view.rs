//! Drawing the carousel state with crossterm.

use std::io::{self, Write};
use std::ops::Range;

use carousel::{CarouselImage, CarouselItem, image_label};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::DemoCarousel;

const TRACK_TOP: u16 = 2;
const CARD_HEIGHT: u16 = 7;

/// Rows that accept pointer presses.
pub fn track_rows() -> Range<u16> {
    TRACK_TOP..TRACK_TOP + CARD_HEIGHT
}

/// Demo state shown next to the carousel.
#[derive(Debug, Clone, Copy)]
pub struct Status<'a> {
    pub focused: bool,
    pub last_event: Option<&'a str>,
    pub height: u16,
}

/// Truncate `text` to `width` columns, marking the cut with an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn draw(out: &mut impl Write, carousel: &DemoCarousel, status: Status<'_>) -> io::Result<()> {
    let columns = carousel.host().columns();
    queue!(out, Clear(ClearType::All))?;

    let title = carousel.aria_label().unwrap_or("Carousel");
    let focus = if status.focused { "focused" } else { "not focused (Tab)" };
    queue!(
        out,
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(fit(title, columns as usize / 2)),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("  [{}]", focus)),
        ResetColor
    )?;

    draw_track(out, carousel, columns)?;

    let mut row = TRACK_TOP + CARD_HEIGHT + 1;
    draw_ring(out, carousel, row)?;
    row += 1;
    draw_thumbnails(out, carousel, row, columns)?;
    row += 2;

    let selection = match carousel.selection() {
        Some(change) => format!(
            "Selected: {} (#{}, pulse {})",
            image_label(Some(&*change.item), change.index),
            change.index + 1,
            carousel.selection_pulse()
        ),
        None => "Nothing selected".to_string(),
    };
    queue!(out, MoveTo(0, row), Print(fit(&selection, columns as usize)))?;
    row += 1;

    if let Some(event) = status.last_event {
        queue!(
            out,
            MoveTo(0, row),
            SetForegroundColor(Color::Green),
            Print(fit(event, columns as usize)),
            ResetColor
        )?;
    }
    row += 1;

    let track = carousel.host();
    let engine = format!(
        "position {} · offset {}% · transition {} · {} · layouts {} · queued {}",
        carousel.current_index(),
        carousel.track_offset_percent(),
        if track.transition() { "on" } else { "off" },
        if carousel.is_animating() { "animating" } else { "idle" },
        track.layouts(),
        carousel.queued_steps(),
    );
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Color::DarkGrey),
        Print(fit(&engine, columns as usize)),
        ResetColor
    )?;

    let help = concat!(
        "←/→ move · Enter/Space select · click select · drag swipe · ",
        "1-9 jump · [/] thumbs · -/+ shrink/restore · q quit"
    );
    queue!(
        out,
        MoveTo(0, status.height.saturating_sub(1)),
        SetForegroundColor(Color::DarkGrey),
        Print(fit(help, columns as usize)),
        ResetColor
    )?;

    out.flush()
}

/// Previous, current and next slide of the ring as three cards.
fn draw_track(out: &mut impl Write, carousel: &DemoCarousel, columns: u16) -> io::Result<()> {
    let ring = carousel.ring();
    if ring.is_empty() {
        return queue!(out, MoveTo(2, TRACK_TOP + 2), Print("No images"));
    }

    let card_width = (columns / 3).max(8);
    let current = carousel.current_index();
    for (slot, offset) in [-1isize, 0, 1].into_iter().enumerate() {
        // The ring keeps a neighbour on each side, except for one or two items.
        let Some(slide) = current
            .checked_add_signed(offset)
            .and_then(|position| ring.get(position))
        else {
            continue;
        };
        let x = slot as u16 * card_width;
        draw_card(
            out,
            x,
            card_width.saturating_sub(1),
            &slide.image,
            slide.item_index,
            &slide.id,
            offset == 0,
            carousel.is_selected(slide.item_index),
        )?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    out: &mut impl Write,
    x: u16,
    width: u16,
    image: &CarouselImage,
    item_index: usize,
    id: &str,
    current: bool,
    selected: bool,
) -> io::Result<()> {
    let inner = width.saturating_sub(2) as usize;
    let color = match (current, selected) {
        (_, true) => Color::Yellow,
        (true, false) => Color::Cyan,
        (false, false) => Color::DarkGrey,
    };
    let border = "─".repeat(inner);
    let lines = [
        image_label(Some(image), item_index),
        image.src().to_string(),
        image.description.clone().unwrap_or_default(),
        format!("{} · item {}", id, item_index + 1),
        if selected { "★ selected".to_string() } else { String::new() },
    ];

    queue!(
        out,
        SetForegroundColor(color),
        MoveTo(x, TRACK_TOP),
        Print(format!("┌{}┐", border))
    )?;
    for (i, line) in lines.iter().enumerate() {
        let text = fit(line, inner);
        let pad = inner.saturating_sub(text.width());
        queue!(
            out,
            MoveTo(x, TRACK_TOP + 1 + i as u16),
            Print(format!("│{}{}│", text, " ".repeat(pad)))
        )?;
    }
    queue!(
        out,
        MoveTo(x, TRACK_TOP + CARD_HEIGHT - 1),
        Print(format!("└{}┘", border)),
        ResetColor
    )
}

fn draw_ring(out: &mut impl Write, carousel: &DemoCarousel, row: u16) -> io::Result<()> {
    let ring: Vec<String> = carousel
        .slides()
        .enumerate()
        .map(|(position, slide)| {
            if position == carousel.current_index() {
                format!("[{}]", slide.item_index + 1)
            } else {
                format!(" {} ", slide.item_index + 1)
            }
        })
        .collect();
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Color::DarkGrey),
        Print("Ring: "),
        ResetColor,
        Print(ring.join(""))
    )
}

fn draw_thumbnails(
    out: &mut impl Write,
    carousel: &DemoCarousel,
    row: u16,
    columns: u16,
) -> io::Result<()> {
    let selector = carousel.selector();
    let visible = selector.visible_indexes();
    let cell = (columns as usize / visible.len().max(1)).saturating_sub(2).max(6);

    queue!(out, MoveTo(0, row))?;
    for &index in visible {
        let marker = match (selector.is_current(index), selector.is_selected(index)) {
            (true, true) => "▶★",
            (true, false) => "▶ ",
            (false, true) => " ★",
            (false, false) => "  ",
        };
        let color = if selector.is_current(index) {
            Color::Cyan
        } else {
            Color::DarkGrey
        };
        let label = format!("{}{} {}", marker, index + 1, selector.image_label(index));
        queue!(
            out,
            SetForegroundColor(color),
            Print(format!("{:<width$}", fit(&label, cell), width = cell + 2)),
            ResetColor
        )?;
    }
    queue!(
        out,
        MoveTo(0, row + 1),
        SetForegroundColor(Color::DarkGrey),
        Print(fit(
            &visible
                .iter()
                .map(|&index| selector.thumbnail_src(index))
                .collect::<Vec<_>>()
                .join("  "),
            columns as usize,
        )),
        ResetColor
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_leaves_short_text() {
        assert_eq!(fit("Dunes", 10), "Dunes");
        assert_eq!(fit("Dunes", 5), "Dunes");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Lighthouse", 6), "Light…");
        assert_eq!(fit("Lighthouse", 0), "");
    }

    #[test]
    fn test_fit_counts_wide_chars() {
        // Each CJK character takes two columns.
        assert_eq!(fit("灯台の写真", 5), "灯台…");
    }

    #[test]
    fn test_track_rows() {
        assert_eq!(track_rows(), 2..9);
    }
}
