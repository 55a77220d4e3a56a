//! Rendering for platter's collection page.
//!
//! One entry point, [`ui`], draws the whole frame: header, the
//! width-appropriate card layout (stacked list with a "Show more" button on
//! narrow terminals, grid plus featured strip on wide ones), the synthetic
//! scrollbar, and a hint footer. Every interactive region writes its
//! rectangle back into [`AppState`] so the mouse layer hit-tests against
//! what this frame actually shows.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::types::Card;
use crate::state::{AppState, LayoutMode};
use crate::theme::{Theme, theme};

pub mod helpers;

use helpers::{format_price, rect4, to_u16};

/// Rows a card occupies in the narrow stacked list (borders included).
pub const CARD_HEIGHT: u16 = 4;

/// Card cell width in the wide grid.
const GRID_CARD_WIDTH: u16 = 30;

/// Horizontal gap between grid cards.
const GRID_GAP: u16 = 1;

/// Tile width in the featured strip.
const TILE_WIDTH: u16 = 22;

/// Gap between strip tiles.
const TILE_GAP: u16 = 1;

/// Featured strip height (borders included).
const STRIP_HEIGHT: u16 = 5;

/// Synthetic scrollbar region height: one thin row, two when hovered.
const SCROLLBAR_HEIGHT: u16 = 2;

/// "Show more" button height (borders included).
const BUTTON_HEIGHT: u16 = 3;

/// Render one frame of the collection page.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    app.term_width = area.width;
    app.term_height = area.height;

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0], &th);

    let mode = LayoutMode::from_width(area.width, app.settings.narrow_threshold);
    match mode {
        LayoutMode::Narrow => render_narrow(f, app, chunks[1], &th),
        LayoutMode::Wide => render_wide(f, app, chunks[1], &th),
    }

    render_footer(f, app, chunks[2], &th, mode);
}

/// Header bar with the shop title and catalog size.
fn render_header(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            " platter ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· Collection", Style::default().fg(th.subtext0)),
    ]);
    let count = format!("{} products", app.cards.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            count,
            Style::default().fg(th.subtext0),
        ))),
        inner,
    );
}

/// Narrow layout: stacked card list plus the optional "Show more" button.
fn render_narrow(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    // No strip on narrow; drop its rects and let the controller record that
    // the scrollbar is hidden at this width.
    app.strip_rect = None;
    app.scrollbar_rect = None;
    app.track_rect = None;
    app.thumb_rect = None;
    let _ = app.scrollbar.take_frame(&app.strip, app.term_width);

    let button_h = if app.visibility.button_visible() {
        BUTTON_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(button_h)])
        .split(area);
    let pane = chunks[0];
    app.cards_rect = Some(rect4(pane));

    let visible_idx: Vec<usize> = app
        .cards
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.visible.then_some(i))
        .collect();
    app.list_content_rows = to_u16(visible_idx.len().saturating_mul(CARD_HEIGHT as usize));
    let max_scroll = app.list_content_rows.saturating_sub(pane.height);
    if app.list_scroll > max_scroll {
        app.list_scroll = max_scroll;
    }

    let now = Instant::now();
    for (slot, idx) in visible_idx.into_iter().enumerate() {
        let top = i64::try_from(slot)
            .unwrap_or(i64::MAX)
            .saturating_mul(i64::from(CARD_HEIGHT))
            - i64::from(app.list_scroll);
        let y0 = i64::from(pane.y) + top;
        let y1 = y0 + i64::from(CARD_HEIGHT);
        let cy0 = y0.max(i64::from(pane.y));
        let cy1 = y1.min(i64::from(pane.y) + i64::from(pane.height));
        if cy1 <= cy0 {
            continue;
        }
        let rect = Rect::new(
            pane.x,
            u16::try_from(cy0).unwrap_or(pane.y),
            pane.width,
            u16::try_from(cy1 - cy0).unwrap_or(0),
        );
        render_card(f, rect, &app.cards[idx], now, th);
    }

    if button_h > 0 {
        let row = chunks[1];
        let width = row.width.min(28);
        let x = row.x + (row.width.saturating_sub(width)) / 2;
        let rect = Rect::new(x, row.y, width, row.height);
        app.button_rect = Some(rect4(rect));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.sapphire));
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Show more",
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            )))
            .centered(),
            inner,
        );
    } else {
        app.button_rect = None;
    }
}

/// Wide layout: featured strip, synthetic scrollbar, and the card grid.
fn render_wide(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    app.button_rect = None;
    app.list_scroll = 0;

    if app.scrollbar.is_active() && area.height > STRIP_HEIGHT + SCROLLBAR_HEIGHT {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STRIP_HEIGHT),
                Constraint::Length(SCROLLBAR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);
        render_strip(f, app, chunks[0], th);
        render_scrollbar(f, app, chunks[1], th);
        render_grid(f, app, chunks[2], th);
    } else {
        app.strip_rect = None;
        app.scrollbar_rect = None;
        app.track_rect = None;
        app.thumb_rect = None;
        let _ = app.scrollbar.take_frame(&app.strip, app.term_width);
        render_grid(f, app, area, th);
    }
}

/// Horizontally scrollable featured strip of product tiles.
fn render_strip(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(
            " Featured ",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.strip_rect = Some(rect4(inner));

    let stride = i64::from(TILE_WIDTH + TILE_GAP);
    let content = app
        .cards
        .len()
        .saturating_mul((TILE_WIDTH + TILE_GAP) as usize)
        .saturating_sub(TILE_GAP as usize);
    app.strip.content_width = to_u16(content);
    app.strip.viewport_width = inner.width;
    app.strip.clamp_offset();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = app.strip.offset.round().max(0.0) as i64;
    for (i, card) in app.cards.iter().enumerate() {
        let x0 = i64::try_from(i).unwrap_or(i64::MAX).saturating_mul(stride) - offset;
        let x1 = x0 + i64::from(TILE_WIDTH);
        let cx0 = x0.max(0);
        let cx1 = x1.min(i64::from(inner.width));
        if cx1 <= cx0 {
            continue;
        }
        let rect = Rect::new(
            inner.x + u16::try_from(cx0).unwrap_or(0),
            inner.y,
            u16::try_from(cx1 - cx0).unwrap_or(0),
            inner.height,
        );
        render_tile(f, rect, card, th);
    }
}

/// One featured-strip tile.
fn render_tile(f: &mut Frame, rect: Rect, card: &Card, th: &Theme) {
    let name = crate::util::truncate_to_width(&card.product.name, rect.width.saturating_sub(2) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(th.surface1))
        .title(Span::styled(name, Style::default().fg(th.text)));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format_price(card.product.price_cents),
            Style::default().fg(th.green),
        ))),
        inner,
    );
}

/// Synthetic scrollbar: a track with a draggable thumb mirroring the strip
/// scroll position. Thin while idle, thickened to both rows on hover.
fn render_scrollbar(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let _ = app.scrollbar.take_frame(&app.strip, app.term_width);

    let track = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    if !app.scrollbar.visible() || track.width == 0 {
        app.scrollbar_rect = None;
        app.track_rect = None;
        app.thumb_rect = None;
        return;
    }
    app.scrollbar_rect = Some(rect4(track));
    app.track_rect = Some(rect4(track));

    let hovered = app.scrollbar.hovered();
    let (tx, tw) = app.scrollbar.thumb_cells(track.width);
    app.thumb_rect = Some((track.x + tx, track.y, tw, track.height));

    let row = |thumb_ch: char, track_ch: char, thumb_fg, track_fg| -> Line<'static> {
        let before: String = std::iter::repeat_n(track_ch, tx as usize).collect();
        let thumb: String = std::iter::repeat_n(thumb_ch, tw as usize).collect();
        let after: String =
            std::iter::repeat_n(track_ch, (track.width - tx - tw) as usize).collect();
        Line::from(vec![
            Span::styled(before, Style::default().fg(track_fg)),
            Span::styled(thumb, Style::default().fg(thumb_fg)),
            Span::styled(after, Style::default().fg(track_fg)),
        ])
    };

    let lines = if hovered {
        vec![
            row('█', '─', th.sapphire, th.overlay2),
            row('█', '─', th.sapphire, th.overlay2),
        ]
    } else {
        vec![Line::default(), row('█', '─', th.lavender, th.surface1)]
    };
    f.render_widget(Paragraph::new(lines), track);
}

/// Wide card grid over all visible cards.
fn render_grid(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    app.cards_rect = Some(rect4(area));
    if area.width == 0 || area.height == 0 {
        return;
    }
    let cols = ((area.width + GRID_GAP) / (GRID_CARD_WIDTH + GRID_GAP)).max(1);
    let now = Instant::now();
    let mut slot: u16 = 0;
    for card in app.cards.iter().filter(|c| c.visible) {
        let col = slot % cols;
        let row = slot / cols;
        let y = area.y + row.saturating_mul(CARD_HEIGHT);
        if y >= area.y + area.height {
            break;
        }
        let x = area.x + col * (GRID_CARD_WIDTH + GRID_GAP);
        let width = GRID_CARD_WIDTH.min((area.x + area.width).saturating_sub(x));
        let height = CARD_HEIGHT.min((area.y + area.height).saturating_sub(y));
        if width > 2 {
            render_card(f, Rect::new(x, y, width, height), card, now, th);
        }
        slot = slot.saturating_add(1);
    }
}

/// One product card: bordered block with name, price/badge, and tagline.
///
/// Freshly revealed cards render with an accent border until their pulse
/// expires, the terminal stand-in for a fade-in.
fn render_card(f: &mut Frame, rect: Rect, card: &Card, now: Instant, th: &Theme) {
    let pulsing = card.pulsing(now);
    let border_fg = if pulsing { th.lavender } else { th.overlay1 };
    let name = crate::util::truncate_to_width(
        &card.product.name,
        rect.width.saturating_sub(4) as usize,
    );
    let mut title_style = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
    if pulsing {
        title_style = title_style.fg(th.lavender);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_fg))
        .title(Span::styled(name, title_style));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    if inner.height == 0 {
        return;
    }

    let mut price_line = vec![Span::styled(
        format_price(card.product.price_cents),
        Style::default().fg(th.green).add_modifier(Modifier::BOLD),
    )];
    if let Some(badge) = &card.product.badge {
        price_line.push(Span::raw("  "));
        price_line.push(Span::styled(
            format!("[{badge}]"),
            Style::default().fg(th.peach),
        ));
    }
    let mut lines = vec![Line::from(price_line)];
    if !card.product.tagline.is_empty() {
        lines.push(Line::from(Span::styled(
            crate::util::truncate_to_width(&card.product.tagline, inner.width as usize),
            Style::default().fg(th.subtext0),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

/// One-row footer with the key hints for the current layout.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme, mode: LayoutMode) {
    let hint = match mode {
        LayoutMode::Narrow if app.visibility.button_visible() => {
            " Enter/click: show more · ↑/↓: scroll · q: quit"
        }
        LayoutMode::Narrow => " ↑/↓: scroll · q: quit",
        LayoutMode::Wide => " ←/→: browse featured · drag thumb or click track · q: quit",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(th.overlay2),
        )))
        .style(Style::default().bg(th.mantle)),
        area,
    );
}
