use crate::catalog::{category_label, FilterState};
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with a one-line summary of the active filters.
pub struct Header;

impl Header {
    pub fn widget(filters: &FilterState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled(
                "  rentcat",
                Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(category_label(&filters.category).to_string(), text_style),
        ];

        for part in summary_parts(filters) {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(part, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Human-readable pieces for the constrained dimensions besides category.
pub fn summary_parts(filters: &FilterState) -> Vec<String> {
    let mut parts = Vec::new();
    match (filters.min_price.as_str(), filters.max_price.as_str()) {
        ("", "") => {}
        (min, "") => parts.push(format!("₹{}+", min)),
        ("", max) => parts.push(format!("up to ₹{}", max)),
        (min, max) => parts.push(format!("₹{}–{}", min, max)),
    }
    if !filters.search_query.is_empty() {
        parts.push(format!("\"{}\"", filters.search_query));
    }
    if let Some(location) = filters.location {
        match location.radius {
            Some(radius) => parts.push(format!("near {:.3},{:.3} ({} km)", location.lat, location.lng, radius)),
            None => parts.push(format!("near {:.3},{:.3}", location.lat, location.lng)),
        }
    }
    parts
}
