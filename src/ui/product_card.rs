//! Item card renderer for a single product, and the keyed list of cards.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::catalog::{category_label, Product, ProductKey};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT, STATUS_ERROR,
    STATUS_OK,
};

/// Lines making up one card.
pub fn card_lines(product: &Product) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        product.name.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    match product.available {
        Some(true) => title.push(Span::styled("  ● available", Style::default().fg(STATUS_OK))),
        Some(false) => title.push(Span::styled("  ● rented out", Style::default().fg(STATUS_ERROR))),
        None => {}
    }

    let mut details = vec![
        Span::styled(format!("₹{}/day", format_price(product.price)), Style::default().fg(PRICE_TEXT)),
        Span::styled("  │  ", Style::default().fg(DIM_TEXT)),
        Span::styled(category_label(&product.category).to_string(), Style::default().fg(BRAND_ACCENT)),
    ];
    if let Some(address) = product.address() {
        details.push(Span::styled("  │  ", Style::default().fg(DIM_TEXT)));
        details.push(Span::styled(address.to_string(), Style::default().fg(DIM_TEXT)));
    }

    let mut lines = vec![Line::from(title), Line::from(details)];
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(DIM_TEXT).add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::from(""));
    lines
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// Position of `key` in `products`, if present.
pub fn index_of(products: &[Product], key: &ProductKey) -> Option<usize> {
    products.iter().position(|p| p.key() == key)
}

/// Render one card per product. Selection follows `selected` by key.
pub fn render_product_list(
    frame: &mut Frame,
    area: Rect,
    products: &[Product],
    selected: Option<&ProductKey>,
) {
    let items: Vec<ListItem> = products
        .iter()
        .map(|product| ListItem::new(card_lines(product)))
        .collect();

    let title = format!(" {} products ", products.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌ ");

    let mut state = ListState::default().with_selected(selected.and_then(|k| index_of(products, k)));
    frame.render_stateful_widget(list, area, &mut state);
}
