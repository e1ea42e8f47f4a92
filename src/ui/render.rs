use crate::catalog::category_label;
use crate::ui::app::{App, Focus};
use crate::ui::catalog::FetchResult;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::product_card::render_product_list;
use crate::ui::search_bar::render_search_bar;
use crate::ui::theme::{
    ACTIVE_BORDER, BRAND_ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_TITLE: &str = "No products found";
pub const EMPTY_HINT: &str = "Try adjusting your filters or search query";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(Header::widget(app.catalog().filters()), rows[0]);
    render_search_bar(frame, rows[1], app.search_bar(), app.focus().search_field());
    render_filter_bar(frame, rows[2], app);
    render_body(frame, rows[3], app);
    frame.render_widget(Footer::widget(rows[4], app.focus()), rows[4]);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let category = category_label(&app.catalog().filters().category).to_string();
    render_control(
        frame,
        columns[0],
        " Category ",
        format!("◀ {} ▶", category),
        app.focus() == Focus::Category,
    );
    render_control(
        frame,
        columns[1],
        " Min Price ",
        price_text(app.min_price_draft(), app.focus() == Focus::MinPrice),
        app.focus() == Focus::MinPrice,
    );
    render_control(
        frame,
        columns[2],
        " Max Price ",
        price_text(app.max_price_draft(), app.focus() == Focus::MaxPrice),
        app.focus() == Focus::MaxPrice,
    );
}

fn price_text(draft: &str, focused: bool) -> String {
    match (draft.is_empty(), focused) {
        (true, false) => "any".to_string(),
        (_, true) => format!("₹{}▏", draft),
        (false, false) => format!("₹{}", draft),
    }
}

fn render_control(frame: &mut Frame, area: Rect, title: &str, value: String, focused: bool) {
    let border = if focused { ACTIVE_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let paragraph = Paragraph::new(Span::styled(value, Style::default().fg(HEADER_TEXT))).block(block);
    frame.render_widget(paragraph, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.catalog().fetch() {
        FetchResult::Idle => {}
        FetchResult::Loading { animation_tick } => render_loading(frame, area, *animation_tick),
        FetchResult::Error { message } => render_error(frame, area, message),
        FetchResult::Ready { products } if products.is_empty() => render_empty(frame, area),
        FetchResult::Ready { products } => {
            render_product_list(frame, area, products, app.selected());
        }
    }
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(BRAND_ACCENT)),
            Span::styled(LOADING_MESSAGE, Style::default().fg(HEADER_TEXT)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(bordered()),
        area,
    );
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            EMPTY_TITLE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(EMPTY_HINT, Style::default().fg(DIM_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(bordered()),
        area,
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Press r to retry", Style::default().fg(DIM_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(bordered()),
        area,
    );
}
