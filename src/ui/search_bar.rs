//! Search bar: free-text query plus an optional `lat,lng[,radius]` location.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use thiserror::Error;

use crate::catalog::{GeoLocation, SearchInput};
use crate::ui::theme::{ACTIVE_BORDER, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Query,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationParseError {
    #[error("use lat,lng or lat,lng,radius")]
    Format,
    #[error("'{0}' is not a number")]
    Number(String),
    #[error("latitude must be between -90 and 90")]
    Latitude,
    #[error("longitude must be between -180 and 180")]
    Longitude,
    #[error("radius must be greater than 0")]
    Radius,
}

/// Parse `lat,lng[,radius]`. Blank input means "no location".
pub fn parse_location(raw: &str) -> Result<Option<GeoLocation>, LocationParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(LocationParseError::Format);
    }

    let number = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LocationParseError::Number(s.to_string()))
    };

    let lat = number(parts[0])?;
    let lng = number(parts[1])?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(LocationParseError::Latitude);
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(LocationParseError::Longitude);
    }

    let mut location = GeoLocation::new(lat, lng);
    if let Some(radius) = parts.get(2).filter(|s| !s.is_empty()) {
        let radius = number(*radius)?;
        if radius <= 0.0 {
            return Err(LocationParseError::Radius);
        }
        location = location.with_radius(radius);
    }
    Ok(Some(location))
}

/// Draft text of both search inputs plus the last validation hint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchBar {
    pub query: String,
    pub location: String,
    pub hint: Option<String>,
}

impl SearchBar {
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Query => &self.query,
            SearchField::Location => &self.location,
        }
    }

    fn field_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::Query => &mut self.query,
            SearchField::Location => &mut self.location,
        }
    }

    pub fn push(&mut self, field: SearchField, c: char) {
        self.field_mut(field).push(c);
        self.hint = None;
    }

    pub fn backspace(&mut self, field: SearchField) {
        self.field_mut(field).pop();
        self.hint = None;
    }

    /// Build the event for the current drafts.
    ///
    /// Returns `None` (and records a hint) when the location does not parse.
    pub fn submit(&mut self) -> Option<SearchInput> {
        let location = match parse_location(&self.location) {
            Ok(location) => location,
            Err(err) => {
                self.hint = Some(err.to_string());
                return None;
            }
        };
        self.hint = None;
        let query = self.query.trim();
        Some(SearchInput {
            query: (!query.is_empty()).then(|| query.to_string()),
            location,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, bar: &SearchBar, focus: Option<SearchField>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_input(
        frame,
        columns[0],
        " Search ",
        &bar.query,
        "e.g. camera",
        focus == Some(SearchField::Query),
        None,
    );
    render_input(
        frame,
        columns[1],
        " Near (lat,lng[,km]) ",
        &bar.location,
        "e.g. 12.97,77.59,10",
        focus == Some(SearchField::Location),
        bar.hint.as_deref(),
    );
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    hint: Option<&str>,
) {
    let border = if focused { ACTIVE_BORDER } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(hint) = hint {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", hint),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(DIM_TEXT)))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled(cursor, Style::default().fg(ACTIVE_BORDER)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
