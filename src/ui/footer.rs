use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the focused control.
pub fn hints_for(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::SearchQuery | Focus::SearchLocation => &[
            ("Enter", "Search"),
            ("Tab", "Next field"),
            ("Esc", "Done"),
            ("Ctrl+L", "Clear"),
        ],
        Focus::MinPrice | Focus::MaxPrice => &[
            ("Enter", "Apply price"),
            ("Tab", "Next field"),
            ("Esc", "Done"),
            ("Ctrl+L", "Clear"),
        ],
        Focus::Category => &[
            ("←/→", "Category"),
            ("Tab", "Focus"),
            ("Ctrl+L", "Clear"),
            ("q", "Quit"),
        ],
        Focus::Products => &[
            ("↑/↓", "Browse"),
            ("/", "Search"),
            ("Tab", "Focus"),
            ("r", "Retry"),
            ("Ctrl+L", "Clear"),
            ("q", "Quit"),
        ],
    }
}

pub struct Footer;

impl Footer {
    pub fn widget(area: Rect, focus: Focus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" ", text_style)];
        let mut used = 1;
        for (i, (key, action)) in hints_for(focus).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", text_style));
                used += 3;
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {}", action), text_style));
            used += key.chars().count() + action.chars().count() + 2;
        }

        // Right-align the version inside the borders; char count, not bytes.
        let version = format!("v{} ", VERSION);
        let padding = (area.width.saturating_sub(2) as usize)
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
