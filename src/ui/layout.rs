use crate::navigation::Presentation;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const TOP_BAR_HEIGHT: u16 = 1;
pub const BOTTOM_BAR_HEIGHT: u16 = 3;

pub struct ShellLayout {
    pub top_bar: Option<Rect>,
    pub content: Rect,
    pub bottom_bar: Option<Rect>,
}

pub fn compute_layout(area: Rect, presentation: &Presentation) -> ShellLayout {
    let mut constraints = Vec::with_capacity(3);
    if presentation.show_top_bar {
        constraints.push(Constraint::Length(TOP_BAR_HEIGHT));
    }
    constraints.push(Constraint::Min(1)); // Screen content
    if presentation.show_bottom_bar {
        constraints.push(Constraint::Length(BOTTOM_BAR_HEIGHT));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let content_idx = usize::from(presentation.show_top_bar);
    let top_bar = presentation.show_top_bar.then(|| chunks[0]);
    let content = chunks[content_idx];
    let bottom_bar = presentation.show_bottom_bar.then(|| chunks[content_idx + 1]);

    ShellLayout {
        top_bar,
        content,
        bottom_bar,
    }
}
