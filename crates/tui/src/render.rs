//! Frame layout: info panel left, charts right, key hints at the bottom.

use crate::app::App;
use crate::markup::{to_line, to_text};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let [left, right] =
        Layout::horizontal([Constraint::Ratio(1, 5), Constraint::Ratio(4, 5)]).areas(body);

    render_info(frame, app, left);

    let charts = app.chart_text(right.width, right.height);
    frame.render_widget(Paragraph::new(to_text(&charts)), right);

    frame.render_widget(
        Paragraph::new(to_line(&app.footer_text())).alignment(Alignment::Center),
        footer,
    );
}

fn render_info(frame: &mut Frame, app: &App, area: Rect) {
    let [info, charge, power, health] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(to_text(&app.info_text())), info);

    let [charge_text, power_text, health_text] = app.gauge_lines();
    for (text, rect) in [(charge_text, charge), (power_text, power), (health_text, health)] {
        frame.render_widget(Paragraph::new(to_line(&text)), rect);
    }
}
