//! UI rendering for the stats plot view.
//!
//! Draws a duration/rating scatter chart above a duration histogram using
//! `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Padding,
        Paragraph, Wrap,
    },
};

use crate::config::UiSettings;
use crate::stats::PlotData;

const CONTROLS_TEXT: &str = "[q/esc] quit";

/// Evenly spaced axis labels from `lo` to `hi`, inclusive.
fn axis_labels(lo: f64, hi: f64, count: usize, precision: usize) -> Vec<String> {
    let count = count.max(2);
    let step = (hi - lo) / (count - 1) as f64;
    (0..count)
        .map(|i| format!("{:.*}", precision, lo + step * i as f64))
        .collect()
}

/// Pick a bar width so `bins` bars (plus one-column gaps) fill `area`.
fn bar_width_for(area: Rect, bins: usize) -> u16 {
    let inner = area.width.saturating_sub(2) as usize;
    let slot = inner / bins.max(1);
    slot.saturating_sub(1).max(1) as u16
}

fn draw_scatter(frame: &mut Frame, data: &PlotData, area: Rect) {
    let dataset = Dataset::default()
        .name("tracks")
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().cyan())
        .data(&data.points);

    let [x_lo, x_hi] = data.x_bounds;
    let [y_lo, y_hi] = data.y_bounds;

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" duration vs rating "),
        )
        .x_axis(
            Axis::default()
                .title("Track Duration (min)")
                .bounds([x_lo, x_hi])
                .labels(axis_labels(x_lo, x_hi, 5, 1)),
        )
        .y_axis(
            Axis::default()
                .title("Track Rating")
                .bounds([y_lo, y_hi])
                .labels(axis_labels(y_lo, y_hi, 3, 0)),
        );
    frame.render_widget(chart, area);
}

fn draw_histogram(frame: &mut Frame, data: &PlotData, area: Rect) {
    let hist = &data.histogram;
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .value(count)
                .label(Line::from(format!("{:.1}", hist.bin_start(i))))
        })
        .collect();

    let title = format!(
        " Track Duration (min, {:.1}..{:.1}) vs Count ",
        hist.lo,
        hist.hi()
    );
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(bar_width_for(area, hist.counts.len()))
        .bar_gap(1)
        .max(hist.max_count().max(1))
        .bar_style(Style::default().green())
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Render the whole plot view for `data`.
pub fn draw(frame: &mut Frame, data: &PlotData, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(55),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" tunestat • {} tracks ", data.points.len()))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_scatter(frame, data, chunks[1]);
    draw_histogram(frame, data, chunks[2]);

    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotSettings;
    use crate::stats::StatsSamples;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(data: &PlotData, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| draw(f, data, &UiSettings::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn sample_data() -> PlotData {
        let mut samples = StatsSamples::default();
        samples.push(80, 120_000);
        samples.push(100, 180_000);
        samples.push(20, 240_000);
        PlotData::from_samples(&samples, &PlotSettings::default())
    }

    #[test]
    fn axis_labels_are_inclusive_and_evenly_spaced() {
        assert_eq!(axis_labels(0.0, 4.0, 5, 1), vec!["0.0", "1.0", "2.0", "3.0", "4.0"]);
        assert_eq!(axis_labels(-1.0, 110.0, 2, 0), vec!["-1", "110"]);
    }

    #[test]
    fn bar_width_fills_available_columns() {
        let area = Rect::new(0, 0, 82, 10);
        assert_eq!(bar_width_for(area, 20), 3);
        let narrow = Rect::new(0, 0, 12, 10);
        assert_eq!(bar_width_for(narrow, 20), 1);
    }

    #[test]
    fn draw_renders_both_charts_and_header() {
        let text = rendered(&sample_data(), 100, 40);
        assert!(text.contains("tunestat • 3 tracks"));
        assert!(text.contains("duration vs rating"));
        assert!(text.contains("vs Count"));
        assert!(text.contains("[q/esc] quit"));
    }

    #[test]
    fn draw_survives_small_terminal() {
        let text = rendered(&sample_data(), 60, 30);
        assert!(text.contains("controls"));
    }
}
