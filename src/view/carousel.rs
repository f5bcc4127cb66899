//! Featured video carousel: one slide at a time with position dots.

use crate::model::Video;
use crate::state::Carousel;
use crate::view::blog::render_no_results;
use crate::view::helpers::{tag_spans, truncate_to_width};
use crate::view::ViewStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the slide the carousel is on.
pub fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    videos: &[Video],
    styles: &ViewStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Featured videos ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(video) = carousel.current(videos) else {
        render_no_results(frame, inner, "No videos", styles);
        return;
    };

    let width = usize::from(inner.width);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width(&video.title, width),
            styles.title,
        )),
        Line::from(tag_spans(&video.tags, styles.tag)),
        Line::from(Span::styled(truncate_to_width(&video.url, width), styles.muted)),
        Line::from(""),
        position_line(carousel, styles),
        Line::from(vec![
            Span::styled("[", styles.key),
            Span::styled(" previous   ", styles.muted),
            Span::styled("]", styles.key),
            Span::styled(" next", styles.muted),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// `○ ● ○` with the current slide filled.
fn position_line(carousel: &Carousel, styles: &ViewStyles) -> Line<'static> {
    let dots: Vec<Span> = (0..carousel.len())
        .map(|i| {
            if i == carousel.index() {
                Span::styled("● ", styles.title)
            } else {
                Span::styled("○ ", styles.muted)
            }
        })
        .collect();
    Line::from(dots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn videos() -> Vec<Video> {
        ["Hush Engine Devlog #1", "Gripshot Trailer"]
            .into_iter()
            .map(|title| Video {
                url: format!("https://videos.example/{}", title.len()),
                thumbnail: String::new(),
                title: title.to_string(),
                tags: vec!["Talk".to_string()],
            })
            .collect()
    }

    fn render(carousel: &Carousel, videos: &[Video]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());
        terminal
            .draw(|frame| render_carousel(frame, frame.area(), carousel, videos, &styles))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_current_slide_only() {
        let videos = videos();
        let mut carousel = Carousel::new(videos.len());
        carousel.next();

        let out = render(&carousel, &videos);

        assert!(out.contains("Gripshot Trailer"));
        assert!(!out.contains("Hush Engine Devlog"));
    }

    #[test]
    fn position_dots_mark_current_slide() {
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());
        let mut carousel = Carousel::new(3);
        carousel.previous();

        let text: String = position_line(&carousel, &styles)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert_eq!(text, "○ ○ ● ");
    }

    #[test]
    fn empty_carousel_shows_placeholder() {
        let out = render(&Carousel::new(0), &[]);
        assert!(out.contains("No videos"));
    }
}
