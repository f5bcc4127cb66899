//! JSON projection of the active view, for `--print`.

use crate::state::{ActiveView, AppState};
use serde_json::{json, Value};

/// The active view's render projection as a JSON value.
///
/// Discoverable views serialize their `RenderView`; the video view reports
/// the slide on display.
pub fn view_json(state: &AppState) -> Value {
    match state.active_view {
        ActiveView::Blog => json!({
            "view": "blog",
            "query": state.blog().query(),
            "render": state.blog().view(),
        }),
        ActiveView::Projects => json!({
            "view": "projects",
            "query": state.projects().query(),
            "render": state.projects().view(),
        }),
        ActiveView::Videos => json!({
            "view": "videos",
            "index": state.carousel.index(),
            "total": state.carousel.len(),
            "video": state.carousel.current(state.videos()),
        }),
    }
}

/// Pretty-printed [`view_json`].
///
/// # Errors
///
/// Returns the serializer error; not expected for well-formed state.
pub fn render_json(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&view_json(state))
}
