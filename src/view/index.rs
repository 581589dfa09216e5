use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::format_round_elapsed;
use crate::mvu::game::GameModel;
use crate::view::hole::render_hole;

#[must_use]
pub fn render_page(title: &str, body: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/scramble.css";
            title { (title) }
            script src=(HTMX_PATH) defer crossorigin="anonymous" {}
        }
        body {
            (body)
        }
    }
}

/// Scorecard page for the hole the group is on.
#[must_use]
pub fn render_index_template(model: &GameModel) -> Markup {
    let course = model.store.course();
    let elapsed = chrono::Utc::now() - model.store.round().started_at;
    render_page(
        &course.name,
        html! {
            h1 { (course.name) }
            p class="round-meta" {
                (course.tee_color) " tees · " (model.store.players().join(", "))
                " · started " (format_round_elapsed(elapsed)) " ago"
            }
            (render_hole(model))
            nav class="page-links" {
                a href="leaderboard" { "Leaderboard" }
            }
        },
    )
}
