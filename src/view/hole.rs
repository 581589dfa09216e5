use maud::{Markup, html};
use serde_json::json;

use crate::model::{ShotType, Stroke};
use crate::mvu::game::GameModel;

/// The swappable part of the scorecard. Every control posts back to
/// `game/{action}` and htmx replaces `#hole` with the response.
#[must_use]
pub fn render_hole(model: &GameModel) -> Markup {
    let hole = model.current_hole();
    let course = model.store.course();
    let editor = model.navigator.par_editor();
    let strokes: &[Stroke] = model
        .store
        .hole(hole)
        .map(|h| h.strokes.as_slice())
        .unwrap_or(&[]);

    html! {
        div id="hole" {
            h2 class="hole-title" { "Hole " (hole) }
            p class="yardage" { (course.yardage_for(hole)) " yds" }

            div class="par" {
                @if editor.editing {
                    input type="number" name="par" value=(editor.draft)
                        hx-post="game/par-draft" hx-trigger="change" hx-target="#hole" hx-swap="outerHTML";
                    button hx-post="game/save-par" hx-target="#hole" hx-swap="outerHTML" { "Save Par" }
                    button hx-post="game/cancel-par" hx-target="#hole" hx-swap="outerHTML" { "Cancel" }
                } @else {
                    span class="par-value" { "Par: " (model.store.par_for(hole)) }
                    button hx-post="game/edit-par" hx-target="#hole" hx-swap="outerHTML" { "Edit" }
                }
            }

            @if let Some(err) = &model.error {
                p class="error" { (err) }
            }

            button class="add-stroke" hx-post="game/add-stroke" hx-target="#hole" hx-swap="outerHTML" { "Add Stroke" }

            div class="strokes" {
                @for (idx, stroke) in strokes.iter().enumerate() {
                    (render_stroke(model.store.players(), idx, stroke))
                }
            }

            div class="hole-nav" {
                button hx-post="game/previous" hx-target="#hole" hx-swap="outerHTML" { "Previous Hole" }
                button hx-post="game/next" hx-target="#hole" hx-swap="outerHTML" { "Next Hole" }
            }

            @if model.game_over {
                p class="game-over" { "Game Over!" }
            }
        }
    }
}

fn render_stroke(players: &[String], idx: usize, stroke: &Stroke) -> Markup {
    html! {
        div class="stroke" {
            strong { "Stroke " (idx + 1) }
            div class="stroke-players" {
                @for player in players {
                    @let on = stroke.has_player(player);
                    button class=(if on { "player on" } else { "player" })
                        hx-post="game/toggle-player"
                        hx-vals=(json!({ "stroke": idx, "player": player }).to_string())
                        hx-target="#hole" hx-swap="outerHTML" { (player) }
                }
            }
            select name="shot"
                hx-post="game/shot-type"
                hx-vals=(json!({ "stroke": idx }).to_string())
                hx-trigger="change" hx-target="#hole" hx-swap="outerHTML" {
                option value="" selected[stroke.shot_type.is_none()] { "-- Shot Type --" }
                @for shot in ShotType::ALL {
                    option value=(shot.as_str()) selected[stroke.shot_type == Some(shot)] { (shot.as_str()) }
                }
            }
            button class="remove"
                hx-post="game/remove-stroke"
                hx-vals=(json!({ "stroke": idx }).to_string())
                hx-target="#hole" hx-swap="outerHTML" { "Remove" }
        }
    }
}
