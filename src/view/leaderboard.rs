use maud::{Markup, html};

use crate::controller::leaderboard::{HoleScore, Leaderboard};
use crate::model::format_to_par;

fn hole_cell(score: &HoleScore) -> Markup {
    if score.is_played() {
        html! { td class=(score.display().css_class()) { (score.strokes) } }
    } else {
        html! { td class="unplayed" { "-" } }
    }
}

#[must_use]
pub fn render_leaderboard(board: &Leaderboard) -> Markup {
    let hole_numbers: Vec<u8> = (1..=board.holes_started).collect();
    html! {
        div class="leaderboard-container" {
            h3 { "Leaderboard · " (board.course_name) }
            table class="styled-table" {
                thead {
                    tr {
                        th { "Player" }
                        @for n in &hole_numbers {
                            th { (n) }
                        }
                        th { "Total" }
                        th { "To Par" }
                    }
                }
                tbody {
                    @for standing in &board.standings {
                        tr {
                            td { (standing.player) }
                            @for score in &standing.holes {
                                (hole_cell(score))
                            }
                            td { (standing.total_strokes) }
                            td { (format_to_par(standing.total_to_par)) }
                        }
                    }
                }
            }

            h3 { "Shot Types" }
            table class="styled-table" {
                tbody {
                    @for standing in &board.standings {
                        tr {
                            td { (standing.player) }
                            td {
                                @for (shot, count) in &standing.shot_types {
                                    span class="shot-tally" { (shot) ": " (count) " " }
                                }
                            }
                        }
                    }
                }
            }
            a href="./" { "Back to scorecard" }
        }
    }
}
