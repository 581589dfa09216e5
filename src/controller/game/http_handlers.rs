use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

use super::AppState;
use super::decode::{decode_action_to_msg, wants_json};
use crate::controller::leaderboard::build_leaderboard;
use crate::controller::navigator::ParEditor;
use crate::error::AppError;
use crate::model::HoleSnapshot;
use crate::mvu::game::GameModel;
use crate::mvu::runtime::{Deps, dispatch};
use crate::view::hole::render_hole;
use crate::view::index::{render_index_template, render_page};
use crate::view::leaderboard::render_leaderboard;

/// JSON form of the hole on screen.
#[derive(Debug, Serialize)]
pub struct HoleView {
    pub current_hole: u8,
    pub par: i32,
    pub par_editor: ParEditor,
    pub game_over: bool,
    pub snapshot: HoleSnapshot,
}

impl HoleView {
    fn from_model(model: &GameModel) -> Result<Self, AppError> {
        let hole = model.current_hole();
        Ok(Self {
            current_hole: hole,
            par: model.store.par_for(hole),
            par_editor: model.navigator.par_editor(),
            game_over: model.game_over,
            snapshot: model.store.hole_snapshot(hole)?,
        })
    }
}

fn error_response(e: &AppError) -> HttpResponse {
    if e.is_client_error() {
        HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
    } else {
        HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
    }
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(state: Data<AppState>) -> impl Responder {
    let model = state.game.read().await;
    html(render_index_template(&model))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// `POST /game/{action}`. Parameters may come in the query string or as a
/// urlencoded body (htmx sends `hx-vals` in the body); the body wins.
pub async fn game_action(
    action: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    form: Option<web::Form<HashMap<String, String>>>,
    state: Data<AppState>,
) -> impl Responder {
    let mut params = query.into_inner();
    if let Some(form) = form {
        params.extend(form.into_inner());
    }
    let json = wants_json(&params);

    let msg = match decode_action_to_msg(&action, &params) {
        Ok(msg) => msg,
        Err(e) if json => return error_response(&e),
        Err(e) => {
            // htmx only swaps 2xx, so the problem goes on the hole
            let mut model = state.game.write().await;
            model.error = Some(e);
            return html(render_hole(&model));
        }
    };

    let mut model = state.game.write().await;
    let deps = Deps {
        sync: state.sync.as_ref(),
    };
    // sync handles are dropped: pushes finish on their own
    let outcome = dispatch(&mut model, msg, deps);

    if json {
        if let Err(e) = outcome {
            return error_response(&e);
        }
        match HoleView::from_model(&model) {
            Ok(view) => HttpResponse::Ok().json(view),
            Err(e) => error_response(&e),
        }
    } else {
        // a rejected action is shown inline on the hole
        html(render_hole(&model))
    }
}

pub async fn leaderboard(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let model = state.game.read().await;
    let board = build_leaderboard(&model.store);
    if wants_json(&query.0) {
        HttpResponse::Ok().json(board)
    } else {
        html(render_page(
            &format!("Leaderboard · {}", board.course_name),
            render_leaderboard(&board),
        ))
    }
}

/// Registers every scorecard route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/leaderboard", web::get().to(leaderboard))
        .route("/game/{action}", web::post().to(game_action));
}
