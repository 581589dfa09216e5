use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::AppError;
use crate::mvu::game::Msg;

fn get_param_str<'a, S: BuildHasher>(params: &'a HashMap<String, String, S>, key: &str) -> &'a str {
    params.get(key).map_or("", |s| s.trim())
}

fn stroke_index<S: BuildHasher>(params: &HashMap<String, String, S>) -> Result<usize, AppError> {
    get_param_str(params, "stroke")
        .parse()
        .map_err(|_| AppError::Validation("stroke parameter is required".into()))
}

/// `json=1` (or `true`) asks for a JSON answer instead of markup.
#[must_use]
pub fn wants_json<S: BuildHasher>(params: &HashMap<String, String, S>) -> bool {
    match get_param_str(params, "json") {
        "1" => true,
        "0" | "" => false,
        other => other.parse().unwrap_or(false),
    }
}

/// Turns `/game/{action}` plus its parameters into a message.
///
/// # Errors
///
/// Returns `AppError::Validation` for an unknown action or a missing or
/// malformed parameter.
pub fn decode_action_to_msg<S: BuildHasher>(
    action: &str,
    params: &HashMap<String, String, S>,
) -> Result<Msg, AppError> {
    let msg = match action {
        "add-stroke" => Msg::AddStroke,
        "remove-stroke" => Msg::RemoveStroke(stroke_index(params)?),
        "toggle-player" => {
            let player = get_param_str(params, "player");
            if player.is_empty() {
                return Err(AppError::Validation("player parameter is required".into()));
            }
            Msg::TogglePlayer {
                stroke: stroke_index(params)?,
                player: player.to_string(),
            }
        }
        "shot-type" => {
            let shot = match get_param_str(params, "shot") {
                "" => None,
                s => Some(s.parse()?),
            };
            Msg::SelectShotType {
                stroke: stroke_index(params)?,
                shot,
            }
        }
        "next" => Msg::NextHole,
        "previous" => Msg::PreviousHole,
        "edit-par" => Msg::BeginParEdit,
        "par-draft" => Msg::EditPar(
            get_param_str(params, "par")
                .parse()
                .map_err(|_| AppError::Validation("par parameter must be a whole number".into()))?,
        ),
        "save-par" => Msg::SavePar,
        "cancel-par" => Msg::CancelParEdit,
        other => return Err(AppError::Validation(format!("unknown action '{other}'"))),
    };
    Ok(msg)
}
