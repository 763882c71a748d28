use crate::model::structures::rating_model::RatingModel;
use serde::{Deserialize, Serialize};

/// A registered player as the import pipeline materialized them. Identity
/// resolution (TRR/EMA reconciliation, club and country assignment) happens
/// upstream; the processor only reads these rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub trr_id: String,
    pub ema_id: Option<String>,
    pub club_id: Option<i32>,
    pub country_code: Option<String>
}

/// One persisted result row: a player's score and rank under one model.
/// A rerun of the processor fully overwrites these.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerModelRating {
    pub player_id: i32,
    pub model: RatingModel,
    pub score: f64,
    pub rank: i32
}
