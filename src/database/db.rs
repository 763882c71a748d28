use super::db_structs::{Player, PlayerModelRating};
use crate::{model::structures::game_record::GameRecord, utils::progress_utils::progress_bar};
use postgres_types::ToSql;
use std::{collections::HashMap, sync::Arc};
use tokio_postgres::{Client, Error, NoTls, Row};
use tracing::{error, info};

#[derive(Clone)]
pub struct DbClient {
    client: Arc<Client>
}

impl DbClient {
    // Connect to the database and return a DbClient instance
    pub async fn connect(connection_str: &str) -> Result<Self, Error> {
        let (client, connection) = tokio_postgres::connect(connection_str, NoTls).await?;

        // Spawn the connection object to run in the background
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {}", e);
            }
        });

        Ok(DbClient {
            client: Arc::new(client)
        })
    }

    pub async fn get_players(&self) -> Result<Vec<Player>, Error> {
        info!("Fetching players...");
        let rows = self
            .client
            .query(
                "SELECT id, name, trr_id, ema_id, club_id, country_id FROM player ORDER BY id;",
                &[]
            )
            .await?;

        Ok(rows.iter().map(Self::player_from_row).collect())
    }

    /// Fetches the full game history with per-seat scores, oldest first.
    /// The engine consumes games in exactly this order.
    ///
    /// Seats without a matching score row are left out of the record; the
    /// engine's malformed-game policy decides what happens to such games.
    pub async fn get_games(&self) -> Result<Vec<GameRecord>, Error> {
        info!("Fetching games...");
        let rows = self
            .client
            .query(
                "SELECT g.id, g.date, g.p1, g.p2, g.p3, g.p4, pg.player_id, pg.score
                 FROM game g
                          JOIN player_game pg ON pg.game_id = g.id
                 ORDER BY g.date, g.id;",
                &[]
            )
            .await?;

        let mut games: Vec<GameRecord> = Vec::new();
        let mut scores_by_game: HashMap<i32, HashMap<i32, i32>> = HashMap::new();
        let mut seats_by_game: HashMap<i32, [i32; 4]> = HashMap::new();

        for row in &rows {
            let game_id = row.get::<_, i32>("id");

            if !seats_by_game.contains_key(&game_id) {
                seats_by_game.insert(
                    game_id,
                    [row.get("p1"), row.get("p2"), row.get("p3"), row.get("p4")]
                );
                games.push(GameRecord {
                    id: game_id,
                    date: row.get("date"),
                    participants: Vec::new(),
                    scores: Vec::new()
                });
            }

            scores_by_game
                .entry(game_id)
                .or_default()
                .insert(row.get("player_id"), row.get("score"));
        }

        // Seats keep table order (p1..p4); a seat only enters the record if
        // its score row resolved.
        for game in games.iter_mut() {
            let seats = seats_by_game[&game.id];
            let scores = &scores_by_game[&game.id];

            for seat in seats {
                if let Some(&score) = scores.get(&seat) {
                    game.participants.push(seat);
                    game.scores.push(score);
                }
            }
        }

        info!("Game fetching complete: {} games", games.len());
        Ok(games)
    }

    /// Persists the per-model results, fully replacing any previous run's
    /// rows inside a single transaction.
    pub async fn save_ratings(&self, ratings: &[PlayerModelRating]) -> Result<(), Error> {
        let bar = progress_bar(ratings.len() as u64, "Saving player ratings".to_string());

        self.client.batch_execute("BEGIN;").await?;
        self.client.execute("DELETE FROM player_model_rating;", &[]).await?;

        let statement = self
            .client
            .prepare(
                "INSERT INTO player_model_rating (player_id, model, score, rank)
                 VALUES ($1, $2, $3, $4);"
            )
            .await?;

        for rating in ratings {
            let model_id = rating.model as i32;
            let params: [&(dyn ToSql + Sync); 4] = [&rating.player_id, &model_id, &rating.score, &rating.rank];
            self.client.execute(&statement, &params).await?;
            bar.inc(1);
        }

        self.client.batch_execute("COMMIT;").await?;
        bar.finish_with_message("Ratings saved");
        Ok(())
    }

    fn player_from_row(row: &Row) -> Player {
        Player {
            id: row.get("id"),
            name: row.get("name"),
            trr_id: row.get("trr_id"),
            ema_id: row.get("ema_id"),
            club_id: row.get("club_id"),
            country_code: row.get("country_id")
        }
    }
}
