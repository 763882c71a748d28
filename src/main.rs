use clap::Parser;
use mtr_processor::{
    args::Args,
    database::{db::DbClient, db_structs::PlayerModelRating},
    model::{
        leaderboard, rating_engine::RatingEngine,
        structures::malformed_game_policy::MalformedGamePolicy
    }
};
use tracing::info;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    let client = DbClient::connect(args.connection_string.as_str())
        .await
        .expect("Expected valid database connection");

    let players = client.get_players().await.expect("Expected player fetch to succeed");
    let games = client.get_games().await.expect("Expected game fetch to succeed");

    info!(players = players.len(), games = games.len(), "Loaded game history");

    let policy = if args.lenient {
        MalformedGamePolicy::Skip
    } else {
        MalformedGamePolicy::Reject
    };

    let leaderboards = match args.model {
        Some(model) => {
            let store = RatingEngine::new(model, policy)
                .run(&games)
                .expect("Rating pass failed");
            std::collections::HashMap::from([(model, leaderboard::build(&store))])
        }
        None => leaderboard::build_all(&games, policy).expect("Rating passes failed")
    };

    let mut rows: Vec<PlayerModelRating> = Vec::new();
    for (model, board) in &leaderboards {
        info!(%model, entries = board.len(), "Leaderboard computed");
        rows.extend(board.iter().map(|entry| PlayerModelRating {
            player_id: entry.player_id,
            model: *model,
            score: entry.score,
            rank: entry.rank
        }));
    }

    client.save_ratings(&rows).await.expect("Expected rating save to succeed");

    info!(rows = rows.len(), "Processing complete");
}
