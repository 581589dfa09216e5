use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;

use rusty_scramble::args;
use rusty_scramble::controller::game::{AppState, configure};
use rusty_scramble::controller::session::{SessionClient, SyncAdapter};
use rusty_scramble::model::Round;
use rusty_scramble::mvu::game::GameModel;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match args::args_checks().validate() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    let client = SessionClient::new(&args.remote_url)?;
    if args.create_session {
        client.create_session(&args.credentials).await?;
        log::info!("Session \"{}\" created", args.credentials.name);
    }
    let session = client.join_session(&args.credentials).await?;
    log::info!(
        "joined session \"{}\" with {} players at {} ({} tees)",
        session.name,
        args.players.len(),
        args.course.name,
        args.course.tee_color
    );

    let round = Round::new(args.players, args.course)?;
    let game = GameModel::new(round)?;
    let sync = SyncAdapter::new(Arc::new(client), session);
    let state = Data::new(AppState::new(game, Some(sync)));

    log::info!("listening on {}", args.bind);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure)
            .service(Files::new("/static", "./static"))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
