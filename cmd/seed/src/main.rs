//! # seed
//!
//! Seeds a demo board with a handful of users, questions, votes and an
//! acceptance, then prints the resulting board report as JSON.
//!
//! Usage: `seed [settings.toml]`

use anyhow::Context;
use configs::{LogFormat, LogSettings, Settings};
use services::Board;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn seed(board: &mut Board) -> anyhow::Result<()> {
    let questioner = board.create_user("Questioner").id();
    let answerer = board.create_user("Answerer").id();
    let board_user = board.create_user("BoardUser").id();

    let question = board
        .member(questioner)?
        .ask_question("Java Interfaces can extend");
    let answer = board
        .member(answerer)?
        .answer_question(question, "Multiple Interfaces")?;

    board.member(board_user)?.up_vote(question)?;
    board.member(questioner)?.up_vote(answer)?;
    board.member(board_user)?.down_vote(answer)?;
    board.member(questioner)?.accept_answer(answer)?;

    // Rejected on purpose: shows the rules holding.
    if let Err(err) = board.member(answerer)?.up_vote(answer) {
        tracing::info!(%err, "self-vote refused");
    }
    if let Err(err) = board.member(board_user)?.accept_answer(answer) {
        tracing::info!(%err, "acceptance by non-owner refused");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1);
    let settings = Settings::load(path.as_deref()).context("loading settings")?;
    init_tracing(&settings.log);

    let mut board = Board::new(settings.board.name.as_str());
    tracing::info!(board = %board.name(), "seeding board");
    seed(&mut board)?;

    let report = board.report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
