use serde::Serialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::domain::wellness::{BaselineAnswer, CheckinSubmission};

use super::{CheckinArgs, ClientContext, Command, RewriteArgs};

pub async fn run(context: &ClientContext, command: Command) -> anyhow::Result<()> {
    let engine = &context.engine;

    match command {
        Command::Health => print(&engine.health().await),
        Command::Questions { baseline: true } => print(&engine.baseline_questions().await),
        Command::Questions { baseline: false } => print(&engine.checkin_questions().await),
        Command::Checkin(args) => print(&engine.submit_checkin(&submission(args)).await),
        Command::Analyze { text } => print(&engine.analyze_entry(&text).await),
        Command::Baseline { answers } => {
            let answers: Vec<BaselineAnswer> = answers
                .into_iter()
                .map(|(qid, value)| BaselineAnswer::new(qid, value))
                .collect();
            print(&engine.score_baseline(&answers).await)
        }
        Command::Rewrite(args) if args.direct => rewrite_direct(context, args).await,
        Command::Rewrite(args) => print(&engine.rewrite(&args.text, &args.intent).await),
        Command::MoodSeries { user, days } => {
            let envelope = engine.mood_series(&user, days).await;
            let stats = envelope.payload().stats();
            print(&json!({ "series": envelope, "stats": stats }))
        }
        Command::Exercise { facets } => print(&engine.suggest_exercise(&facets).await),
        Command::Safety { text } => print(&engine.safety_check(&text).await),
        Command::Chat { message, session } => {
            let session = session.unwrap_or_else(|| Uuid::new_v4().to_string());
            print(&engine.chat(&message, &session).await)
        }
        Command::Login { .. } | Command::Logout => {
            anyhow::bail!("credential commands are not backend calls")
        }
    }
}

async fn rewrite_direct(context: &ClientContext, args: RewriteArgs) -> anyhow::Result<()> {
    let rewriter = context.direct_rewriter()?;

    match rewriter.rewrite(&args.text, &args.intent).await {
        Ok(result) => print(&result),
        Err(error) => {
            warn!(error = %error, "Direct rewrite failed");
            anyhow::bail!(error.user_message())
        }
    }
}

fn submission(args: CheckinArgs) -> CheckinSubmission {
    let mut submission = CheckinSubmission::new();

    if let Some(user) = args.user {
        submission = submission.with_user(user);
    }

    if let Some(date) = args.date {
        submission = submission.with_date(date);
    }

    args.responses
        .into_iter()
        .fold(submission, |s, (question, value)| s.with_response(question, value))
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
