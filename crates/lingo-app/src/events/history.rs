use kanal::AsyncSender;
use lingo_types::AppEvent;

use crate::session::TranslationSession;

pub async fn handle_show_history(
    session: &mut TranslationSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let history = session.load_history().await.to_vec();
    app_to_ui_tx.send(AppEvent::ShowHistory(history)).await?;
    Ok(())
}

pub async fn handle_clear_history(
    session: &mut TranslationSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let history = session.clear_history().await.to_vec();
    tracing::info!("History cleared");
    app_to_ui_tx.send(AppEvent::ShowHistory(history)).await?;
    Ok(())
}
