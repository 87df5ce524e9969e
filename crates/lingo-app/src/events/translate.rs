use kanal::AsyncSender;
use lingo_types::AppEvent;

use crate::session::TranslationSession;

pub async fn handle_translate(
    session: &mut TranslationSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Validation failures never show a spinner
    let show_loading = session.has_input();
    if show_loading {
        app_to_ui_tx.send(AppEvent::Loading(true)).await?;
    }

    let result = session.translate_text().await;

    if show_loading {
        app_to_ui_tx.send(AppEvent::Loading(false)).await?;
    }

    match result {
        Ok(record) => {
            tracing::info!("Translated into {}", record.language);
            app_to_ui_tx
                .send(AppEvent::ShowTranslation {
                    original: record.original,
                    translated: record.translated,
                    language: session.state().selected_language.clone(),
                })
                .await?;
            app_to_ui_tx
                .send(AppEvent::ShowHistory(session.state().history.clone()))
                .await?;
        }
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::ShowError {
                    title: e.title().to_string(),
                    message: e.user_message(),
                })
                .await?;
        }
    }

    Ok(())
}
