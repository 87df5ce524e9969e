use kanal::{AsyncReceiver, AsyncSender};
use lingo_core::language;
use lingo_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::session::TranslationSession;

pub mod history;
pub mod translate;

use history::{handle_clear_history, handle_show_history};
use translate::handle_translate;

/// App's main loop. Owns the session, so requests are handled one at a time.
pub async fn event_loop(
    mut session: TranslationSession,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let history = session.load_history().await.to_vec();
    tracing::info!("[EVENT_LOOP] Loaded {} history entries", history.len());

    app_to_ui_tx
        .send(AppEvent::BackendReady {
            language: session.state().selected_language.clone(),
            history,
        })
        .await?;

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed: {e}");
                    break;
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested by UI");
            break;
        }

        handle_events(&mut session, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

pub async fn handle_events(
    session: &mut TranslationSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} chars", text.len());
            session.set_input(text);
        }
        AppEvent::SelectLanguage(code) => {
            let reply = match session.select_language(&code) {
                Some(language) => AppEvent::LanguageSelected(language.clone()),
                None => AppEvent::Notice(format!("Unknown language code: {code}")),
            };
            app_to_ui_tx.send(reply).await?;
        }
        AppEvent::Translate => {
            handle_translate(session, app_to_ui_tx).await?;
        }
        AppEvent::ClearText => {
            session.clear_text();
            app_to_ui_tx.send(AppEvent::TextCleared).await?;
        }
        AppEvent::ClearHistory => {
            handle_clear_history(session, app_to_ui_tx).await?;
        }
        AppEvent::ShowHistoryRequest => {
            handle_show_history(session, app_to_ui_tx).await?;
        }
        AppEvent::ListLanguages => {
            app_to_ui_tx
                .send(AppEvent::ShowLanguages(language::languages()))
                .await?;
        }
        AppEvent::Copy => {
            let notice = session.copy_to_clipboard(&session.state().translated_text);
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
        }
        AppEvent::Speak => {
            let notice = session.speak(&session.state().translated_text);
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
        }
        AppEvent::Shutdown => {}
        AppEvent::BackendReady { .. }
        | AppEvent::Loading(_)
        | AppEvent::ShowTranslation { .. }
        | AppEvent::ShowHistory(_)
        | AppEvent::ShowLanguages(_)
        | AppEvent::LanguageSelected(_)
        | AppEvent::TextCleared
        | AppEvent::ShowError { .. }
        | AppEvent::Notice(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(())
}
