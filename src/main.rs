//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zform library and Zellij: it maps
//! keys and worker replies to library events and carries out the actions the
//! library returns.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← Form state, key handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   ExportWorker   │   │  ← Renders and writes exports
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! While editing:
//! - `Tab`/`Down`: Next field, `Shift+Tab`/`Up`: previous field
//! - `Left`/`Right`: Change option or move the subject cursor
//! - `Space`: Toggle the subject under the cursor
//! - `Enter`: Attach the typed resume path, newline in About, otherwise next field
//! - `Ctrl+s`: Submit, `Ctrl+r`: Reset
//! - `Esc`: Close
//!
//! On the summary:
//! - `j`: Export JSON, `d`: Export document
//! - `Esc`: Back to editing, `r`: Reset, `q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zform::app::ViewMode;
use zform::domain::Field;
use zform::export::ExportKind;
use zform::infrastructure::attachment;
use zform::worker::{ExportMessage, ExportResponse, ExportWorker, EXPORT_WORKER};
use zform::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(ExportWorker, zform_worker, ZFORM_WORKER);

struct State {
    app: zform::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zform::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, starts tracing, builds the form state and asks
    /// for host file access (attachments and exports live on the host).
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zform::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(export_dir = %config.export_dir, "parsed configuration");
        self.app = zform::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - attachments and exports unavailable");
                    }
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zform::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(action);
                }
                render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.view_mode() {
            ViewMode::Summary => Self::map_summary_key(key),
            ViewMode::Form => self.map_form_key(key),
        }
    }

    fn map_summary_key(key: &KeyWithModifier) -> Option<Event> {
        if !key.key_modifiers.is_empty() {
            return None;
        }
        Some(match key.bare_key {
            BareKey::Char('j') => Event::Export(ExportKind::Json),
            BareKey::Char('d') => Event::Export(ExportKind::Document),
            BareKey::Char('r') => Event::Reset,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::DismissSummary,
            _ => return None,
        })
    }

    fn map_form_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('s') => Some(Event::Submit),
                BareKey::Char('r') => Some(Event::Reset),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab | BareKey::Down => Event::FocusNext,
            BareKey::Up => Event::FocusPrev,
            BareKey::Right => Event::OptionNext,
            BareKey::Left => Event::OptionPrev,
            BareKey::Backspace => Event::Backspace,
            BareKey::Enter => match self.app.focus {
                Field::Resume => Event::PickResume,
                Field::About => Event::Char('\n'),
                _ => Event::FocusNext,
            },
            BareKey::Esc => Event::CloseFocus,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != EXPORT_WORKER {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<ExportResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &ExportMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(EXPORT_WORKER.to_string()),
                    name: EXPORT_WORKER.to_string(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    /// Carries out one action; returns whether it changed what is shown.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::Notify(notification) => {
                self.app.banner = Some(notification);
                true
            }
            Action::InspectResume { path } => {
                let picked = match attachment::inspect(&path) {
                    Ok(attachment) => Some(attachment),
                    Err(e) => {
                        tracing::warn!(path = %path, error = %e, "cannot attach resume");
                        None
                    }
                };
                self.dispatch(&Event::ResumePicked(picked))
            }
            Action::PostToWorker(message) => {
                Self::post_worker_message(&message);
                false
            }
        }
    }
}
