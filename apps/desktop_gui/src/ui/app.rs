use client_core::{
    controller::{DELETE_CONFIRMATION_PROMPT, VALIDATION_PROMPT},
    render::{self, APP_TITLE, EMPTY_LIST_TEXT, LIST_HEADING, LOADING_TEXT},
    HomeworkState,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::AssignmentId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::apply_ui_event;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
}

enum ItemAction {
    Toggle { id: AssignmentId, completed: bool },
    Delete(AssignmentId),
}

pub struct HomeworkApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    server_url: String,
    state: HomeworkState,
    status: String,

    pending_alert: Option<&'static str>,
    pending_delete: Option<AssignmentId>,
}

impl HomeworkApp {
    /// Builds the app and queues the initial load.
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            server_url: startup.server_url,
            state: HomeworkState::default(),
            status: "Connecting...".to_string(),
            pending_alert: None,
            pending_delete: None,
        };
        app.dispatch(BackendCommand::Load);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(follow_up) = apply_ui_event(&mut self.state, &mut self.status, event) {
                self.dispatch(follow_up);
            }
        }
    }

    fn submit_draft(&mut self) {
        match self.state.draft.to_submission() {
            Ok(submission) => self.dispatch(BackendCommand::Create(submission)),
            Err(err) => {
                tracing::warn!("homework draft rejected: {err}");
                self.pending_alert = Some(VALIDATION_PROMPT);
            }
        }
    }

    fn apply_item_action(&mut self, action: ItemAction) {
        match action {
            ItemAction::Toggle { id, completed } => self.dispatch(BackendCommand::SetCompleted {
                id,
                completed: !completed,
            }),
            ItemAction::Delete(id) => self.pending_delete = Some(id),
        }
    }

    fn show_add_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add New Homework");
        let draft = &mut self.state.draft;
        ui.add(egui::TextEdit::singleline(&mut draft.title).hint_text("Title"));
        ui.add(egui::TextEdit::singleline(&mut draft.subject).hint_text("Subject"));
        ui.add(egui::TextEdit::singleline(&mut draft.due_date).hint_text("Due Date (YYYY-MM-DD)"));
        if ui.button("Add Homework").clicked() {
            self.submit_draft();
        }
    }

    fn show_assignments(&mut self, ui: &mut egui::Ui) {
        ui.heading(LIST_HEADING);
        if self.state.shows_empty_notice() {
            ui.label(EMPTY_LIST_TEXT);
            return;
        }

        let mut actions = Vec::new();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for item in self.state.items() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    let mut title = egui::RichText::new(&item.title).strong();
                    if item.completed {
                        title = title.strikethrough();
                    }
                    ui.horizontal(|ui| {
                        ui.label(title);
                        ui.label(format!("({})", item.subject));
                    });
                    ui.label(render::due_line(item));
                    ui.label(render::status_line(item));
                    ui.horizontal(|ui| {
                        if ui.button(item.toggle_label()).clicked() {
                            actions.push(ItemAction::Toggle {
                                id: item.id,
                                completed: item.completed,
                            });
                        }
                        if ui.button("Delete").clicked() {
                            actions.push(ItemAction::Delete(item.id));
                        }
                    });
                });
            }
        });

        for action in actions {
            self.apply_item_action(action);
        }
    }

    fn show_alert_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.pending_alert else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Missing fields")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.pending_alert = None;
        }
    }

    fn show_delete_dialog(&mut self, ctx: &egui::Context) {
        if self.pending_delete.is_none() {
            return;
        }
        let mut answer = None;
        egui::Window::new("Delete assignment")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(DELETE_CONFIRMATION_PROMPT);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(confirmed) = answer {
            self.resolve_delete(confirmed);
        }
    }

    /// Closes the delete dialog; only a confirmation queues the request.
    fn resolve_delete(&mut self, confirmed: bool) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if confirmed {
            self.dispatch(BackendCommand::Delete { id });
        } else {
            tracing::info!("delete of homework {id} cancelled");
        }
    }

    fn dialog_open(&self) -> bool {
        self.pending_alert.is_some() || self.pending_delete.is_some()
    }
}

impl eframe::App for HomeworkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(self.server_url.as_str());
                ui.separator();
                ui.small(self.status.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.shows_loading_indicator() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(LOADING_TEXT);
                });
                return;
            }

            ui.add_enabled_ui(!self.dialog_open(), |ui| {
                ui.heading(APP_TITLE);
                if let Some(error) = self.state.error() {
                    ui.colored_label(egui::Color32::RED, render::error_banner(error));
                }
                ui.separator();
                self.show_add_form(ui);
                ui.separator();
                self.show_assignments(ui);
            });
        });

        self.show_alert_dialog(ctx);
        self.show_delete_dialog(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
