use crate::application::dto::{
    backup_result, layout_applying, layout_error, layout_success, restore_result, theme_applying,
    theme_error, theme_success, StatusMessage,
};
use crate::application::UseCaseContainer;
use crate::domain::entities::{ExtensionState, Layout, Theme, ThemeKind, EXTENSIONS};
use crate::domain::error::ApplyError;
use crate::infrastructure::{SettingsRepository, ThemeScanner};
use crate::presentation::components::{
    BackupPrompt, BackupPromptAction, ConfirmAction, ConfirmModal, EnableExtensionsAction,
    EnableExtensionsModal, IntroModal, Tab, TabManager, TestResultAction, TestResultModal,
    ToastManager, UserThemeAction, UserThemeModal, USER_THEME_INSTALL_URL,
};
use crate::presentation::i18n::Translator;
use crate::presentation::services::{
    outcome_slot, ApplySession, ApplyTarget, AsyncExecutor, AsyncTask, AsyncTaskManager,
    TaskOutcome, WorkflowStep,
};
use crate::domain::services::resource_locator;
use crate::presentation::ui::tabs::{EffectAction, EffectsTab, LayoutAction, LayoutsTab, ThemeAction, ThemesTab};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

enum PendingConfirm {
    TestLayout(&'static Layout),
    RestoreBackup,
    Quit,
}

pub struct RestyleApp {
    tab_manager: TabManager,
    i18n: Translator,

    use_cases: Arc<UseCaseContainer>,
    settings_repository: SettingsRepository,
    theme_scanner: ThemeScanner,

    executor: AsyncExecutor,
    task_manager: AsyncTaskManager,

    layout_session: ApplySession,
    theme_session: ApplySession,
    selected_layout: Option<&'static Layout>,
    layout_icons: HashMap<&'static str, Option<PathBuf>>,
    continue_after_backup: bool,

    theme_sub_tab: ThemeKind,
    themes: Vec<Theme>,

    extension_states: HashMap<String, ExtensionState>,
    extensions_in_operation: HashSet<String>,

    backup_prompt: BackupPrompt,
    enable_extensions_modal: EnableExtensionsModal,
    test_result_modal: TestResultModal,
    user_theme_modal: UserThemeModal,
    confirm_modal: ConfirmModal,
    pending_confirm: Option<PendingConfirm>,
    intro_modal: IntroModal,
    show_about: bool,
    toasts: ToastManager,

    backing_up: bool,
    restoring: bool,

    initialized: bool,
    status_message: String,
}

impl RestyleApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        settings_repository: SettingsRepository,
        theme_scanner: ThemeScanner,
        i18n: Translator,
    ) -> Self {
        let executor = AsyncExecutor::new();

        Self {
            tab_manager: TabManager::new(),
            i18n,
            use_cases,
            settings_repository,
            theme_scanner,
            executor,
            task_manager: AsyncTaskManager::new(),
            layout_session: ApplySession::new(),
            theme_session: ApplySession::new(),
            selected_layout: None,
            layout_icons: HashMap::new(),
            continue_after_backup: false,
            theme_sub_tab: ThemeKind::Gtk,
            themes: Vec::new(),
            extension_states: HashMap::new(),
            extensions_in_operation: HashSet::new(),
            backup_prompt: BackupPrompt::new(),
            enable_extensions_modal: EnableExtensionsModal::new(),
            test_result_modal: TestResultModal::new(),
            user_theme_modal: UserThemeModal::new(),
            confirm_modal: ConfirmModal::new(),
            pending_confirm: None,
            intro_modal: IntroModal::new(),
            show_about: false,
            toasts: ToastManager::new(),
            backing_up: false,
            restoring: false,
            initialized: false,
            status_message: String::new(),
        }
    }

    fn initialize(&mut self) {
        let settings = self.settings_repository.load();
        if !settings.intro_shown {
            self.intro_modal.open();
        }
        self.refresh_extension_states();
    }

    fn refresh_extension_states(&mut self) {
        let use_case = Arc::clone(&self.use_cases.query_extension_state);
        for extension in EXTENSIONS {
            let state = self
                .executor
                .execute(async { use_case.execute(extension.uuid).await });
            self.extension_states.insert(extension.uuid.to_string(), state);
        }
    }

    fn scan_themes(&mut self) {
        let mut themes = Vec::new();
        for kind in [ThemeKind::Gtk, ThemeKind::Icon, ThemeKind::Shell] {
            themes.extend(self.theme_scanner.scan(kind));
        }
        tracing::info!("Discovered {} themes", themes.len());
        self.themes = themes;
    }

    fn start_layout_apply(&mut self, layout: &'static Layout, test_mode: bool) {
        if self.layout_session.in_progress() {
            return;
        }
        self.layout_session.select(ApplyTarget::Layout(layout));
        self.layout_session.set_test_mode(test_mode);
        self.advance_layout_workflow();
    }

    /// Runs the gate sequence until something blocks on the user or the
    /// apply is dispatched.
    fn advance_layout_workflow(&mut self) {
        let gate_use_case = Arc::clone(&self.use_cases.check_extensions);
        let extensions_enabled = self
            .executor
            .execute(async { gate_use_case.globally_enabled().await });

        match self.layout_session.next_layout_step(extensions_enabled) {
            WorkflowStep::Reject => {}
            WorkflowStep::PromptEnableExtensions => {
                self.enable_extensions_modal.open();
            }
            WorkflowStep::PromptBackup => {
                self.backup_prompt.open();
            }
            WorkflowStep::Dispatch => {
                self.dispatch_layout_apply();
            }
        }
    }

    fn dispatch_layout_apply(&mut self) {
        let Some(ApplyTarget::Layout(layout)) = self.layout_session.target().cloned() else {
            return;
        };
        if !self.layout_session.begin() {
            return;
        }

        self.status_message = self.i18n.format(&layout_applying(layout.name));
        tracing::info!("Applying layout {}", layout.name);

        let outcome = outcome_slot();
        self.task_manager.set_active_task(AsyncTask::ApplyLayout {
            outcome: Arc::clone(&outcome),
        });

        let use_case = Arc::clone(&self.use_cases.apply_layout);
        let executor = self.executor.clone();

        thread::spawn(move || {
            let result = executor.execute(async move { use_case.execute(layout).await });

            let task_outcome = match result {
                Ok(()) => {
                    tracing::info!("Layout {} applied", layout.name);
                    TaskOutcome::ok(layout_success(layout.name))
                }
                Err(e) => {
                    tracing::error!("Error applying layout {}: {}", layout.name, e);
                    TaskOutcome::err(layout_error(&e))
                }
            };

            *outcome.lock().unwrap() = Some(task_outcome);
        });
    }

    fn dispatch_theme_apply(&mut self, name: String, kind: ThemeKind) {
        self.theme_session.select(ApplyTarget::Theme {
            name: name.clone(),
            kind,
        });
        if !self.theme_session.begin() {
            return;
        }

        self.status_message = self.i18n.format(&theme_applying(kind, &name));
        tracing::info!("Applying {} theme {}", kind, name);

        let outcome = outcome_slot();
        self.task_manager.set_active_task(AsyncTask::ApplyTheme {
            kind,
            outcome: Arc::clone(&outcome),
        });

        let use_case = Arc::clone(&self.use_cases.apply_theme);
        let executor = self.executor.clone();

        thread::spawn(move || {
            let task_name = name.clone();
            let result = executor.execute(async move { use_case.execute(&task_name, kind).await });

            let task_outcome = match result {
                Ok(()) => {
                    tracing::info!("{} theme {} applied", kind, name);
                    TaskOutcome::ok(theme_success(kind, &name))
                }
                Err(e) => {
                    tracing::error!("Error applying {} theme {}: {}", kind, name, e);
                    if matches!(e, ApplyError::PrerequisiteMissing { .. }) {
                        TaskOutcome::prerequisite(theme_error(kind, &e))
                    } else {
                        TaskOutcome::err(theme_error(kind, &e))
                    }
                }
            };

            *outcome.lock().unwrap() = Some(task_outcome);
        });
    }

    fn dispatch_backup(&mut self) {
        if self.backing_up {
            return;
        }
        self.backing_up = true;
        tracing::info!("Creating settings backup");

        let outcome = outcome_slot();
        self.task_manager.set_active_task(AsyncTask::CreateBackup {
            outcome: Arc::clone(&outcome),
        });

        let use_case = Arc::clone(&self.use_cases.create_backup);
        let executor = self.executor.clone();

        thread::spawn(move || {
            let result = executor.execute(async move { use_case.execute().await });

            let task_outcome = match result {
                Ok(backup) => {
                    tracing::info!("Backup written to {}", backup.file_path.display());
                    TaskOutcome::ok(backup_result(&Ok(())))
                }
                Err(e) => {
                    tracing::error!("Error creating backup: {}", e);
                    TaskOutcome::err(backup_result(&Err(e)))
                }
            };

            *outcome.lock().unwrap() = Some(task_outcome);
        });
    }

    fn dispatch_restore(&mut self) {
        if self.restoring {
            return;
        }
        self.restoring = true;
        tracing::info!("Restoring latest backup");

        let outcome = outcome_slot();
        self.task_manager.set_active_task(AsyncTask::RestoreBackup {
            outcome: Arc::clone(&outcome),
        });

        let use_case = Arc::clone(&self.use_cases.restore_latest_backup);
        let executor = self.executor.clone();

        thread::spawn(move || {
            let result = executor.execute(async move { use_case.execute().await });

            let task_outcome = match result {
                Ok(()) => {
                    tracing::info!("Backup restored");
                    TaskOutcome::ok(restore_result(&Ok(())))
                }
                Err(e) => {
                    tracing::error!("Error restoring backup: {}", e);
                    TaskOutcome::err(restore_result(&Err(e)))
                }
            };

            *outcome.lock().unwrap() = Some(task_outcome);
        });
    }

    fn dispatch_toggle(&mut self, uuid: String, enable: bool) {
        if self.extensions_in_operation.contains(&uuid) {
            return;
        }
        self.extensions_in_operation.insert(uuid.clone());
        tracing::info!(
            "{} extension {}",
            if enable { "Enabling" } else { "Disabling" },
            uuid
        );

        let outcome = outcome_slot();
        self.task_manager.set_active_task(AsyncTask::ToggleExtension {
            uuid: uuid.clone(),
            enable,
            outcome: Arc::clone(&outcome),
        });

        let use_case = Arc::clone(&self.use_cases.toggle_extension);
        let executor = self.executor.clone();

        thread::spawn(move || {
            let target = uuid.clone();
            let ok = executor.execute(async move { use_case.execute(&target, enable).await });

            let task_outcome = if ok {
                TaskOutcome::ok(StatusMessage::plain("close"))
            } else {
                TaskOutcome::err(StatusMessage::with("error", vec![("error", uuid)]))
            };

            *outcome.lock().unwrap() = Some(task_outcome);
        });
    }

    fn poll_async_tasks(&mut self) {
        let result = self.task_manager.poll();

        if let Some(outcome) = result.layout_completed {
            self.layout_session.finish();
            self.status_message = self.i18n.format(&outcome.message);

            if outcome.success && self.layout_session.test_mode() {
                self.test_result_modal.open();
            } else {
                self.layout_session.close_test();
                if !outcome.success {
                    self.toasts.push_error(self.i18n.format(&outcome.message));
                }
            }
        }

        if let Some((kind, outcome)) = result.theme_completed {
            self.theme_session.finish();

            if outcome.prerequisite_missing {
                self.user_theme_modal.open();
            } else {
                self.status_message = self.i18n.format(&outcome.message);
                if outcome.success {
                    let hint_key = match kind {
                        ThemeKind::Gtk => "gtk_theme_restart",
                        ThemeKind::Icon => "icon_theme_restart",
                        ThemeKind::Shell => "shell_theme_restart",
                    };
                    self.toasts.push_info(self.i18n.tr(hint_key).to_string());
                } else {
                    self.toasts.push_error(self.i18n.format(&outcome.message));
                }
            }
        }

        if let Some(outcome) = result.backup_completed {
            self.backing_up = false;
            self.status_message = self.i18n.format(&outcome.message);

            if outcome.success {
                self.toasts.push_info(self.i18n.format(&outcome.message));
            } else {
                self.toasts.push_error(self.i18n.format(&outcome.message));
            }

            if self.continue_after_backup {
                self.continue_after_backup = false;
                self.advance_layout_workflow();
            }
        }

        if let Some(outcome) = result.restore_completed {
            self.restoring = false;
            self.status_message = self.i18n.format(&outcome.message);

            if outcome.success {
                self.toasts.push_info(self.i18n.format(&outcome.message));
            } else {
                self.toasts.push_error(self.i18n.format(&outcome.message));
            }
        }

        if let Some((uuid, _enable, outcome)) = result.toggle_completed {
            self.extensions_in_operation.remove(&uuid);

            if outcome.success {
                let use_case = Arc::clone(&self.use_cases.query_extension_state);
                let uuid_clone = uuid.clone();
                let state = self
                    .executor
                    .execute(async move { use_case.execute(&uuid_clone).await });
                self.extension_states.insert(uuid, state);
            } else {
                self.toasts.push_error(self.i18n.format(&outcome.message));
            }
        }
    }

    fn handle_modals(&mut self, ctx: &egui::Context) {
        if let Some(action) = self.enable_extensions_modal.render(ctx, &self.i18n) {
            self.enable_extensions_modal.close();
            match action {
                EnableExtensionsAction::Enable => {
                    let use_case = Arc::clone(&self.use_cases.check_extensions);
                    let enabled = self
                        .executor
                        .execute(async move { use_case.enable_globally().await });
                    if enabled {
                        self.toasts
                            .push_info(self.i18n.tr("extensions_enabled_success").to_string());
                        self.advance_layout_workflow();
                    } else {
                        self.toasts.push_error(
                            self.i18n
                                .tr("extensions_enable_error")
                                .replace("{error}", self.i18n.tr("unknown")),
                        );
                    }
                }
                EnableExtensionsAction::Cancel => {
                    self.layout_session.close_test();
                }
            }
        }

        if let Some(action) = self.backup_prompt.render(ctx, &self.i18n) {
            self.backup_prompt.close();
            match action {
                BackupPromptAction::Backup => {
                    self.layout_session.resolve_backup_prompt();
                    self.continue_after_backup = true;
                    self.dispatch_backup();
                }
                BackupPromptAction::Skip => {
                    self.layout_session.resolve_backup_prompt();
                    self.advance_layout_workflow();
                }
                BackupPromptAction::Cancel => {}
            }
        }

        if let Some(action) = self.test_result_modal.render(ctx, &self.i18n) {
            self.test_result_modal.close();
            self.layout_session.close_test();
            match action {
                TestResultAction::Keep => {}
                TestResultAction::Revert => {
                    self.dispatch_restore();
                }
            }
        }

        if let Some(action) = self.user_theme_modal.render(ctx, &self.i18n) {
            self.user_theme_modal.close();
            match action {
                UserThemeAction::OpenInstallPage => {
                    open_url(USER_THEME_INSTALL_URL);
                }
                UserThemeAction::Close => {}
            }
        }

        if let Some(action) = self.confirm_modal.render(ctx, &self.i18n) {
            self.confirm_modal.close();
            if let ConfirmAction::Confirm = action {
                match self.pending_confirm.take() {
                    Some(PendingConfirm::TestLayout(layout)) => {
                        self.start_layout_apply(layout, true);
                    }
                    Some(PendingConfirm::RestoreBackup) => self.dispatch_restore(),
                    Some(PendingConfirm::Quit) => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    None => {}
                }
            } else {
                self.pending_confirm = None;
            }
        }

        if let Some(dismissed) = self.intro_modal.render(ctx, &self.i18n) {
            if dismissed.dont_show_again {
                let mut settings = self.settings_repository.load();
                settings.intro_shown = true;
                if let Err(e) = self.settings_repository.save(&settings) {
                    tracing::error!("Error saving settings: {}", e);
                }
            }
        }

        if self.show_about {
            let mut open = true;
            egui::Window::new(self.i18n.tr("about"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading(self.i18n.tr("app_name"));
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.label(self.i18n.tr("about_description"));
                });
            self.show_about = open;
        }
    }
}

impl eframe::App for RestyleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_tasks();
        ctx.request_repaint();

        if !self.initialized {
            self.initialized = true;
            self.initialize();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.i18n.tr("app_name"));
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();

                for (tab, key) in [
                    (Tab::Layouts, "layouts_tab"),
                    (Tab::Effects, "effects_tab"),
                    (Tab::Themes, "themes_tab"),
                ] {
                    if ui
                        .selectable_label(self.tab_manager.is_current(tab), self.i18n.tr(key))
                        .clicked()
                    {
                        self.tab_manager.switch_to(tab);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.i18n.tr("quit")).clicked() {
                        self.pending_confirm = Some(PendingConfirm::Quit);
                        self.confirm_modal
                            .open("quit_confirm_title", "quit_confirm", "quit");
                    }
                    if ui.button(self.i18n.tr("about")).clicked() {
                        self.show_about = true;
                    }
                    if ui.button(self.i18n.tr("backup_restore")).clicked() {
                        self.pending_confirm = Some(PendingConfirm::RestoreBackup);
                        self.confirm_modal.open(
                            "backup_restore_title",
                            "backup_restore_message",
                            "backup_restore",
                        );
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.layout_session.in_progress()
                    || self.theme_session.in_progress()
                    || self.backing_up
                    || self.restoring
                {
                    ui.spinner();
                }
                ui.label(&self.status_message);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab_manager.current() {
            Tab::Layouts => {
                let icon = self.selected_layout.and_then(|layout| {
                    self.layout_icons
                        .entry(layout.name)
                        .or_insert_with(|| resource_locator::layout_icon(layout))
                        .clone()
                });
                let actions = LayoutsTab::show(
                    ui,
                    &self.i18n,
                    &mut self.selected_layout,
                    icon.as_deref(),
                    self.layout_session.in_progress(),
                );
                for action in actions {
                    match action {
                        LayoutAction::Test(layout) => {
                            self.pending_confirm = Some(PendingConfirm::TestLayout(layout));
                            self.confirm_modal.open(
                                "test_layout_title",
                                "test_layout_message",
                                "test_layout",
                            );
                        }
                        LayoutAction::Apply(layout) => self.start_layout_apply(layout, false),
                    }
                }
            }
            Tab::Effects => {
                let actions = EffectsTab::show(
                    ui,
                    &self.i18n,
                    &self.extension_states,
                    &self.extensions_in_operation,
                );
                for action in actions {
                    match action {
                        EffectAction::Toggle { uuid, enable } => self.dispatch_toggle(uuid, enable),
                        EffectAction::Install(url) => open_url(url),
                        EffectAction::OpenSettings(uuid) => open_extension_prefs(&uuid),
                    }
                }
            }
            Tab::Themes => {
                if !self.tab_manager.is_loaded(Tab::Themes) {
                    self.tab_manager.mark_loaded(Tab::Themes);
                    self.scan_themes();
                }

                let actions = ThemesTab::show(
                    ui,
                    &self.i18n,
                    &mut self.theme_sub_tab,
                    &self.themes,
                    self.theme_session.in_progress(),
                );
                for action in actions {
                    match action {
                        ThemeAction::Apply { name, kind } => self.dispatch_theme_apply(name, kind),
                    }
                }
            }
        });

        self.handle_modals(ctx);
        self.toasts.render(ctx);
    }
}

fn open_url(url: &str) {
    tracing::info!("Opening {}", url);
    if let Err(e) = std::process::Command::new("xdg-open").arg(url).spawn() {
        tracing::error!("Error opening {}: {}", url, e);
    }
}

/// Preference dialogs ship under different binaries across GNOME versions;
/// try each in turn.
fn open_extension_prefs(uuid: &str) {
    let candidates: [(&str, Vec<&str>); 3] = [
        ("gnome-extensions", vec!["prefs", uuid]),
        ("gnome-extensions-app", vec![uuid]),
        ("gnome-shell-extension-prefs", vec![uuid]),
    ];

    for (program, args) in candidates {
        match std::process::Command::new(program).args(&args).spawn() {
            Ok(_) => {
                tracing::info!("Opened extension settings via {}", program);
                return;
            }
            Err(e) => {
                tracing::debug!("{} unavailable: {}", program, e);
            }
        }
    }

    tracing::error!("No extension settings dialog available for {}", uuid);
}
