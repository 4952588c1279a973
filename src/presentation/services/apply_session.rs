use crate::domain::entities::{Layout, ThemeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyTarget {
    Layout(&'static Layout),
    Theme { name: String, kind: ThemeKind },
}

/// What the workflow does next when the user asks to apply. The order is
/// fixed: gate check, then backup prompt, then dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    /// Already applying, or nothing selected.
    Reject,
    /// Extensions are globally disabled; ask before proceeding.
    PromptEnableExtensions,
    /// Permanent apply without a backup decision yet; ask once.
    PromptBackup,
    Dispatch,
}

/// Transient state for one apply flow. Created when the user initiates an
/// apply; closed when the operation and any keep/revert decision completes.
pub struct ApplySession {
    target: Option<ApplyTarget>,
    test_mode: bool,
    backup_taken: bool,
    in_progress: bool,
}

impl ApplySession {
    pub fn new() -> Self {
        Self {
            target: None,
            test_mode: false,
            backup_taken: false,
            in_progress: false,
        }
    }

    pub fn select(&mut self, target: ApplyTarget) {
        self.target = Some(target);
    }

    pub fn target(&self) -> Option<&ApplyTarget> {
        self.target.as_ref()
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn set_test_mode(&mut self, test_mode: bool) {
        self.test_mode = test_mode;
    }

    /// The backup question is asked at most once per session, whichever way
    /// it was answered.
    pub fn resolve_backup_prompt(&mut self) {
        self.backup_taken = true;
    }

    /// Gate sequence for a layout apply. Theme applies skip the gates and
    /// only honor the in-progress guard.
    pub fn next_layout_step(&self, extensions_enabled: bool) -> WorkflowStep {
        if self.in_progress || self.target.is_none() {
            return WorkflowStep::Reject;
        }
        if !extensions_enabled {
            return WorkflowStep::PromptEnableExtensions;
        }
        if !self.test_mode && !self.backup_taken {
            return WorkflowStep::PromptBackup;
        }
        WorkflowStep::Dispatch
    }

    /// Marks the session in progress. False when an apply is already
    /// running; the caller must not dispatch in that case.
    pub fn begin(&mut self) -> bool {
        if self.in_progress {
            return false;
        }
        self.in_progress = true;
        true
    }

    /// The operation finished (either way). Test mode stays set so the
    /// caller can decide whether a keep/revert prompt is due.
    pub fn finish(&mut self) {
        self.in_progress = false;
    }

    /// Closes the test flow after the keep/revert decision.
    pub fn close_test(&mut self) {
        self.test_mode = false;
    }
}

impl Default for ApplySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_target() -> ApplySession {
        let mut session = ApplySession::new();
        session.select(ApplyTarget::Layout(
            Layout::by_name("Classic").expect("known layout"),
        ));
        session
    }

    #[test]
    fn no_selection_rejects() {
        let session = ApplySession::new();
        assert_eq!(session.next_layout_step(true), WorkflowStep::Reject);
    }

    #[test]
    fn gate_check_precedes_backup_prompt() {
        let session = session_with_target();
        assert_eq!(
            session.next_layout_step(false),
            WorkflowStep::PromptEnableExtensions
        );
        assert_eq!(session.next_layout_step(true), WorkflowStep::PromptBackup);
    }

    #[test]
    fn backup_prompt_is_asked_at_most_once() {
        let mut session = session_with_target();
        assert_eq!(session.next_layout_step(true), WorkflowStep::PromptBackup);

        session.resolve_backup_prompt();
        assert_eq!(session.next_layout_step(true), WorkflowStep::Dispatch);
    }

    #[test]
    fn test_mode_skips_the_backup_prompt() {
        let mut session = session_with_target();
        session.set_test_mode(true);
        assert_eq!(session.next_layout_step(true), WorkflowStep::Dispatch);
    }

    #[test]
    fn second_apply_while_in_progress_is_rejected() {
        let mut session = session_with_target();
        session.resolve_backup_prompt();

        assert!(session.begin());
        assert_eq!(session.next_layout_step(true), WorkflowStep::Reject);
        assert!(!session.begin());

        session.finish();
        assert_eq!(session.next_layout_step(true), WorkflowStep::Dispatch);
    }

    #[test]
    fn test_flag_survives_until_closed() {
        let mut session = session_with_target();
        session.set_test_mode(true);
        assert!(session.begin());
        session.finish();
        assert!(session.test_mode());

        session.close_test();
        assert!(!session.test_mode());
    }
}
