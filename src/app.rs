//! Application state and core logic

use crate::config::TuiConfig;
use crate::constants;
use crate::gateway::{ReportPayload, SheetsClient, SubmissionGateway};
use crate::state::{Attachment, ExpenseCategory, LineItemField, Phase, ReportSession};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use uuid::Uuid;

/// Editable slots of one entry card, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Origin,
    Destination,
    Amount,
    Attachment,
}

impl EntryField {
    /// Tab order for a category's entry cards
    pub fn fields(category: ExpenseCategory) -> &'static [EntryField] {
        match category {
            ExpenseCategory::Travel => &[
                EntryField::Date,
                EntryField::Origin,
                EntryField::Destination,
                EntryField::Amount,
                EntryField::Attachment,
            ],
            _ => &[EntryField::Date, EntryField::Amount, EntryField::Attachment],
        }
    }
}

/// Which form control currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Branch,
    Salesperson,
    Categories,
    Entry {
        category: ExpenseCategory,
        row: usize,
        field: usize,
    },
    Remark,
    Submit,
}

/// Main application struct
pub struct App {
    /// Current form session
    pub session: ReportSession,
    /// Gateway the finished report is handed to
    gateway: Box<dyn SubmissionGateway>,
    /// Whether the app should quit
    quit: bool,
    /// User-visible validation/submission notice
    pub notice: Option<String>,
    /// Focused form control
    pub focus: Focus,
    /// Highlighted category on the checklist
    pub category_cursor: usize,
    /// Path being typed into the focused attachment slot
    pub attach_input: String,
}

impl App {
    /// Create a new App instance wired to the HTTP gateway
    pub fn new(config: &TuiConfig) -> Self {
        let gateway = Box::new(SheetsClient::new(config.resolve_web_app_url()));
        let mut app = Self::with_gateway(gateway);
        if let Some(branch) = &config.default_branch {
            if constants::branches().contains(&branch.as_str()) {
                app.session.draft.set_branch(branch.clone());
            }
        }
        app
    }

    pub fn with_gateway(gateway: Box<dyn SubmissionGateway>) -> Self {
        Self {
            session: ReportSession::new(),
            gateway,
            quit: false,
            notice: None,
            focus: Focus::Branch,
            category_cursor: 0,
            attach_input: String::new(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run the full submission path: validate, hand the draft to the
    /// gateway, record the outcome. Refusals and failures become notices;
    /// the draft is never lost.
    pub async fn submit(&mut self) {
        if let Err(refusal) = self.session.begin_submit() {
            self.notice = Some(refusal.to_string());
            return;
        }

        let payload = ReportPayload::from_draft(&self.session.draft);
        match self.gateway.submit(payload).await {
            Ok(()) => {
                tracing::info!(total = self.session.draft.grand_total(), "report submitted");
                self.session.complete_submit(true);
                self.notice = None;
            }
            Err(error) => {
                tracing::warn!(%error, "report submission failed");
                self.session.complete_submit(false);
                self.notice =
                    Some("Submission failed. Check your connection and try again.".to_string());
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.session.phase() {
            Phase::Submitted { .. } => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                    self.session.reset();
                    self.focus = Focus::Branch;
                    self.category_cursor = 0;
                    self.notice = None;
                }
            }
            // One submission in flight; input waits for the outcome
            Phase::Submitting => {}
            Phase::Editing => self.handle_editing_key(key).await,
        }
        Ok(())
    }

    async fn handle_editing_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit().await;
            return;
        }

        match key.code {
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.prev_focus(),
            _ => match self.focus {
                Focus::Branch => self.handle_branch_key(key),
                Focus::Salesperson => self.handle_salesperson_key(key),
                Focus::Categories => self.handle_categories_key(key),
                Focus::Entry { .. } => self.handle_entry_key(key),
                Focus::Remark => self.handle_remark_key(key),
                Focus::Submit => {
                    if key.code == KeyCode::Enter {
                        self.submit().await;
                    }
                }
            },
        }
    }

    fn handle_branch_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.cycle_branch(false),
            KeyCode::Right => self.cycle_branch(true),
            _ => {}
        }
    }

    fn handle_salesperson_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.cycle_salesperson(false),
            KeyCode::Right => self.cycle_salesperson(true),
            _ => {}
        }
    }

    fn handle_categories_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.category_cursor = self.category_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.category_cursor = (self.category_cursor + 1).min(ExpenseCategory::ALL.len() - 1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let category = ExpenseCategory::ALL[self.category_cursor];
                self.session.draft.toggle_category(category);
            }
            _ => {}
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.add_entry_row()
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.remove_entry_row()
            }
            KeyCode::Up => self.move_entry_row(-1),
            KeyCode::Down => self.move_entry_row(1),
            KeyCode::Enter => self.attach_focused_file(),
            KeyCode::Backspace => self.entry_backspace(),
            KeyCode::Char(c) => self.entry_char(c),
            _ => {}
        }
    }

    fn handle_remark_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.session.draft.remark.push(c),
            KeyCode::Enter => self.session.draft.remark.push('\n'),
            KeyCode::Backspace => {
                self.session.draft.remark.pop();
            }
            _ => {}
        }
    }

    /// Move to the next form control
    pub fn next_focus(&mut self) {
        let draft = &self.session.draft;
        self.focus = match self.focus {
            Focus::Branch => Focus::Salesperson,
            Focus::Salesperson => Focus::Categories,
            Focus::Categories => match draft.selected_categories().first() {
                Some(category) => Focus::Entry {
                    category: *category,
                    row: 0,
                    field: 0,
                },
                None => Focus::Remark,
            },
            Focus::Entry { category, row, field } => {
                let fields = EntryField::fields(category);
                if field + 1 < fields.len() {
                    Focus::Entry {
                        category,
                        row,
                        field: field + 1,
                    }
                } else if row + 1 < draft.entries(category).len() {
                    Focus::Entry {
                        category,
                        row: row + 1,
                        field: 0,
                    }
                } else {
                    match self.category_after(category) {
                        Some(next) => Focus::Entry {
                            category: next,
                            row: 0,
                            field: 0,
                        },
                        None => Focus::Remark,
                    }
                }
            }
            Focus::Remark => Focus::Submit,
            Focus::Submit => Focus::Branch,
        };
        self.attach_input.clear();
    }

    /// Move to the previous form control
    pub fn prev_focus(&mut self) {
        let draft = &self.session.draft;
        self.focus = match self.focus {
            Focus::Branch => Focus::Submit,
            Focus::Salesperson => Focus::Branch,
            Focus::Categories => Focus::Salesperson,
            Focus::Entry { category, row, field } => {
                if field > 0 {
                    Focus::Entry {
                        category,
                        row,
                        field: field - 1,
                    }
                } else if row > 0 {
                    let last_field = EntryField::fields(category).len() - 1;
                    Focus::Entry {
                        category,
                        row: row - 1,
                        field: last_field,
                    }
                } else {
                    match self.category_before(category) {
                        Some(prev) => self.last_entry_focus(prev),
                        None => Focus::Categories,
                    }
                }
            }
            Focus::Remark => match draft.selected_categories().last() {
                Some(category) => self.last_entry_focus(*category),
                None => Focus::Categories,
            },
            Focus::Submit => Focus::Remark,
        };
        self.attach_input.clear();
    }

    fn category_after(&self, category: ExpenseCategory) -> Option<ExpenseCategory> {
        let selected = self.session.draft.selected_categories();
        let pos = selected.iter().position(|c| *c == category)?;
        selected.get(pos + 1).copied()
    }

    fn category_before(&self, category: ExpenseCategory) -> Option<ExpenseCategory> {
        let selected = self.session.draft.selected_categories();
        let pos = selected.iter().position(|c| *c == category)?;
        pos.checked_sub(1).and_then(|p| selected.get(p)).copied()
    }

    fn last_entry_focus(&self, category: ExpenseCategory) -> Focus {
        let rows = self.session.draft.entries(category).len();
        Focus::Entry {
            category,
            row: rows.saturating_sub(1),
            field: EntryField::fields(category).len() - 1,
        }
    }

    fn cycle_branch(&mut self, forward: bool) {
        let branches = constants::branches();
        let current = self
            .session
            .draft
            .branch
            .as_deref()
            .and_then(|b| branches.iter().position(|x| *x == b));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % branches.len(),
            (Some(i), false) => (i + branches.len() - 1) % branches.len(),
        };
        self.session.draft.set_branch(branches[next]);
    }

    fn cycle_salesperson(&mut self, forward: bool) {
        let Some(branch) = self.session.draft.branch.clone() else {
            self.notice = Some("Select a branch first.".to_string());
            return;
        };
        let people = constants::salespeople(&branch);
        if people.is_empty() {
            return;
        }
        let current = self
            .session
            .draft
            .salesperson
            .as_deref()
            .and_then(|s| people.iter().position(|x| *x == s));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % people.len(),
            (Some(i), false) => (i + people.len() - 1) % people.len(),
        };
        self.session.draft.set_salesperson(people[next]);
    }

    /// The entry card and field slot under the cursor, if any
    fn focused_entry(&self) -> Option<(ExpenseCategory, Uuid, EntryField)> {
        let Focus::Entry { category, row, field } = self.focus else {
            return None;
        };
        let slot = *EntryField::fields(category).get(field)?;
        let id = self.session.draft.entries(category).get(row)?.id;
        Some((category, id, slot))
    }

    fn entry_char(&mut self, c: char) {
        let Some((category, id, slot)) = self.focused_entry() else {
            return;
        };
        let Focus::Entry { row, .. } = self.focus else {
            return;
        };
        let item = &self.session.draft.entries(category)[row];
        match slot {
            EntryField::Amount => {
                let mut value = item.amount.clone();
                value.push(c);
                self.session
                    .draft
                    .update_line_item(category, id, LineItemField::Amount(value));
            }
            EntryField::Origin => {
                let mut value = item.origin().to_string();
                value.push(c);
                self.session
                    .draft
                    .update_line_item(category, id, LineItemField::Origin(value));
            }
            EntryField::Destination => {
                let mut value = item.destination().to_string();
                value.push(c);
                self.session
                    .draft
                    .update_line_item(category, id, LineItemField::Destination(value));
            }
            EntryField::Attachment => self.attach_input.push(c),
            EntryField::Date => match c {
                '+' => self.adjust_focused_date(1),
                '-' => self.adjust_focused_date(-1),
                _ => {}
            },
        }
    }

    fn entry_backspace(&mut self) {
        let Some((category, id, slot)) = self.focused_entry() else {
            return;
        };
        let Focus::Entry { row, .. } = self.focus else {
            return;
        };
        let item = &self.session.draft.entries(category)[row];
        match slot {
            EntryField::Amount => {
                let mut value = item.amount.clone();
                value.pop();
                self.session
                    .draft
                    .update_line_item(category, id, LineItemField::Amount(value));
            }
            EntryField::Origin => {
                let mut value = item.origin().to_string();
                value.pop();
                self.session
                    .draft
                    .update_line_item(category, id, LineItemField::Origin(value));
            }
            EntryField::Destination => {
                let mut value = item.destination().to_string();
                value.pop();
                self.session
                    .draft
                    .update_line_item(category, id, LineItemField::Destination(value));
            }
            EntryField::Attachment => {
                if self.attach_input.is_empty() {
                    self.session
                        .draft
                        .update_line_item(category, id, LineItemField::Attachment(None));
                } else {
                    self.attach_input.pop();
                }
            }
            EntryField::Date => {}
        }
    }

    fn adjust_focused_date(&mut self, days: i64) {
        let Some((category, id, _)) = self.focused_entry() else {
            return;
        };
        let Focus::Entry { row, .. } = self.focus else {
            return;
        };
        let date = self.session.draft.entries(category)[row].date;
        self.session.draft.update_line_item(
            category,
            id,
            LineItemField::Date(date + chrono::Duration::days(days)),
        );
    }

    /// Read the typed path into an attachment on the focused entry
    fn attach_focused_file(&mut self) {
        let Some((category, id, slot)) = self.focused_entry() else {
            return;
        };
        if slot != EntryField::Attachment {
            return;
        }
        let path_text = self.attach_input.trim().to_string();
        if path_text.is_empty() {
            return;
        }

        let path = Path::new(&path_text);
        match std::fs::read(path) {
            Ok(bytes) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path_text.clone());
                let mime_type = guess_mime(path).to_string();
                self.session.draft.update_line_item(
                    category,
                    id,
                    LineItemField::Attachment(Some(Attachment {
                        file_name: file_name.clone(),
                        mime_type,
                        bytes,
                    })),
                );
                self.attach_input.clear();
                self.notice = Some(format!("Attached {file_name}"));
            }
            Err(error) => {
                self.notice = Some(format!("Could not read {path_text}: {error}"));
            }
        }
    }

    fn add_entry_row(&mut self) {
        let Focus::Entry { category, .. } = self.focus else {
            return;
        };
        self.session.draft.add_line_item(category);
        let row = self.session.draft.entries(category).len() - 1;
        self.focus = Focus::Entry {
            category,
            row,
            field: 0,
        };
    }

    fn remove_entry_row(&mut self) {
        let Some((category, id, _)) = self.focused_entry() else {
            return;
        };
        self.session.draft.remove_line_item(category, id);
        let rows = self.session.draft.entries(category).len();
        if let Focus::Entry { row, field, .. } = self.focus {
            self.focus = Focus::Entry {
                category,
                row: row.min(rows.saturating_sub(1)),
                field,
            };
        }
    }

    fn move_entry_row(&mut self, delta: i64) {
        let Focus::Entry { category, row, field } = self.focus else {
            return;
        };
        let rows = self.session.draft.entries(category).len();
        if rows == 0 {
            return;
        }
        let target = (row as i64 + delta).clamp(0, rows as i64 - 1) as usize;
        self.focus = Focus::Entry {
            category,
            row: target,
            field,
        };
        self.attach_input.clear();
    }
}

fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockSubmissionGateway;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_gateway(gateway: MockSubmissionGateway) -> App {
        App::with_gateway(Box::new(gateway))
    }

    fn fill_valid_draft(app: &mut App) {
        app.session.draft.set_branch("Mumbai");
        app.session.draft.set_salesperson("Rakesh Jain");
        app.session.draft.toggle_category(ExpenseCategory::Food);
        let id = app.session.draft.entries(ExpenseCategory::Food)[0].id;
        app.session
            .draft
            .update_line_item(ExpenseCategory::Food, id, LineItemField::Amount("250".into()));
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn missing_branch_never_reaches_gateway() {
            // Mock with no expectations panics on any call
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.submit().await;

            assert!(!app.session.is_submitted());
            assert_eq!(app.notice.as_deref(), Some("required field not set: branch"));
        }

        #[tokio::test]
        async fn no_category_never_reaches_gateway() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.session.draft.set_branch("Mumbai");
            app.session.draft.set_salesperson("Rakesh Jain");
            app.submit().await;

            assert!(!app.session.is_submitted());
            assert_eq!(
                app.notice.as_deref(),
                Some("select at least one expense category")
            );
        }

        #[tokio::test]
        async fn successful_submit_reaches_terminal_phase() {
            let mut gateway = MockSubmissionGateway::new();
            gateway
                .expect_submit()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with_gateway(gateway);
            fill_valid_draft(&mut app);

            app.submit().await;

            assert!(app.session.is_submitted());
            assert_eq!(app.session.submitted_total(), Some(250.0));
            assert!(app.notice.is_none());
        }

        #[tokio::test]
        async fn gateway_failure_keeps_draft_editable() {
            let mut gateway = MockSubmissionGateway::new();
            gateway
                .expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("endpoint unreachable")));
            let mut app = app_with_gateway(gateway);
            fill_valid_draft(&mut app);

            app.submit().await;

            assert!(!app.session.is_submitted());
            assert!(app.session.draft.is_selected(ExpenseCategory::Food));
            assert!(app.notice.as_deref().unwrap().starts_with("Submission failed"));
        }

        #[tokio::test]
        async fn payload_carries_the_draft_fields() {
            let mut gateway = MockSubmissionGateway::new();
            gateway
                .expect_submit()
                .withf(|payload| {
                    payload.branch_name == "Mumbai"
                        && payload.categories == ["Food"]
                        && payload.food_entries.len() == 1
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with_gateway(gateway);
            fill_valid_draft(&mut app);

            app.submit().await;
            assert!(app.session.is_submitted());
        }
    }

    mod key_handling {
        use super::*;

        #[tokio::test]
        async fn ctrl_c_quits() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn arrow_keys_pick_branch_then_salesperson() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());

            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.session.draft.branch.as_deref(), Some("Mumbai"));

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(
                app.session.draft.salesperson.as_deref(),
                Some("Amit Korgaonkar")
            );
        }

        #[tokio::test]
        async fn branch_change_drops_stale_salesperson() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();

            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();

            assert_eq!(app.session.draft.branch.as_deref(), Some("Ulasnagar"));
            assert!(app.session.draft.salesperson.is_none());
        }

        #[tokio::test]
        async fn space_toggles_highlighted_category() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.focus = Focus::Categories;
            app.category_cursor = 1; // Food

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(app.session.draft.is_selected(ExpenseCategory::Food));

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(!app.session.draft.is_selected(ExpenseCategory::Food));
        }

        #[tokio::test]
        async fn typing_edits_focused_amount() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.session.draft.toggle_category(ExpenseCategory::Food);
            app.focus = Focus::Entry {
                category: ExpenseCategory::Food,
                row: 0,
                field: 1, // amount
            };

            for c in ['2', '5', '0'] {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();

            assert_eq!(app.session.draft.entries(ExpenseCategory::Food)[0].amount, "25");
        }

        #[tokio::test]
        async fn ctrl_a_adds_a_row_and_ctrl_d_removes_it() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.session.draft.toggle_category(ExpenseCategory::Food);
            app.focus = Focus::Entry {
                category: ExpenseCategory::Food,
                row: 0,
                field: 0,
            };

            app.handle_key(ctrl('a')).await.unwrap();
            assert_eq!(app.session.draft.entries(ExpenseCategory::Food).len(), 2);

            app.handle_key(ctrl('d')).await.unwrap();
            assert_eq!(app.session.draft.entries(ExpenseCategory::Food).len(), 1);

            // Last remaining row cannot be removed
            app.handle_key(ctrl('d')).await.unwrap();
            assert_eq!(app.session.draft.entries(ExpenseCategory::Food).len(), 1);
        }

        #[tokio::test]
        async fn reset_key_leaves_submitted_phase() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with_gateway(gateway);
            fill_valid_draft(&mut app);
            app.submit().await;
            assert!(app.session.is_submitted());

            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            assert!(!app.session.is_submitted());
            assert!(app.session.draft.branch.is_none());
        }
    }

    mod focus_cycle {
        use super::*;

        #[tokio::test]
        async fn tab_walks_through_selected_sections_only() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.session.draft.toggle_category(ExpenseCategory::Travel);

            assert_eq!(app.focus, Focus::Branch);
            app.next_focus();
            assert_eq!(app.focus, Focus::Salesperson);
            app.next_focus();
            assert_eq!(app.focus, Focus::Categories);
            app.next_focus();
            assert_eq!(
                app.focus,
                Focus::Entry {
                    category: ExpenseCategory::Travel,
                    row: 0,
                    field: 0
                }
            );

            // Walk the five travel fields, then remark and submit
            for _ in 0..5 {
                app.next_focus();
            }
            assert_eq!(app.focus, Focus::Remark);
            app.next_focus();
            assert_eq!(app.focus, Focus::Submit);
            app.next_focus();
            assert_eq!(app.focus, Focus::Branch);
        }

        #[tokio::test]
        async fn tab_skips_entries_when_nothing_selected() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.focus = Focus::Categories;
            app.next_focus();
            assert_eq!(app.focus, Focus::Remark);
        }

        #[tokio::test]
        async fn backtab_reverses_the_walk() {
            let mut app = app_with_gateway(MockSubmissionGateway::new());
            app.session.draft.toggle_category(ExpenseCategory::Food);
            app.focus = Focus::Remark;

            app.prev_focus();
            assert_eq!(
                app.focus,
                Focus::Entry {
                    category: ExpenseCategory::Food,
                    row: 0,
                    field: 2
                }
            );
        }
    }
}
