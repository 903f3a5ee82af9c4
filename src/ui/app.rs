use crate::analytics::Dashboard;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::models::{MonthKey, Transaction, TransactionId};
use crate::ui::form::{BudgetForm, TransactionForm};
use crate::ui::util::{clamp_index, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
    Insights,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budgets,
            Self::Insights,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Insights => write!(f, "Insights"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    /// Transaction form overlay is open.
    Editing,
    /// Typing into the budget inputs.
    Budget,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "FORM"),
            Self::Budget => write!(f, "BUDGET"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction {
        id: TransactionId,
        description: String,
    },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) config: Config,

    pub(crate) ledger: Ledger,
    /// Derived from `ledger`; rebuilt by `refresh` after every mutation.
    pub(crate) view: Dashboard,

    // Transactions
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) txn_form: TransactionForm,

    // Budgets
    pub(crate) budget_form: BudgetForm,

    // Insights
    pub(crate) insight_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: Config, ledger: Ledger) -> Self {
        let budget_form = BudgetForm::new(config.budget_year(), MonthKey::current(), ledger.budgets());
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            config,

            ledger,
            view: Dashboard::default(),

            transaction_index: 0,
            transaction_scroll: 0,
            txn_form: TransactionForm::new(),

            budget_form,

            insight_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.refresh();
        app
    }

    /// Recompute every derived view from the ledger.
    pub(crate) fn refresh(&mut self) {
        self.view = Dashboard::compute(&self.ledger);
        clamp_index(
            &mut self.transaction_index,
            &mut self.transaction_scroll,
            self.ledger.transactions().len(),
        );
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn money(&self, amount: rust_decimal::Decimal) -> String {
        format_amount(amount, &self.config.currency_symbol)
    }

    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.ledger.transactions().get(self.transaction_index)
    }

    // ── Transaction form ─────────────────────────────────────

    pub(crate) fn begin_add(&mut self) {
        self.txn_form.editing = None;
        self.txn_form.focus = 0;
        self.input_mode = InputMode::Editing;
        self.set_status("New transaction: Tab next field, ←/→ change choice, Enter save");
    }

    /// Open the form on the selected row. The row is remembered by id, so
    /// edits elsewhere cannot retarget it.
    pub(crate) fn begin_edit(&mut self) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("No transaction selected");
            return;
        };
        let form = TransactionForm::for_edit(txn.id, &txn.to_new());
        self.txn_form = form;
        self.input_mode = InputMode::Editing;
        self.set_status("Editing transaction: Enter save, Esc cancel");
    }

    pub(crate) fn cancel_form(&mut self) {
        self.txn_form.editing = None;
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    /// Validate and apply the form. On a validation error the form stays
    /// open and the error is shown.
    pub(crate) fn submit_form(&mut self) {
        let tx = match self.txn_form.submit() {
            Ok(tx) => tx,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };
        let description = tx.description.clone();
        match self.txn_form.editing {
            Some(id) => {
                if self.ledger.update_transaction(id, tx) {
                    self.set_status(format!("Updated: {description}"));
                } else {
                    self.set_status("That transaction no longer exists");
                }
            }
            None => {
                self.ledger.add_transaction(tx);
                self.transaction_index = self.ledger.transactions().len().saturating_sub(1);
                self.set_status(format!("Added: {description}"));
            }
        }
        self.txn_form.reset_after_submit();
        self.input_mode = InputMode::Normal;
        self.refresh();
    }

    // ── Delete ───────────────────────────────────────────────

    pub(crate) fn request_delete(&mut self) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("No transaction selected");
            return;
        };
        let (id, description) = (txn.id, txn.description.clone());
        self.confirm_message = format!("Delete '{description}'?");
        self.pending_action = Some(PendingAction::DeleteTransaction { id, description });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteTransaction { id, description } => {
                    if self.ledger.delete_transaction(id).is_some() {
                        self.set_status(format!("Deleted: {description}"));
                    }
                    if self.txn_form.editing == Some(id) {
                        self.txn_form.editing = None;
                    }
                    self.refresh();
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    // ── Budgets ──────────────────────────────────────────────

    pub(crate) fn change_budget_month(&mut self, delta: i32) {
        self.budget_form.select_month(delta, self.ledger.budgets());
        let month = self.budget_form.month();
        self.set_status(format!("Budget month: {month}"));
    }

    /// Select `month` in the budget form, rebuilding the month choices when
    /// it falls in another year.
    pub(crate) fn show_budget_month(&mut self, month: MonthKey) {
        match self.budget_form.months.iter().position(|m| *m == month) {
            Some(idx) => {
                self.budget_form.month_index = idx;
                self.budget_form.load(self.ledger.budgets());
            }
            None => {
                self.budget_form = BudgetForm::new(month.year(), month, self.ledger.budgets());
            }
        }
        self.screen = Screen::Budgets;
        self.set_status(format!("Budget month: {month}"));
    }

    /// Replace the selected month's budget with the form contents.
    pub(crate) fn save_budget(&mut self) {
        let month = self.budget_form.month();
        let categories = self.budget_form.to_category_map();
        let lines = categories.len();
        self.ledger.set_budget_month(month, categories);
        self.budget_form.load(self.ledger.budgets());
        self.input_mode = InputMode::Normal;
        self.refresh();
        self.set_status(format!("Saved budget for {month} ({lines} categories)"));
    }

    pub(crate) fn discard_budget_edits(&mut self) {
        self.budget_form.load(self.ledger.budgets());
        self.input_mode = InputMode::Normal;
        self.set_status("Budget edits discarded");
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
