//! Report draft definitions and state transitions

use chrono::NaiveDate;
use uuid::Uuid;

/// Expense categories offered on the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Travel,
    Food,
    Accommodation,
    Other,
}

impl ExpenseCategory {
    /// All categories, in the order they appear on the checklist
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Travel,
        ExpenseCategory::Food,
        ExpenseCategory::Accommodation,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Food => "Food",
            Self::Accommodation => "Accommodation",
            Self::Other => "Other",
        }
    }
}

/// File attachment carried by a line item: raw bytes plus metadata.
///
/// The gateway encodes the bytes for transport; the draft only holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Category-specific part of a line item.
///
/// Travel entries carry origin/destination; every other category uses the
/// generic shape with no extra fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemDetail {
    Travel { origin: String, destination: String },
    Generic,
}

/// One expense entry within a category's collection
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: String,
    pub attachment: Option<Attachment>,
    pub detail: LineItemDetail,
}

impl LineItem {
    /// Create a default entry for a category: dated `date`, empty amount,
    /// no attachment, blank origin/destination for travel.
    pub fn new(category: ExpenseCategory, date: NaiveDate) -> Self {
        let detail = match category {
            ExpenseCategory::Travel => LineItemDetail::Travel {
                origin: String::new(),
                destination: String::new(),
            },
            _ => LineItemDetail::Generic,
        };
        Self {
            id: Uuid::new_v4(),
            date,
            amount: String::new(),
            attachment: None,
            detail,
        }
    }

    pub fn origin(&self) -> &str {
        match &self.detail {
            LineItemDetail::Travel { origin, .. } => origin,
            LineItemDetail::Generic => "",
        }
    }

    pub fn destination(&self) -> &str {
        match &self.detail {
            LineItemDetail::Travel { destination, .. } => destination,
            LineItemDetail::Generic => "",
        }
    }
}

/// Tagged field update for a line item.
///
/// `Origin` and `Destination` only apply to travel entries; applying them to a
/// generic entry leaves it unchanged.
#[derive(Debug, Clone)]
pub enum LineItemField {
    Date(NaiveDate),
    Amount(String),
    Attachment(Option<Attachment>),
    Origin(String),
    Destination(String),
}

/// Interpret a free-text amount as a decimal number.
///
/// Unparseable or empty text counts as zero; invalid input is never rejected
/// at entry time.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// The in-memory expense report being composed before submission.
///
/// Selection and collections are coupled: a category's collection is non-empty
/// exactly when the category is selected. All mutation goes through the
/// methods below, which maintain that coupling.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    /// Fixed at creation; read-only to the user
    pub report_date: NaiveDate,
    pub branch: Option<String>,
    pub salesperson: Option<String>,
    pub remark: String,
    selected: Vec<ExpenseCategory>,
    travel_entries: Vec<LineItem>,
    food_entries: Vec<LineItem>,
    accommodation_entries: Vec<LineItem>,
    other_entries: Vec<LineItem>,
}

impl ReportDraft {
    /// Create an empty draft dated `report_date`
    pub fn new(report_date: NaiveDate) -> Self {
        Self {
            report_date,
            branch: None,
            salesperson: None,
            remark: String::new(),
            selected: Vec::new(),
            travel_entries: Vec::new(),
            food_entries: Vec::new(),
            accommodation_entries: Vec::new(),
            other_entries: Vec::new(),
        }
    }

    /// Create an empty draft dated today (local time)
    pub fn new_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Set the branch; clears the salesperson since choices are
    /// branch-dependent and a stale choice must never survive a branch change.
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = Some(branch.into());
        self.salesperson = None;
    }

    pub fn set_salesperson(&mut self, name: impl Into<String>) {
        self.salesperson = Some(name.into());
    }

    pub fn set_remark(&mut self, text: impl Into<String>) {
        self.remark = text.into();
    }

    pub fn is_selected(&self, category: ExpenseCategory) -> bool {
        self.selected.contains(&category)
    }

    /// Selected categories, in selection order
    pub fn selected_categories(&self) -> &[ExpenseCategory] {
        &self.selected
    }

    pub fn entries(&self, category: ExpenseCategory) -> &[LineItem] {
        match category {
            ExpenseCategory::Travel => &self.travel_entries,
            ExpenseCategory::Food => &self.food_entries,
            ExpenseCategory::Accommodation => &self.accommodation_entries,
            ExpenseCategory::Other => &self.other_entries,
        }
    }

    fn entries_mut(&mut self, category: ExpenseCategory) -> &mut Vec<LineItem> {
        match category {
            ExpenseCategory::Travel => &mut self.travel_entries,
            ExpenseCategory::Food => &mut self.food_entries,
            ExpenseCategory::Accommodation => &mut self.accommodation_entries,
            ExpenseCategory::Other => &mut self.other_entries,
        }
    }

    /// Flip a category's membership in the selected set.
    ///
    /// Selecting seeds the collection with one default entry dated
    /// `report_date`. Deselecting clears the collection entirely; re-selecting
    /// starts fresh.
    pub fn toggle_category(&mut self, category: ExpenseCategory) {
        if let Some(pos) = self.selected.iter().position(|c| *c == category) {
            self.selected.remove(pos);
            self.entries_mut(category).clear();
        } else {
            self.selected.push(category);
            let seed = LineItem::new(category, self.report_date);
            self.entries_mut(category).push(seed);
        }
    }

    /// Append a fresh default entry to a category's collection.
    ///
    /// Callers only expose this for selected categories.
    pub fn add_line_item(&mut self, category: ExpenseCategory) {
        let item = LineItem::new(category, self.report_date);
        self.entries_mut(category).push(item);
    }

    /// Replace one field of the entry matching `id`; no-op if no entry
    /// matches. Origin/destination updates on generic entries are ignored.
    pub fn update_line_item(&mut self, category: ExpenseCategory, id: Uuid, field: LineItemField) {
        let Some(item) = self.entries_mut(category).iter_mut().find(|i| i.id == id) else {
            return;
        };
        match field {
            LineItemField::Date(date) => item.date = date,
            LineItemField::Amount(amount) => item.amount = amount,
            LineItemField::Attachment(attachment) => item.attachment = attachment,
            LineItemField::Origin(value) => {
                if let LineItemDetail::Travel { origin, .. } = &mut item.detail {
                    *origin = value;
                }
            }
            LineItemField::Destination(value) => {
                if let LineItemDetail::Travel { destination, .. } = &mut item.detail {
                    *destination = value;
                }
            }
        }
    }

    /// Remove the entry matching `id`, unless it is the last one in the
    /// collection. A selected category always keeps at least one entry, so
    /// the removal is silently skipped in that case.
    pub fn remove_line_item(&mut self, category: ExpenseCategory, id: Uuid) {
        let entries = self.entries_mut(category);
        if entries.len() <= 1 {
            return;
        }
        entries.retain(|i| i.id != id);
    }

    /// Sum of amounts across one category's entries
    pub fn category_subtotal(&self, category: ExpenseCategory) -> f64 {
        self.entries(category)
            .iter()
            .map(|i| parse_amount(&i.amount))
            .sum()
    }

    /// Sum of subtotals over selected categories only. Unselected categories
    /// contribute nothing even if their collections hold leftover data.
    pub fn grand_total(&self) -> f64 {
        self.selected
            .iter()
            .map(|c| self.category_subtotal(*c))
            .sum()
    }
}
