use engine::{Currency, Expense, ExpenseDraft, Money, Trip, TripDraft};

/// Which record type the entry form is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Trip,
    Expense,
}

/// Original record behind an edit; keeps the id and creation instant so a
/// save replaces in place without touching the timestamp.
#[derive(Debug, Clone)]
pub enum EditTarget {
    Trip(Trip),
    Expense(Expense),
}

/// State of the add/edit overlay.
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub kind: FormKind,
    pub editing: Option<EditTarget>,
    pub name: String,
    pub phone: String,
    pub description: String,
    pub amount: String,
    pub focus: usize,
    pub message: Option<String>,
}

/// Parsed result of a submitted form.
#[derive(Debug, Clone)]
pub enum FormOutput {
    NewTrip(TripDraft),
    NewExpense(ExpenseDraft),
    EditedTrip(Trip),
    EditedExpense(Expense),
}

impl EntryForm {
    pub fn add(kind: FormKind) -> Self {
        Self {
            kind,
            editing: None,
            name: String::new(),
            phone: String::new(),
            description: String::new(),
            amount: String::new(),
            focus: 0,
            message: None,
        }
    }

    pub fn edit_trip(trip: Trip) -> Self {
        Self {
            kind: FormKind::Trip,
            name: trip.customer_name.clone(),
            phone: trip.customer_phone.clone(),
            description: String::new(),
            amount: format_major(trip.earnings_minor),
            editing: Some(EditTarget::Trip(trip)),
            focus: 0,
            message: None,
        }
    }

    pub fn edit_expense(expense: Expense) -> Self {
        Self {
            kind: FormKind::Expense,
            name: String::new(),
            phone: String::new(),
            description: expense.description.clone(),
            amount: format_major(expense.amount_minor),
            editing: Some(EditTarget::Expense(expense)),
            focus: 0,
            message: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match (self.kind, self.editing.is_some()) {
            (FormKind::Trip, false) => "Add Trip",
            (FormKind::Trip, true) => "Edit Trip",
            (FormKind::Expense, false) => "Add Expense",
            (FormKind::Expense, true) => "Edit Expense",
        }
    }

    /// Field labels and values in focus order, for rendering.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self.kind {
            FormKind::Trip => vec![
                ("Customer", self.name.as_str()),
                ("Phone", self.phone.as_str()),
                ("Earnings", self.amount.as_str()),
            ],
            FormKind::Expense => vec![
                ("Description", self.description.as_str()),
                ("Amount", self.amount.as_str()),
            ],
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match (self.kind, self.focus) {
            (FormKind::Trip, 0) => &mut self.name,
            (FormKind::Trip, 1) => &mut self.phone,
            (FormKind::Trip, _) => &mut self.amount,
            (FormKind::Expense, 0) => &mut self.description,
            (FormKind::Expense, _) => &mut self.amount,
        }
    }

    /// Validates the fields and builds the record to store.
    pub fn submit(&self, currency: Currency) -> Result<FormOutput, String> {
        let amount = Money::parse_major(&self.amount, currency)
            .map_err(|_| "Enter a valid amount.".to_string())?;
        if amount.is_negative() {
            return Err("Amount must not be negative.".to_string());
        }
        let amount_minor = amount.minor();

        match self.kind {
            FormKind::Trip => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err("Customer name is required.".to_string());
                }
                let phone = self.phone.trim();

                match &self.editing {
                    Some(EditTarget::Trip(original)) => Ok(FormOutput::EditedTrip(Trip {
                        id: original.id,
                        customer_name: name.to_string(),
                        customer_phone: phone.to_string(),
                        earnings_minor: amount_minor,
                        occurred_at: original.occurred_at,
                    })),
                    _ => TripDraft::new(name, phone, amount_minor)
                        .map(FormOutput::NewTrip)
                        .map_err(|err| err.to_string()),
                }
            }
            FormKind::Expense => {
                let description = self.description.trim();
                if description.is_empty() {
                    return Err("Description is required.".to_string());
                }

                match &self.editing {
                    Some(EditTarget::Expense(original)) => {
                        Ok(FormOutput::EditedExpense(Expense {
                            id: original.id,
                            description: description.to_string(),
                            amount_minor,
                            occurred_at: original.occurred_at,
                        }))
                    }
                    _ => ExpenseDraft::new(description, amount_minor)
                        .map(FormOutput::NewExpense)
                        .map_err(|err| err.to_string()),
                }
            }
        }
    }
}

fn format_major(minor: i64) -> String {
    format!("{}.{:02}", minor / 100, (minor % 100).abs())
}
