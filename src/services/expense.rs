//! Expense service
//!
//! Provides business logic for expense management: validating input,
//! dispatching to the split calculator, and persisting through the group
//! store. Split keys are always checked against current group membership.

use crate::error::{DivvyError, DivvyResult};
use crate::models::{Category, Expense, ExpenseId, Group, GroupId, Money, SplitMethod};
use crate::services::split::{custom_split, equal_split, percentage_split};
use crate::storage::Storage;

/// Split input supplied by the caller
#[derive(Debug, Clone)]
pub enum SplitInput {
    /// Divide evenly among all current participants
    Equal,
    /// Explicit per-participant amounts, in input order
    Custom(Vec<(String, Money)>),
    /// Per-participant percentages of the total, in input order
    Percentage(Vec<(String, f64)>),
}

impl SplitInput {
    /// The split method this input produces
    pub fn method(&self) -> SplitMethod {
        match self {
            Self::Equal => SplitMethod::Equal,
            Self::Custom(_) => SplitMethod::Custom,
            Self::Percentage(_) => SplitMethod::Percentage,
        }
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub payer: String,
    pub split: SplitInput,
}

/// Field updates for editing an expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub payer: Option<String>,
    /// Resupplied split entries; required when changing the amount of a
    /// custom or percentage expense
    pub split: Option<SplitInput>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an expense to a group
    pub fn add(&self, group_id: GroupId, input: NewExpense) -> DivvyResult<Expense> {
        let mut group = self.require_group(group_id)?;

        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(DivvyError::Validation(
                "Expense description is required".into(),
            ));
        }
        if !input.amount.is_positive() {
            return Err(DivvyError::InvalidAmount {
                value: input.amount.to_string(),
            });
        }
        if !group.is_participant(&input.payer) {
            return Err(DivvyError::unknown_participant(&input.payer));
        }

        let split_details = compute_split(&group, input.amount, &input.split)?;

        // Expenses always carry the group's currency
        let expense = Expense::new(
            description,
            input.amount,
            input.category,
            input.payer,
            group.currency.clone(),
            input.split.method(),
            split_details,
        );
        expense
            .validate()
            .map_err(|e| DivvyError::Validation(e.to_string()))?;

        group.expenses.push(expense.clone());
        self.storage.groups.upsert(group)?;
        self.storage.groups.save()?;

        Ok(expense)
    }

    /// Edit an existing expense
    ///
    /// Equal splits are recomputed automatically when the amount changes;
    /// custom and percentage splits require resupplied entries.
    pub fn edit(
        &self,
        group_id: GroupId,
        expense_id: ExpenseId,
        update: ExpenseUpdate,
    ) -> DivvyResult<Expense> {
        let mut group = self.require_group(group_id)?;

        let current = group
            .find_expense(expense_id)
            .ok_or_else(|| DivvyError::expense_not_found(expense_id.to_string()))?
            .clone();

        let amount = update.amount.unwrap_or(current.amount);
        if !amount.is_positive() {
            return Err(DivvyError::InvalidAmount {
                value: amount.to_string(),
            });
        }

        let payer = update.payer.unwrap_or_else(|| current.payer.clone());
        if !group.is_participant(&payer) {
            return Err(DivvyError::unknown_participant(&payer));
        }

        let description = match update.description {
            Some(d) => {
                let d = d.trim().to_string();
                if d.is_empty() {
                    return Err(DivvyError::Validation(
                        "Expense description is required".into(),
                    ));
                }
                d
            }
            None => current.description.clone(),
        };

        let (split_method, split_details) = match update.split {
            Some(split) => (split.method(), compute_split(&group, amount, &split)?),
            None if amount != current.amount => match current.split_method {
                SplitMethod::Equal => (
                    SplitMethod::Equal,
                    compute_split(&group, amount, &SplitInput::Equal)?,
                ),
                method => {
                    return Err(DivvyError::Validation(format!(
                        "Changing the amount of a {} expense requires new split entries",
                        method
                    )))
                }
            },
            None => (current.split_method, current.split_details.clone()),
        };

        let expense = group
            .find_expense_mut(expense_id)
            .ok_or_else(|| DivvyError::expense_not_found(expense_id.to_string()))?;
        expense.description = description;
        expense.amount = amount;
        expense.category = update.category.unwrap_or(current.category);
        expense.payer = payer;
        expense.split_method = split_method;
        expense.split_details = split_details;

        let updated = expense.clone();
        updated
            .validate()
            .map_err(|e| DivvyError::Validation(e.to_string()))?;

        self.storage.groups.upsert(group)?;
        self.storage.groups.save()?;

        Ok(updated)
    }

    /// Delete an expense
    pub fn delete(&self, group_id: GroupId, expense_id: ExpenseId) -> DivvyResult<()> {
        let mut group = self.require_group(group_id)?;

        let before = group.expenses.len();
        group.expenses.retain(|e| e.id != expense_id);
        if group.expenses.len() == before {
            return Err(DivvyError::expense_not_found(expense_id.to_string()));
        }

        self.storage.groups.upsert(group)?;
        self.storage.groups.save()?;
        Ok(())
    }

    /// List a group's expenses in entry order
    pub fn list(&self, group_id: GroupId) -> DivvyResult<Vec<Expense>> {
        Ok(self.require_group(group_id)?.expenses)
    }

    fn require_group(&self, group_id: GroupId) -> DivvyResult<Group> {
        self.storage
            .groups
            .get(group_id)?
            .ok_or_else(|| DivvyError::group_not_found(group_id.to_string()))
    }
}

/// Dispatch to the split calculator and check membership of every split key
fn compute_split(
    group: &Group,
    amount: Money,
    input: &SplitInput,
) -> DivvyResult<std::collections::BTreeMap<String, Money>> {
    let split = match input {
        SplitInput::Equal => equal_split(&group.participant_names(), amount)?,
        SplitInput::Custom(entries) => custom_split(entries, amount)?,
        SplitInput::Percentage(entries) => percentage_split(entries, amount)?,
    };

    for name in split.keys() {
        if !group.is_participant(name) {
            return Err(DivvyError::unknown_participant(name));
        }
    }

    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::group::GroupService;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, GroupId) {
        let temp_dir = TempDir::new().unwrap();
        let paths = crate::config::paths::DivvyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let group_id = {
            let groups = GroupService::new(&storage);
            let group = groups.create("Trip", "USD").unwrap();
            for name in ["Alice", "Bob", "Carol"] {
                groups.add_participant(group.id, name, None).unwrap();
            }
            group.id
        };

        (temp_dir, storage, group_id)
    }

    #[test]
    fn test_add_equal_expense() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(
                group_id,
                NewExpense {
                    description: "Dinner".into(),
                    amount: Money::from_cents(1000),
                    category: Category::Food,
                    payer: "Alice".into(),
                    split: SplitInput::Equal,
                },
            )
            .unwrap();

        assert_eq!(expense.split_details["Alice"], Money::from_cents(334));
        assert_eq!(expense.split_details["Bob"], Money::from_cents(333));
        assert_eq!(expense.split_details["Carol"], Money::from_cents(333));
        assert_eq!(expense.currency, "USD");
    }

    #[test]
    fn test_add_rejects_unknown_payer() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let err = service
            .add(
                group_id,
                NewExpense {
                    description: "Dinner".into(),
                    amount: Money::from_cents(1000),
                    category: Category::Food,
                    payer: "Mallory".into(),
                    split: SplitInput::Equal,
                },
            )
            .unwrap_err();
        assert!(matches!(err, DivvyError::UnknownParticipant { .. }));
    }

    #[test]
    fn test_add_rejects_split_for_non_member() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let err = service
            .add(
                group_id,
                NewExpense {
                    description: "Dinner".into(),
                    amount: Money::from_cents(1000),
                    category: Category::Food,
                    payer: "Alice".into(),
                    split: SplitInput::Custom(vec![(
                        "Mallory".into(),
                        Money::from_cents(1000),
                    )]),
                },
            )
            .unwrap_err();
        assert!(matches!(err, DivvyError::UnknownParticipant { .. }));
    }

    #[test]
    fn test_add_custom_mismatch_rejected() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let err = service
            .add(
                group_id,
                NewExpense {
                    description: "Dinner".into(),
                    amount: Money::from_cents(2000),
                    category: Category::Food,
                    payer: "Alice".into(),
                    split: SplitInput::Custom(vec![
                        ("Alice".into(), Money::from_cents(1000)),
                        ("Bob".into(), Money::from_cents(500)),
                    ]),
                },
            )
            .unwrap_err();
        assert!(matches!(err, DivvyError::SplitMismatch { .. }));
    }

    #[test]
    fn test_edit_amount_recomputes_equal_split() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(
                group_id,
                NewExpense {
                    description: "Dinner".into(),
                    amount: Money::from_cents(1000),
                    category: Category::Food,
                    payer: "Alice".into(),
                    split: SplitInput::Equal,
                },
            )
            .unwrap();

        let updated = service
            .edit(
                group_id,
                expense.id,
                ExpenseUpdate {
                    amount: Some(Money::from_cents(3000)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount, Money::from_cents(3000));
        assert_eq!(updated.split_total(), Money::from_cents(3000));
        assert_eq!(updated.split_details["Alice"], Money::from_cents(1000));
    }

    #[test]
    fn test_edit_custom_amount_requires_new_entries() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(
                group_id,
                NewExpense {
                    description: "Hotel".into(),
                    amount: Money::from_cents(2000),
                    category: Category::Accommodation,
                    payer: "Bob".into(),
                    split: SplitInput::Custom(vec![
                        ("Alice".into(), Money::from_cents(1500)),
                        ("Bob".into(), Money::from_cents(500)),
                    ]),
                },
            )
            .unwrap();

        let err = service
            .edit(
                group_id,
                expense.id,
                ExpenseUpdate {
                    amount: Some(Money::from_cents(2500)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DivvyError::Validation(_)));
    }

    #[test]
    fn test_delete_expense() {
        let (_tmp, storage, group_id) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(
                group_id,
                NewExpense {
                    description: "Snacks".into(),
                    amount: Money::from_cents(500),
                    category: Category::Food,
                    payer: "Carol".into(),
                    split: SplitInput::Equal,
                },
            )
            .unwrap();

        service.delete(group_id, expense.id).unwrap();
        assert!(service.list(group_id).unwrap().is_empty());

        let err = service.delete(group_id, expense.id).unwrap_err();
        assert!(err.is_not_found());
    }
}
