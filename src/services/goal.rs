//! Investment goal service

use serde::Serialize;

use crate::config::ExpectedReturns;
use crate::error::FinbuddyResult;
use crate::finance::{goal_progress, required_sip, GoalProgress};
use crate::models::{GoalId, InvestmentGoal, Money};
use crate::storage::Store;

/// A goal with its monthly SIP and progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalPlan {
    pub goal: InvestmentGoal,
    pub monthly_sip: Money,
    pub expected_return: f64,
    pub progress: GoalProgress,
}

impl GoalPlan {
    pub fn for_goal(goal: InvestmentGoal, returns: &ExpectedReturns) -> Self {
        Self {
            monthly_sip: required_sip(&goal, returns),
            expected_return: returns.annual_percent(goal.risk),
            progress: goal_progress(&goal),
            goal,
        }
    }
}

/// Service for investment goals
pub struct GoalService<'a> {
    store: &'a Store,
}

impl<'a> GoalService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Add a goal; an invalid one is dropped and `None` returned
    pub fn add(&self, goal: InvestmentGoal) -> FinbuddyResult<Option<InvestmentGoal>> {
        if let Err(e) = goal.validate() {
            tracing::debug!(error = %e, "Ignoring invalid goal");
            return Ok(None);
        }

        self.store.goals.insert(goal.clone())?;
        tracing::info!(id = %goal.id, name = %goal.name, "Goal added");
        Ok(Some(goal))
    }

    pub fn remove(&self, id: GoalId) -> FinbuddyResult<Option<InvestmentGoal>> {
        self.store.goals.remove(id)
    }

    pub fn get(&self, id: GoalId) -> FinbuddyResult<Option<InvestmentGoal>> {
        self.store.goals.get(id)
    }

    pub fn find(&self, reference: &str) -> FinbuddyResult<Option<InvestmentGoal>> {
        self.store.goals.find(reference)
    }

    pub fn list(&self) -> FinbuddyResult<Vec<InvestmentGoal>> {
        self.store.goals.list()
    }

    /// Every goal with its plan, in the order the goals were added
    pub fn plans(&self, returns: &ExpectedReturns) -> FinbuddyResult<Vec<GoalPlan>> {
        Ok(self
            .store
            .goals
            .list()?
            .into_iter()
            .map(|goal| GoalPlan::for_goal(goal, returns))
            .collect())
    }

    /// Sum of the monthly SIPs across all goals
    pub fn total_monthly_sip(&self, returns: &ExpectedReturns) -> FinbuddyResult<Money> {
        Ok(self
            .store
            .goals
            .list()?
            .iter()
            .map(|goal| required_sip(goal, returns))
            .sum())
    }
}
