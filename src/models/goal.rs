//! Investment goal model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GoalId;
use super::money::Money;

/// How much volatility the investor accepts for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskProfile {
    pub fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("Unknown risk profile '{}' (expected low, medium or high)", other)),
        }
    }
}

/// A savings target reached through monthly contributions
///
/// `current` may already exceed `target`; calculators treat the remainder
/// as zero in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentGoal {
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    #[serde(default)]
    pub current: Money,
    pub timeframe_months: u32,
    #[serde(default)]
    pub risk: RiskProfile,
}

impl InvestmentGoal {
    pub fn new(
        name: impl Into<String>,
        target: Money,
        current: Money,
        timeframe_months: u32,
        risk: RiskProfile,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            current,
            timeframe_months,
            risk,
        }
    }

    pub fn with_id(mut self, id: GoalId) -> Self {
        self.id = id;
        self
    }

    /// Amount still to be saved; zero or negative once the goal is met
    pub fn remaining(&self) -> Money {
        self.target - self.current
    }

    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }
        if self.current.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current));
        }
        if self.timeframe_months == 0 {
            return Err(GoalValidationError::ZeroTimeframe);
        }
        Ok(())
    }
}

/// Validation errors for investment goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
    ZeroTimeframe,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target must be greater than zero (got {})", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Current amount cannot be negative (got {})", amount)
            }
            Self::ZeroTimeframe => write!(f, "Timeframe must be at least one month"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
