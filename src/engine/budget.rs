//! Three-phase remediation budget.

use super::Recommendation;
use crate::model::{BudgetCatalog, BudgetItem, PHASE_COUNT};
use serde::{Deserialize, Serialize};

/// Priority label attached to a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhasePriority {
    Critical,
    Important,
    Recommended,
}

impl PhasePriority {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Important => "Important",
            Self::Recommended => "Recommended",
        }
    }
}

/// Fixed description of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDefinition {
    pub name: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub priority: PhasePriority,
    pub start_month: u8,
    pub end_month: u8,
}

pub const PHASES: [PhaseDefinition; PHASE_COUNT] = [
    PhaseDefinition {
        name: "Phase 1: Security foundation",
        period: "0-6 months",
        description: "Regulatory minimum and core protection",
        priority: PhasePriority::Critical,
        start_month: 0,
        end_month: 6,
    },
    PhaseDefinition {
        name: "Phase 2: Detection & response",
        period: "6-12 months",
        description: "Monitoring, detection and response capabilities",
        priority: PhasePriority::Important,
        start_month: 6,
        end_month: 12,
    },
    PhaseDefinition {
        name: "Phase 3: Optimization & improvement",
        period: "12-24 months",
        description: "Automation and continuous improvement",
        priority: PhasePriority::Recommended,
        start_month: 12,
        end_month: 24,
    },
];

/// Items triggered into one phase, with their running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPhase {
    pub index: usize,
    pub name: String,
    pub period: String,
    pub description: String,
    pub priority: PhasePriority,
    pub start_month: u8,
    pub end_month: u8,
    pub items: Vec<BudgetItem>,
    /// Sum of one-time costs
    pub total: u64,
    /// Sum of recurring costs
    pub recurrent_total: u64,
}

impl BudgetPhase {
    fn empty(index: usize) -> Self {
        let def = PHASES[index];
        Self {
            index,
            name: def.name.to_string(),
            period: def.period.to_string(),
            description: def.description.to_string(),
            priority: def.priority,
            start_month: def.start_month,
            end_month: def.end_month,
            items: Vec::new(),
            total: 0,
            recurrent_total: 0,
        }
    }

    /// Add `item` unless one with the same name is already listed.
    ///
    /// Totals only move on insertion. Returns whether the item was added.
    fn insert(&mut self, item: &BudgetItem) -> bool {
        if self.items.iter().any(|existing| existing.name == item.name) {
            return false;
        }
        self.total += item.cost;
        self.recurrent_total += item.recurrent_cost.unwrap_or(0);
        self.items.push(item.clone());
        true
    }

    #[must_use]
    pub const fn duration_months(&self) -> u8 {
        self.end_month.saturating_sub(self.start_month)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The full plan: always exactly three phases, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub phases: [BudgetPhase; PHASE_COUNT],
    /// Sum of the phases' one-time totals
    pub total: u64,
    /// Sum of the phases' recurring totals
    pub recurrent_total: u64,
}

impl BudgetPlan {
    /// Items carrying a marketplace reference, in phase order.
    pub fn procurement_lines(&self) -> impl Iterator<Item = &BudgetItem> {
        self.phases
            .iter()
            .flat_map(|phase| phase.items.iter())
            .filter(|item| item.market_ref.is_some())
    }

    #[must_use]
    pub fn procurement_total(&self) -> u64 {
        self.procurement_lines().map(|item| item.cost).sum()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.phases.iter().map(|p| p.items.len()).sum()
    }
}

/// Bucket the budget items triggered by `recommendations` into phases.
///
/// Recommendations are processed in order. A recommendation with no
/// budget item is skipped; an item whose name is already present in its
/// phase is not counted twice.
#[must_use]
pub fn generate_budget(recommendations: &[Recommendation], catalog: &BudgetCatalog) -> BudgetPlan {
    let mut phases: [BudgetPhase; PHASE_COUNT] = std::array::from_fn(BudgetPhase::empty);

    for rec in recommendations {
        let Some(item) = catalog.get(&rec.question_id) else {
            tracing::debug!("No budget item for {}", rec.question_id);
            continue;
        };
        match phases.get_mut(item.phase) {
            Some(phase) => {
                if !phase.insert(item) {
                    tracing::debug!("Skipping duplicate budget item '{}'", item.name);
                }
            }
            None => tracing::warn!(
                "Budget item '{}' has out-of-range phase {}",
                item.name,
                item.phase
            ),
        }
    }

    let total = phases.iter().map(|p| p.total).sum();
    let recurrent_total = phases.iter().map(|p| p.recurrent_total).sum();
    BudgetPlan {
        phases,
        total,
        recurrent_total,
    }
}
