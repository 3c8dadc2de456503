//! Hardware refresh advisory.

use crate::catalog::{SERVER_AGE_QUESTION, STORAGE_SUPPORT_QUESTION};
use crate::model::{Answers, QuestionCatalog};
use serde::{Deserialize, Serialize};

/// Answers at or below this index mark the hardware as due for refresh.
const REFRESH_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshItem {
    /// Servers past their firmware support window
    Compute,
    /// Storage arrays out of vendor support
    Storage,
}

impl RefreshItem {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Compute => "Compute refresh",
            Self::Storage => "Storage modernisation",
        }
    }

    #[must_use]
    pub const fn rationale(&self) -> &'static str {
        match self {
            Self::Compute => "Servers no longer receive BIOS and firmware security fixes; move to hardware with a silicon root of trust.",
            Self::Storage => "Unsupported arrays no longer receive security updates; move to encrypted all-flash storage.",
        }
    }
}

/// Obsolete infrastructure that software controls cannot compensate for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareRefreshAdvisory {
    pub items: Vec<RefreshItem>,
}

impl HardwareRefreshAdvisory {
    /// Build the advisory, or `None` when the estate is current.
    ///
    /// Like recommendations, a missing answer counts as the worst option.
    /// Catalogs without the hardware questions never raise one.
    #[must_use]
    pub fn evaluate(answers: &Answers, catalog: &QuestionCatalog) -> Option<Self> {
        let due = |id: &str| catalog.contains(id) && answers.get(id).unwrap_or(0) <= REFRESH_INDEX;

        let mut items = Vec::new();
        if due(SERVER_AGE_QUESTION) {
            items.push(RefreshItem::Compute);
        }
        if due(STORAGE_SUPPORT_QUESTION) {
            items.push(RefreshItem::Storage);
        }

        (!items.is_empty()).then_some(Self { items })
    }
}
