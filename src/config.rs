/// Tunables for a single `match_all`/`match_dfs` invocation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    fair: bool,
    step_budget: Option<usize>,
}

impl SearchConfig {
    // note this is intentionally two constructors, not a `Default` impl:
    // fairness is a deliberate per-call choice, not a sensible default.
    pub fn fair() -> Self {
        SearchConfig {
            fair: true,
            step_budget: None,
        }
    }

    pub fn depth_first() -> Self {
        SearchConfig {
            fair: false,
            step_budget: None,
        }
    }

    /// Caps the number of frontier-expansion steps before ending the result
    /// stream early. `None` means unbounded.
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }

    pub(crate) fn is_fair(&self) -> bool {
        self.fair
    }

    pub(crate) fn step_budget(&self) -> Option<usize> {
        self.step_budget
    }
}
