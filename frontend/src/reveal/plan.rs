use super::state::RevealState;

/// Ordered `(key, delay_ms)` activations for one section.
///
/// Plan order is the tie-break when two entries share a delay, and it is the
/// order the keys appear in the [`RevealState`] built from the plan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaggerPlan {
    steps: Vec<(&'static str, u32)>,
}

impl StaggerPlan {
    pub fn new(steps: &[(&'static str, u32)]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }

    /// `first_ms` for the first key, then `step_ms` more for each one after.
    pub fn uniform<I>(keys: I, first_ms: u32, step_ms: u32) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let steps = keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, first_ms.saturating_add(step_ms.saturating_mul(i as u32))))
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[(&'static str, u32)] {
        &self.steps
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|(key, _)| *key)
    }

    /// Longest delay in the plan, i.e. when the last flag turns on.
    pub fn duration_ms(&self) -> u32 {
        self.steps.iter().map(|(_, delay)| *delay).max().unwrap_or(0)
    }

    pub fn initial_state(&self) -> RevealState {
        RevealState::with_keys(self.keys())
    }
}
