//! Script Fixtures

use serde::Deserialize;

use crate::catalog::Action;

/// Wrapper for an action script in YAML
#[derive(Debug, Deserialize)]
pub struct ScriptFixture {
    /// Actions, applied in order
    pub actions: Vec<Action>,
}
