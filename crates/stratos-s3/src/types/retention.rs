//! Object-lock retention mode.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Compliance-level object-lock setting.
///
/// `GOVERNANCE` permits privileged override; `COMPLIANCE` does not. Parse
/// is strict: an unrecognized literal is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RetentionMode {
    /// Retention may be overridden by users with special permission.
    Governance,
    /// Retention cannot be overridden by any user.
    Compliance,
}
