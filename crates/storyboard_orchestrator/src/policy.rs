//! Handling of scene prompts that break the prompt contract.

use serde::{Deserialize, Serialize};

/// What to do when a generated scene prompt omits the style label.
///
/// # Examples
///
/// ```
/// use storyboard_orchestrator::PromptPolicy;
///
/// assert_eq!(PromptPolicy::default(), PromptPolicy::Repair);
/// assert_eq!("strict".parse::<PromptPolicy>().unwrap(), PromptPolicy::Strict);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PromptPolicy {
    /// Append the style restatement and log a warning
    #[default]
    Repair,
    /// Reject the whole response as malformed
    Strict,
}
