use serde::Serialize;

use super::ObjectionCategory;

/// A locked script: the pre-authored answer to one objection category.
///
/// Plays live in a static table and are handed out by reference, so there is
/// no way to edit one after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponsePlay {
    pub category: ObjectionCategory,
    /// Spoken talk track for a phone call.
    pub phone_script: &'static str,
    /// Short text-message version.
    pub sms_script: &'static str,
    /// Question to keep the prospect talking.
    pub follow_up_question: &'static str,
    /// What the salesperson should do next.
    pub next_step: &'static str,
}

impl ResponsePlay {
    /// The four script fields in display order.
    pub fn fields(&self) -> [&'static str; 4] {
        [
            self.phone_script,
            self.sms_script,
            self.follow_up_question,
            self.next_step,
        ]
    }
}
