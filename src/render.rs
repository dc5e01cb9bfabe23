//! Plain-text rendering for the terminal.

use coach_core::{ObjectionCategory, ResponsePlay, ViewFormat};

use crate::coach::CoachError;

pub const TITLE: &str = "🚗 Jim’s Franchise Objection Coach";
pub const CAPTION: &str = "Instant answers for franchise sales objections";

const PHONE: &str = "📞 Phone Response";
const SMS: &str = "💬 SMS Version";
const FOLLOW_UP: &str = "❓ Follow-Up Question";
const NEXT_STEP: &str = "➡️ Next Step";

fn push_section(output: &mut String, heading: &str, body: &str) {
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(heading);
    output.push('\n');
    output.push_str(body);
    output.push('\n');
}

/// Render a locked play.
///
/// Example output for [`ViewFormat::SmsOnly`]:
/// ```text
/// 💬 SMS Version
/// Is it upfront cost, early cashflow, or ROI that worries you?
/// ```
pub fn render_play(play: &ResponsePlay, view: ViewFormat) -> String {
    let mut output = String::new();
    match view {
        ViewFormat::Full => {
            push_section(&mut output, PHONE, play.phone_script);
            push_section(&mut output, SMS, play.sms_script);
            push_section(&mut output, FOLLOW_UP, play.follow_up_question);
            push_section(&mut output, NEXT_STEP, play.next_step);
        }
        ViewFormat::SmsOnly => push_section(&mut output, SMS, play.sms_script),
        ViewFormat::PhoneOnly => push_section(&mut output, PHONE, play.phone_script),
    }
    output
}

/// Render model output. The text is shown as-is; the view only picks the
/// heading.
pub fn render_generated(text: &str, view: ViewFormat) -> String {
    let heading = match view {
        ViewFormat::Full => "🤖 AI Response",
        ViewFormat::SmsOnly => "🤖 AI Response (SMS)",
        ViewFormat::PhoneOnly => "🤖 AI Response (Phone talk track)",
    };
    let mut output = String::new();
    push_section(&mut output, heading, text);
    output
}

/// Inline notice for an action that produced no response.
pub fn render_notice(error: &CoachError) -> String {
    match error {
        CoachError::FeatureDisabled => {
            "AI fallback is turned off. Enable it to generate a custom response.".to_string()
        }
        CoachError::EmptyInput => "Type an objection first.".to_string(),
        CoachError::MissingCredential => {
            "No API key configured. Set OPENAI_API_KEY or add `api_key` to the config file."
                .to_string()
        }
        CoachError::ExternalService { hint, .. } => match hint {
            Some(hint) => format!("{}\n{}", error, hint),
            None => error.to_string(),
        },
    }
}

/// Title, caption and the category picker.
pub fn render_menu() -> String {
    let mut output = format!("{}\n{}\n\n", TITLE, CAPTION);
    output.push_str(&render_categories());
    output
}

/// One line per category: slug padded, then label.
pub fn render_categories() -> String {
    let width = ObjectionCategory::ALL
        .iter()
        .map(|c| c.slug().len())
        .max()
        .unwrap_or(0);
    ObjectionCategory::ALL
        .iter()
        .map(|c| format!("{:<width$}  {}\n", c.slug(), c.label(), width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::lookup;

    #[test]
    fn full_view_shows_all_sections_in_order() {
        let output = render_play(lookup(ObjectionCategory::Cost), ViewFormat::Full);
        let positions: Vec<usize> = [PHONE, SMS, FOLLOW_UP, NEXT_STEP]
            .iter()
            .map(|h| output.find(h).expect("heading missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.contains("Break down cost vs realistic earning pathway."));
    }

    #[test]
    fn sms_view_shows_only_sms() {
        let output = render_play(lookup(ObjectionCategory::Cost), ViewFormat::SmsOnly);
        assert_eq!(
            output,
            "💬 SMS Version\nIs it upfront cost, early cashflow, or ROI that worries you?\n"
        );
    }

    #[test]
    fn phone_view_shows_only_phone() {
        let output = render_play(lookup(ObjectionCategory::RiskFear), ViewFormat::PhoneOnly);
        assert!(output.starts_with(PHONE));
        assert!(!output.contains(SMS));
    }

    #[test]
    fn generated_text_is_unchanged_by_view() {
        let text = "1. Phone talk track\nSay this.";
        for view in [ViewFormat::Full, ViewFormat::SmsOnly, ViewFormat::PhoneOnly] {
            assert!(render_generated(text, view).ends_with("Say this.\n"));
        }
    }

    #[test]
    fn auth_failure_notice_includes_hint() {
        let error = CoachError::ExternalService {
            detail: "Unauthorized: API key missing or invalid: bad key".to_string(),
            hint: Some(crate::coach::INVALID_KEY_HINT),
        };
        let notice = render_notice(&error);
        assert!(notice.starts_with("AI request failed: Unauthorized"));
        assert!(notice.ends_with("not a problem with this app."));
    }

    #[test]
    fn categories_are_listed_in_catalog_order() {
        let listing = render_categories();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("income-money"));
        assert!(lines[5].starts_with("cost"));
        assert!(lines[5].ends_with("Cost"));
    }
}
