//! The locked script catalog.
//!
//! Six plays, one per [`ObjectionCategory`], stored in catalog order. The
//! table is `static`, so every lookup hands out the same borrowed play for
//! the life of the process.

use crate::models::{ObjectionCategory, ResponsePlay};

static PLAYS: [ResponsePlay; 6] = [
    ResponsePlay {
        category: ObjectionCategory::IncomeMoney,
        phone_script: "Totally fair. Income here is effort-based, but the model is simple: consistent jobs, quality work, upsells and repeat customers. Early success comes from consistency, not perfection.",
        sms_script: "Fair question. Income is effort-based but the model is proven — consistency early is key.",
        follow_up_question: "Is it weekly stability, earning ceiling, or the first few months that worries you most?",
        next_step: "Walk through a realistic first-30-day plan and book territory review.",
    },
    ResponsePlay {
        category: ObjectionCategory::NoExperience,
        phone_script: "Most franchisees start with no experience. Training covers everything and confidence builds quickly once you’re on the tools.",
        sms_script: "No experience needed — full training and support provided.",
        follow_up_question: "Which part worries you most — skills, quoting, or day-to-day running?",
        next_step: "Explain training schedule and first-week support.",
    },
    ResponsePlay {
        category: ObjectionCategory::NotASalesperson,
        phone_script: "You don’t need to be a salesperson. The Jim’s brand already has trust — your job is clear communication and quality service.",
        sms_script: "You don’t need sales skills — brand trust does the heavy lifting.",
        follow_up_question: "Is quoting price or closing the booking the uncomfortable part?",
        next_step: "Teach simple quote + close script.",
    },
    ResponsePlay {
        category: ObjectionCategory::NeedMoreTime,
        phone_script: "Totally understand — it’s a big decision. Let’s work out what information would help you feel confident either way.",
        sms_script: "Totally understand. What info would help you feel confident either way?",
        follow_up_question: "If you had to decide in the next 7 days, what would you need?",
        next_step: "Agree on decision timeline and next call.",
    },
    ResponsePlay {
        category: ObjectionCategory::RiskFear,
        phone_script: "That fear is normal. The difference here is you’re not alone — you’re buying a proven system with training and ongoing support.",
        sms_script: "Normal concern. Proven system + training reduces risk.",
        follow_up_question: "What would failure look like to you personally?",
        next_step: "Walk through first 90-day support structure.",
    },
    ResponsePlay {
        category: ObjectionCategory::Cost,
        phone_script: "Fair question. Is it the upfront cost, early cashflow, or return that concerns you most?",
        sms_script: "Is it upfront cost, early cashflow, or ROI that worries you?",
        follow_up_question: "Which part is the biggest stress for you?",
        next_step: "Break down cost vs realistic earning pathway.",
    },
];

/// All plays in catalog order.
pub fn plays() -> &'static [ResponsePlay] {
    &PLAYS
}

/// Get the locked play for a category.
pub fn lookup(category: ObjectionCategory) -> &'static ResponsePlay {
    // PLAYS is indexed in the same order as ObjectionCategory::ALL.
    let index = category as usize;
    &PLAYS[index]
}

/// Get the locked play for a display label taken from the category picker.
///
/// # Panics
///
/// Panics if `label` is not one of the six catalog labels. Callers only ever
/// pass labels they got from [`ObjectionCategory::label`].
pub fn lookup_label(label: &str) -> &'static ResponsePlay {
    let category = ObjectionCategory::ALL
        .into_iter()
        .find(|c| c.label() == label)
        .unwrap_or_else(|| panic!("'{}' is not a catalog label", label));
    lookup(category)
}
