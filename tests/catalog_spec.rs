use objection_coach::catalog;
use objection_coach::models::*;
use speculate2::speculate;

speculate! {
    describe "plays" {
        it "has one play per category in catalog order" {
            let categories: Vec<ObjectionCategory> =
                catalog::plays().iter().map(|p| p.category).collect();
            assert_eq!(categories, ObjectionCategory::ALL.to_vec());
        }

        it "fills all four fields for every category" {
            for category in ObjectionCategory::ALL {
                let play = catalog::lookup(category);
                for field in play.fields() {
                    assert!(!field.trim().is_empty(), "{} has an empty field", category);
                }
            }
        }
    }

    describe "lookup" {
        it "returns identical plays on repeated calls" {
            for category in ObjectionCategory::ALL {
                let first = *catalog::lookup(category);
                let second = *catalog::lookup(category);
                assert_eq!(first, second);
                assert!(std::ptr::eq(catalog::lookup(category), catalog::lookup(category)));
            }
        }

        it "answers the cost objection" {
            let play = catalog::lookup(ObjectionCategory::Cost);

            assert!(play.phone_script.starts_with(
                "Fair question. Is it the upfront cost, early cashflow, or return that concerns you most?"
            ));
            assert!(play.sms_script.starts_with("Is it upfront cost, early cashflow, or ROI"));
            assert_eq!(play.follow_up_question, "Which part is the biggest stress for you?");
            assert!(play.next_step.contains("cost vs realistic earning pathway"));
        }

        it "keeps income framed as effort-based" {
            let play = catalog::lookup(ObjectionCategory::IncomeMoney);
            assert!(play.phone_script.contains("effort-based"));
            assert!(play.sms_script.contains("effort-based"));
        }
    }

    describe "lookup_label" {
        it "matches lookup by category for every label" {
            for category in ObjectionCategory::ALL {
                assert_eq!(catalog::lookup_label(category.label()), catalog::lookup(category));
            }
        }
    }

    describe "json" {
        it "serializes a play with its label and script fields" {
            let json = serde_json::to_value(catalog::lookup(ObjectionCategory::RiskFear))
                .expect("serialize");

            assert_eq!(json["category"], "Risk / Fear");
            assert_eq!(json["follow_up_question"], "What would failure look like to you personally?");
            assert_eq!(json["next_step"], "Walk through first 90-day support structure.");
        }
    }
}
