//! Block 1: Foundation & Identity.

use scw_core::FieldKind::{Boolean, Text};

use crate::condition::{Condition, ValueTest};
use crate::rule::{FieldRule, RuleSet};

/// Rules for block 1.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "foundation",
        vec![
            FieldRule::tracked("block1_includeDefinitions", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block1_definitions"]),
            FieldRule::tracked("block1_definitions", Text),
            FieldRule::required("block1_societyName", Text, "Society name is required."),
            FieldRule::required(
                "block1_societyPurposes",
                Text,
                "Society purposes are required.",
            ),
            FieldRule::required(
                "block1_charitableStatus",
                Text,
                "Please indicate charitable status.",
            )
            .clears_unless(
                ValueTest::Equals("Yes"),
                &["block1_charitablePurposeDetails"],
            ),
            FieldRule::conditional(
                "block1_charitablePurposeDetails",
                Text,
                Condition::equals("block1_charitableStatus", "Yes"),
                "Details are required if the society has charitable purposes.",
            ),
            FieldRule::required(
                "block1_specifyOfficeMethod",
                Boolean,
                "Please specify how the registered office is determined.",
            )
            .clears_unless(ValueTest::IsTrue, &["block1_officeMethodText"]),
            FieldRule::conditional(
                "block1_officeMethodText",
                Text,
                Condition::is_true("block1_specifyOfficeMethod"),
                "Please describe the method for determining the office address.",
            ),
            FieldRule::conditional(
                "block1_meetingLocation",
                Text,
                Condition::is_true("block1_specifyOfficeMethod").negate(),
                "Meeting location determination is required.",
            ),
        ],
    )
}
