//! Block 6: Amendments & Bylaws.
//!
//! The common seal question is stored under `block5_commonSeal` and gates
//! the `block6_` custody and use fields.

use scw_core::FieldKind::{Boolean, Text};

use crate::condition::{Condition, ValueTest};
use crate::rule::{FieldRule, RuleSet};

/// Rules for block 6.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "amendments",
        vec![
            FieldRule::required(
                "block6_amendmentProcedure",
                Text,
                "Please specify the procedure for amending the constitution.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block6_amendmentProcedureOther"],
            ),
            FieldRule::other_for(
                "block6_amendmentProcedureOther",
                "block6_amendmentProcedure",
                "Other",
                "Please specify the other amendment procedure.",
            ),
            FieldRule::required(
                "block5_commonSeal",
                Boolean,
                "Please specify if the Society will have a common seal.",
            )
            .clears_unless(
                ValueTest::IsTrue,
                &["block6_commonSealCustody", "block6_commonSealUse"],
            ),
            FieldRule::conditional(
                "block6_commonSealCustody",
                Text,
                Condition::is_true("block5_commonSeal"),
                "Please specify who will have custody of the common seal.",
            ),
            FieldRule::conditional(
                "block6_commonSealUse",
                Text,
                Condition::is_true("block5_commonSeal"),
                "Please specify how the common seal will be used/affixed.",
            ),
            FieldRule::tracked("block6_appealRights", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block6_appealProcess"]),
            FieldRule::conditional(
                "block6_appealProcess",
                Text,
                Condition::is_true("block6_appealRights"),
                "Please describe the appeal process or specify the appeal body.",
            ),
            FieldRule::tracked("block6_committeeCanMakeBylaws", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block6_bylawProcedure"]),
            FieldRule::conditional(
                "block6_bylawProcedure",
                Text,
                Condition::is_true("block6_committeeCanMakeBylaws"),
                "Please specify how bylaws are made or changed.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block6_bylawProcedureOther"]),
            FieldRule::other_for(
                "block6_bylawProcedureOther",
                "block6_bylawProcedure",
                "Other",
                "Please specify the other bylaw procedure.",
            ),
        ],
    )
}
