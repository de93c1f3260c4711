//! Block 2: Membership.

use scw_core::FieldKind::{Boolean, List, Number, Text};

use crate::condition::{Condition, ValueTest};
use crate::constraint::Constraint;
use crate::rule::{FieldRule, RuleSet};

/// Rules for block 2.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "membership",
        vec![
            // 2.1 categories and eligibility
            FieldRule::required(
                "block2_membershipOpen",
                Text,
                "Please specify if membership is open to anyone who meets the purposes.",
            )
            .clears_unless(ValueTest::Equals("No"), &["block2_membershipCriteria"]),
            FieldRule::conditional(
                "block2_membershipCriteria",
                Text,
                Condition::equals("block2_membershipOpen", "No"),
                "Please describe the membership criteria.",
            ),
            FieldRule::tracked("block2_hasCategories", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block2_categories"]),
            FieldRule::tracked("block2_categories", Text),
            // 2.2 applying
            FieldRule::conditional(
                "block2_applicationSteps",
                List,
                Condition::filled("block2_applicationOther").negate(),
                "Please specify how someone applies for membership.",
            )
            .clears_unless(ValueTest::Includes("other"), &["block2_applicationOther"]),
            FieldRule::other_in(
                "block2_applicationOther",
                "block2_applicationSteps",
                "other",
                "Please describe the other application step.",
            ),
            FieldRule::required(
                "block2_consentMethod",
                Text,
                "Please specify how member consent is recorded.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block2_consentOther"]),
            FieldRule::other_for(
                "block2_consentOther",
                "block2_consentMethod",
                "Other",
                "Please specify the other consent method.",
            ),
            FieldRule::required(
                "block2_approvingBody",
                Text,
                "Please specify who approves membership.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block2_approvingBodyOther"]),
            FieldRule::other_for(
                "block2_approvingBodyOther",
                "block2_approvingBody",
                "Other",
                "Please specify the other approving body.",
            ),
            FieldRule::required(
                "block2_canRefuseMembership",
                Boolean,
                "Please specify if membership can be refused.",
            ),
            // 2.3 fees
            FieldRule::required(
                "block2_feeSettingMethod",
                Text,
                "Please specify how membership fees are set.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block2_feeSettingOther"]),
            FieldRule::other_for(
                "block2_feeSettingOther",
                "block2_feeSettingMethod",
                "Other",
                "Please specify the other fee setting method.",
            ),
            FieldRule::optional("block2_feeDueDate", Text)
                .clears_unless(ValueTest::Equals("Other"), &["block2_feeDueDateOther"]),
            FieldRule::other_for(
                "block2_feeDueDateOther",
                "block2_feeDueDate",
                "Other",
                "Please specify when fees are due.",
            ),
            FieldRule::required(
                "block2_nonPaymentConsequence",
                Text,
                "Please specify what happens if fees are not paid.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block2_nonPaymentConsequenceOther"],
            ),
            FieldRule::other_for(
                "block2_nonPaymentConsequenceOther",
                "block2_nonPaymentConsequence",
                "Other",
                "Please specify the other consequence of non-payment.",
            ),
            // 2.4 leaving
            FieldRule::required(
                "block2_resignationSteps",
                List,
                "Please specify how a member resigns.",
            )
            .clears_unless(
                ValueTest::Includes("notice_period"),
                &["block2_resignationNoticePeriod", "block2_resignationNoticeUnit"],
            ),
            FieldRule::conditional(
                "block2_resignationNoticePeriod",
                Number,
                Condition::includes("block2_resignationSteps", "notice_period"),
                "Please specify a valid notice period.",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid notice period.",
            }),
            FieldRule::tracked("block2_resignationNoticeUnit", Text),
            FieldRule::tracked("block2_resignationPayFees", Boolean),
            FieldRule::conditional(
                "block2_terminationGrounds",
                List,
                Condition::filled("block2_terminationOther").negate(),
                "Please specify grounds for termination.",
            )
            .clears_unless(ValueTest::Includes("other"), &["block2_terminationOther"]),
            FieldRule::other_in(
                "block2_terminationOther",
                "block2_terminationGrounds",
                "other",
                "Please specify the other grounds for termination.",
            ),
            // 2.5 register
            FieldRule::required(
                "block2_registerMaintainer",
                Text,
                "Please specify who maintains the register.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block2_registerMaintainerOther"],
            ),
            FieldRule::other_for(
                "block2_registerMaintainerOther",
                "block2_registerMaintainer",
                "Other",
                "Please specify the other maintainer.",
            ),
            FieldRule::conditional(
                "block2_registerUpdateMethods",
                List,
                Condition::filled("block2_registerUpdateOther").negate(),
                "Please specify how the register is kept up-to-date.",
            )
            .clears_unless(ValueTest::Includes("other"), &["block2_registerUpdateOther"]),
            FieldRule::other_in(
                "block2_registerUpdateOther",
                "block2_registerUpdateMethods",
                "other",
                "Please specify the other update method.",
            ),
        ],
    )
}
