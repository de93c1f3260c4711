//! Block 4: General Meetings.

use scw_core::FieldKind::{Boolean, List, Number, Text};

use crate::condition::{Condition, ValueTest};
use crate::constraint::Constraint;
use crate::rule::{FieldRule, RuleSet};

const AGM_WITHIN_MONTHS: &str = "Within X months of financial year end";
const AGM_SPECIFIC_MONTH: &str = "In a specific month each year";
const OTHER: &str = "Other (specify)";
const GROUP_OF_MEMBERS: &str = "A group of members";

/// Minimum notice, in working days, before a notice period is flagged.
pub const MIN_NOTICE_DAYS: f64 = 5.0;

/// Rules for block 4.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "meetings",
        vec![
            // 4.1 AGM timing
            FieldRule::required("block4_agmTiming", Text, "AGM timing method is required.")
                .clears_unless(ValueTest::Equals(AGM_WITHIN_MONTHS), &["block4_agmTimingMonths"])
                .clears_unless(
                    ValueTest::Equals(AGM_SPECIFIC_MONTH),
                    &["block4_agmTimingSpecificMonth"],
                )
                .clears_unless(ValueTest::Equals(OTHER), &["block4_agmTimingOther"]),
            FieldRule::conditional(
                "block4_agmTimingMonths",
                Number,
                Condition::equals("block4_agmTiming", AGM_WITHIN_MONTHS),
                "Please specify a valid number of months (e.g., 1-12).",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid number of months (e.g., 1-12).",
            })
            .with(Constraint::Max {
                max: 12.0,
                message: "Please specify a valid number of months (e.g., 1-12).",
            }),
            FieldRule::conditional(
                "block4_agmTimingSpecificMonth",
                Text,
                Condition::equals("block4_agmTiming", AGM_SPECIFIC_MONTH),
                "Please select the specific month.",
            ),
            FieldRule::other_for(
                "block4_agmTimingOther",
                "block4_agmTiming",
                OTHER,
                "Please specify the other AGM timing.",
            ),
            FieldRule::tracked("block4_agmStandardBusiness", Text),
            // 4.2 SGM requisition
            FieldRule::required(
                "block4_sgmRequisitionAuthority",
                List,
                "Please select who can require an SGM.",
            )
            .clears_unless(
                ValueTest::Includes(GROUP_OF_MEMBERS),
                &[
                    "block4_sgmRequisitionNumberType",
                    "block4_sgmRequisitionNumberValue",
                ],
            ),
            FieldRule::conditional(
                "block4_sgmRequisitionNumberType",
                Text,
                Condition::includes("block4_sgmRequisitionAuthority", GROUP_OF_MEMBERS),
                "Please specify the threshold type (percentage or fixed number).",
            ),
            FieldRule::conditional(
                "block4_sgmRequisitionNumberValue",
                Number,
                Condition::includes("block4_sgmRequisitionAuthority", GROUP_OF_MEMBERS),
                "Please specify a valid threshold number/percentage.",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid threshold number/percentage.",
            })
            .with(Constraint::MaxWhen {
                when: Condition::equals("block4_sgmRequisitionNumberType", "percentage"),
                max: 100.0,
                message: "Percentage cannot exceed 100.",
            }),
            // 4.3 notice
            FieldRule::required(
                "block4_agmNoticePeriod",
                Number,
                "Please specify a valid AGM notice period (working days).",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid AGM notice period (working days).",
            })
            .with(Constraint::Min {
                min: MIN_NOTICE_DAYS,
                message: "Notice period seems short, ensure it meets minimum requirements (e.g., 5-10 working days).",
            }),
            FieldRule::required(
                "block4_sgmNoticePeriod",
                Number,
                "Please specify a valid SGM notice period (working days).",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid SGM notice period (working days).",
            })
            .with(Constraint::Min {
                min: MIN_NOTICE_DAYS,
                message: "Notice period seems short, ensure it meets minimum requirements.",
            }),
            FieldRule::required(
                "block4_noticeMethods",
                List,
                "Please select at least one method for sending notices.",
            )
            .clears_unless(ValueTest::Includes(OTHER), &["block4_noticeMethodsOther"]),
            FieldRule::other_in(
                "block4_noticeMethodsOther",
                "block4_noticeMethods",
                OTHER,
                "Please specify the other notice method.",
            ),
            // 4.4 quorum
            FieldRule::required(
                "block4_meetingQuorumType",
                Text,
                "Please specify the quorum basis (percentage or fixed number).",
            ),
            FieldRule::required(
                "block4_meetingQuorumValue",
                Number,
                "Please specify a valid quorum number/percentage.",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid quorum number/percentage.",
            })
            .with(Constraint::MaxWhen {
                when: Condition::equals("block4_meetingQuorumType", "percentage"),
                max: 100.0,
                message: "Quorum percentage cannot exceed 100.",
            }),
            FieldRule::required(
                "block4_quorumAdjournmentProcedure",
                Text,
                "Procedure for lack of quorum is required.",
            ),
            // 4.5 procedure
            FieldRule::required(
                "block4_chairperson",
                Text,
                "Please specify who chairs general meetings.",
            )
            .clears_unless(ValueTest::Equals(OTHER), &["block4_chairpersonOther"]),
            FieldRule::other_for(
                "block4_chairpersonOther",
                "block4_chairperson",
                OTHER,
                "Please specify the other chair arrangement.",
            ),
            FieldRule::required(
                "block4_chairCastingVoteGm",
                Boolean,
                "Please specify if the Chair has a casting vote.",
            ),
            // 4.6 voting
            FieldRule::required(
                "block4_votingMethods",
                List,
                "Please select at least one voting method.",
            ),
            FieldRule::tracked("block4_postalVotingAllowed", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block4_postalVotingProcedure"]),
            FieldRule::conditional(
                "block4_postalVotingProcedure",
                Text,
                Condition::is_true("block4_postalVotingAllowed"),
                "Please describe the postal voting procedure if allowed.",
            ),
            FieldRule::tracked("block4_electronicVotingAllowed", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block4_electronicVotingProcedure"]),
            FieldRule::conditional(
                "block4_electronicVotingProcedure",
                Text,
                Condition::is_true("block4_electronicVotingAllowed"),
                "Please describe the electronic voting procedure if allowed.",
            ),
            // 4.7 proxies
            FieldRule::required(
                "block4_proxyAllowed",
                Boolean,
                "Please specify if proxies are allowed.",
            )
            .clears_unless(
                ValueTest::IsTrue,
                &[
                    "block4_proxyFormRequired",
                    "block4_proxyWhoCanBe",
                    "block4_proxyWhoCanBeOther",
                    "block4_proxyMaxNumber",
                    "block4_proxyLodgementDeadline",
                    "block4_proxyLodgementDeadlineOther",
                ],
            ),
            FieldRule::conditional(
                "block4_proxyFormRequired",
                Boolean,
                Condition::is_true("block4_proxyAllowed"),
                "Please specify if a specific proxy form is required.",
            )
            .clears_unless(
                ValueTest::IsTrue,
                &[
                    "block4_proxyLodgementDeadline",
                    "block4_proxyLodgementDeadlineOther",
                ],
            ),
            FieldRule::conditional(
                "block4_proxyWhoCanBe",
                Text,
                Condition::is_true("block4_proxyAllowed"),
                "Please specify who can be appointed as a proxy.",
            )
            .clears_unless(ValueTest::Equals(OTHER), &["block4_proxyWhoCanBeOther"]),
            FieldRule::conditional(
                "block4_proxyWhoCanBeOther",
                Text,
                Condition::is_true("block4_proxyAllowed")
                    .and(Condition::equals("block4_proxyWhoCanBe", OTHER)),
                "Please specify who else can be a proxy.",
            ),
            FieldRule::optional("block4_proxyMaxNumber", Number)
                .only_when(Condition::is_true("block4_proxyAllowed"))
                .with(Constraint::GreaterThan {
                    bound: 0.0,
                    message: "Max proxies must be a positive number if specified.",
                }),
            FieldRule::conditional(
                "block4_proxyLodgementDeadline",
                Text,
                Condition::is_true("block4_proxyAllowed")
                    .and(Condition::is_true("block4_proxyFormRequired")),
                "Please specify the proxy form lodgement deadline.",
            )
            .clears_unless(
                ValueTest::Equals(OTHER),
                &["block4_proxyLodgementDeadlineOther"],
            ),
            FieldRule::conditional(
                "block4_proxyLodgementDeadlineOther",
                Text,
                Condition::is_true("block4_proxyAllowed")
                    .and(Condition::equals("block4_proxyLodgementDeadline", OTHER)),
                "Please specify the other deadline.",
            ),
            // 4.8 minutes
            FieldRule::required(
                "block4_minutesRecorded",
                Boolean,
                "Confirmation that minutes will be recorded is required.",
            )
            .with(Constraint::MustBeTrue {
                message: "Confirmation that minutes will be recorded is required.",
            })
            .clears_unless(
                ValueTest::IsTrue,
                &[
                    "block4_minuteRequirements",
                    "block4_minuteAccess",
                    "block4_minuteAccessOther",
                ],
            ),
            FieldRule::conditional(
                "block4_minuteRequirements",
                List,
                Condition::is_true("block4_minutesRecorded"),
                "Please select the minimum requirements for minutes.",
            ),
            FieldRule::conditional(
                "block4_minuteAccess",
                Text,
                Condition::is_true("block4_minutesRecorded"),
                "Please specify how members can access minutes.",
            )
            .clears_unless(ValueTest::Equals(OTHER), &["block4_minuteAccessOther"]),
            FieldRule::conditional(
                "block4_minuteAccessOther",
                Text,
                Condition::is_true("block4_minutesRecorded")
                    .and(Condition::equals("block4_minuteAccess", OTHER)),
                "Please specify the other access method.",
            ),
        ],
    )
}
