//! Block 3: Governance - The Committee.
//!
//! The co-option fields show single-level clearing: turning co-option off
//! resets `block3_coOptDuration` but leaves `block3_coOptDurationOther`
//! alone. The stale text is ignored because its relevance condition reads
//! the (now blank) duration.

use scw_core::FieldKind::{Boolean, List, Number, Text};

use crate::condition::{Condition, ValueTest};
use crate::constraint::Constraint;
use crate::rule::{FieldRule, RuleSet};

/// Statutory minimum number of committee members.
pub const MIN_COMMITTEE_SIZE: f64 = 3.0;

/// Rules for block 3.
pub fn rules() -> RuleSet {
    RuleSet::new(
        "committee",
        vec![
            // 3.1 composition
            FieldRule::required(
                "block3_officerRoles",
                List,
                "Please select the officer roles on the committee.",
            )
            .clears_unless(ValueTest::Includes("other"), &["block3_officerRolesOther"]),
            FieldRule::other_in(
                "block3_officerRolesOther",
                "block3_officerRoles",
                "other",
                "Please specify the other officer roles.",
            ),
            FieldRule::required(
                "block3_committeeMinSize",
                Number,
                "Please specify the minimum number of committee members.",
            )
            .with(Constraint::Min {
                min: MIN_COMMITTEE_SIZE,
                message: "The committee must have at least 3 members.",
            }),
            FieldRule::required(
                "block3_committeeMaxSize",
                Number,
                "Please specify the maximum number of committee members.",
            )
            .with(Constraint::NotLessThanField {
                field: "block3_committeeMinSize",
                message: "Maximum committee size cannot be less than the minimum.",
            }),
            FieldRule::tracked("block3_includeRoleDescriptions", Boolean).clears_unless(
                ValueTest::IsTrue,
                &[
                    "block3_roleDescriptionPresident",
                    "block3_roleDescriptionSecretary",
                    "block3_roleDescriptionTreasurer",
                    "block3_roleDescriptionOther",
                ],
            ),
            FieldRule::tracked("block3_roleDescriptionPresident", Text),
            FieldRule::tracked("block3_roleDescriptionSecretary", Text),
            FieldRule::tracked("block3_roleDescriptionTreasurer", Text),
            FieldRule::tracked("block3_roleDescriptionOther", Text),
            // 3.2 elections and terms
            FieldRule::required(
                "block3_electionMethod",
                Text,
                "Please specify how committee members are elected.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block3_electionMethodOther"]),
            FieldRule::other_for(
                "block3_electionMethodOther",
                "block3_electionMethod",
                "Other",
                "Please specify the other election method.",
            ),
            FieldRule::tracked("block3_electionProcess", Text),
            FieldRule::required(
                "block3_termOfOffice",
                Text,
                "Please specify the term of office.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block3_termOfOfficeOther"]),
            FieldRule::other_for(
                "block3_termOfOfficeOther",
                "block3_termOfOffice",
                "Other",
                "Please specify the other term of office.",
            ),
            FieldRule::tracked("block3_reElectionLimits", Boolean)
                .clears_unless(ValueTest::IsTrue, &["block3_reElectionLimitDetails"]),
            FieldRule::conditional(
                "block3_reElectionLimitDetails",
                Text,
                Condition::is_true("block3_reElectionLimits"),
                "Please describe the re-election limits.",
            ),
            FieldRule::required(
                "block3_canCoOpt",
                Boolean,
                "Please specify if the committee can co-opt members.",
            )
            .clears_unless(ValueTest::IsTrue, &["block3_coOptDuration"]),
            FieldRule::conditional(
                "block3_coOptDuration",
                Text,
                Condition::is_true("block3_canCoOpt"),
                "Please specify how long co-opted members serve.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block3_coOptDurationOther"]),
            FieldRule::other_for(
                "block3_coOptDurationOther",
                "block3_coOptDuration",
                "Other",
                "Please specify the other co-option duration.",
            ),
            FieldRule::optional("block3_casualVacancyMethod", Text).clears_unless(
                ValueTest::Equals("Other"),
                &["block3_casualVacancyMethodOther"],
            ),
            FieldRule::other_for(
                "block3_casualVacancyMethodOther",
                "block3_casualVacancyMethod",
                "Other",
                "Please specify the other casual vacancy method.",
            ),
            // 3.3 powers
            FieldRule::required(
                "block3_committeePowers",
                Text,
                "Please specify how the committee's powers are described.",
            )
            .clears_unless(ValueTest::Equals("list"), &["block3_committeePowersList"]),
            FieldRule::conditional(
                "block3_committeePowersList",
                Text,
                Condition::equals("block3_committeePowers", "list"),
                "Please list the committee's powers.",
            ),
            FieldRule::tracked("block3_stateGeneralDuties", Boolean),
            // 3.4 removal
            FieldRule::required(
                "block3_removalGrounds",
                List,
                "Please specify the grounds for removing a committee member.",
            )
            .clears_unless(ValueTest::Includes("other"), &["block3_removalGroundsOther"])
            .clears_unless(
                ValueTest::Includes("absence"),
                &["block3_removalAbsenceNumber"],
            ),
            FieldRule::other_in(
                "block3_removalGroundsOther",
                "block3_removalGrounds",
                "other",
                "Please specify the other grounds for removal.",
            ),
            FieldRule::conditional(
                "block3_removalAbsenceNumber",
                Number,
                Condition::includes("block3_removalGrounds", "absence"),
                "Please specify how many missed meetings lead to removal.",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid number of meetings.",
            }),
            FieldRule::optional("block3_removalProcedure", Text).clears_unless(
                ValueTest::Equals("Other"),
                &["block3_removalProcedureOther"],
            ),
            FieldRule::other_for(
                "block3_removalProcedureOther",
                "block3_removalProcedure",
                "Other",
                "Please specify the other removal procedure.",
            ),
            // 3.5 committee meetings
            FieldRule::required(
                "block3_meetingFrequency",
                Text,
                "Please specify how often the committee meets.",
            )
            .clears_unless(
                ValueTest::Equals("times_per_year"),
                &["block3_meetingFrequencyNumber"],
            ),
            FieldRule::conditional(
                "block3_meetingFrequencyNumber",
                Number,
                Condition::equals("block3_meetingFrequency", "times_per_year"),
                "Please specify how many times per year the committee meets.",
            )
            .with(Constraint::Min {
                min: 1.0,
                message: "The committee must meet at least once a year.",
            }),
            FieldRule::required(
                "block3_committeeQuorumType",
                Text,
                "Please specify the quorum basis (percentage or fixed number).",
            ),
            FieldRule::required(
                "block3_committeeQuorumValue",
                Number,
                "Please specify a valid quorum number/percentage.",
            )
            .with(Constraint::GreaterThan {
                bound: 0.0,
                message: "Please specify a valid quorum number/percentage.",
            })
            .with(Constraint::MaxWhen {
                when: Condition::equals("block3_committeeQuorumType", "percentage"),
                max: 100.0,
                message: "Quorum percentage cannot exceed 100.",
            }),
            FieldRule::required(
                "block3_committeeChair",
                Text,
                "Please specify who chairs committee meetings.",
            )
            .clears_unless(ValueTest::Equals("Other"), &["block3_committeeChairOther"]),
            FieldRule::other_for(
                "block3_committeeChairOther",
                "block3_committeeChair",
                "Other",
                "Please specify the other chair arrangement.",
            ),
            FieldRule::tracked("block3_chairCastingVote", Boolean),
            FieldRule::tracked("block3_remoteMeetings", Boolean),
            FieldRule::tracked("block3_writtenResolutions", Boolean).clears_unless(
                ValueTest::IsTrue,
                &["block3_writtenResolutionApproval"],
            ),
            FieldRule::conditional(
                "block3_writtenResolutionApproval",
                Text,
                Condition::is_true("block3_writtenResolutions"),
                "Please specify how written resolutions are approved.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block3_writtenResolutionApprovalOther"],
            ),
            FieldRule::other_for(
                "block3_writtenResolutionApprovalOther",
                "block3_writtenResolutionApproval",
                "Other",
                "Please specify the other approval method.",
            ),
            FieldRule::required(
                "block3_conflictOfInterestMethod",
                Text,
                "Please specify how conflicts of interest are managed.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block3_conflictOfInterestMethodOther"],
            ),
            FieldRule::other_for(
                "block3_conflictOfInterestMethodOther",
                "block3_conflictOfInterestMethod",
                "Other",
                "Please specify the other conflict of interest method.",
            ),
            // 3.6 contact person
            FieldRule::required(
                "block3_contactPersonAppointment",
                Text,
                "Please specify how the contact person is appointed.",
            )
            .clears_unless(
                ValueTest::Equals("Other"),
                &["block3_contactPersonAppointmentOther"],
            ),
            FieldRule::other_for(
                "block3_contactPersonAppointmentOther",
                "block3_contactPersonAppointment",
                "Other",
                "Please specify the other appointment method.",
            ),
        ],
    )
}
