//! # Block Catalogue
//!
//! The ten blocks of the constitution wizard, in order, with their titles
//! and rule tables. Block 10 (Review & Generate) is read-only and has no
//! rule table.
//!
//! Rule tables are built on first use and shared for the life of the
//! process.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use scw_core::BlockNumber;

use crate::blocks;
use crate::rule::RuleSet;

/// A block of the constitution wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// 1. Foundation & Identity.
    Foundation,
    /// 2. Membership.
    Membership,
    /// 3. Governance - The Committee.
    Committee,
    /// 4. General Meetings.
    Meetings,
    /// 5. Finances & Assets.
    Finances,
    /// 6. Amendments & Bylaws.
    Amendments,
    /// 7. Dispute Resolution & Notices.
    Disputes,
    /// 8. Winding Up.
    WindingUp,
    /// 9. Transitional Provisions.
    Transitional,
    /// 10. Review & Generate.
    Review,
}

impl Block {
    /// All blocks in wizard order.
    pub const ALL: [Block; 10] = [
        Self::Foundation,
        Self::Membership,
        Self::Committee,
        Self::Meetings,
        Self::Finances,
        Self::Amendments,
        Self::Disputes,
        Self::WindingUp,
        Self::Transitional,
        Self::Review,
    ];

    /// The block's position in the wizard, starting at 1.
    pub fn number(self) -> BlockNumber {
        BlockNumber(self.index() as u32 + 1)
    }

    /// Look up a block by number.
    pub fn from_number(number: BlockNumber) -> Option<Self> {
        let n = usize::try_from(number.get()).ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    /// Sidebar title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation & Identity",
            Self::Membership => "Membership",
            Self::Committee => "Governance - The Committee",
            Self::Meetings => "General Meetings",
            Self::Finances => "Finances & Assets",
            Self::Amendments => "Amendments & Bylaws",
            Self::Disputes => "Dispute Resolution & Notices",
            Self::WindingUp => "Winding Up",
            Self::Transitional => "Transitional Provisions",
            Self::Review => "Review & Generate",
        }
    }

    /// Heading shown above the block's questions.
    pub fn screen_title(self) -> &'static str {
        match self {
            Self::Foundation => "Society Basics",
            Self::Membership => "Membership Structure & Process",
            Self::Committee => "Committee Structure & Procedures",
            Self::Meetings => "AGMs & SGMs",
            Self::Finances => "Financial Management",
            Self::Amendments => "Changing the Rules",
            Self::Disputes => "Handling Disagreements",
            Self::WindingUp => "Closing the Society",
            Self::Transitional => "Adopting the New Constitution",
            Self::Review => "Review Constitution",
        }
    }

    /// Whether the block only displays answers.
    pub fn is_read_only(self) -> bool {
        self.rule_set().is_none()
    }

    /// The block's rule table, or `None` for the review block.
    pub fn rule_set(self) -> Option<&'static RuleSet> {
        tables().get(self.index())
    }

    fn index(self) -> usize {
        match self {
            Self::Foundation => 0,
            Self::Membership => 1,
            Self::Committee => 2,
            Self::Meetings => 3,
            Self::Finances => 4,
            Self::Amendments => 5,
            Self::Disputes => 6,
            Self::WindingUp => 7,
            Self::Transitional => 8,
            Self::Review => 9,
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number().get(), self.title())
    }
}

fn tables() -> &'static [RuleSet; 9] {
    static TABLES: OnceLock<[RuleSet; 9]> = OnceLock::new();
    TABLES.get_or_init(|| {
        [
            blocks::foundation::rules(),
            blocks::membership::rules(),
            blocks::committee::rules(),
            blocks::meetings::rules(),
            blocks::finances::rules(),
            blocks::amendments::rules(),
            blocks::disputes::rules(),
            blocks::winding_up::rules(),
            blocks::transitional::rules(),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_numbers_round_trip() {
        for block in Block::ALL {
            assert_eq!(Block::from_number(block.number()), Some(block));
        }
        assert_eq!(Block::from_number(BlockNumber(0)), None);
        assert_eq!(Block::from_number(BlockNumber(11)), None);
    }

    #[test]
    fn test_only_review_is_read_only() {
        let read_only: Vec<_> = Block::ALL.into_iter().filter(|b| b.is_read_only()).collect();
        assert_eq!(read_only, vec![Block::Review]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Block::Meetings.to_string(), "4. General Meetings");
        assert_eq!(Block::Review.screen_title(), "Review Constitution");
    }

    #[test]
    fn test_no_field_is_owned_by_two_blocks() {
        let mut seen = HashSet::new();
        for block in Block::ALL {
            if let Some(rules) = block.rule_set() {
                for rule in rules.rules() {
                    assert!(seen.insert(rule.field), "{} declared twice", rule.field);
                }
            }
        }
    }

    #[test]
    fn test_tables_have_no_duplicate_rules() {
        for block in Block::ALL {
            if let Some(rules) = block.rule_set() {
                let declared = rules.rules().count();
                assert_eq!(declared, rules.len(), "{block}");
            }
        }
    }

    #[test]
    fn test_conditions_only_read_fields_in_the_same_table() {
        for block in Block::ALL {
            let Some(rules) = block.rule_set() else {
                continue;
            };
            for rule in rules.rules() {
                for field in rule.required_if.fields() {
                    assert!(
                        rules.rule(field).is_some(),
                        "{}: {} reads undeclared {}",
                        block,
                        rule.field,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn test_cross_namespace_keys_preserved() {
        let winding_up = Block::WindingUp.rule_set().unwrap();
        assert!(winding_up.rule("block5_windingUpDistribution").is_some());
        let amendments = Block::Amendments.rule_set().unwrap();
        assert!(amendments.rule("block5_commonSeal").is_some());
        let transitional = Block::Transitional.rule_set().unwrap();
        assert!(transitional
            .rules()
            .all(|rule| rule.field.starts_with("block10_")));
    }
}
