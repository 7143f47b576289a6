use serde::{Deserialize, Serialize};

/// One influence technique from the static catalog.
///
/// Tactics are defined once at compile time and never mutated or deleted;
/// playbook items refer to them by `id` rather than owning a copy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tactic {
    pub id: &'static str,
    pub group: TacticGroup,
    pub title: &'static str,
    pub summary: &'static str,
    /// Reflection prompts shown alongside the tactic, in display order.
    pub prompts: &'static [&'static str],
}

/// The section of the catalog a tactic belongs to.
///
/// This is a closed set: rendering code matches on it exhaustively, so a new
/// group cannot be added without every display site being updated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TacticGroup {
    Persuasion,
    Negotiation,
    Structure,
    #[serde(rename = "Meta-Tools")]
    MetaTools,
    #[serde(rename = "Case: LBJ")]
    CaseLbj,
    #[serde(rename = "Modern Org")]
    ModernOrg,
}

impl TacticGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Persuasion => "Persuasion",
            Self::Negotiation => "Negotiation",
            Self::Structure => "Structure",
            Self::MetaTools => "Meta-Tools",
            Self::CaseLbj => "Case: LBJ",
            Self::ModernOrg => "Modern Org",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Persuasion" => Some(Self::Persuasion),
            "Negotiation" => Some(Self::Negotiation),
            "Structure" => Some(Self::Structure),
            "Meta-Tools" => Some(Self::MetaTools),
            "Case: LBJ" => Some(Self::CaseLbj),
            "Modern Org" => Some(Self::ModernOrg),
            _ => None,
        }
    }
}

/// One of Cialdini's six persuasion principles.
///
/// The wire form is the lowercase key (`"socialproof"`, not `"Social Proof"`)
/// to stay compatible with previously exported documents.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Reciprocity,
    Commitment,
    SocialProof,
    Authority,
    Liking,
    Scarcity,
}

impl Principle {
    pub const ALL: [Principle; 6] = [
        Self::Reciprocity,
        Self::Commitment,
        Self::SocialProof,
        Self::Authority,
        Self::Liking,
        Self::Scarcity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reciprocity => "reciprocity",
            Self::Commitment => "commitment",
            Self::SocialProof => "socialproof",
            Self::Authority => "authority",
            Self::Liking => "liking",
            Self::Scarcity => "scarcity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reciprocity" => Some(Self::Reciprocity),
            "commitment" => Some(Self::Commitment),
            "socialproof" => Some(Self::SocialProof),
            "authority" => Some(Self::Authority),
            "liking" => Some(Self::Liking),
            "scarcity" => Some(Self::Scarcity),
            _ => None,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reciprocity => "Reciprocity",
            Self::Commitment => "Commitment & Consistency",
            Self::SocialProof => "Social Proof",
            Self::Authority => "Authority",
            Self::Liking => "Liking",
            Self::Scarcity => "Scarcity",
        }
    }
}
