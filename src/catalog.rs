//! The static content catalog.
//!
//! Everything here is compiled in and immutable: the tactic table the user
//! browses, and the seven-habits guide shown alongside it. The store never
//! reads this module except to validate ids; search and rendering are the
//! CLI's concern.

use crate::models::{Tactic, TacticGroup};

/// One entry of the seven-habits guide.
#[derive(Debug, Clone, Copy)]
pub struct Habit {
    pub id: &'static str,
    pub title: &'static str,
    pub note: &'static str,
}

pub static TACTICS: &[Tactic] = &[
    // Persuasion (Ethos, Logos, Pathos)
    Tactic {
        id: "ethos",
        group: TacticGroup::Persuasion,
        title: "Ethos – Build Credibility",
        summary: "Signal character, fairness, and alignment with the audience before making asks.",
        prompts: &[
            "What signals prove reliability?",
            "Where can I show skin-in-the-game?",
        ],
    },
    Tactic {
        id: "logos",
        group: TacticGroup::Persuasion,
        title: "Logos – Clarify the Logic",
        summary: "Make the reasoning easy to follow with crisp claims, evidence, and warrants.",
        prompts: &[
            "What is the one-sentence thesis?",
            "What evidence closes the gap?",
        ],
    },
    Tactic {
        id: "pathos",
        group: TacticGroup::Persuasion,
        title: "Pathos – Aim for the Heart",
        summary: "Use story, analogy, and concrete images to create emotional resonance.",
        prompts: &[
            "Which story earns attention?",
            "How will they feel afterwards?",
        ],
    },
    // Negotiation (Allocentrism, Exchange, Might)
    Tactic {
        id: "allocentrism",
        group: TacticGroup::Negotiation,
        title: "Allocentrism – See from Their Side",
        summary: "Practice perspective-taking to predict moves, reduce friction, and design win–wins.",
        prompts: &[
            "What do they need most?",
            "If I were them, what would I do next?",
        ],
    },
    Tactic {
        id: "exchange",
        group: TacticGroup::Negotiation,
        title: "Exchange – Quid Pro Quo (and Beyond)",
        summary: "Offer fair trades; when possible, show magnanimity to compound goodwill.",
        prompts: &[
            "What can I give first?",
            "Where can I be strategically generous?",
        ],
    },
    Tactic {
        id: "might",
        group: TacticGroup::Negotiation,
        title: "Might – Use Authority Sparingly",
        summary: "Address tough issues and set boundaries, but follow with repair and dignity.",
        prompts: &[
            "What boundary must be explicit?",
            "How will I repair after firmness?",
        ],
    },
    // Structure (Networks, Coalitions, Team-building)
    Tactic {
        id: "networks",
        group: TacticGroup::Structure,
        title: "Networks – Widen the Periphery",
        summary: "Cultivate diverse ties to increase information flow and option value.",
        prompts: &[
            "Who sits at the edge of my map?",
            "Which 2 new weak ties this week?",
        ],
    },
    Tactic {
        id: "coalitions",
        group: TacticGroup::Structure,
        title: "Coalitions – Add Complementarity",
        summary: "Assemble allies with different strengths; align on shared outcomes over ego.",
        prompts: &[
            "Which rival could be an ally?",
            "What is the smallest shared win?",
        ],
    },
    Tactic {
        id: "team",
        group: TacticGroup::Structure,
        title: "Team-Building – Hold It Together",
        summary: "Create cohesion via clear roles, frequent small fairness signals, and conflict hygiene.",
        prompts: &[
            "What ritual reinforces unity?",
            "Where is jealousy building?",
        ],
    },
    // Meta-Tools (Intentionality, Situation Awareness, Agency)
    Tactic {
        id: "intentionality",
        group: TacticGroup::MetaTools,
        title: "Intentionality – One Paramount Objective",
        summary: "Name the north star; say ‘no’ to distractions that don’t serve it.",
        prompts: &[
            "What is the non-negotiable?",
            "Which task will I drop today?",
        ],
    },
    Tactic {
        id: "situation",
        group: TacticGroup::MetaTools,
        title: "Situation Awareness – Time the Move",
        summary: "Sense constraints and readiness; wait for propitious moments.",
        prompts: &[
            "Is sentiment ready yet?",
            "What signal am I waiting for?",
        ],
    },
    Tactic {
        id: "agency",
        group: TacticGroup::MetaTools,
        title: "Agency – Shape the Game",
        summary: "Redesign rules, processes, or environment so good choices become easy.",
        prompts: &[
            "What rule can I rewrite?",
            "Which default can be improved?",
        ],
    },
    // Case: LBJ levers (Little Congress)
    Tactic {
        id: "lbj_publicity",
        group: TacticGroup::CaseLbj,
        title: "Publicity Machine",
        summary: "Turn routine forums into stages; invite press, create cadence, and spotlight others.",
        prompts: &[
            "Which recurring forum can I energize?",
            "Who gets the spotlight next?",
        ],
    },
    Tactic {
        id: "lbj_agenda",
        group: TacticGroup::CaseLbj,
        title: "Agenda & Procedure Control",
        summary: "Engineer agendas, timing, and voting rules to channel momentum.",
        prompts: &[
            "What decision rule helps progress?",
            "How do we minimize last-minute churn?",
        ],
    },
    Tactic {
        id: "lbj_patronage",
        group: TacticGroup::CaseLbj,
        title: "Patronage & Placement",
        summary: "Place people in visible roles and exchange access for contribution.",
        prompts: &[
            "Who deserves a platform?",
            "What’s the fair, public criterion?",
        ],
    },
    // Modern org levers (promotion/impact)
    Tactic {
        id: "modern_psych_safety",
        group: TacticGroup::ModernOrg,
        title: "Psychological Safety",
        summary: "Create norms where candor is safe and error-sharing speeds learning.",
        prompts: &[
            "What behavior earns thanks today?",
            "How do we react to bad news?",
        ],
    },
    Tactic {
        id: "modern_peer_influence",
        group: TacticGroup::ModernOrg,
        title: "Peer Influence > Title",
        summary: "Lead without authority by enabling others, removing friction, and clarifying context.",
        prompts: &[
            "Which cross-team do I enable?",
            "What friction can I remove now?",
        ],
    },
    Tactic {
        id: "modern_managing_up",
        group: TacticGroup::ModernOrg,
        title: "Managing Up with Clarity",
        summary: "Offer crisp updates, options with trade-offs, and pre-empt stakeholder concerns.",
        prompts: &[
            "What are the 2 options + risks?",
            "Whose constraint matters most?",
        ],
    },
];

/// Guide content: the seven habits of the influential.
pub static HABITS: &[Habit] = &[
    Habit {
        id: "spots",
        title: "Pick your spots",
        note: "Situation awareness. Use multiple lenses; watch risk/uncertainty/importance; invest selectively.",
    },
    Habit {
        id: "alloc",
        title: "Keep others’ interests in mind",
        note: "Allocentrism + pathos; give others what they want so they can give you what you want.",
    },
    Habit {
        id: "tradeoffs",
        title: "Be fixed on goals, flexible on methods",
        note: "Intentionality; trade-offs are proof you are working toward a goal.",
    },
    Habit {
        id: "cultivate",
        title: "Cultivate relationships before they’re needed",
        note: "Network intentionally; make it feel organic and generous.",
    },
    Habit {
        id: "premeet",
        title: "Have the meeting before the meeting",
        note: "Coalitions; take temperatures, gather info, lay groundwork.",
    },
    Habit {
        id: "agency",
        title: "Don’t accept circumstances as given",
        note: "Agency; shape the situation—the #1 empirical lever.",
    },
    Habit {
        id: "see_two_ways",
        title: "See the world as it is AND how you want it to be",
        note: "Blend realism with ambition to inspire smart action.",
    },
];

/// Look up a tactic by id.
pub fn find_tactic(id: &str) -> Option<&'static Tactic> {
    TACTICS.iter().find(|t| t.id == id)
}

/// Case-insensitive substring filter over title, summary, and group label.
///
/// An empty query matches everything, so "browse" and "search" are the same
/// code path.
pub fn search(query: &str) -> Vec<&'static Tactic> {
    let q = query.to_lowercase();
    TACTICS
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&q)
                || t.summary.to_lowercase().contains(&q)
                || t.group.as_str().to_lowercase().contains(&q)
        })
        .collect()
}
