//! Hard-coded copy for the landing page.

/// Words cycled through in the hero headline, in display order.
pub const PHRASES: [&str; 5] = [
    "Operations",
    "Business",
    "Automation",
    "Data Analysis",
    "Future",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const SOLUTIONS: [Solution; 3] = [
    Solution {
        icon: "🧠",
        title: "Agentic RAG",
        desc: "Retrieval‑Augmented Generation super‑charged with autonomy. Our agents pull live data, reason across sources, and craft answers that cite where every fact came from—no hallucinations, just truth on demand.",
    },
    Solution {
        icon: "🔊",
        title: "Voice AI Agents",
        desc: "Natural, human‑sounding voices that hold context‑rich conversations, schedule meetings, triage support calls, and close deals while your team sleeps.",
    },
    Solution {
        icon: "⚙️",
        title: "Workflow Automators",
        desc: "Drag‑and‑drop any business process—finance approvals, HR onboarding, IT ops—and watch an intelligent agent run it end‑to‑end, 24 × 7, with full audit trails.",
    },
];

pub const USE_CASES: [UseCase; 5] = [
    UseCase {
        icon: "💬",
        title: "24×7 Customer Support & Ticket Resolution",
        detail: "Deploy chat or voice agents that understand context, pull answers from your knowledge base, resolve 80 % of tickets autonomously, and seamlessly escalate edge‑cases to humans—reducing average handle time by 60 %.",
    },
    UseCase {
        icon: "📚",
        title: "Enterprise Knowledge‑Base Q&A",
        detail: "Semantic search across scattered PDFs, Confluence spaces, and SharePoint libraries. Employees get one authoritative answer with source links instead of wading through pages of docs.",
    },
    UseCase {
        icon: "🚀",
        title: "Sales Enablement & Personalized Outreach",
        detail: "Agents that read CRM notes, craft hyper‑personalized emails, and follow‑up at the perfect moment—boosting reply rates by 3× and freeing reps to close big deals.",
    },
    UseCase {
        icon: "🔄",
        title: "Self‑Healing IT & Ops",
        detail: "Agents monitor logs and metrics, predict incidents, trigger playbooks, and remediate issues before customers notice—cutting downtime to near‑zero.",
    },
    UseCase {
        icon: "📊",
        title: "Conversational BI & Data Analysis",
        detail: "Ask natural‑language questions and receive charts, insights, and narrative summaries. No SQL required—just answers.",
    },
];

/// Text shown in white before the gold phrase. The last phrase reads "for the Future".
pub fn phrase_lead_in(index: usize) -> &'static str {
    if index + 1 == PHRASES.len() {
        "for the "
    } else {
        "for "
    }
}

/// Page sections that navigation can scroll to. The hero is not a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Solutions,
    UseCases,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Solutions, Section::UseCases, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Solutions => "solutions",
            Section::UseCases => "usecases",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Solutions => "Solutions",
            Section::UseCases => "Use Cases",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_phrase_gets_definite_article() {
        assert_eq!(phrase_lead_in(4), "for the ");
        for index in 0..4 {
            assert_eq!(phrase_lead_in(index), "for ");
        }
        assert_eq!(PHRASES[4], "Future");
    }

    #[test]
    fn navigation_targets_are_the_three_anchored_sections() {
        let ids: Vec<_> = Section::ALL.iter().map(|section| section.id()).collect();
        assert_eq!(ids, ["solutions", "usecases", "contact"]);
        assert_eq!(Section::UseCases.href(), "#usecases");
    }

    #[test]
    fn content_tables_have_expected_shape() {
        assert_eq!(SOLUTIONS.len(), 3);
        assert_eq!(USE_CASES.len(), 5);
        assert!(SOLUTIONS.iter().all(|s| !s.title.is_empty() && !s.desc.is_empty()));
        assert!(USE_CASES.iter().all(|u| !u.title.is_empty() && !u.detail.is_empty()));
    }
}
