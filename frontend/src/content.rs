//! Copy shared between pages. Everything here is read-only and lives for
//! the whole program, so components take `&'static` slices of it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub video_url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub subtitle: Option<&'static str>,
    pub answer: &'static str,
}

/// A home page benefit card. The headline is split so the middle part can
/// be highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    pub icon: BenefitIcon,
    pub headline_lead: &'static str,
    pub highlight: &'static str,
    pub headline_tail: &'static str,
    pub body: &'static str,
    pub closer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitIcon {
    Users,
    ShieldCheck,
    TrendingUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub lead: &'static str,
    pub emphasis: &'static str,
    pub tail: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "\"I feel less pressure... it's like a safety net!\"",
        author: "— Dr. Anthony & Dr. Lauren",
        video_url: "https://www.loom.com/embed/bd221950a9bc4aee9bfb2796574d943b",
    },
    Testimonial {
        quote: "\"I was really apprehensive when we started... Really helpful, big time-saver!\"",
        author: "— Julie Koval, Office Manager",
        video_url: "https://www.loom.com/embed/4ab57de9b9d64d7bac8ee986c6fb1548",
    },
    Testimonial {
        quote: "\"Remarkable accuracy and empathy.\"",
        author: "— Dr. Shantz, APRN",
        video_url: "https://www.loom.com/embed/063d2fdccf374d3b991ed45469808b20",
    },
    Testimonial {
        quote: "$890K/Month to $1.2M in Under 60 Days | Case Study",
        author: "— Kirkland Dental",
        video_url: "https://www.loom.com/embed/092130bd8df148ca81012276391e5eb8",
    },
    Testimonial {
        quote: "\"It's the best decision I've made administratively.\"",
        author: "— Dr. Ivry, Implant Surgeon",
        video_url: "https://www.loom.com/embed/53fd98038cc34a47a62ed185666340ac",
    },
];

pub static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Can the AI integrate with our practice's scheduling system?",
        subtitle: Some("(e.g., Dentrix, eClinicalWorks, EagleSoft, AthenaHealth)"),
        answer: "Yes. ClinicLab AI integrates with many leading EHR and practice management platforms, enabling it to schedule, reschedule, and cancel appointments directly within your calendar. If your system has restrictions on patient or appointment modifications, we will review compatibility and available workarounds during your AI strategy call.",
    },
    FaqEntry {
        question: "What happens if a patient asks something the AI can't answer?",
        subtitle: None,
        answer: "When an inquiry requires clinical judgment or involves complex billing or insurance matters, ClinicLab AI can transfer the call to your front office and escalate the request to your team via email to ensure timely follow-up and continuity of care.",
    },
    FaqEntry {
        question: "Can the AI handle both inbound and outbound calls?",
        subtitle: None,
        answer: "Yes. ClinicLab AI answers inbound calls 24/7 and can also place outbound calls for lead follow-up, callback requests, appointment confirmations, unscheduled treatment plan reminders, and patient reactivation initiatives.",
    },
    FaqEntry {
        question: "How long does it take to set up and go live?",
        subtitle: None,
        answer: "In most cases, ClinicLab AI can be implemented within approximately seven days of onboarding. The system is configured to your practice and integrated so it can begin handling calls, scheduling appointments, and supporting patient communications promptly upon launch.",
    },
    FaqEntry {
        question: "Is there training required for my staff?",
        subtitle: None,
        answer: "Minimal ongoing involvement is required. Beyond completing an initial customization form and a brief onboarding overview, ClinicLab AI operates in the background, reducing front-desk interruptions and allowing staff to focus on in-office patient needs.",
    },
    FaqEntry {
        question: "Is the AI HIPAA compliant?",
        subtitle: None,
        answer: "Yes. ClinicLab AI is designed to support HIPAA compliance through strong security controls and encryption measures intended to safeguard patient data and communications.",
    },
];

pub static BENEFITS: &[Benefit] = &[
    Benefit {
        icon: BenefitIcon::Users,
        headline_lead: "We Handle The ",
        highlight: "PATIENTS FOR YOU",
        headline_tail: "",
        body: "Our AI-driven system and in-house team manage patient inquiries, qualify them, and book appointments directly into your calendar.",
        closer: "You focus on care—we handle the scheduling.",
    },
    Benefit {
        icon: BenefitIcon::ShieldCheck,
        headline_lead: "No ",
        highlight: "No-Shows Or Unqualified Patients",
        headline_tail: "",
        body: "We rigorously vet every new lead using smart AI filters before they're ever booked — no more wasted consults or fake requests.",
        closer: "This ensures your team only talks to real patients who are ready to move forward.",
    },
    Benefit {
        icon: BenefitIcon::TrendingUp,
        headline_lead: "",
        highlight: "SAVE MONEY AND SCALE",
        headline_tail: " YOUR PRACTICE",
        body: "We don't sell leads. We install a done-for-you system that answers patient inquiries, qualifies them instantly, and fills your schedule — without the overhead of extra employees.",
        closer: "Our tech becomes your front desk. Our campaigns bring in new patients.",
    },
];

pub static PRE_CALL_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        lead: "Confirm that ",
        emphasis: "all key decision‑makers",
        tail: " can attend the call (owner, practice manager, or marketing lead).",
    },
    ChecklistItem {
        lead: "Have your ",
        emphasis: "last 3–6 months of new‑patient numbers",
        tail: " and revenue handy so we can model the impact of the Direct AI Patient System.",
    },
    ChecklistItem {
        lead: "Make sure you're able to ",
        emphasis: "join from a quiet location",
        tail: " (not between patients or while driving) so we can focus on strategy.",
    },
    ChecklistItem {
        lead: "Write down ",
        emphasis: "your top 3 questions",
        tail: " about AI, call handling, or implementation so nothing gets missed.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_are_loom_embeds() {
        assert_eq!(TESTIMONIALS.len(), 5);
        for t in TESTIMONIALS {
            assert!(t.video_url.starts_with("https://www.loom.com/embed/"), "{}", t.video_url);
            assert!(t.author.starts_with('—'));
            assert!(!t.quote.is_empty());
        }
    }

    #[test]
    fn only_the_integration_question_has_a_subtitle() {
        assert_eq!(FAQ_ENTRIES.len(), 6);
        let with_subtitle: Vec<_> = FAQ_ENTRIES.iter().filter(|f| f.subtitle.is_some()).collect();
        assert_eq!(with_subtitle.len(), 1);
        assert!(with_subtitle[0].question.contains("scheduling system"));
    }

    #[test]
    fn every_benefit_has_a_highlight() {
        assert_eq!(BENEFITS.len(), 3);
        assert!(BENEFITS.iter().all(|b| !b.highlight.is_empty() && !b.closer.is_empty()));
    }

    #[test]
    fn checklist_has_four_steps() {
        assert_eq!(PRE_CALL_CHECKLIST.len(), 4);
    }
}
