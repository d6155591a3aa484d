//! Static copy for the landing page.

use derive_more::Display;

/// A course creator problem, paired with how LessonRush answers it.
///
/// `pain` is also the value sent in `painPoints` when the visitor selects it.
pub struct PainPoint {
    pub pain: &'static str,
    pub solution: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub status: FeatureStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FeatureStatus {
    #[display(fmt = "Planned")]
    Planned,
}

pub static PAIN_POINTS: &[PainPoint] = &[
    PainPoint {
        pain: "I spend weeks setting up my course platform instead of creating content",
        solution: "Launch-ready course platform in under 5 minutes with zero technical setup",
        icon: "⏱",
        accent: "chart-2",
    },
    PainPoint {
        pain: "Technical setup costs eat into my course profits",
        solution: "All-in-one solution that eliminates expensive developers and monthly tool subscriptions",
        icon: "$",
        accent: "chart-5",
    },
    PainPoint {
        pain: "I lose students during complicated enrollment processes",
        solution: "Streamlined, conversion-optimized enrollment that maximizes student sign-ups",
        icon: "👥",
        accent: "chart-4",
    },
    PainPoint {
        pain: "Managing payments, emails, and content delivery is overwhelming",
        solution: "Automated systems handle everything while you focus on teaching and growing",
        icon: "🎯",
        accent: "chart-3",
    },
];

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "5-Minute Course Setup",
        description: "Upload content, set pricing, go live. No coding, no complicated configurations.",
        icon: "⚡",
        status: FeatureStatus::Planned,
    },
    Feature {
        title: "Built-in Payment Processing",
        description: "Secure payments, automatic tax handling, instant payouts to your account.",
        icon: "💳",
        status: FeatureStatus::Planned,
    },
    Feature {
        title: "Student Progress Tracking",
        description: "Quizzes, certificates, progress tracking that boost completion rates.",
        icon: "📊",
        status: FeatureStatus::Planned,
    },
    Feature {
        title: "Content Drip System",
        description: "Automatically release lessons to keep students engaged and coming back.",
        icon: "▶",
        status: FeatureStatus::Planned,
    },
];
