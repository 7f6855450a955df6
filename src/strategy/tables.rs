//! Per-type lookup tables the executors draw their auxiliary facts from.
//!
//! Tables are partial: a type without a row gets the table's fallback, which
//! plays the role of the unclassified row.

use crate::taxonomy::AntinomyType;

/// A lookup keyed by [`AntinomyType`] with a fallback for missing rows.
pub(crate) struct TypeTable<T: 'static> {
    rows: &'static [(AntinomyType, T)],
    fallback: T,
}

impl<T: 'static> TypeTable<T> {
    pub(crate) fn get(&'static self, ty: AntinomyType) -> &'static T {
        self.rows
            .iter()
            .find(|(row_type, _)| *row_type == ty)
            .map(|(_, value)| value)
            .unwrap_or(&self.fallback)
    }

    #[cfg(test)]
    pub(crate) fn has_row(&self, ty: AntinomyType) -> bool {
        self.rows.iter().any(|(row_type, _)| *row_type == ty)
    }
}

/// Domains of applicability: (thesis holds within, antithesis holds within).
pub(crate) static APPLICABILITY_DOMAINS: TypeTable<(&str, &str)> = TypeTable {
    rows: &[
        (
            AntinomyType::FiniteVsInfinite,
            ("what can be given in experience", "what can only be thought as a totality"),
        ),
        (
            AntinomyType::AtomicVsContinuous,
            ("physical composition", "mathematical division"),
        ),
        (
            AntinomyType::NecessityVsContingency,
            ("the order of grounds", "the order of appearances"),
        ),
        (
            AntinomyType::UtilityVsRights,
            ("policy design for populations", "the treatment of each person"),
        ),
        (
            AntinomyType::GeneralityVsSpecialization,
            ("shared platform layers", "domain-specific components"),
        ),
        (
            AntinomyType::TransparencyVsPerformance,
            ("audited decision paths", "latency-critical paths"),
        ),
    ],
    fallback: ("the domain the thesis describes", "the domain the antithesis describes"),
};

/// Standpoints: (thesis is valid from, antithesis is valid from).
pub(crate) static PERSPECTIVES: TypeTable<(&str, &str)> = TypeTable {
    rows: &[
        (
            AntinomyType::FreedomVsCausality,
            ("the practical standpoint of the agent", "the theoretical standpoint of the observer"),
        ),
        (
            AntinomyType::NecessityVsContingency,
            ("reason seeking an unconditioned ground", "experience tracing conditions"),
        ),
        (
            AntinomyType::DeterministicVsRandom,
            ("the standpoint of underlying laws", "the standpoint of individual observations"),
        ),
        (
            AntinomyType::TeleologyVsMechanism,
            ("reflective judgment about organized wholes", "explanation by efficient causes"),
        ),
        (
            AntinomyType::AutonomyVsWelfare,
            ("the person making the choice", "those responsible for the outcome"),
        ),
    ],
    fallback: ("the first-person perspective", "the third-person perspective"),
};

/// Contexts in which each side takes priority: (thesis contexts, antithesis contexts).
pub(crate) static PRIORITY_CONTEXTS: TypeTable<(&[&str], &[&str])> = TypeTable {
    rows: &[
        (
            AntinomyType::UtilityVsRights,
            (
                &["public health emergencies", "allocation of scarce resources"],
                &["criminal justice", "medical consent"],
            ),
        ),
        (
            AntinomyType::AutonomyVsWelfare,
            (
                &["informed adults", "low-risk choices"],
                &["minors", "risk of irreversible harm"],
            ),
        ),
        (
            AntinomyType::IndividualVsCollective,
            (&["personal matters", "private life"], &["shared resources", "public goods"]),
        ),
        (
            AntinomyType::TransparencyVsPerformance,
            (&["regulated decisions", "debugging"], &["real-time serving", "batch throughput"]),
        ),
    ],
    fallback: (
        &["situations where the thesis's premises hold"],
        &["situations where the antithesis's premises hold"],
    ),
};

/// The higher principle a synthesis integrates both sides into.
pub(crate) static SYNTHESES: TypeTable<&str> = TypeTable {
    rows: &[
        (
            AntinomyType::IndividualVsCollective,
            "individual flourishing realized within a community that protects it",
        ),
        (
            AntinomyType::UtilityVsRights,
            "maximizing welfare within the constraints that rights impose",
        ),
        (
            AntinomyType::AutonomyVsWelfare,
            "supporting people in making informed choices about their own welfare",
        ),
        (
            AntinomyType::TransparencyVsPerformance,
            "explanations exposed at the boundaries of an optimized core",
        ),
        (
            AntinomyType::GeneralityVsSpecialization,
            "a general core with specialized extensions",
        ),
    ],
    fallback: "a higher-order principle that preserves the valid core of both claims",
};

/// Dialectical progression: (higher concept, guiding question).
pub(crate) static DIALECTICAL_STEPS: TypeTable<(&str, &str)> = TypeTable {
    rows: &[
        (
            AntinomyType::RobustnessVsAdaptability,
            (
                "resilience",
                "How can the system change without losing what makes it reliable?",
            ),
        ),
        (
            AntinomyType::FiniteVsInfinite,
            (
                "the endless task of inquiry",
                "What would it mean for the whole series of conditions to be given at once?",
            ),
        ),
        (
            AntinomyType::IndividualVsCollective,
            (
                "mutual recognition",
                "What does each side need from the other in order to exist at all?",
            ),
        ),
    ],
    fallback: (
        "a more comprehensive understanding",
        "What assumption do both claims share that might be false?",
    ),
};

/// Levels of analysis: (thesis holds at, antithesis holds at).
pub(crate) static ANALYSIS_LEVELS: TypeTable<(&str, &str)> = TypeTable {
    rows: &[
        (
            AntinomyType::DeterministicVsRandom,
            ("the level of underlying laws", "the level of observed outcomes"),
        ),
        (
            AntinomyType::GeneralityVsSpecialization,
            ("the architecture level", "the component level"),
        ),
        (
            AntinomyType::AtomicVsContinuous,
            ("the level of physical parts", "the level of spatial magnitude"),
        ),
        (
            AntinomyType::TeleologyVsMechanism,
            ("the level of the organism as a whole", "the level of its constituent processes"),
        ),
    ],
    fallback: ("the abstract level", "the concrete level"),
};

/// Canned compromises for practical resolution.
pub(crate) static PRACTICAL_SOLUTIONS: TypeTable<&str> = TypeTable {
    rows: &[
        (
            AntinomyType::TransparencyVsPerformance,
            "Keep a fast primary path and produce explanations on demand or asynchronously for decisions that need auditing.",
        ),
        (
            AntinomyType::GeneralityVsSpecialization,
            "Build a general core and add specialized modules at well-defined extension points.",
        ),
        (
            AntinomyType::RobustnessVsAdaptability,
            "Freeze the public interfaces and allow change behind them, guarded by regression tests.",
        ),
        (
            AntinomyType::AutonomyVsWelfare,
            "Inform first, then respect the choice unless serious and irreversible harm is likely.",
        ),
        (
            AntinomyType::UtilityVsRights,
            "Adopt the policy with the best outcome among those that violate no one's rights.",
        ),
    ],
    fallback: "Choose the option that meets the minimum requirements of both claims and revisit it as evidence accumulates.",
};
