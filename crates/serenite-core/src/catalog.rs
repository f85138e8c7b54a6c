//! Static exercise catalog.
//!
//! Immutable lookup from exercise id to display title and ordered
//! instruction steps. `get` never fails: unrecognized ids fall back to
//! the deep-breathing entry.

/// One guided exercise: id, display title, ordered instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub instructions: &'static [&'static str],
}

const BREATHING: ExerciseEntry = ExerciseEntry {
    id: "breathing",
    title: "Diaphragmatic Breathing",
    instructions: &[
        "Lie down with one hand on your chest, the other on your belly",
        "Inhale slowly through the nose, letting the belly rise (4 seconds)",
        "Exhale through the mouth (6 seconds)",
        "Repeat until the time is up",
    ],
};

const ENTRIES: &[ExerciseEntry] = &[
    BREATHING,
    ExerciseEntry {
        id: "breathing478",
        title: "4-7-8 Technique",
        instructions: &[
            "Inhale for 4 seconds",
            "Hold your breath for 7 seconds",
            "Exhale for 8 seconds",
            "Repeat for 4 cycles",
        ],
    },
    ExerciseEntry {
        id: "meditation",
        title: "Mindfulness Meditation",
        instructions: &[
            "Observe your breathing without controlling it",
            "Focus on the sensations at the nostrils",
            "When the mind wanders, gently return to the breath",
            "Stay present and kind to yourself",
        ],
    },
    ExerciseEntry {
        id: "progressive",
        title: "Progressive Muscle Relaxation",
        instructions: &[
            "Tense then release each muscle group (5-10 seconds)",
            "Progress from feet to calves, thighs, abdomen, arms, shoulders, face",
            "Focus on the contrast between tension and release",
            "Breathe deeply between each muscle group",
        ],
    },
    ExerciseEntry {
        id: "extended",
        title: "Extended Meditation",
        instructions: &[
            "Gradually increase the length of your meditation",
            "Bring mindful attention to bodily sensations",
            "Practice alternate-nostril breathing",
            "Observe your thoughts without judgment",
        ],
    },
    ExerciseEntry {
        id: "cognitive",
        title: "Cognitive Restructuring",
        instructions: &[
            "Identify your automatic anxious thoughts",
            "Question their validity: what evidence is for and against?",
            "Develop more realistic alternative thoughts",
            "Keep a thought journal to track your progress",
        ],
    },
    ExerciseEntry {
        id: "exposure",
        title: "Graded Exposure",
        instructions: &[
            "Identify your anxiety triggers on a 0-10 scale",
            "Expose yourself gradually to situations rated 2-5 out of 10",
            "Stay until the anxiety drops by half",
            "Use interoceptive exposure to tame panic sensations",
        ],
    },
    ExerciseEntry {
        id: "biofeedback",
        title: "Biofeedback and Visualization",
        instructions: &[
            "Cardiac coherence breathing (4s in, 6s out)",
            "Positive visualization of stressful situations",
            "Develop personal calming mantras",
            "Practice visualizing your safe place",
        ],
    },
    ExerciseEntry {
        id: "proactive",
        title: "Proactive Management",
        instructions: &[
            "Plan early-intervention strategies",
            "Build a mental emergency kit",
            "Practice regularly, even without anxiety",
            "Learn to recognize your early warning signals",
        ],
    },
    ExerciseEntry {
        id: "emergency-breathing",
        title: "Emergency 4-7-8 Breathing",
        instructions: &[
            "Inhale through the nose for 4 seconds",
            "Hold your breath for 7 seconds",
            "Exhale fully through the mouth for 8 seconds",
            "Repeat the cycle at least 4 times",
        ],
    },
];

/// All catalog entries, in display order.
pub fn entries() -> &'static [ExerciseEntry] {
    ENTRIES
}

/// Look up an exercise by id, falling back to deep breathing.
pub fn get(id: &str) -> &'static ExerciseEntry {
    ENTRIES.iter().find(|e| e.id == id).unwrap_or(&BREATHING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(get("meditation").title, "Mindfulness Meditation");
        assert_eq!(get("emergency-breathing").instructions.len(), 4);
    }

    #[test]
    fn unknown_id_falls_back_to_breathing() {
        assert_eq!(get("not-an-exercise").id, "breathing");
        assert_eq!(get("").id, "breathing");
    }

    #[test]
    fn catalog_has_ten_entries_with_instructions() {
        assert_eq!(entries().len(), 10);
        for entry in entries() {
            assert!(!entry.instructions.is_empty());
        }
    }
}
