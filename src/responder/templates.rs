//! Static reply content used by the category cascade and crisis builder.

pub const OPENING: &[&str] = &[
    "I hear you. Thank you for sharing that with me — you're not alone in this.",
    "I'm really glad you reached out. Tell me what's been happening recently.",
    "It takes courage to share that. I'm here to listen—what's on your mind right now?",
];

pub const GROUNDING: &[&str] = &[
    "Let's try a quick grounding exercise: name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste. Tell me when you're ready.",
    "Try this 5-4-3-2-1 grounding: look for 5 things you see, 4 you can touch, 3 you hear, 2 you smell, and 1 you can taste. Want me to guide you step-by-step?",
];

pub const BREATHING: &[&str] = &[
    "Try a simple breathing technique: breathe in for 4 seconds, hold for 4, breathe out for 6 — repeat 4 times. Want me to guide you through one round now?",
    "Let's do a 1-minute breathing pause: inhale 4, hold 4, exhale 6. Focus on the breath and your chest rising and falling.",
];

pub const BEHAVIORAL: &[&str] = &[
    "Small actions can change how you feel. Is there one small thing you could try today — maybe a short walk, a glass of water, or calling a friend?",
    "Would you be open to setting a tiny goal for today, something achievable in 10–20 minutes?",
];

pub const REASSURE: &[&str] = &[
    "You're doing the best you can in a hard moment. It's okay to ask for help.",
    "Feelings can feel overwhelming, but they can change. You're taking a step by talking about it.",
];

pub const LOW_MOOD_LEAD: &str = "I'm sorry you're feeling sad or low. That feeling is valid. ";

pub const ANXIETY_FOLLOW_UP: &str =
    "\n\nWould you like another short grounding or to talk about what triggered this?";

pub const LONELINESS_LEAD: &str = "Feeling lonely can be heavy. ";

pub const SLEEP: &str = "Sleep and rest matter a lot. Try a short wind-down: reduce screens, dim lights, and try gentle breathing. \
Would you like some sleep-focused tips or a short relaxation exercise?";

pub const FAREWELL: &str =
    "You’re welcome. Take care of yourself — I'm here whenever you need to talk.";

pub const COPING_IDEAS: &str = "Here are some coping ideas:\n\
1. Breathing pauses: inhale 4 — hold 4 — exhale 6 (repeat 3–5x).\n\
2. Grounding (5-4-3-2-1) to bring focus to the present.\n\
3. Small action: a 10-minute walk, water, or texting a friend.\n\
4. Write one thought and challenge it (CBT).\n\nWhich of these would you like to try now?";

pub const REFLECTIVE: &str = "Thank you for telling me. Can you say more about what you were feeling in that moment? \
If you're unsure, try describing the last hour and any thoughts that stood out.";

// ── Crisis ──────────────────────────────────────────────────────────────

pub const CRISIS_PREAMBLE: &str = "I'm really sorry — it sounds like you're in serious distress. \
If you are in immediate danger, please call your local emergency number right now.\n\n\
Here are some crisis resources:\n";

pub const CRISIS_CLOSING: &str = "\nIf you want, I can guide you through a 1-minute grounding or breathing exercise now. Would you like that?";
