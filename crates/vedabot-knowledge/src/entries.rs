//! The knowledge table — ordered term → explanation entries.
//!
//! Order matters: the matcher returns the first entry whose term occurs in
//! the query, so "karma and dharma" resolves to DHARMA.

/// One term of the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Lowercase lookup key.
    pub term: &'static str,
    /// Display name used in the welcome list.
    pub title: &'static str,
    /// Short gloss for the welcome list.
    pub summary: &'static str,
    pub body: &'static str,
}

impl KnowledgeEntry {
    /// Header (uppercased term) followed by the body.
    pub fn render(&self) -> String {
        format!("📖 **{}**\n\n{}", self.term.to_uppercase(), self.body)
    }
}

// ─── Entries ─────────────────────────────────────────────────────────────────

static ENTRIES: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        term: "vedas",
        title: "Vedas",
        summary: "The ancient sacred texts",
        body: "The Vedas are the oldest sacred texts of Hinduism, composed in ancient Sanskrit. There are four main Vedas:
1. Rigveda - Collection of hymns and prayers
2. Samaveda - Melodies and chants
3. Yajurveda - Sacrificial formulas and rituals
4. Atharvaveda - Spells, charms, and practical knowledge

They are considered apauruṣeya (not of human origin) and form the foundation of Hindu philosophy and practice.",
    },
    KnowledgeEntry {
        term: "dharma",
        title: "Dharma",
        summary: "Righteousness and duty",
        body: "Dharma is a fundamental concept in Vedic philosophy meaning 'righteousness' or 'duty'. It refers to:
- The cosmic law and order that governs the universe
- Individual duty and moral obligations based on one's station in life
- Righteous living in accordance with natural and moral law
- The path of virtue that leads to spiritual growth

Dharma varies according to one's age, caste, gender, and circumstances (svadharma).",
    },
    KnowledgeEntry {
        term: "karma",
        title: "Karma",
        summary: "Law of action and consequence",
        body: "Karma is the law of cause and effect governing actions and their consequences. Key aspects include:
- Every action (physical, mental, or verbal) creates consequences
- Good actions lead to positive results, bad actions to negative ones
- Karma can manifest in this life or future lives
- It's not fatalistic - one can change their karma through right action
- Liberation (moksha) involves transcending the cycle of karma

The three types are: Sanchita (accumulated), Prarabdha (current life), and Agami (future).",
    },
    KnowledgeEntry {
        term: "moksha",
        title: "Moksha",
        summary: "Liberation and spiritual freedom",
        body: "Moksha is the ultimate goal of human life in Vedic philosophy, meaning 'liberation' or 'release'. It represents:
- Freedom from the cycle of birth, death, and rebirth (samsara)
- Realization of one's true nature as Atman (soul)
- Union with Brahman (universal consciousness)
- Complete cessation of suffering and ignorance
- The fourth and highest goal of life (purushartha)

It can be achieved through various paths: knowledge (jnana), devotion (bhakti), action (karma), or meditation (raja yoga).",
    },
    KnowledgeEntry {
        term: "atman",
        title: "Atman",
        summary: "The individual soul",
        body: "Atman is the individual soul or self in Vedic philosophy. Key teachings include:
- The eternal, unchanging essence of every being
- Distinct from the body, mind, and ego
- Identical in nature to Brahman (universal soul)
- The witness consciousness that observes all experiences
- Realizing the Atman is key to achieving moksha

The Upanishads teach 'Tat tvam asi' (Thou art That) - the identity of Atman and Brahman.",
    },
    KnowledgeEntry {
        term: "brahman",
        title: "Brahman",
        summary: "Ultimate reality",
        body: "Brahman is the ultimate reality in Vedic philosophy. Characteristics include:
- The absolute, formless, infinite consciousness
- The source and essence of all existence
- Beyond all attributes yet the ground of all being
- Both immanent (within everything) and transcendent (beyond everything)
- Described as Sat-Chit-Ananda (Existence-Consciousness-Bliss)

Understanding Brahman is the highest knowledge leading to liberation.",
    },
    KnowledgeEntry {
        term: "upanishads",
        title: "Upanishads",
        summary: "Philosophical teachings",
        body: "The Upanishads are philosophical texts that form the theoretical foundation of Hinduism. They:
- Explore the nature of ultimate reality (Brahman)
- Teach the identity of individual soul (Atman) with universal soul
- Present various methods for spiritual realization
- Include famous teachings like 'Om Tat Sat' and 'Tat tvam asi'
- Are considered the end portion of the Vedas (Vedanta)

Major Upanishads include Isha, Kena, Katha, Prashna, Mundaka, and Chandogya.",
    },
    KnowledgeEntry {
        term: "yoga",
        title: "Yoga",
        summary: "Union and spiritual practice",
        body: "Yoga in Vedic context means 'union' and refers to:
- The practice of connecting individual consciousness with universal consciousness
- Various paths including Karma Yoga (action), Bhakti Yoga (devotion), Jnana Yoga (knowledge)
- The eight-limbed path (Ashtanga) outlined by Patanjali
- Physical, mental, and spiritual practices for self-realization
- The ultimate goal of achieving samadhi (unified consciousness)

Yoga is both a practice and a state of being.",
    },
    KnowledgeEntry {
        term: "samadhi",
        title: "Samadhi",
        summary: "Highest consciousness",
        body: "Samadhi is the highest state of consciousness in Vedic meditation. It involves:
- Complete absorption and unity of consciousness
- Transcendence of the subject-object duality
- Direct experience of truth beyond mental concepts
- The eighth and final limb of Patanjali's eight-fold yoga path
- Different levels from Savikalpa (with form) to Nirvikalpa (formless)

It represents the practical realization of Vedic spiritual goals.",
    },
    KnowledgeEntry {
        term: "samsara",
        title: "Samsara",
        summary: "Cycle of birth and death",
        body: "Samsara is the cycle of birth, death, and rebirth in Vedic philosophy. Key aspects:
- The continuous cycle of existence driven by karma
- Characterized by suffering due to ignorance and attachment
- All beings are caught in this cycle until liberation
- Governed by the law of cause and effect
- Escape is possible through spiritual knowledge and practice

The goal is to achieve moksha and break free from samsara.",
    },
];

/// All entries, in match order.
pub fn entries() -> &'static [KnowledgeEntry] {
    ENTRIES
}

/// Exact lookup by term (case-insensitive, surrounding whitespace ignored).
pub fn lookup(term: &str) -> Option<&'static KnowledgeEntry> {
    let term = term.trim().to_lowercase();
    ENTRIES.iter().find(|e| e.term == term)
}

/// List all known terms, in match order.
pub fn term_names() -> Vec<&'static str> {
    ENTRIES.iter().map(|e| e.term).collect()
}
