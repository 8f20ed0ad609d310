use rand::seq::IndexedRandom;

pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "Push yourself, because no one else is going to do it for you.",
    "The body achieves what the mind believes.",
    "What seems impossible today will become your warm-up tomorrow.",
    "Don't limit your challenges, challenge your limits.",
    "No pain, no gain. Get up and train.",
];

pub fn random_quote() -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}
