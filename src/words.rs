//! Built-in word list used when no word file is configured.

/// Lowercase words with at least two distinct letters each.
pub const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "awesome", "arise", "balloon", "basket", "bench",
    "birthday", "book", "briefcase", "camera", "camping", "candle", "cat", "cauliflower",
    "children", "classroom", "coffee", "colorful", "cookie", "creative", "cruise", "dance",
    "daytime", "dinosaur", "doorknob", "dream", "dusk", "elephant", "emerald", "electric",
    "flowers", "follow", "fox", "frame", "frequent", "funnel", "guitar", "grocery", "giggle",
    "haircut", "homemade", "honey", "hundred", "igloo", "invite", "journal", "jump", "kangaroo",
    "keyboard", "kitchen", "koala", "landscape", "laugh", "lemon", "letter", "magazine",
    "marshmallow", "melody", "monument", "mountain", "music", "night", "negotiate", "octopus",
    "opposite", "painting", "picnic", "pillow", "pizza", "podcast", "puppy", "puzzle", "recipe",
    "restaurant", "revolve", "secret", "spaceship", "stargazing", "sunrise", "taxi", "together",
    "tourist", "travel", "unicorn", "uniform", "violin", "visitor", "walrus", "wander",
    "whirlwind", "xylophone", "yogurt", "zebra", "zigzag", "zoology",
];

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_unscramble::WordPool;

    #[test]
    fn test_builtin_words_form_a_valid_pool() {
        let pool = WordPool::new(DEFAULT_WORDS).expect("built-in words are valid");
        assert_eq!(pool.len(), DEFAULT_WORDS.len());
    }
}
