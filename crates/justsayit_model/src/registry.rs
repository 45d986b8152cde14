//! Fixed set of canned responses, compiled in.
//!
//! Every category maps to a non-empty list and the mapping never changes at
//! runtime. Ordering of [`Registry::entries`] is the order of [`Category::ALL`].

use crate::Category;

pub struct Registry;

impl Registry {
    pub fn get(category: Category) -> &'static [&'static str] {
        match category {
            Category::No => NO,
            Category::Yes => YES,
            Category::Maybe => MAYBE,
            Category::Joke => JOKE,
            Category::Motivation => MOTIVATION,
            Category::ThankYou => THANK_YOU,
            Category::Apology => APOLOGY,
        }
    }

    pub fn entries() -> impl Iterator<Item = (Category, &'static [&'static str])> {
        Category::ALL.into_iter().map(|c| (c, Registry::get(c)))
    }

    pub fn categories() -> &'static [Category] {
        &Category::ALL
    }

    pub fn contains(candidate: &str) -> bool {
        Category::ALL.iter().any(|c| c.as_str() == candidate)
    }
}

const NO: &[&str] = &[
    "No, thank you.",
    "I'll have to pass on that.",
    "Not this time, sorry.",
    "I'm going to decline.",
    "That's not going to work for me.",
    "I'd rather not.",
    "Thanks, but no thanks.",
    "I'll skip this one.",
    "Not interested, but thanks for asking.",
    "I'm going to say no.",
];

const YES: &[&str] = &[
    "Yes, absolutely!",
    "Sure thing.",
    "Count me in.",
    "Of course!",
    "Sounds good to me.",
    "Yes, let's do it.",
    "I'd be happy to.",
    "Definitely.",
    "You bet!",
    "Absolutely, no problem.",
];

const MAYBE: &[&str] = &[
    "Maybe, let me think about it.",
    "I'm not sure yet.",
    "Possibly, I'll let you know.",
    "Maybe, depends on the details.",
    "I'll consider it.",
    "Perhaps, I need more info.",
    "Maybe, I'll get back to you.",
    "I'm on the fence about this.",
    "Could be, let me see.",
    "Maybe, I'll think it over.",
];

const JOKE: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything.",
    "I told my computer I needed a break, and it said: no problem, I'll go to sleep.",
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "Why did the scarecrow win an award? He was outstanding in his field.",
    "A SQL query walks into a bar, goes up to two tables and asks: can I join you?",
    "I'm reading a book about anti-gravity. It's impossible to put down.",
    "Why was the math book sad? It had too many problems.",
    "Debugging: removing the needles from the haystack you put there yourself.",
];

const MOTIVATION: &[&str] = &[
    "You've got this!",
    "Believe in yourself and all that you are.",
    "Success is the sum of small efforts repeated day in and day out.",
    "The only way to do great work is to love what you do.",
    "Don't watch the clock; do what it does. Keep going.",
    "You are capable of amazing things.",
    "Every expert was once a beginner.",
    "The future belongs to those who believe in the beauty of their dreams.",
    "You miss 100% of the shots you don't take.",
    "It always seems impossible until it's done.",
];

const THANK_YOU: &[&str] = &[
    "Thank you so much!",
    "Thanks, I really appreciate it.",
    "I'm grateful for your help.",
    "Thanks a million!",
    "Much appreciated.",
    "Thank you, that means a lot.",
    "I can't thank you enough.",
    "Thanks for thinking of me.",
    "Many thanks!",
    "Thank you kindly.",
];

const APOLOGY: &[&str] = &[
    "I'm really sorry about that.",
    "My apologies for the inconvenience.",
    "I sincerely apologize.",
    "Sorry, that was my mistake.",
    "I apologize for any trouble caused.",
    "I'm sorry, I didn't mean to.",
    "Please accept my apologies.",
    "I'm truly sorry.",
    "Sorry for the mix-up.",
    "I apologize wholeheartedly.",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn no_category_is_empty() {
        for (category, messages) in Registry::entries() {
            assert!(!messages.is_empty(), "{category} has no messages");
            assert!(
                messages.iter().all(|m| !m.trim().is_empty()),
                "{category} has a blank message"
            );
        }
    }

    #[test]
    fn every_category_has_ten_distinct_messages() {
        for (category, messages) in Registry::entries() {
            let distinct: HashSet<_> = messages.iter().collect();
            assert_eq!(distinct.len(), 10, "{category}");
        }
    }

    #[test]
    fn entries_follow_category_order() {
        let keys: Vec<_> = Registry::entries().map(|(c, _)| c).collect();
        assert_eq!(keys, Registry::categories());
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn membership() {
        for category in Registry::categories() {
            assert!(Registry::contains(category.as_str()));
        }
        assert!(Registry::contains("thank-you"));
        assert!(!Registry::contains("thankyou"));
        assert!(!Registry::contains(""));
        assert!(!Registry::contains("NO"));
    }
}
