use crate::core::types::Post;

/// Tokenization rule for word matching: split on whitespace, trim leading and
/// trailing non-alphanumeric characters from each token, compare lowercased.
/// "Java!" and "#hype" therefore match "java" and "hype".
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

pub fn contains_any_word(post: &Post, words: &[String]) -> bool {
    let tokens = tokenize(&post.text);
    words
        .iter()
        .any(|word| tokens.iter().any(|token| *token == word.to_lowercase()))
}

pub fn containing(posts: &[Post], words: &[String]) -> Vec<Post> {
    let wanted: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    posts
        .iter()
        .filter(|post| {
            let tokens = tokenize(&post.text);
            wanted.iter().any(|word| tokens.contains(word))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    fn instant(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 2, 17, h, 0, 0).unwrap()
    }

    fn feed() -> Vec<Post> {
        vec![
            Post::new(1, "alyssa", "is it reasonable to talk about rivest so much?", instant(10)),
            Post::new(2, "bbitdiddle", "rivest talk in 30 minutes #hype", instant(11)),
            Post::new(3, "ALYSSA", "Java is fun! #programming", instant(12)),
        ]
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_trims_edge_punctuation() {
        assert_eq!(tokenize("I love Java!"), vec!["i", "love", "java"]);
        assert_eq!(tokenize("rivest talk in 30 minutes #hype"), vec!["rivest", "talk", "in", "30", "minutes", "hype"]);
        assert_eq!(tokenize("so much?"), vec!["so", "much"]);
    }

    #[test]
    fn test_tokenize_keeps_interior_punctuation() {
        assert_eq!(tokenize("bitdiddle@mit.edu"), vec!["bitdiddle@mit.edu"]);
    }

    #[test]
    fn test_tokenize_drops_pure_punctuation_tokens() {
        assert_eq!(tokenize("well... ?! ok"), vec!["well", "ok"]);
    }

    #[test]
    fn test_containing_single_word() {
        let result = containing(&feed()[..2], &words(&["talk"]));
        assert_eq!(result.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_containing_case_insensitive() {
        let result = containing(&feed(), &words(&["java"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);

        let result = containing(&feed(), &words(&["RIVEST"]));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_containing_word_with_trailing_punctuation() {
        let post = Post::new(4, "bob", "I love Java!", instant(10));
        let result = containing(&[post], &words(&["java"]));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_containing_multiple_words_no_duplicates() {
        // "talk" hits posts 1 and 2, "java" hits post 3; "rivest" also hits
        // 1 and 2 but must not duplicate them.
        let result = containing(&feed(), &words(&["talk", "java", "rivest"]));
        assert_eq!(result.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_containing_whole_tokens_only() {
        // "riv" is a substring of "rivest" but not a token.
        assert!(containing(&feed(), &words(&["riv"])).is_empty());
    }

    #[test]
    fn test_contains_any_word_predicate() {
        let post = Post::new(4, "bob", "I love Java!", instant(10));
        assert!(contains_any_word(&post, &words(&["JAVA"])));
        assert!(!contains_any_word(&post, &words(&["python"])));
    }

    #[test]
    fn test_containing_no_matches() {
        assert!(containing(&feed()[..2], &words(&["python"])).is_empty());
    }

    #[test]
    fn test_containing_empty_feed() {
        assert!(containing(&[], &words(&["talk"])).is_empty());
    }

    proptest! {
        #[test]
        fn prop_containing_preserves_relative_order(needle_idx in 0usize..3) {
            let posts = feed();
            let all = words(&["talk", "java", "rivest", "fun"]);
            let result = containing(&posts, &all[needle_idx..]);
            let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(ids, sorted);
        }

        #[test]
        fn prop_tokenize_output_is_lowercase(text in "\\PC{0,64}") {
            for token in tokenize(&text) {
                prop_assert_eq!(token.clone(), token.to_lowercase());
            }
        }
    }
}
