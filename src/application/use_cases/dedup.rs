// ============================================================
// DUPLICATE REDUCER
// ============================================================
// Collapse validated drafts by exact question text

use std::collections::HashSet;

use crate::domain::question::QuestionDraft;

/// Drop drafts whose question text exactly matches an earlier draft.
///
/// First occurrence wins; order of the kept drafts equals the input order.
/// The match is case-sensitive, mirroring the validator's comparisons.
pub fn dedupe_by_question_text(drafts: Vec<QuestionDraft>) -> (Vec<QuestionDraft>, usize) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(drafts.len());
    let mut duplicate_count = 0;

    for draft in drafts {
        if seen.insert(draft.question_text.clone()) {
            kept.push(draft);
        } else {
            duplicate_count += 1;
        }
    }

    (kept, duplicate_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, level: &str) -> QuestionDraft {
        QuestionDraft {
            question_text: text.to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_answer: "a".to_string(),
            difficulty_level: level.to_string(),
            blooms_level: "L1".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let input = vec![draft("q1", "easy"), draft("q2", "easy"), draft("q1", "hard")];

        let (kept, duplicates) = dedupe_by_question_text(input);

        assert_eq!(kept.len(), 2);
        assert_eq!(duplicates, 1);
        assert_eq!(kept[0].difficulty_level, "easy");
    }

    #[test]
    fn test_order_is_stable() {
        let input = vec![draft("c", ""), draft("a", ""), draft("b", ""), draft("a", "")];

        let (kept, _) = dedupe_by_question_text(input);

        let texts: Vec<&str> = kept.iter().map(|d| d.question_text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let input = vec![draft("q1", ""), draft("q1", ""), draft("q2", "")];

        let (once, first_drops) = dedupe_by_question_text(input);
        let (twice, second_drops) = dedupe_by_question_text(once.clone());

        assert_eq!(once, twice);
        assert_eq!(first_drops, 1);
        assert_eq!(second_drops, 0);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let input = vec![draft("What?", ""), draft("what?", "")];

        let (kept, duplicates) = dedupe_by_question_text(input);

        assert_eq!(kept.len(), 2);
        assert_eq!(duplicates, 0);
    }

    #[test]
    fn test_empty_input() {
        let (kept, duplicates) = dedupe_by_question_text(Vec::new());

        assert!(kept.is_empty());
        assert_eq!(duplicates, 0);
    }
}
