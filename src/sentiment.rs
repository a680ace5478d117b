use crate::lexicon::LexiconSet;
use crate::tokenize::Normalized;

const INTENSIFIER_BOOST: f64 = 1.5;

/// Lexicon-based polarity scorer.
///
/// Walks the tokens once, left to right. A negator flips the next
/// sentiment-bearing word only; an intensifier boosts the word directly
/// after it only.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: LexiconSet,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: LexiconSet) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &LexiconSet {
        &self.lexicon
    }

    /// Polarity of `text` in `[-1.0, 1.0]`; exactly `0.0` when no word
    /// carries sentiment.
    pub fn analyze_sentiment(&self, text: &str) -> f64 {
        self.score(&Normalized::new(text))
    }

    pub fn score(&self, normalized: &Normalized) -> f64 {
        let mut sum = 0.0;
        let mut bearing: usize = 0;
        let mut negated = false;
        let mut after_intensifier = false;

        for word in &normalized.tokens {
            let word = word.as_str();
            if self.lexicon.is_negator(word) {
                negated = true;
                after_intensifier = false;
                continue;
            }

            let mut polarity = if self.lexicon.is_positive(word) {
                1.0
            } else if self.lexicon.is_negative(word) {
                -1.0
            } else {
                0.0
            };

            if polarity != 0.0 {
                if negated {
                    polarity = -polarity;
                }
                if after_intensifier {
                    polarity *= INTENSIFIER_BOOST;
                }
                sum += polarity;
                bearing += 1;
                negated = false;
            }

            after_intensifier = self.lexicon.is_intensifier(word);
        }

        if bearing == 0 {
            return 0.0;
        }
        (sum / bearing as f64).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::default()
    }

    #[test]
    fn empty_and_neutral_text_score_zero() {
        assert_eq!(analyzer().analyze_sentiment(""), 0.0);
        assert_eq!(analyzer().analyze_sentiment("The meeting is on Tuesday."), 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let a = analyzer();
        assert_eq!(a.analyze_sentiment("good"), 1.0);
        assert_eq!(a.analyze_sentiment("not good"), -1.0);
        assert_eq!(a.analyze_sentiment("never bad"), 1.0);
    }

    #[test]
    fn negation_applies_to_one_sentiment_word() {
        // not good (-1) + great (+1)
        assert_eq!(analyzer().analyze_sentiment("not good but great"), 0.0);
    }

    #[test]
    fn negation_survives_neutral_words() {
        // negated flag is only consumed by a sentiment-bearing word
        assert_eq!(analyzer().analyze_sentiment("not the best"), -1.0);
    }

    #[test]
    fn intensifier_must_precede() {
        let a = analyzer();
        // good (+1) + very good (+1.5) = 2.5 / 2
        assert_eq!(a.analyze_sentiment("good and very good"), 1.0);
        // bad (-1) + very good (+1.5) = 0.5 / 2
        assert!((a.analyze_sentiment("bad, very good") - 0.25).abs() < 1e-12);
        // intensifier after the word does nothing
        assert!((a.analyze_sentiment("bad, good very") - 0.0).abs() < 1e-12);
    }

    #[test]
    fn intensifier_is_not_transitive() {
        // very really good: only "really" precedes "good"
        let a = analyzer();
        assert!((a.analyze_sentiment("bad very really good") - 0.25).abs() < 1e-12);
        // "very" then a neutral word then "good": no boost
        assert!((a.analyze_sentiment("bad very much good") - 0.0).abs() < 1e-12);
    }

    #[test]
    fn score_is_clamped() {
        let a = analyzer();
        assert_eq!(a.analyze_sentiment("extremely terrible"), -1.0);
        assert_eq!(a.analyze_sentiment("truly awesome"), 1.0);
    }

    #[test]
    fn negator_words_do_not_score_as_negative() {
        // "no" and "not" are in both lists; negator check wins
        assert_eq!(analyzer().analyze_sentiment("no"), 0.0);
        assert_eq!(analyzer().analyze_sentiment("never, not, no"), 0.0);
    }

    #[test]
    fn custom_lexicon() {
        let lex = LexiconSet::new(["solid"], ["flaky"], ["super"], ["hardly"]);
        let a = SentimentAnalyzer::new(lex);
        assert_eq!(a.analyze_sentiment("a solid plan"), 1.0);
        assert_eq!(a.analyze_sentiment("hardly solid"), -1.0);
        assert_eq!(a.analyze_sentiment("good"), 0.0);
    }
}
