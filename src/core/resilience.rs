//! Resilience scorer (max 100)

use tracing::debug;

use crate::core::keywords;
use crate::core::text_signals::{count_indicators, has_any_indicator, word_count};
use crate::types::{
    Dimension, Grade, RangeTable, ResilienceBreakdown, ResilienceLevel, ResilienceScore,
    ResilienceStory, TierTable,
};
use crate::RESILIENCE_MAX;

// =============================================================================
// TIERS
// =============================================================================

const SEVERE_ADVERSITY_HITS: usize = 3;
const SEVERE_ADVERSITY_POINTS: u32 = 25;
const DETAILED_STORY_WORDS: usize = 100;
const DETAILED_STORY_BONUS: u32 = 10;
const SOME_ADVERSITY_POINTS: u32 = 15;
const UNSPECIFIC_STORY_POINTS: u32 = 5;

/// Came close to quitting but stayed scores highest; 10 means they quit
const QUIT_SCALE: RangeTable =
    RangeTable::new(&[(7.0, 9.0, 35), (5.0, 6.0, 25), (3.0, 4.0, 15), (0.0, 2.0, 10)], 5);

/// Distinct intrinsic-motivation hits
const MOTIVATION: TierTable<usize> = TierTable::at_least(&[(3, 30), (2, 22), (1, 15)], 0);
const DETAILED_REASON_WORDS: usize = 50;
const DETAILED_REASON_POINTS: u32 = 10;
const UNSPECIFIC_REASON_POINTS: u32 = 5;

const LEVELS: TierTable<u32, ResilienceLevel> = TierTable::at_least(
    &[
        (85, ResilienceLevel::Exceptional),
        (70, ResilienceLevel::Strong),
        (55, ResilienceLevel::Good),
        (40, ResilienceLevel::Developing),
    ],
    ResilienceLevel::NeedsWork,
);

const SHORT_STORY_WORDS: usize = 50;

/// Quit-scale rating from which the persistence message is shown
const NEAR_QUIT: u8 = 7;

// =============================================================================
// SCORER
// =============================================================================

pub fn score_resilience(story: &ResilienceStory) -> ResilienceScore {
    let adversity = adversity_points(&story.story);
    let quit_scale = QUIT_SCALE.points(f64::from(story.quit_scale));
    let motivation = motivation_points(&story.reason);

    let total = Dimension::Resilience.clamp(adversity + quit_scale + motivation);
    let level = resilience_level(total);

    let mut feedback = vec![level_message(level).to_string()];
    if story.quit_scale >= NEAR_QUIT {
        feedback.push(
            "Facing near-quit moments and pushing through is exactly what shows true determination"
                .to_string(),
        );
    }
    if !has_any_indicator(&story.reason, keywords::DEEPER_WHY) {
        feedback.push(
            "Try to connect with the deeper \"why\" - intrinsic motivation outlasts external rewards"
                .to_string(),
        );
    }
    if word_count(&story.story) < SHORT_STORY_WORDS {
        feedback.push(
            "Share more details about your hardest moment - specifics reveal real adversity"
                .to_string(),
        );
    }

    debug!(
        total,
        adversity,
        quit_scale,
        motivation,
        level = ?level,
        "scored resilience"
    );

    ResilienceScore {
        total,
        breakdown: ResilienceBreakdown {
            adversity,
            quit_scale,
            motivation,
        },
        level,
        feedback,
        grade: Grade::from_share(total, RESILIENCE_MAX),
    }
}

pub fn resilience_level(total: u32) -> ResilienceLevel {
    LEVELS.lookup(total)
}

fn level_message(level: ResilienceLevel) -> &'static str {
    match level {
        ResilienceLevel::Exceptional => {
            "You show exceptional resilience - the kind that gets through the hardest startup challenges"
        }
        ResilienceLevel::Strong => {
            "Strong resilience - you have what it takes to push through setbacks"
        }
        ResilienceLevel::Good => {
            "Good resilience, but consider what will keep you going when things get really hard"
        }
        ResilienceLevel::Developing => {
            "Your resilience is still developing - startups will test you more than you expect"
        }
        ResilienceLevel::NeedsWork => {
            "Reflect deeply on your commitment - the startup journey requires extraordinary perseverance"
        }
    }
}

fn adversity_points(story: &str) -> u32 {
    let hits = count_indicators(story, keywords::ADVERSITY);
    if hits >= SEVERE_ADVERSITY_HITS {
        let bonus = if word_count(story) >= DETAILED_STORY_WORDS {
            DETAILED_STORY_BONUS
        } else {
            0
        };
        SEVERE_ADVERSITY_POINTS + bonus
    } else if hits > 0 {
        SOME_ADVERSITY_POINTS
    } else if !story.trim().is_empty() {
        UNSPECIFIC_STORY_POINTS
    } else {
        0
    }
}

fn motivation_points(reason: &str) -> u32 {
    let hits = count_indicators(reason, keywords::INTRINSIC_MOTIVATION);
    if hits > 0 {
        MOTIVATION.points(hits)
    } else if word_count(reason) >= DETAILED_REASON_WORDS {
        DETAILED_REASON_POINTS
    } else if !reason.trim().is_empty() {
        UNSPECIFIC_REASON_POINTS
    } else {
        0
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn story(quit_scale: u8) -> ResilienceStory {
        ResilienceStory {
            quit_scale,
            ..Default::default()
        }
    }

    #[test]
    fn test_quit_scale_peaks_in_the_middle() {
        let points = |scale| score_resilience(&story(scale)).breakdown.quit_scale;
        assert_eq!(points(8), 35);
        assert_eq!(points(6), 25);
        assert_eq!(points(3), 15);
        assert_eq!(points(1), 10);
        assert_eq!(points(0), 10);
        assert_eq!(points(10), 5);
        assert!(points(8) > points(10));
        assert!(points(8) > points(1));
    }

    #[test]
    fn test_adversity_tiers() {
        assert_eq!(adversity_points(""), 0);
        assert_eq!(adversity_points("It was hard."), 5);
        assert_eq!(adversity_points("Our biggest client was lost."), 15);
        assert_eq!(
            adversity_points("We failed the audit, got rejected by investors and ran out of cash."),
            25
        );
        let detailed = format!(
            "We failed, got rejected and ran out of money. {}",
            "word ".repeat(100)
        );
        assert_eq!(adversity_points(&detailed), 35);
    }

    #[test]
    fn test_motivation_tiers() {
        assert_eq!(motivation_points(""), 0);
        assert_eq!(motivation_points("Money."), 5);
        assert_eq!(motivation_points(&"word ".repeat(50)), 10);
        assert_eq!(motivation_points("I believe in it."), 15);
        assert_eq!(motivation_points("I believe in the mission."), 22);
        assert_eq!(
            motivation_points("I believe in the mission and I care about these clinics."),
            30
        );
    }

    #[test]
    fn test_levels() {
        assert_eq!(resilience_level(100), ResilienceLevel::Exceptional);
        assert_eq!(resilience_level(85), ResilienceLevel::Exceptional);
        assert_eq!(resilience_level(70), ResilienceLevel::Strong);
        assert_eq!(resilience_level(55), ResilienceLevel::Good);
        assert_eq!(resilience_level(40), ResilienceLevel::Developing);
        assert_eq!(resilience_level(39), ResilienceLevel::NeedsWork);
    }

    #[test]
    fn test_feedback_starts_with_level_message() {
        let result = score_resilience(&story(0));
        assert_eq!(result.total, 10);
        assert_eq!(result.level, ResilienceLevel::NeedsWork);
        assert!(result.feedback[0].starts_with("Reflect deeply"));
        assert!(result.feedback.iter().any(|f| f.contains("deeper \"why\"")));
    }

    #[test]
    fn test_near_quit_message_from_seven_up() {
        let near_quit = |scale| {
            score_resilience(&story(scale))
                .feedback
                .iter()
                .any(|f| f.contains("near-quit moments"))
        };
        assert!(!near_quit(6));
        assert!(near_quit(7));
        assert!(near_quit(9));
        assert!(near_quit(10));
    }
}
