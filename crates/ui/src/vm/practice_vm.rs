use assess_core::model::Question;
use assess_core::recommend::Recommendation;
use assess_core::ChapterFilter;

/// Label of the unfiltered chapter choice.
pub const CHAPTER_ALL: &str = "All";

/// One row of the practice question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeQuestionVm {
    pub text: String,
    pub level_label: String,
    pub fundamental_label: String,
}

/// One entry of the "recommended based on diagnostics" block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationVm {
    pub title: String,
    pub detail: String,
}

#[must_use]
pub fn map_practice_question(question: &Question) -> PracticeQuestionVm {
    PracticeQuestionVm {
        text: question.text().to_string(),
        level_label: question.level().label().to_string(),
        fundamental_label: question.fundamental().label().to_string(),
    }
}

#[must_use]
pub fn map_recommendation(recommendation: &Recommendation) -> RecommendationVm {
    RecommendationVm {
        title: recommendation.fundamental.label().to_uppercase(),
        detail: format!("{} flagged mistakes.", recommendation.miss_count),
    }
}

/// Translate the picker's selected label into a catalog filter.
#[must_use]
pub fn filter_from_choice(choice: &str) -> ChapterFilter {
    if choice == CHAPTER_ALL {
        ChapterFilter::All
    } else {
        ChapterFilter::Chapter(choice.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::{Fundamental, Level, QuestionId};

    #[test]
    fn question_maps_labels() {
        let question = Question::new(
            QuestionId::new(1),
            Level::Hard,
            "Q",
            "A",
            Fundamental::Application,
            "Relative Speed",
        )
        .unwrap();

        let vm = map_practice_question(&question);
        assert_eq!(vm.level_label, "hard");
        assert_eq!(vm.fundamental_label, "application");
    }

    #[test]
    fn recommendation_maps_to_shouty_title() {
        let vm = map_recommendation(&Recommendation {
            fundamental: Fundamental::Retention,
            miss_count: 2,
        });
        assert_eq!(vm.title, "RETENTION");
        assert_eq!(vm.detail, "2 flagged mistakes.");
    }

    #[test]
    fn all_choice_maps_to_unfiltered() {
        assert_eq!(filter_from_choice("All"), ChapterFilter::All);
        assert_eq!(
            filter_from_choice("Formulae"),
            ChapterFilter::Chapter("Formulae".to_string())
        );
    }
}
