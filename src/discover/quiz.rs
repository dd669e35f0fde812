// Quiz flow - three questions that resolve into a full filter selection

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::FilterCategory;
use super::selection::Selection;

/// First question: what kind of show the viewer is in the mood for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Relaxing,
    Thriller,
    Comedy,
    Romance,
    Educational,
}

impl Mood {
    // Thriller and Romance resolve to different ids per table; Relaxing
    // (Family) and Educational (Documentary) share ids across both.
    fn movie_genre_id(self) -> &'static str {
        match self {
            Mood::Relaxing => "10751",
            Mood::Thriller => "53",
            Mood::Comedy => "35",
            Mood::Romance => "10749",
            Mood::Educational => "99",
        }
    }

    fn tv_genre_id(self) -> &'static str {
        match self {
            Mood::Relaxing => "10751",
            Mood::Thriller => "80",
            Mood::Comedy => "35",
            Mood::Romance => "10766",
            Mood::Educational => "99",
        }
    }
}

/// Second question: show or movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Show,
    Movie,
}

impl Format {
    fn content_type_id(self) -> &'static str {
        match self {
            Format::Show => "tv",
            Format::Movie => "movie",
        }
    }
}

/// Third question: how much time the viewer has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBudget {
    #[serde(rename = "Under 30 mins")]
    Under30,
    #[serde(rename = "Around an hour")]
    AroundAnHour,
    #[serde(rename = "A few hours")]
    AFewHours,
    #[serde(rename = "I’m here all day")]
    AllDay,
}

impl TimeBudget {
    /// Duration bucket ids shared with the main filter panel.
    fn duration_id(self) -> &'static str {
        match self {
            TimeBudget::Under30 => "1",
            TimeBudget::AroundAnHour => "2",
            TimeBudget::AFewHours => "3",
            TimeBudget::AllDay => "4",
        }
    }
}

/// Answers collected so far. Discarded on apply or cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizAnswers {
    pub mood: Option<Mood>,
    pub format: Option<Format>,
    pub time: Option<TimeBudget>,
}

/// One recorded answer, tagged by question.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizAnswer {
    Mood(Mood),
    Format(Format),
    Time(TimeBudget),
}

/// Quiz questions in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizStep {
    Mood,
    Format,
    Time,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("current question has no answer yet")]
    Unanswered,
    #[error("quiz is incomplete")]
    Incomplete,
}

/// An in-progress quiz.
///
/// Moving forward requires the current question to be answered; going back
/// is always allowed. Applying requires all three answers and resolves them
/// into a selection meant to replace the panel state wholesale.
#[derive(Debug, Clone)]
pub struct Quiz {
    step: QuizStep,
    answers: QuizAnswers,
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            step: QuizStep::Mood,
            answers: QuizAnswers::default(),
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// Record an answer. Re-answering a question (after going back) simply
    /// overwrites the previous choice.
    pub fn record(&mut self, answer: QuizAnswer) {
        match answer {
            QuizAnswer::Mood(mood) => self.answers.mood = Some(mood),
            QuizAnswer::Format(format) => self.answers.format = Some(format),
            QuizAnswer::Time(time) => self.answers.time = Some(time),
        }
    }

    /// Advance to the next question. No-op on the last step.
    pub fn next(&mut self) -> Result<(), QuizError> {
        match self.step {
            QuizStep::Mood if self.answers.mood.is_some() => {
                self.step = QuizStep::Format;
                Ok(())
            }
            QuizStep::Format if self.answers.format.is_some() => {
                self.step = QuizStep::Time;
                Ok(())
            }
            QuizStep::Time => Ok(()),
            _ => Err(QuizError::Unanswered),
        }
    }

    /// Return to the previous question. No-op on the first step.
    pub fn back(&mut self) {
        self.step = match self.step {
            QuizStep::Mood | QuizStep::Format => QuizStep::Mood,
            QuizStep::Time => QuizStep::Format,
        };
    }

    pub fn can_apply(&self) -> bool {
        self.answers.mood.is_some() && self.answers.format.is_some() && self.answers.time.is_some()
    }

    /// Resolve the completed quiz into a selection.
    pub fn apply(&self) -> Result<Selection, QuizError> {
        if !self.can_apply() {
            return Err(QuizError::Incomplete);
        }
        Ok(resolve(&self.answers))
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

/// Map quiz answers onto filter values.
///
/// The genre table is picked by the answered format; without a format answer
/// the movie table applies. Unanswered questions contribute nothing.
pub fn resolve(answers: &QuizAnswers) -> Selection {
    let tv = answers.format == Some(Format::Show);

    let mut selection = Selection::empty();
    if let Some(mood) = answers.mood {
        let genre = if tv {
            mood.tv_genre_id()
        } else {
            mood.movie_genre_id()
        };
        selection = selection.with(FilterCategory::Genre, genre);
    }
    if let Some(format) = answers.format {
        selection = selection.with(FilterCategory::ContentType, format.content_type_id());
    }
    if let Some(time) = answers.time {
        selection = selection.with(FilterCategory::Duration, time.duration_id());
    }
    selection
}
