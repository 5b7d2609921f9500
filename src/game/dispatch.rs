//! Event dispatch for the puzzle/quiz state machine
//!
//! The presentation layer feeds tagged input events in; the machine
//! mutates [`GameState`] and returns the side-effect commands to carry
//! out. Events that do not apply to the current phase are dropped, so
//! stale timers and stray drops cannot corrupt the progression.

use super::board::{Board, PieceId};
use super::catalog::ImageRef;
use super::state::{GamePhase, GameState};
use crate::consts::QUIZ_REVEAL_DELAY_MS;

/// Input events reported by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The level image finished loading
    ImageReady,
    /// The level image failed to load
    ImageFailed,
    /// Retry trigger: reload the current level
    RetryRequested,
    /// A tile was dropped onto a grid cell
    PiecePlaced { piece: PieceId, cell: usize },
    /// A tile was dropped back onto the tray
    PieceReturned { piece: PieceId },
    /// The solved-banner delay elapsed
    QuizRevealDue,
    /// A quiz option was clicked
    AnswerSelected { option: usize },
    /// Unlock trigger after a correct answer, or restart at the finale
    ProceedRequested,
}

/// Side-effect commands for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start loading the level image
    LoadImage { image: ImageRef },
    /// Draw the grid and the shuffled tray from board state
    PresentBoard,
    /// Show the solved banner
    ShowSolvedBanner,
    /// Fire [`Event::QuizRevealDue`] once the delay elapses
    ScheduleQuizReveal { delay_ms: u64 },
    /// Draw the current level's quiz
    PresentQuiz,
    /// Show answer feedback text
    ShowAnswerFeedback { verdict: AnswerVerdict },
    /// Show the sequence-complete screen with its restart trigger
    PresentFinale,
    /// Show the load-failure notice with its retry trigger
    ReportLoadFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Wrong,
}

impl AnswerVerdict {
    /// Feedback line shown to the player
    pub fn feedback(&self) -> &'static str {
        match self {
            AnswerVerdict::Correct => "Correct! Get ready for the next puzzle.",
            AnswerVerdict::Wrong => "Wrong! Try again.",
        }
    }
}

/// Kick off the session: request the first level's image
pub fn boot(state: &mut GameState) -> Vec<Command> {
    enter_loading(state)
}

/// Advance the machine by one event, returning the commands the
/// presentation layer must carry out
pub fn dispatch(state: &mut GameState, event: &Event) -> Vec<Command> {
    match (state.phase, event) {
        (GamePhase::Loading, Event::ImageReady) => {
            let mut rng = state.rng_state.next_stream();
            state.board = Board::new_shuffled(&mut rng);
            state.phase = GamePhase::Placing;
            log::info!(
                "level {} ready, {} tiles in tray",
                state.sequencer.current_index() + 1,
                state.board.tray().len()
            );
            vec![Command::PresentBoard]
        }
        (GamePhase::Loading, Event::ImageFailed) => {
            state.phase = GamePhase::LoadFailed;
            log::warn!(
                "image load failed for level {}",
                state.sequencer.current_index() + 1
            );
            vec![Command::ReportLoadFailure]
        }
        (GamePhase::LoadFailed, Event::RetryRequested) => enter_loading(state),
        // The retry trigger during play reloads (and reshuffles) the level
        (GamePhase::Placing, Event::RetryRequested) => enter_loading(state),
        (GamePhase::Placing, Event::PiecePlaced { piece, cell }) => {
            state.board.place(*piece, *cell);
            if state.board.is_solved() {
                state.phase = GamePhase::Revealed;
                log::info!("level {} solved", state.sequencer.current_index() + 1);
                vec![
                    Command::ShowSolvedBanner,
                    Command::ScheduleQuizReveal {
                        delay_ms: QUIZ_REVEAL_DELAY_MS,
                    },
                ]
            } else {
                Vec::new()
            }
        }
        (GamePhase::Placing, Event::PieceReturned { piece }) => {
            state.board.return_to_tray(*piece);
            Vec::new()
        }
        (GamePhase::Revealed, Event::QuizRevealDue) => {
            state.phase = GamePhase::Quiz;
            vec![Command::PresentQuiz]
        }
        (GamePhase::Quiz, Event::AnswerSelected { option }) => {
            let correct = state
                .sequencer
                .current()
                .map(|level| level.quiz.is_correct(*option))
                .unwrap_or(false);
            if correct {
                state.phase = GamePhase::Unlocked;
                log::info!("quiz {} answered", state.sequencer.current_index() + 1);
                vec![Command::ShowAnswerFeedback {
                    verdict: AnswerVerdict::Correct,
                }]
            } else {
                vec![Command::ShowAnswerFeedback {
                    verdict: AnswerVerdict::Wrong,
                }]
            }
        }
        (GamePhase::Unlocked, Event::ProceedRequested) => {
            state.sequencer.advance();
            if state.sequencer.is_complete() {
                state.phase = GamePhase::AllClear;
                log::info!("all {} levels cleared", state.sequencer.len());
                vec![Command::PresentFinale]
            } else {
                enter_loading(state)
            }
        }
        (GamePhase::AllClear, Event::ProceedRequested) => {
            state.sequencer.restart();
            enter_loading(state)
        }
        _ => {
            log::debug!("ignoring {:?} in {:?}", event, state.phase);
            Vec::new()
        }
    }
}

/// Enter the load phase for the sequencer's current level
fn enter_loading(state: &mut GameState) -> Vec<Command> {
    state.phase = GamePhase::Loading;
    match state.sequencer.current() {
        Ok(level) => {
            log::info!(
                "loading level {} ({})",
                state.sequencer.current_index() + 1,
                level.image.as_str()
            );
            vec![Command::LoadImage {
                image: level.image.clone(),
            }]
        }
        // advance() paths check is_complete() before re-entering load
        Err(err) => {
            log::error!("no level to load: {err}");
            state.phase = GamePhase::LoadFailed;
            vec![Command::ReportLoadFailure]
        }
    }
}
