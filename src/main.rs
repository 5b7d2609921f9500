//! Jigsaw Gate entry point
//!
//! Headless scripted run of the bundled catalog, standing in for the
//! browser surface: commands are interpreted synchronously (image
//! loads always succeed, the quiz reveal timer fires immediately)
//! while an autoplayer solves each board, answers one quiz wrong on
//! purpose, and restarts once after the finale.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use jigsaw_gate::game::{
    AnswerVerdict, Command, Event, GameState, LevelCatalog, boot, dispatch,
};

/// Stand-in for the player and the rendering surface: turns each
/// command into the input events it would eventually produce.
struct Autoplayer {
    wrong_answer_spent: bool,
    restarted: bool,
}

impl Autoplayer {
    fn new() -> Self {
        Self {
            wrong_answer_spent: false,
            restarted: false,
        }
    }

    fn react(&mut self, state: &GameState, command: &Command) -> Vec<Event> {
        match command {
            Command::LoadImage { image } => {
                log::info!("fetching {}", image.as_str());
                vec![Event::ImageReady]
            }
            Command::PresentBoard => {
                // Drag every tile from the tray onto its home cell
                state
                    .board
                    .tray()
                    .iter()
                    .map(|&piece| Event::PiecePlaced {
                        piece,
                        cell: state.board.pieces()[piece].home_cell,
                    })
                    .collect()
            }
            Command::ShowSolvedBanner => {
                println!("Puzzle solved!");
                Vec::new()
            }
            Command::ScheduleQuizReveal { delay_ms } => {
                log::debug!("quiz due in {delay_ms} ms");
                vec![Event::QuizRevealDue]
            }
            Command::PresentQuiz => {
                let Ok(level) = state.sequencer.current() else {
                    return Vec::new();
                };
                println!("\n{}", level.quiz.question);
                for option in &level.quiz.options {
                    println!("  {}", option.text);
                }
                let correct = level.quiz.correct_option().unwrap_or(0);
                if self.wrong_answer_spent {
                    vec![Event::AnswerSelected { option: correct }]
                } else {
                    // Fumble the first quiz once to show the retry path
                    self.wrong_answer_spent = true;
                    let wrong = (0..level.quiz.options.len())
                        .find(|&index| index != correct)
                        .unwrap_or(correct);
                    vec![Event::AnswerSelected { option: wrong }]
                }
            }
            Command::ShowAnswerFeedback { verdict } => {
                println!("{}", verdict.feedback());
                match verdict {
                    AnswerVerdict::Correct => vec![Event::ProceedRequested],
                    AnswerVerdict::Wrong => {
                        let option = state
                            .sequencer
                            .current()
                            .ok()
                            .and_then(|level| level.quiz.correct_option())
                            .unwrap_or(0);
                        vec![Event::AnswerSelected { option }]
                    }
                }
            }
            Command::PresentFinale => {
                println!("\nCongratulations! You finished all puzzles.");
                if self.restarted {
                    Vec::new()
                } else {
                    self.restarted = true;
                    println!("Restarting from the first level...\n");
                    vec![Event::ProceedRequested]
                }
            }
            Command::ReportLoadFailure => {
                println!("Level failed to load.");
                Vec::new()
            }
        }
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    log::info!("session seed {seed}");

    let mut state = GameState::new(LevelCatalog::builtin(), seed);
    let mut player = Autoplayer::new();

    let mut commands: VecDeque<Command> = boot(&mut state).into();
    while let Some(command) = commands.pop_front() {
        for event in player.react(&state, &command) {
            commands.extend(dispatch(&mut state, &event));
        }
    }

    println!("\nSession over in phase {:?}.", state.phase);
}
