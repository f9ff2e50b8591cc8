//! Rendering search results as text or JSON.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use optimal_tictactoe::{
    Action, Analysis, Board, Outcome, Player, apply, best_action, current_player, outcome,
    winning_line,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One move made during [`PlayReport::play_out`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    /// Player who moved.
    pub player: Player,
    /// Cell marked.
    pub action: Action,
    /// Board after the move.
    pub board: Board,
}

/// A game played to the end with both sides choosing the best action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    start: Board,
    moves: Vec<PlayedMove>,
    outcome: Outcome,
}

impl PlayReport {
    /// Plays `start` out until the game ends.
    #[instrument(skip(start))]
    pub fn play_out(start: Board) -> Result<Self> {
        let mut board = start;
        let mut moves = Vec::new();
        while let Some(action) = best_action(&board) {
            let player = current_player(&board);
            board = apply(&board, action)
                .with_context(|| format!("Search chose an unplayable action {}", action))?;
            debug!(%player, %action, "Move played");
            moves.push(PlayedMove {
                player,
                action,
                board,
            });
        }

        let outcome = outcome(&board);
        info!(moves = moves.len(), %outcome, "Game finished");
        Ok(Self {
            start,
            moves,
            outcome,
        })
    }

    /// Moves played, in order.
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Final result.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Board the game ended on.
    pub fn final_board(&self) -> Board {
        self.moves.last().map_or(self.start, |m| m.board)
    }
}

fn describe(action: Action) -> String {
    match action.label() {
        Some(label) => format!("{} {}", action, label),
        None => action.to_string(),
    }
}

fn describe_outcome(board: &Board) -> String {
    match winning_line(board) {
        Some((line, player)) => format!("Player {} wins on the {}", player, line),
        None => outcome(board).to_string(),
    }
}

/// Renders the answer to `best`.
pub fn render_best(board: &Board, analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(analysis),
        OutputFormat::Text => Ok(match analysis.best_action() {
            Some(action) => format!(
                "{}\n\n{} to move\nBest action: {}, value {}",
                board,
                analysis.to_move(),
                describe(action),
                analysis.value()
            ),
            None => format!("{}\n\nGame over: {}", board, describe_outcome(board)),
        }),
    }
}

/// Renders the answer to `analyze`.
pub fn render_analysis(board: &Board, analysis: &Analysis, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(analysis);
    }

    let mut out = format!("{}\n\n", board);
    if analysis.best_action().is_none() {
        out.push_str(&format!("Game over: {}", describe_outcome(board)));
        return Ok(out);
    }

    out.push_str(&format!(
        "{} to move, value {} ({} boards searched)\n",
        analysis.to_move(),
        analysis.value(),
        analysis.visited()
    ));
    for scored in analysis.action_values() {
        let marker = if Some(scored.action) == analysis.best_action() {
            "  <- best"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<22} {:>2}{}\n",
            describe(scored.action),
            scored.value,
            marker
        ));
    }
    Ok(out.trim_end().to_string())
}

/// Renders a finished [`PlayReport`].
pub fn render_play(report: &PlayReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut out = format!("{}\n", report.start);
    for played in report.moves() {
        out.push_str(&format!(
            "\n{} plays {}\n{}\n",
            played.player,
            describe(played.action),
            played.board
        ));
    }
    out.push_str(&format!(
        "\nResult: {}",
        describe_outcome(&report.final_board())
    ));
    Ok(out)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report")
}
