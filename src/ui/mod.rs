use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

mod render;

use crate::game::{GameMode, GameStatus};
use crate::{Game, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("SERPENT"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("SERPENT")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let well_w = PLAY_W as u16;
    let well_h = PLAY_H as u16;

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let info_h = 5u16;
    let controls_h = 5u16;
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(info_h),
            Constraint::Length(well_h),
            Constraint::Length(controls_h),
            Constraint::Min(0),
        ])
        .split(col_rect);

    draw_info(frame, game, stack[1]);
    render::draw_playfield(frame, game, stack[2]);
    draw_controls(frame, stack[3]);
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = match game.status {
        GameStatus::GameOver if game.won => "YOU WIN",
        GameStatus::GameOver => "OVER",
        GameStatus::Paused => "PAUSED",
        GameStatus::Idle => "IDLE",
        GameStatus::Playing => {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis();
            if (millis / 300) % 2 == 0 { "ACTIVE" } else { "      " }
        }
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw(format!("{:<8} {}", "SCORE:", game.score)),
        Line::raw(format!("{:<8} {}", "BEST:", game.high_score)),
        Line::raw(format!("{:<8} {}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let mode = match game.mode {
        GameMode::Walls => "WALLS",
        GameMode::PassThrough => "WRAP",
    };
    let sound = if game.sound { "ON" } else { "OFF" };
    let right = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "MODE:", mode)),
        Line::raw(format!("{:<7} {}", "SOUND:", sound)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("↑↓←→/wasd steer"),
        Line::raw("space start/pause"),
        Line::raw("r restart"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("b walls/wrap"),
        Line::raw("m sound"),
        Line::raw("q/esc quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
