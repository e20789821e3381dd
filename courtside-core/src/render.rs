//! Frame rendering
//!
//! Three full-screen frames: the live match, the victory banner and the
//! boot splash. Every frame starts from a clear and ends with a present,
//! so the surface never accumulates stale pixels between modes.

use heapless::String;

use crate::court::{
    CourtState, BALL_RADIUS, COURT_HEIGHT, COURT_WIDTH, PADDLE_HEIGHT, PADDLE_INSET, PADDLE_WIDTH,
};
use crate::traits::{DrawError, DrawSurface};
use crate::victory::Winner;

// Net layout
const NET_X: i32 = COURT_WIDTH / 2;
const NET_DASH_LEN: u32 = 4;
const NET_DASH_PITCH: i32 = 8;

// Score digits sit at the top of each half
const SCORE_Y: i32 = 2;

// Banner layout
const BANNER_SCORE_Y: i32 = 18;
const BAND_Y: i32 = 34;
const BAND_HEIGHT: u32 = 14;
const BAND_TEXT_Y: i32 = 37;

// Splash layout
const SPLASH_TITLE: &str = "COURTSIDE";
const SPLASH_HINT: &str = "waiting for host";
const SPLASH_TITLE_Y: i32 = 20;
const SPLASH_HINT_Y: i32 = 38;

/// Draw one frame of the live match.
pub fn draw_match<D: DrawSurface>(surface: &mut D, court: &CourtState) -> Result<(), DrawError> {
    surface.clear()?;

    draw_net(surface)?;
    draw_scores(surface, court)?;

    surface.fill_rect(
        PADDLE_INSET,
        court.paddle_left,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    )?;
    surface.fill_rect(
        COURT_WIDTH - PADDLE_INSET - PADDLE_WIDTH as i32,
        court.paddle_right,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    )?;

    surface.fill_ellipse(court.ball_x, court.ball_y, BALL_RADIUS, BALL_RADIUS)?;

    surface.present()
}

/// Draw the victory banner: final score plus the winner on an inverted band.
pub fn draw_banner<D: DrawSurface>(
    surface: &mut D,
    court: &CourtState,
    winner: Winner,
) -> Result<(), DrawError> {
    surface.clear()?;

    let mut score: String<16> = String::new();
    let _ = write_to_string(
        &mut score,
        format_args!("{} - {}", court.score_left, court.score_right),
    );
    text_centred(surface, COURT_WIDTH / 2, BANNER_SCORE_Y, &score)?;

    surface.fill_rect(0, BAND_Y, COURT_WIDTH as u32, BAND_HEIGHT)?;
    surface.set_invert(true);
    let label = winner_label(winner);
    text_centred(surface, COURT_WIDTH / 2, BAND_TEXT_Y, label)?;
    surface.set_invert(false);

    surface.present()
}

/// Draw the boot splash, shown until the host's first line arrives.
pub fn draw_splash<D: DrawSurface>(surface: &mut D) -> Result<(), DrawError> {
    surface.clear()?;
    text_centred(surface, COURT_WIDTH / 2, SPLASH_TITLE_Y, SPLASH_TITLE)?;
    text_centred(surface, COURT_WIDTH / 2, SPLASH_HINT_Y, SPLASH_HINT)?;
    surface.present()
}

fn winner_label(winner: Winner) -> &'static str {
    match winner {
        Winner::Left => "LEFT WINS",
        Winner::Right => "RIGHT WINS",
        Winner::Undecided => "DRAW",
    }
}

fn draw_net<D: DrawSurface>(surface: &mut D) -> Result<(), DrawError> {
    let mut y = 0;
    while y < COURT_HEIGHT {
        surface.vline(NET_X, y, NET_DASH_LEN)?;
        y += NET_DASH_PITCH;
    }
    Ok(())
}

fn draw_scores<D: DrawSurface>(surface: &mut D, court: &CourtState) -> Result<(), DrawError> {
    let mut left: String<8> = String::new();
    let _ = write_to_string(&mut left, format_args!("{}", court.score_left));
    text_centred(surface, COURT_WIDTH / 4, SCORE_Y, &left)?;

    let mut right: String<8> = String::new();
    let _ = write_to_string(&mut right, format_args!("{}", court.score_right));
    text_centred(surface, 3 * COURT_WIDTH / 4, SCORE_Y, &right)
}

/// Draw `text` horizontally centred on `cx`.
fn text_centred<D: DrawSurface>(
    surface: &mut D,
    cx: i32,
    y: i32,
    text: &str,
) -> Result<(), DrawError> {
    let width = surface.text_width(text) as i32;
    surface.text(cx - width / 2, y, text)
}

/// Helper to write formatted output to a heapless String
fn write_to_string<const N: usize>(
    s: &mut String<N>,
    args: core::fmt::Arguments<'_>,
) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}
