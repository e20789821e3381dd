//! Host command grammar.
//!
//! One command per [`Line`](crate::Line). Single-letter commands come
//! first in precedence, everything else is treated as a comma-separated
//! court update. Unparseable input is a no-op (`None`), never an error:
//! the host side owns the match and the console has nobody to complain to.

use crate::line::Line;

// Wire command letters (case-insensitive)
const CMD_BEEP: u8 = b'B';
const CMD_VICTORY: u8 = b'W';
const CMD_CHIME: u8 = b'V';

/// Fields in a court update line: paddles, ball, optional scores.
const MIN_FIELDS: usize = 4;
const MAX_FIELDS: usize = 6;

/// A decoded host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `B`: short hit beep, rate limited by the console.
    Beep,
    /// `W`: start the victory fanfare and arm the winner decision.
    Victory,
    /// `V`: play the fanfare synchronously, blocking the console.
    Chime,
    /// Numeric line: update the rendered court.
    Court(CourtUpdate),
}

/// Raw court positions as sent by the host.
///
/// Values arrive unclamped; bounding them against the court geometry is
/// the renderer state's job, not the wire's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CourtUpdate {
    /// Left paddle top edge, court pixels.
    pub paddle_left: i32,
    /// Right paddle top edge, court pixels.
    pub paddle_right: i32,
    /// Ball centre x.
    pub ball_x: i32,
    /// Ball centre y.
    pub ball_y: i32,
    /// `(left, right)` when the line carried all six fields.
    pub scores: Option<(i32, i32)>,
}

impl Command {
    /// Decode a completed line into a command.
    ///
    /// Returns `None` for anything that should be ignored: non-UTF-8
    /// bytes, whitespace-only lines, or numeric lines with fewer than
    /// four fields.
    pub fn from_line(line: &Line) -> Option<Self> {
        let text = line.as_str()?;
        let text = text.trim_start_matches([' ', '\t']);
        if text.is_empty() {
            return None;
        }

        if text.len() == 1 {
            match text.as_bytes()[0].to_ascii_uppercase() {
                CMD_BEEP => return Some(Command::Beep),
                CMD_VICTORY => return Some(Command::Victory),
                CMD_CHIME => return Some(Command::Chime),
                _ => {}
            }
        }

        Self::parse_court(text)
    }

    /// Parse a comma-separated court update.
    ///
    /// Missing or malformed fields read as 0, matching the forgiveness of
    /// the rest of the grammar; fields beyond [`MAX_FIELDS`] are ignored.
    fn parse_court(text: &str) -> Option<Self> {
        let mut fields = [0i32; MAX_FIELDS];
        let mut count = 0usize;

        for part in text.split(',') {
            if count < MAX_FIELDS {
                fields[count] = part.trim().parse().unwrap_or(0);
            }
            count += 1;
        }

        if count < MIN_FIELDS {
            return None;
        }

        let scores = (count >= MAX_FIELDS).then(|| (fields[4], fields[5]));
        Some(Command::Court(CourtUpdate {
            paddle_left: fields[0],
            paddle_right: fields[1],
            ball_x: fields[2],
            ball_y: fields[3],
            scores,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineReader;

    fn line(text: &str) -> Line {
        line_from_bytes(text.as_bytes())
    }

    fn line_from_bytes(bytes: &[u8]) -> Line {
        let mut reader = LineReader::new();
        for &b in bytes {
            assert!(reader.feed(b).is_none());
        }
        reader.feed(b'\n').expect("test line fits in the decoder")
    }

    #[test]
    fn test_beep_letter_both_cases() {
        assert_eq!(Command::from_line(&line("B")), Some(Command::Beep));
        assert_eq!(Command::from_line(&line("b")), Some(Command::Beep));
    }

    #[test]
    fn test_victory_letter_both_cases() {
        assert_eq!(Command::from_line(&line("W")), Some(Command::Victory));
        assert_eq!(Command::from_line(&line("w")), Some(Command::Victory));
    }

    #[test]
    fn test_chime_letter_both_cases() {
        assert_eq!(Command::from_line(&line("V")), Some(Command::Chime));
        assert_eq!(Command::from_line(&line("v")), Some(Command::Chime));
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        assert_eq!(Command::from_line(&line("  B")), Some(Command::Beep));
        assert_eq!(Command::from_line(&line("\tw")), Some(Command::Victory));
    }

    #[test]
    fn test_whitespace_only_is_noop() {
        assert_eq!(Command::from_line(&line(" \t ")), None);
    }

    #[test]
    fn test_other_single_letters_are_noop() {
        assert_eq!(Command::from_line(&line("X")), None);
        assert_eq!(Command::from_line(&line("7")), None);
    }

    #[test]
    fn test_non_utf8_is_noop() {
        assert_eq!(Command::from_line(&line_from_bytes(&[0xFF, 0xFE])), None);
    }

    #[test]
    fn test_three_fields_do_not_update() {
        assert_eq!(Command::from_line(&line("1,2,3")), None);
    }

    #[test]
    fn test_four_fields_update_without_scores() {
        let cmd = Command::from_line(&line("10,20,30,40"));
        assert_eq!(
            cmd,
            Some(Command::Court(CourtUpdate {
                paddle_left: 10,
                paddle_right: 20,
                ball_x: 30,
                ball_y: 40,
                scores: None,
            }))
        );
    }

    #[test]
    fn test_five_fields_still_lack_scores() {
        match Command::from_line(&line("1,2,3,4,5")) {
            Some(Command::Court(update)) => assert_eq!(update.scores, None),
            other => panic!("expected court update, got {other:?}"),
        }
    }

    #[test]
    fn test_six_fields_carry_scores() {
        let cmd = Command::from_line(&line("10,20,30,40,5,6"));
        assert_eq!(
            cmd,
            Some(Command::Court(CourtUpdate {
                paddle_left: 10,
                paddle_right: 20,
                ball_x: 30,
                ball_y: 40,
                scores: Some((5, 6)),
            }))
        );
    }

    #[test]
    fn test_malformed_fields_read_as_zero() {
        let cmd = Command::from_line(&line("oops,20,,40"));
        assert_eq!(
            cmd,
            Some(Command::Court(CourtUpdate {
                paddle_left: 0,
                paddle_right: 20,
                ball_x: 0,
                ball_y: 40,
                scores: None,
            }))
        );
    }

    #[test]
    fn test_fields_tolerate_surrounding_spaces() {
        let cmd = Command::from_line(&line(" 15 , 25 , 1 , 2 "));
        assert_eq!(
            cmd,
            Some(Command::Court(CourtUpdate {
                paddle_left: 15,
                paddle_right: 25,
                ball_x: 1,
                ball_y: 2,
                scores: None,
            }))
        );
    }

    #[test]
    fn test_excess_fields_are_ignored() {
        match Command::from_line(&line("1,2,3,4,5,6,7,8")) {
            Some(Command::Court(update)) => assert_eq!(update.scores, Some((5, 6))),
            other => panic!("expected court update, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_pass_through_raw() {
        let cmd = Command::from_line(&line("-5,-6,-7,-8"));
        assert_eq!(
            cmd,
            Some(Command::Court(CourtUpdate {
                paddle_left: -5,
                paddle_right: -6,
                ball_x: -7,
                ball_y: -8,
                scores: None,
            }))
        );
    }

    #[test]
    fn test_letter_with_trailing_text_is_not_a_command() {
        assert_eq!(Command::from_line(&line("Bx")), None);
    }
}
