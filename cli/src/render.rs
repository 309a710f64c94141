use pairmatch_core::{CardFace, Coord2, Notification, RoundSnapshot, TimeBand, iter_coords};
use std::fmt::Write;

const BAR_WIDTH: usize = 24;

/// Letter printed on the face of a card.
pub(crate) fn face_symbol(face: CardFace) -> char {
    match face {
        CardFace::FaceDown => '#',
        CardFace::FaceUp(value) => char::from(b'A' + value),
        CardFace::Gone => '.',
    }
}

pub(crate) fn time_bar(snapshot: &RoundSnapshot) -> String {
    let filled = if snapshot.total_secs == 0 {
        0
    } else {
        (BAR_WIDTH * snapshot.remaining_secs as usize).div_ceil(snapshot.total_secs as usize)
    };
    let fill = match snapshot.time_band {
        TimeBand::Plenty => '=',
        TimeBand::Low => '-',
        TimeBand::Critical => '!',
    };
    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    bar.extend((0..BAR_WIDTH).map(|i| if i < filled { fill } else { ' ' }));
    bar.push(']');
    bar
}

/// Board with 1-based row and column labels, plus the status line.
pub(crate) fn board_text(snapshot: &RoundSnapshot) -> String {
    let (rows, cols) = snapshot.size;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score: {}  Pairs: {}/{}  Hint: {}  Time: {:>3}s {}",
        snapshot.score,
        snapshot.matched_pairs,
        snapshot.total_pairs,
        snapshot.hints_left,
        snapshot.remaining_secs,
        time_bar(snapshot)
    );

    out.push_str("   ");
    for col in 0..cols {
        let _ = write!(out, " {:>2}", col + 1);
    }
    for coords in iter_coords((rows, cols)) {
        if coords.1 == 0 {
            let _ = write!(out, "\n{:>3}", coords.0 + 1);
        }
        let _ = write!(out, "  {}", face_symbol(snapshot.face_at(coords)));
    }
    out
}

fn label((row, col): Coord2) -> String {
    format!("{},{}", row + 1, col + 1)
}

/// Human-readable line for a notification, `None` for routine clock updates.
pub(crate) fn describe(notification: Notification) -> Option<String> {
    use Notification::*;
    Some(match notification {
        Match { first, second } => format!("Match! {} and {}", label(first), label(second)),
        Mismatch { first, second } => format!("No match: {} and {}", label(first), label(second)),
        ScoreChanged { score } => format!("Score: {}", score),
        HintUsed {
            first,
            second,
            hints_left,
        } => format!(
            "Hint: {} and {} ({} left)",
            label(first),
            label(second),
            hints_left
        ),
        ClockChanged { remaining, .. } if remaining <= 10 || remaining % 30 == 0 => {
            format!("{}s left", remaining)
        }
        ClockChanged { .. } => return None,
        Win { score } => format!("YOU WIN! Final score: {}", score),
        Timeout { score } => format!("GAME OVER. Final score: {}", score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairmatch_core::{Deck, GameConfig, Session};

    fn small_session() -> Session {
        let config = GameConfig {
            size: (2, 2),
            ..GameConfig::classic()
        };
        let deck = Deck::from_values(config.size, &[0, 1, 1, 0]).unwrap();
        Session::with_deck(config, &deck).unwrap()
    }

    #[test]
    fn board_shows_labels_and_faces() {
        let mut session = small_session();
        session.select((1, 0)).unwrap();

        let text = board_text(&session.snapshot());
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[0].starts_with("Score: 0  Pairs: 0/2  Hint: 3  Time: 120s ["));
        assert_eq!(lines[1], "     1  2");
        assert_eq!(lines[2], "  1  #  #");
        assert_eq!(lines[3], "  2  B  #");
    }

    #[test]
    fn full_clock_fills_bar() {
        let snapshot = small_session().snapshot();
        let bar = time_bar(&snapshot);

        assert_eq!(bar.len(), BAR_WIDTH + 2);
        assert!(bar[1..=BAR_WIDTH].chars().all(|c| c == '='));
    }

    #[test]
    fn routine_clock_updates_are_quiet() {
        assert_eq!(
            describe(Notification::ClockChanged {
                remaining: 77,
                total: 120
            }),
            None
        );
        assert_eq!(
            describe(Notification::ClockChanged {
                remaining: 5,
                total: 120
            }),
            Some("5s left".to_string())
        );
        assert_eq!(
            describe(Notification::Match {
                first: (0, 0),
                second: (2, 3)
            }),
            Some("Match! 1,1 and 3,4".to_string())
        );
    }
}
