//! Replay byte encoding.
//!
//! A replay is the literal text of `[header, event, event, ...]`, stored as
//! one decimal UTF-8 byte value per line:
//!
//! ```text
//! 91      <- '['
//! 123     <- '{'
//! 39      <- '\''
//! ...
//! ```
//!
//! Header keys: `game_number`, `board_length`, `game_duration`. Event keys:
//! `player_name`, `type`, `difficulty`, `event`, `selected_path`, `word`.
//! Unknown keys are ignored when decoding.

use std::fmt::Write as _;

use crate::core::{Coord, Difficulty, GameError, Path, PlayerKind, Result, MAX_BOARD_LENGTH};
use crate::game::{Actor, GameEvent};

use super::literal::{self, Literal};
use super::log::{ReplayHeader, ZERO_DURATION};

/// Encode a header and events as newline-separated byte values.
#[must_use]
pub fn encode(header: &ReplayHeader, events: &[GameEvent]) -> Vec<u8> {
    let records: Vec<Literal> = std::iter::once(header_literal(header))
        .chain(events.iter().map(event_literal))
        .collect();
    let text = Literal::List(records).to_string();

    let mut out = String::with_capacity(text.len() * 4);
    for byte in text.bytes() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{byte}");
    }
    out.into_bytes()
}

/// Decode bytes written by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<(ReplayHeader, Vec<GameEvent>)> {
    let text = text_from_bytes(bytes)?;
    let value = literal::parse(&text)?;

    let records = match &value {
        Literal::List(records) => records.as_slice(),
        _ => return Err(GameError::corrupt("replay is not a list of records")),
    };
    let (header, events) = records
        .split_first()
        .ok_or_else(|| GameError::corrupt("replay has no header"))?;

    let header = header_from(header)?;
    let events = events
        .iter()
        .enumerate()
        .map(|(index, record)| {
            event_from(record).map_err(|err| match err {
                GameError::CorruptReplay(detail) => GameError::corrupt(format!("event {index}: {detail}")),
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((header, events))
}

/// Reassemble the literal text from its byte lines.
fn text_from_bytes(bytes: &[u8]) -> Result<String> {
    let lines =
        std::str::from_utf8(bytes).map_err(|_| GameError::corrupt("replay file is not text"))?;

    let mut raw = Vec::with_capacity(bytes.len() / 3);
    for (number, line) in lines.lines().enumerate() {
        let line = line.trim();
        let value: u32 = line
            .parse()
            .map_err(|_| GameError::corrupt(format!("line {}: {line:?} is not a number", number + 1)))?;
        let byte = u8::try_from(value)
            .map_err(|_| GameError::corrupt(format!("line {}: {value} is out of byte range", number + 1)))?;
        raw.push(byte);
    }

    String::from_utf8(raw).map_err(|_| GameError::corrupt("replay bytes are not UTF-8"))
}

fn header_literal(header: &ReplayHeader) -> Literal {
    Literal::Dict(vec![
        (Literal::str("game_number"), Literal::Int(i64::from(header.game_number))),
        (Literal::str("board_length"), Literal::Int(header.board_length as i64)),
        (Literal::str("game_duration"), Literal::str(header.game_duration.clone())),
    ])
}

fn event_literal(event: &GameEvent) -> Literal {
    let player = event.player();
    let (path, word) = match event {
        GameEvent::Playing { path, word, .. } => (
            Literal::List(
                path.iter()
                    .map(|c| Literal::Tuple(vec![Literal::Int(c.row as i64), Literal::Int(c.col as i64)]))
                    .collect(),
            ),
            Literal::str(word.clone()),
        ),
        _ => (Literal::None, Literal::None),
    };
    let difficulty = player
        .difficulty()
        .map_or(Literal::None, |d| Literal::str(d.label()));

    Literal::Dict(vec![
        (Literal::str("player_name"), Literal::str(player.name.clone())),
        (Literal::str("type"), Literal::str(player.kind.type_label())),
        (Literal::str("difficulty"), difficulty),
        (Literal::str("event"), Literal::str(event.label())),
        (Literal::str("selected_path"), path),
        (Literal::str("word"), word),
    ])
}

fn header_from(record: &Literal) -> Result<ReplayHeader> {
    let positive = |key: &str| {
        record
            .get(key)
            .and_then(Literal::as_int)
            .filter(|n| *n > 0)
            .ok_or_else(|| GameError::corrupt(format!("header {key} must be a positive integer")))
    };

    let game_number = u32::try_from(positive("game_number")?)
        .map_err(|_| GameError::corrupt("header game_number is too large"))?;
    let board_length = usize::try_from(positive("board_length")?)
        .ok()
        .filter(|length| *length <= MAX_BOARD_LENGTH)
        .ok_or_else(|| GameError::corrupt(format!("header board_length exceeds {MAX_BOARD_LENGTH}")))?;
    let game_duration = match record.get("game_duration") {
        None | Some(Literal::None) => ZERO_DURATION.to_string(),
        Some(Literal::Str(s)) => s.clone(),
        Some(other) => return Err(GameError::corrupt(format!("bad game_duration {other}"))),
    };

    Ok(ReplayHeader {
        game_number,
        board_length,
        game_duration,
    })
}

fn event_from(record: &Literal) -> Result<GameEvent> {
    let text = |key: &str| {
        record
            .get(key)
            .and_then(Literal::as_str)
            .ok_or_else(|| GameError::corrupt(format!("missing {key}")))
    };

    let name = text("player_name")?;
    let kind = match text("type")? {
        "human" => PlayerKind::Human,
        "computer" => {
            let difficulty: Difficulty = text("difficulty")?.parse().map_err(GameError::corrupt)?;
            PlayerKind::Computer(difficulty)
        }
        other => return Err(GameError::corrupt(format!("unknown player type {other:?}"))),
    };
    let player = Actor::new(name, kind);

    match text("event")? {
        "PLAYING" => {
            let path = record
                .get("selected_path")
                .ok_or_else(|| GameError::corrupt("missing selected_path"))
                .and_then(path_from)?;
            let word = text("word")?.to_string();
            Ok(GameEvent::Playing { player, path, word })
        }
        "WON" => Ok(GameEvent::Won { player }),
        "DRAW" => Ok(GameEvent::Draw { player }),
        "RESIGNED" => Ok(GameEvent::Resigned { player }),
        other => Err(GameError::corrupt(format!("unknown event {other:?}"))),
    }
}

fn path_from(value: &Literal) -> Result<Path> {
    let cells = value
        .as_seq()
        .ok_or_else(|| GameError::corrupt("selected_path is not a sequence"))?
        .iter()
        .map(coord_from)
        .collect::<Result<Vec<_>>>()?;
    Path::from_cells(&cells).ok_or_else(|| GameError::corrupt("selected_path is empty"))
}

fn coord_from(value: &Literal) -> Result<Coord> {
    let index = |v: &Literal| v.as_int().and_then(|n| usize::try_from(n).ok());
    match value.as_seq() {
        Some([row, col]) => match (index(row), index(col)) {
            (Some(row), Some(col)) => Ok(Coord::new(row, col)),
            _ => Err(GameError::corrupt(format!("bad cell {value}"))),
        },
        _ => Err(GameError::corrupt(format!("bad cell {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn lines(text: &str) -> Vec<u8> {
        text.bytes().flat_map(|b| format!("{b}\n").into_bytes()).collect()
    }

    fn sample_events() -> Vec<GameEvent> {
        let bot = Actor::new("Bot", PlayerKind::Computer(Difficulty::Hard));
        let ada = Actor::new("Ada", PlayerKind::Human);
        vec![
            GameEvent::Playing {
                player: bot.clone(),
                path: Path::walk(Coord::new(0, 0), Direction::E, 2).unwrap(),
                word: "AT".into(),
            },
            GameEvent::Resigned { player: ada },
            GameEvent::Won { player: bot },
        ]
    }

    #[test]
    fn test_encode_layout() {
        let header = ReplayHeader {
            game_number: 1,
            board_length: 2,
            game_duration: "00:00:03".into(),
        };
        let bytes = encode(&header, &sample_events());
        let text = text_from_bytes(&bytes).unwrap();

        assert!(bytes.starts_with(b"91\n123\n39\n"));
        assert!(text.starts_with(
            "[{'game_number': 1, 'board_length': 2, 'game_duration': '00:00:03'}, \
             {'player_name': 'Bot', 'type': 'computer', 'difficulty': 'HARD', 'event': 'PLAYING', \
             'selected_path': [(0, 0), (0, 1)], 'word': 'AT'}, \
             {'player_name': 'Ada', 'type': 'human', 'difficulty': None, 'event': 'RESIGNED'"
        ));
    }

    #[test]
    fn test_round_trip() {
        let header = ReplayHeader::new(3, 2);
        let events = sample_events();
        let (back_header, back_events) = decode(&encode(&header, &events)).unwrap();
        assert_eq!(back_header, header);
        assert_eq!(back_events, events);
    }

    #[test]
    fn test_decode_accepts_list_cells_and_extra_keys() {
        let text = "[{'game_number': 1, 'board_length': 3}, \
                    {'player_name': 'Ada', 'type': 'human', 'difficulty': None, 'event': 'PLAYING', \
                    'starting_position': None, 'selected_path': [[2, 0], [1, 1], [0, 2]], 'word': 'CAT'}, \
                    {'player_name': 'Ada', 'type': 'human', 'difficulty': None, 'event': 'DRAW', \
                    'starting_position': None, 'selected_path': None, 'word': None}]";
        let (header, events) = decode(&lines(text)).unwrap();

        assert_eq!(header.game_duration, ZERO_DURATION);
        let GameEvent::Playing { path, word, .. } = &events[0] else {
            panic!("expected a play");
        };
        assert_eq!(word, "CAT");
        assert_eq!(path.start(), Coord::new(2, 0));
        assert_eq!(path.end(), Coord::new(0, 2));
        assert!(matches!(events[1], GameEvent::Draw { .. }));
    }

    #[test]
    fn test_decode_rejects_bad_lines() {
        assert!(matches!(decode(b"91\nabc\n93\n"), Err(GameError::CorruptReplay(_))));
        assert!(matches!(decode(b"91\n300\n93\n"), Err(GameError::CorruptReplay(_))));
        assert!(matches!(decode(b"91\n\n93\n"), Err(GameError::CorruptReplay(_))));
        // 0xC3 alone is not valid UTF-8.
        assert!(matches!(decode(b"195\n"), Err(GameError::CorruptReplay(_))));
    }

    #[test]
    fn test_decode_rejects_bad_structure() {
        for text in [
            "{'game_number': 1, 'board_length': 3}",
            "[]",
            "[{'game_number': 1, 'board_length': 0}]",
            "[{'game_number': 0, 'board_length': 3}]",
            "[{'board_length': 3}]",
            "[{'game_number': 1, 'board_length': 3}, {'player_name': 'A', 'type': 'alien', 'event': 'WON'}]",
            "[{'game_number': 1, 'board_length': 3}, {'player_name': 'A', 'type': 'human', 'event': 'PLAYING', 'selected_path': [], 'word': 'X'}]",
            "[{'game_number': 1, 'board_length': 3}, {'player_name': 'A', 'type': 'computer', 'difficulty': None, 'event': 'WON'}]",
            "[{'game_number': 1, 'board_length': 3}, {'player_name': 'A', 'type': 'human', 'event': 'PLAYING', 'selected_path': [(0, -1)], 'word': 'X'}]",
        ] {
            assert!(
                matches!(decode(&lines(text)), Err(GameError::CorruptReplay(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_oversized_board() {
        for length in ["17", "5000000000", "9223372036854775807"] {
            let text = format!("[{{'game_number': 1, 'board_length': {length}}}]");
            let err = decode(&lines(&text)).unwrap_err();
            assert!(matches!(err, GameError::CorruptReplay(_)), "{length} should be rejected");
        }
        assert!(decode(&lines("[{'game_number': 1, 'board_length': 16}]")).is_ok());
    }

    #[test]
    fn test_header_only() {
        let (header, events) = decode(&lines("[{'game_number': 2, 'board_length': 5, 'game_duration': '00:01:00'}]")).unwrap();
        assert_eq!(header.game_number, 2);
        assert_eq!(header.game_duration, "00:01:00");
        assert!(events.is_empty());
    }
}
