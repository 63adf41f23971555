use onecard_core::{
    damage_of, is_attack_card, parse_selection, AttackState, Card, DisplaySink, Event, GameConfig,
    GameState, MoveSource, RandomMoveSource, Selection, Session, TableView, TurnAction,
    DECK_SIZE, LOG_WINDOW,
};

const TURN_LIMIT: usize = 100_000;

#[derive(Debug, Clone, PartialEq)]
struct Frame {
    current_player: usize,
    hand_sizes: Vec<usize>,
    discard_len: usize,
    is_attack: bool,
    available: Vec<Card>,
    log_tail: Vec<String>,
}

#[derive(Default)]
struct RecordingDisplay {
    frames: Vec<Frame>,
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, view: &TableView<'_>) {
        self.frames.push(Frame {
            current_player: view.current_player,
            hand_sizes: view.hands.iter().map(Vec::len).collect(),
            discard_len: view.discard.len(),
            is_attack: view.is_attack,
            available: view.available(),
            log_tail: view.log.recent_lines(LOG_WINDOW),
        });
    }
}

/// Stands in for a person typing at the prompt.
struct TypedInput {
    lines: Vec<&'static str>,
    next: usize,
}

impl TypedInput {
    fn new(lines: Vec<&'static str>) -> Self {
        Self { lines, next: 0 }
    }
}

impl MoveSource for TypedInput {
    fn select(&mut self, _view: &TableView<'_>, legal: &[Card]) -> Selection {
        let line = self.lines.get(self.next).copied().unwrap_or("");
        self.next += 1;
        parse_selection(line, legal.len())
    }
}

fn automated(seed: u64) -> Session {
    Session::automated(&GameConfig::with_seed(seed))
}

#[test]
fn cards_are_conserved_through_whole_games() {
    for seed in 0..25u64 {
        let mut session = automated(seed);
        let mut display = RecordingDisplay::default();
        let mut finished = false;
        for _ in 0..TURN_LIMIT {
            let outcome = session.step(&mut display).unwrap();
            let state = session.state();
            assert_eq!(state.card_count(), DECK_SIZE, "seed {seed}");
            assert!(!state.deck.discard.is_empty(), "seed {seed}");
            if outcome.is_game_over() {
                finished = true;
                break;
            }
        }
        assert!(finished, "seed {seed} never finished");
    }
}

#[test]
fn attack_damage_accumulates_and_resets() {
    for seed in 100..120u64 {
        let mut session = automated(seed);
        let mut display = RecordingDisplay::default();
        let mut previous = AttackState::default();
        for _ in 0..TURN_LIMIT {
            let outcome = session.step(&mut display).unwrap();
            match outcome.action {
                TurnAction::Played { card, .. } if is_attack_card(&card) => {
                    assert_eq!(outcome.attack.damage, previous.damage + damage_of(&card));
                    assert!(outcome.attack.is_attack);
                }
                TurnAction::Played { .. } => {
                    assert_eq!(outcome.attack, AttackState::default());
                }
                TurnAction::Drew { requested, drawn } => {
                    let expected = if previous.is_attack {
                        previous.damage as usize
                    } else {
                        1
                    };
                    assert_eq!(requested, expected);
                    assert!(drawn <= requested);
                    assert_eq!(outcome.attack, AttackState::default());
                }
            }
            if outcome.attack.damage > 0 {
                assert!(outcome.attack.is_attack);
            }
            previous = outcome.attack;
            if outcome.is_game_over() {
                break;
            }
        }
    }
}

#[test]
fn display_sees_every_decision_and_the_final_table() {
    let mut session = automated(77);
    let mut display = RecordingDisplay::default();
    let summary = session.run(&mut display).unwrap();

    assert_eq!(display.frames.len(), summary.turns + 1);
    for (turn, frame) in display.frames[..summary.turns].iter().enumerate() {
        assert_eq!(frame.current_player, turn % 2);
        assert!(frame.hand_sizes.iter().sum::<usize>() + frame.discard_len <= DECK_SIZE);
        assert!(frame.log_tail.len() <= LOG_WINDOW);
    }
    let last = display.frames.last().unwrap();
    assert_eq!(last.current_player, summary.winner);
    assert_eq!(last.hand_sizes[summary.winner], 0);
    assert_eq!(
        last.log_tail.last().map(String::as_str),
        Some(format!("Player {} wins!", summary.winner + 1).as_str())
    );
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut first = automated(31337);
    let mut second = automated(31337);
    let a = first.run(&mut RecordingDisplay::default()).unwrap();
    let b = second.run(&mut RecordingDisplay::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(first.state().log.events(), second.state().log.events());
}

#[test]
fn bad_typing_never_stops_the_game() {
    let mut state = GameState::new(&GameConfig::with_seed(4));
    let opponent = RandomMoveSource::new(state.fork_rng());
    let human = TypedInput::new(vec!["abc", "0", "99", "", "1", "-3"]);
    let seats: Vec<Box<dyn MoveSource>> = vec![Box::new(human), Box::new(opponent)];
    let mut session = Session::new(state, seats).unwrap();
    let mut display = RecordingDisplay::default();

    let mut fallbacks = 0;
    let mut human_plays = 0;
    for _ in 0..12 {
        let outcome = session.step(&mut display).unwrap();
        if outcome.player == 0 {
            if let TurnAction::Played { fallback, card } = outcome.action {
                human_plays += 1;
                if fallback {
                    fallbacks += 1;
                }
                let frame = &display.frames[display.frames.len() - 1];
                assert!(frame.available.contains(&card) || outcome.is_game_over());
            }
        }
        if outcome.is_game_over() {
            break;
        }
    }
    let logged = session
        .state()
        .log
        .events()
        .iter()
        .filter(|event| matches!(event, Event::InvalidSelection { player: 0 }))
        .count();
    assert_eq!(logged, fallbacks);
    assert!(fallbacks <= human_plays);
}

#[test]
fn human_choice_is_one_based_into_available() {
    let mut state = GameState::new(&GameConfig::with_seed(12));
    let opponent = RandomMoveSource::new(state.fork_rng());
    let seats: Vec<Box<dyn MoveSource>> =
        vec![Box::new(TypedInput::new(vec!["1"])), Box::new(opponent)];
    let mut session = Session::new(state, seats).unwrap();
    let mut display = RecordingDisplay::default();

    let outcome = session.step(&mut display).unwrap();
    let available = &display.frames[0].available;
    match outcome.action {
        TurnAction::Played { card, fallback } => {
            assert!(!fallback);
            assert_eq!(card, available[0]);
        }
        TurnAction::Drew { .. } => assert!(available.is_empty()),
    }
}

#[test]
fn events_serialize_for_transcripts() {
    let mut session = automated(8);
    session.run(&mut RecordingDisplay::default()).unwrap();
    for event in session.state().log.events() {
        let json = serde_json::to_string(event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, event);
    }
}
