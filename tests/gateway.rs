//! Action gateway and turn guard tests.

use bjcrew::{
    ActionGateway, ActionKind, Card, Outcome, PlayerStatus, Round, RoundOptions, ScorecardError,
    Shoe, ShowdownError, Suit, TURN_COMPLETE_MARKER, TurnEnd, TurnGuard,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn stacked_round(names: &[&str], options: RoundOptions, draws: &[Card]) -> Round {
    let shoe = Shoe::stacked(draws, options.decks, 1);
    Round::with_shoe(names.iter().copied(), options, shoe).unwrap()
}

/// Human is dealt 2 and 3, dealer shows 9, then a run of small cards.
fn low_cards_round(options: RoundOptions) -> Round {
    stacked_round(
        &["Human"],
        options,
        &[
            card(Suit::Hearts, 2),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 2),
            card(Suit::Diamonds, 2),
        ],
    )
}

#[test]
fn json_and_plain_hit_draw_the_same_card() {
    let plain = low_cards_round(RoundOptions::default());
    let json = low_cards_round(RoundOptions::default());
    plain.deal_initial_cards();
    json.deal_initial_cards();

    let a = ActionGateway::new(&plain).submit("Human", "hit");
    let b = ActionGateway::new(&json).submit("Human", r#"{"action":"Hit"}"#);

    assert_eq!(a, b);
    assert_eq!(a.kind, ActionKind::Continue);
    assert_eq!(plain.hand("Human"), json.hand("Human"));
    assert_eq!(plain.cards_remaining(), json.cards_remaining());
}

#[test]
fn accepted_spellings() {
    for raw in ["stand", "Stand", "STAND()", " stand ", r#"{"action": "Stand"}"#] {
        let round = low_cards_round(RoundOptions::default());
        round.deal_initial_cards();
        let result = ActionGateway::new(&round).submit("Human", raw);
        assert_eq!(
            result.kind,
            ActionKind::TurnComplete(TurnEnd::Stood),
            "raw action {raw:?}"
        );
    }
}

#[test]
fn invalid_action_leaves_the_round_untouched() {
    let round = low_cards_round(RoundOptions::default());
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let before = round.get_state("Human").unwrap();
    let remaining = round.cards_remaining();

    for raw in ["double", "", r#"{"action": 2}"#, r#"{"choice": "hit"}"#] {
        let result = gateway.submit("Human", raw);
        assert_eq!(result.kind, ActionKind::Invalid);
        assert!(!result.message.contains(TURN_COMPLETE_MARKER));
    }

    assert_eq!(round.get_state("Human").unwrap(), before);
    assert_eq!(round.cards_remaining(), remaining);
    assert!(round.is_active("Human"));
}

#[test]
fn hit_to_twenty_one_stands_automatically() {
    let round = stacked_round(
        &["P"],
        RoundOptions::default().with_decks(2),
        &[
            card(Suit::Hearts, 10), // P
            card(Suit::Spades, 7),  // dealer up
            card(Suit::Clubs, 6),   // P: 16
            card(Suit::Diamonds, 9),
            card(Suit::Hearts, 5), // P hits: 21
        ],
    );
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);

    let state = round.get_state("P").unwrap();
    assert_eq!(state.score, 16);
    assert_eq!(state.dealer_up_card.map(|c| c.rank), Some(7));

    let result = gateway.submit("P", "hit");
    assert_eq!(result.kind, ActionKind::TurnComplete(TurnEnd::TwentyOne));
    assert!(result.message.contains("Stands automatically"));
    assert!(result.message.contains(TURN_COMPLETE_MARKER));
    assert_eq!(round.get_state("P").unwrap().status, PlayerStatus::Stood);

    let again = gateway.submit("P", "stand");
    assert_eq!(again.kind, ActionKind::AlreadyFinished);
}

#[test]
fn guard_forces_a_stand_past_the_cap() {
    let round = low_cards_round(RoundOptions::default());
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::with_max_actions(&gateway, 3);

    for expected in [7, 9, 11] {
        let result = guard.submit("Human", "hit");
        assert_eq!(result.kind, ActionKind::Continue);
        assert_eq!(round.get_state("Human").unwrap().score, expected);
    }

    let forced = guard.submit("Human", "hit");
    assert_eq!(forced.kind, ActionKind::TurnComplete(TurnEnd::Forced));
    assert!(forced.is_turn_complete());
    assert!(forced.message.contains("Forced to stand with 11"));
    assert!(forced.message.contains(TURN_COMPLETE_MARKER));

    assert!(!round.is_active("Human"));
    assert_eq!(round.hand("Human").unwrap().len(), 5);
    assert_eq!(guard.actions_taken("Human"), 4);

    // Further submissions stay forced and never draw.
    let remaining = round.cards_remaining();
    assert_eq!(
        guard.submit("Human", "hit").kind,
        ActionKind::TurnComplete(TurnEnd::Forced)
    );
    assert_eq!(round.cards_remaining(), remaining);
}

#[test]
fn guard_counts_invalid_submissions() {
    let round = low_cards_round(RoundOptions::default());
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::with_max_actions(&gateway, 2);

    assert_eq!(guard.submit("Human", "maybe").kind, ActionKind::Invalid);
    assert_eq!(guard.submit("Human", "later").kind, ActionKind::Invalid);
    assert_eq!(
        guard.submit("Human", "hit").kind,
        ActionKind::TurnComplete(TurnEnd::Forced)
    );
    assert_eq!(round.hand("Human").unwrap().len(), 2);
    assert!(!round.is_active("Human"));
}

#[test]
fn guard_past_the_cap_before_the_deal_leaves_the_turn_open() {
    let round = low_cards_round(RoundOptions::default());
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::with_max_actions(&gateway, 0);

    let result = guard.submit("Human", "hit");
    assert_eq!(result.kind, ActionKind::AlreadyFinished);
    assert!(!result.is_turn_complete());
    assert!(round.is_active("Human"));
    assert!(round.hand("Human").unwrap().is_empty());

    // Once dealt, the next submission is forced to stand.
    round.deal_initial_cards();
    assert_eq!(
        guard.submit("Human", "hit").kind,
        ActionKind::TurnComplete(TurnEnd::Forced)
    );
    assert!(!round.is_active("Human"));
}

#[test]
fn guard_reads_its_cap_from_the_round_options() {
    let round = low_cards_round(RoundOptions::default().with_max_actions_per_turn(1));
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::new(&gateway);
    assert_eq!(guard.max_actions(), 1);

    assert_eq!(guard.submit("Human", "hit").kind, ActionKind::Continue);
    assert!(guard.submit("Human", "hit").is_turn_complete());
    assert_eq!(guard.actions_taken("Other"), 0);
}

#[test]
fn guard_counts_each_participant_separately() {
    let round = stacked_round(
        &["A", "B"],
        RoundOptions::default(),
        &[
            card(Suit::Hearts, 2),
            card(Suit::Hearts, 3),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 2),
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 4), // A
            card(Suit::Clubs, 4),  // B
        ],
    );
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::with_max_actions(&gateway, 1);

    assert_eq!(guard.submit("A", "hit").kind, ActionKind::Continue);
    assert_eq!(guard.submit("B", "hit").kind, ActionKind::Continue);
    assert_eq!(guard.actions_taken("A"), 1);
    assert_eq!(guard.actions_taken("B"), 1);
}

#[test]
fn result_query_and_json_scorecard() {
    let round = stacked_round(
        &["Human"],
        RoundOptions::default(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
        ],
    );
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);

    assert_eq!(gateway.result().unwrap_err(), ShowdownError::InvalidState);
    assert!(matches!(
        gateway.scorecard_json(),
        Err(ScorecardError::Showdown(ShowdownError::InvalidState))
    ));

    gateway.submit("Human", "stand");
    round.dealer_play().unwrap();

    let result = gateway.result().unwrap();
    assert_eq!(result.participant("Human").unwrap().outcome, Outcome::Win);

    let json: serde_json::Value = serde_json::from_str(&gateway.scorecard_json().unwrap()).unwrap();
    assert_eq!(json["dealer"]["value"], 18);
    assert_eq!(json["participants"][0]["name"], "Human");
    assert_eq!(json["participants"][0]["value"], 20);
    assert_eq!(json["participants"][0]["outcome"], "Win");
}

#[test]
fn full_round_with_automated_participants() {
    let options = RoundOptions::default().with_seed(2024);
    let round = Round::new(["Human", "AI_Strategist", "AI_Cautious"], options).unwrap();
    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::new(&gateway);

    for name in round.participants() {
        while round.is_active(name) {
            let score = round.get_state(name).unwrap().score;
            let raw = if score < 15 { "hit" } else { r#"{"action": "Stand"}"# };
            let result = guard.submit(name, raw);
            assert_ne!(result.kind, ActionKind::Invalid);
        }
        assert!(guard.actions_taken(name) <= guard.max_actions());
    }

    let log = round.dealer_play().unwrap();
    let dealer_final = round.get_state(bjcrew::DEALER_NAME).unwrap().score;
    assert!(dealer_final >= 17);
    assert_eq!(log.lines.len(), log.cards_drawn.len() + 2);

    let result = gateway.result().unwrap();
    assert_eq!(result.participants.len(), 3);
    assert_eq!(result, gateway.result().unwrap());
}
