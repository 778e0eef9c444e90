//! Hand entry and analysis integration tests.

use std::sync::Arc;

use cribrs::{
    Analysis, Analyst, AnalystOptions, Card, CardParseError, DealError, DealtHand, Deck,
    DuplicatePolicy, EntryKey, KeyBus, KeyCode, KeyEvent, Rank, Score, Slot, Step, Suit,
    combinations, entry, parse_hand, parse_hand_with, partitions, tokens,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::complete(rank, suit)
}

fn press_all(hand: &DealtHand, keys: &str) -> DealtHand {
    keys.chars().fold(hand.clone(), |hand, c| {
        let key = EntryKey::from_char(c).expect("test keys are recognized");
        entry::apply(&hand, key)
    })
}

fn hand_of(cards: &[Card]) -> DealtHand {
    DealtHand::from_cards(cards.to_vec())
}

#[test]
fn rank_and_suit_string_mappings() {
    assert_eq!(Rank::Ten.as_str(), "T");
    assert_eq!(Rank::from_token("10"), Some(Rank::Ten));
    assert_eq!(Rank::from_token("t"), Some(Rank::Ten));
    assert_eq!(Rank::from_token("q"), Some(Rank::Queen));
    assert_eq!(Rank::from_token("x"), None);
    assert_eq!(Rank::from_token(""), None);

    assert_eq!(Suit::Hearts.glyph(), '♥');
    assert_eq!(Suit::from_glyph('♡'), Some(Suit::Hearts));
    assert_eq!(Suit::from_glyph('♧'), Some(Suit::Clubs));
    assert_eq!(Suit::from_letter('s'), Some(Suit::Spades));
    assert_eq!(Suit::from_token("♦"), Some(Suit::Diamonds));
    assert_eq!(Suit::from_glyph('x'), None);
}

#[test]
fn card_display_forms() {
    assert_eq!(card(Rank::Ace, Suit::Clubs).to_string(), "A♣");
    assert_eq!(Card::rank_only(Rank::Five).to_string(), "5");
    assert_eq!(Card::suit_only(Suit::Hearts).to_string(), "?♥");
    assert_eq!(Card::BLANK.to_string(), "?");

    let hand = hand_of(&[card(Rank::Ace, Suit::Clubs), Card::rank_only(Rank::Five)]);
    assert_eq!(hand.to_string(), "A♣ 5");
}

#[test]
fn strict_card_parsing() {
    assert_eq!("10h".parse::<Card>(), Ok(card(Rank::Ten, Suit::Hearts)));
    assert_eq!("A♣".parse::<Card>(), Ok(card(Rank::Ace, Suit::Clubs)));
    assert_eq!("?♠".parse::<Card>(), Ok(Card::suit_only(Suit::Spades)));
    assert_eq!("5".parse::<Card>(), Ok(Card::rank_only(Rank::Five)));
    assert_eq!("?".parse::<Card>(), Ok(Card::BLANK));

    assert_eq!("".parse::<Card>(), Err(CardParseError::Empty));
    assert_eq!("X".parse::<Card>(), Err(CardParseError::InvalidRank));
    assert_eq!("5x".parse::<Card>(), Err(CardParseError::InvalidSuit));
    assert_eq!("5hh".parse::<Card>(), Err(CardParseError::TrailingInput));
    assert_eq!("k".parse::<Rank>(), Ok(Rank::King));
    assert_eq!("z".parse::<Suit>(), Err(CardParseError::InvalidSuit));
}

#[test]
fn suitless_cards_compare_equal_by_value() {
    assert_eq!(Card::rank_only(Rank::Five), Card::rank_only(Rank::Five));
    assert_eq!(Card::BLANK, Card::BLANK);
    assert_ne!(Card::rank_only(Rank::Five), card(Rank::Five, Suit::Clubs));
}

#[test]
fn parser_reads_specifiers() {
    let hand = parse_hand("AC 5D TH");
    assert_eq!(
        hand.cards(),
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Ten, Suit::Hearts),
        ]
    );

    assert_eq!(
        parse_hand("10c1d").cards(),
        &[card(Rank::Ten, Suit::Clubs), card(Rank::Ten, Suit::Diamonds)]
    );
    assert_eq!(
        parse_hand("a♡ k♤ qs").cards(),
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::King, Suit::Spades),
            card(Rank::Queen, Suit::Spades),
        ]
    );
    assert_eq!(parse_hand("7, 8").cards(), &[
        Card::rank_only(Rank::Seven),
        Card::rank_only(Rank::Eight),
    ]);
}

#[test]
fn parser_ignores_garbage() {
    assert!(parse_hand("").is_empty());
    assert!(parse_hand("hello world!").is_empty());
    assert!(parse_hand("0 0 0").is_empty());
}

#[test]
fn parser_duplicate_policy() {
    assert_eq!(parse_hand("5h 5h 6c").len(), 3);
    assert_eq!(
        parse_hand_with("5h 6c 5h", DuplicatePolicy::Collapse).cards(),
        &[card(Rank::Five, Suit::Hearts), card(Rank::Six, Suit::Clubs)]
    );
    assert_eq!(parse_hand_with("5h 5h", DuplicatePolicy::Keep).len(), 2);
}

#[test]
fn token_ranges_point_into_input() {
    let ranges: Vec<_> = tokens("  AC 5 9♣").map(|token| token.range).collect();
    assert_eq!(ranges, vec![2..4, 5..6, 7..11]);
}

#[test]
fn entry_key_mapping() {
    assert_eq!(EntryKey::from_char('a'), Some(EntryKey::Rank(Rank::Ace)));
    assert_eq!(EntryKey::from_char('0'), Some(EntryKey::Rank(Rank::Ten)));
    assert_eq!(EntryKey::from_char('1'), Some(EntryKey::Rank(Rank::Ten)));
    assert_eq!(EntryKey::from_char('h'), Some(EntryKey::Suit(Suit::Hearts)));
    assert_eq!(EntryKey::from_char('♤'), Some(EntryKey::Suit(Suit::Spades)));
    assert_eq!(EntryKey::from_char('?'), Some(EntryKey::UnknownRank));
    assert_eq!(EntryKey::from_char('x'), None);

    assert_eq!(EntryKey::from_code(KeyCode::Escape), Some(EntryKey::Clear));
    assert_eq!(EntryKey::from_code(KeyCode::Backspace), Some(EntryKey::Delete));
    assert_eq!(EntryKey::from_code(KeyCode::Delete), Some(EntryKey::Delete));
    assert_eq!(EntryKey::from_code(KeyCode::Other), None);
}

#[test]
fn transition_is_a_pure_function_of_slot_and_key() {
    assert_eq!(
        entry::transition(Slot::RankOnly(Rank::Five), EntryKey::Suit(Suit::Clubs)),
        Step::Fill(card(Rank::Five, Suit::Clubs))
    );
    assert_eq!(
        entry::transition(Slot::SuitOnly(Suit::Hearts), EntryKey::Rank(Rank::King)),
        Step::Fill(card(Rank::King, Suit::Hearts))
    );
    assert_eq!(
        entry::transition(Slot::Complete(Rank::Ace, Suit::Clubs), EntryKey::Suit(Suit::Spades)),
        Step::Push(Card::suit_only(Suit::Spades))
    );
    assert_eq!(
        entry::transition(Slot::RankOnly(Rank::Ace), EntryKey::Rank(Rank::Two)),
        Step::Push(Card::rank_only(Rank::Two))
    );
    assert_eq!(entry::transition(Slot::Empty, EntryKey::Clear), Step::Reset);
    assert_eq!(entry::transition(Slot::Empty, EntryKey::Delete), Step::Pop);
}

#[test]
fn keystrokes_rank_then_suit_then_rank() {
    let hand = press_all(&DealtHand::new(), "A♣5");
    assert_eq!(
        hand.cards(),
        &[card(Rank::Ace, Suit::Clubs), Card::rank_only(Rank::Five)]
    );
    assert_eq!(Slot::trailing(&hand), Slot::RankOnly(Rank::Five));
}

#[test]
fn keystrokes_suit_first() {
    let hand = press_all(&DealtHand::new(), "hk");
    assert_eq!(hand.cards(), &[card(Rank::King, Suit::Hearts)]);

    let hand = press_all(&DealtHand::new(), "hs");
    assert_eq!(
        hand.cards(),
        &[Card::suit_only(Suit::Hearts), Card::suit_only(Suit::Spades)]
    );
}

#[test]
fn keystroke_unknown_rank_pushes_placeholder() {
    let hand = press_all(&hand_of(&[card(Rank::Ace, Suit::Clubs)]), "?");
    assert_eq!(hand.cards(), &[card(Rank::Ace, Suit::Clubs), Card::BLANK]);

    let hand = press_all(&hand, "d");
    assert_eq!(
        hand.cards(),
        &[card(Rank::Ace, Suit::Clubs), Card::suit_only(Suit::Diamonds)]
    );
}

#[test]
fn escape_clears_any_hand() {
    let hand = press_all(&DealtHand::new(), "A♣5h?");
    assert!(!hand.is_empty());
    assert!(entry::apply(&hand, EntryKey::Clear).is_empty());
    assert!(entry::apply(&DealtHand::new(), EntryKey::Clear).is_empty());
}

#[test]
fn backspace_removes_trailing_card() {
    let rank_only = hand_of(&[Card::rank_only(Rank::Five)]);
    assert!(entry::apply(&rank_only, EntryKey::Delete).is_empty());

    let complete = hand_of(&[card(Rank::Five, Suit::Clubs)]);
    assert!(entry::apply(&complete, EntryKey::Delete).is_empty());

    let mixed = hand_of(&[card(Rank::Ace, Suit::Clubs), Card::rank_only(Rank::Five)]);
    assert_eq!(
        entry::apply(&mixed, EntryKey::Delete).cards(),
        &[card(Rank::Ace, Suit::Clubs)]
    );

    assert!(entry::apply(&DealtHand::new(), EntryKey::Delete).is_empty());
}

#[test]
fn combinations_in_lexicographic_order() {
    assert_eq!(
        combinations(5, 4),
        vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 2, 4],
            vec![0, 1, 3, 4],
            vec![0, 2, 3, 4],
            vec![1, 2, 3, 4],
        ]
    );
    assert!(combinations(3, 4).is_empty());
    assert_eq!(combinations(4, 0), vec![Vec::<usize>::new()]);
    assert_eq!(combinations(8, 4).len(), 70);
}

#[test]
fn partitions_of_six_cards() {
    let hand = parse_hand("AC 2D 3H 4S 5C 6D");
    let analysis = partitions(&hand);
    let parts = analysis.partitions();
    assert!(!analysis.is_insufficient());
    assert_eq!(parts.len(), 15);

    assert_eq!(parts[0].keep, hand.cards()[..4].to_vec());
    assert_eq!(parts[0].discard, hand.cards()[4..].to_vec());
    assert_eq!(parts[14].keep, hand.cards()[2..].to_vec());
    assert_eq!(parts[14].discard, hand.cards()[..2].to_vec());
    assert!(parts.iter().all(|part| part.score == Score::Unknown));

    assert_eq!(partitions(&hand), analysis);
}

#[test]
fn partitions_need_four_cards() {
    let analysis = partitions(&parse_hand("AC 2D 3H"));
    assert_eq!(analysis, Analysis::NotEnoughCards { have: 3, need: 4 });
    assert!(analysis.is_insufficient());
    assert!(analysis.partitions().is_empty());
}

#[test]
fn analyze_collapses_duplicate_cards() {
    let hand = parse_hand("5 5 6 7 8");
    assert_eq!(cribrs::analyze(&hand, DuplicatePolicy::Keep).partitions().len(), 5);
    assert_eq!(
        cribrs::analyze(&hand, DuplicatePolicy::Collapse).partitions().len(),
        1
    );
}

#[test]
fn remove_by_value_takes_first_occurrence() {
    let five = Card::rank_only(Rank::Five);
    let six = Card::rank_only(Rank::Six);
    let hand = hand_of(&[five, six, five]);
    assert_eq!(hand.without(&five).cards(), &[six, five]);
    assert_eq!(hand.without(&card(Rank::Ace, Suit::Clubs)), hand);
}

#[test]
fn analyst_text_and_keys() {
    let analyst = Analyst::new(AnalystOptions::default(), 1);

    let hand = analyst.set_text("5h 5h 6c 7d 8s");
    assert_eq!(hand.len(), 4);
    assert_eq!(analyst.analysis().partitions().len(), 1);

    assert!(analyst.handle_key(KeyEvent::Down(KeyCode::Escape)));
    assert!(analyst.hand().is_empty());

    assert!(analyst.handle_key(KeyEvent::Press('Q')));
    assert!(analyst.handle_key(KeyEvent::Press('s')));
    assert_eq!(analyst.hand().cards(), &[card(Rank::Queen, Suit::Spades)]);

    assert!(!analyst.handle_key(KeyEvent::Press('x')));
    assert!(!analyst.handle_key(KeyEvent::Down(KeyCode::Other)));
    assert_eq!(analyst.hand().len(), 1);

    assert!(analyst.set_text("xyz!").is_empty());
    assert!(analyst.analysis().is_insufficient());
}

#[test]
fn analyst_remove_card() {
    let options = AnalystOptions::default().with_duplicates(DuplicatePolicy::Keep);
    let analyst = Analyst::new(options, 1);
    analyst.set_text("5 6 5");

    assert!(analyst.remove_card(&Card::rank_only(Rank::Five)));
    assert_eq!(
        analyst.hand().cards(),
        &[Card::rank_only(Rank::Six), Card::rank_only(Rank::Five)]
    );
    assert!(!analyst.remove_card(&card(Rank::King, Suit::Hearts)));
    assert_eq!(analyst.hand().len(), 2);

    analyst.clear();
    assert!(analyst.hand().is_empty());
}

#[test]
fn analyst_deal_is_seeded() {
    let first = Analyst::new(AnalystOptions::default(), 7);
    let second = Analyst::new(AnalystOptions::default(), 7);

    let hand = first.deal().unwrap();
    assert_eq!(hand.len(), 6);
    assert!(hand.is_complete());
    assert_eq!(hand.deduplicated().len(), 6);
    assert_eq!(second.deal().unwrap(), hand);
    assert_eq!(first.hand(), hand);
    assert_eq!(first.analysis().partitions().len(), 15);
}

#[test]
fn analyst_deal_too_many() {
    let analyst = Analyst::new(AnalystOptions::default().with_deal_size(60), 7);
    analyst.set_text("AC");
    assert_eq!(
        analyst.deal().unwrap_err(),
        DealError::NotEnoughCards {
            requested: 60,
            remaining: 52,
        }
    );
    assert_eq!(analyst.hand().len(), 1);
}

#[test]
fn deck_deals_from_top() {
    let mut deck = Deck::ordered();
    assert_eq!(deck.remaining(), 52);
    assert_eq!(deck.clone().deal(52).unwrap().deduplicated().len(), 52);

    let hand = deck.deal(5).unwrap();
    assert_eq!(deck.remaining(), 47);
    assert_eq!(hand.cards()[0], card(Rank::King, Suit::Spades));
    assert_eq!(hand.cards()[4], card(Rank::Nine, Suit::Spades));
}

#[test]
fn keyboard_subscription_lifecycle() {
    let analyst = Arc::new(Analyst::new(AnalystOptions::default(), 1));
    let bus = KeyBus::new();

    let mut subscription = analyst.attach_keyboard(&bus);
    assert!(subscription.is_active());
    assert_eq!(bus.listener_count(), 1);

    assert!(bus.dispatch(KeyEvent::Press('A')));
    assert!(bus.dispatch(KeyEvent::Press('♣')));
    assert!(!bus.dispatch(KeyEvent::Press('z')));
    assert_eq!(analyst.hand().cards(), &[card(Rank::Ace, Suit::Clubs)]);

    subscription.release();
    subscription.release();
    assert!(!subscription.is_active());
    assert_eq!(bus.listener_count(), 0);

    assert!(!bus.dispatch(KeyEvent::Down(KeyCode::Escape)));
    assert_eq!(analyst.hand().len(), 1);
}

#[test]
fn keyboard_subscription_released_on_drop() {
    let analyst = Arc::new(Analyst::new(AnalystOptions::default(), 1));
    let bus = KeyBus::new();
    {
        let _subscription = analyst.attach_keyboard(&bus);
        assert!(bus.dispatch(KeyEvent::Press('7')));
    }
    assert_eq!(bus.listener_count(), 0);
    assert!(!bus.dispatch(KeyEvent::Press('8')));
    assert_eq!(analyst.hand().cards(), &[Card::rank_only(Rank::Seven)]);
}
