use cribrs::{
    Analysis, Analyst, AnalystOptions, Card, KeyCode, KeyEvent, Partition, Score, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmAnalyst {
    analyst: Analyst,
}

#[wasm_bindgen]
impl WasmAnalyst {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            analyst: Analyst::new(AnalystOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.analyst = Analyst::new(AnalystOptions::default(), seed as u64);
    }

    /// Text field change: the field's full current value.
    pub fn set_text(&self, text: &str) {
        self.analyst.set_text(text);
    }

    /// Key-down listener. Takes `KeyboardEvent.key`.
    pub fn key_down(&self, key: &str) -> bool {
        let code = match key {
            "Escape" => KeyCode::Escape,
            "Delete" => KeyCode::Delete,
            "Backspace" => KeyCode::Backspace,
            _ => KeyCode::Other,
        };
        self.analyst.handle_key(KeyEvent::Down(code))
    }

    /// Key-press listener. Takes `KeyboardEvent.key`; named keys are ignored.
    pub fn key_press(&self, key: &str) -> bool {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.analyst.handle_key(KeyEvent::Press(c)),
            _ => false,
        }
    }

    /// Per-card remove button. Takes the card's display text, e.g. `"A♣"`.
    pub fn remove_card(&self, card: &str) -> Result<bool, JsValue> {
        let card: Card = card.parse().map_err(js_err)?;
        Ok(self.analyst.remove_card(&card))
    }

    pub fn clear(&self) {
        self.analyst.clear();
    }

    pub fn deal(&self) -> Result<(), JsValue> {
        self.analyst.deal().map(|_| ()).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let hand = self.analyst.hand();
        let snapshot = Snapshot {
            text: hand.to_string(),
            cards: hand.cards().iter().copied().map(JsCard::from).collect(),
            analysis: JsAnalysis::from(self.analyst.analysis()),
        };
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    text: String,
    cards: Vec<JsCard>,
    analysis: JsAnalysis,
}

#[derive(Serialize)]
struct JsCard {
    text: String,
    rank: Option<&'static str>,
    suit: Option<&'static str>,
    color: &'static str,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            text: card.to_string(),
            rank: card.rank.map(|rank| rank.as_str()),
            suit: card.suit.map(suit_to_str),
            color: suit_color(card.suit),
        }
    }
}

#[derive(Serialize)]
struct JsPartition {
    key: String,
    keep: Vec<JsCard>,
    discard: Vec<JsCard>,
    score: &'static str,
}

impl From<Partition> for JsPartition {
    fn from(partition: Partition) -> Self {
        let key = partition
            .selection
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        Self {
            key,
            keep: partition.keep.into_iter().map(JsCard::from).collect(),
            discard: partition.discard.into_iter().map(JsCard::from).collect(),
            score: score_to_str(partition.score),
        }
    }
}

#[derive(Serialize)]
struct JsAnalysis {
    insufficient: bool,
    have: u32,
    need: u32,
    partitions: Vec<JsPartition>,
}

impl From<Analysis> for JsAnalysis {
    fn from(analysis: Analysis) -> Self {
        match analysis {
            Analysis::NotEnoughCards { have, need } => Self {
                insufficient: true,
                have: have as u32,
                need: need as u32,
                partitions: Vec::new(),
            },
            Analysis::Partitions(partitions) => Self {
                insufficient: false,
                have: partitions.first().map_or(0, |p| (p.keep.len() + p.discard.len()) as u32),
                need: cribrs::KEEP_SIZE as u32,
                partitions: partitions.into_iter().map(JsPartition::from).collect(),
            },
        }
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

fn suit_color(suit: Option<Suit>) -> &'static str {
    match suit {
        Some(Suit::Clubs | Suit::Spades) => "black",
        Some(Suit::Diamonds | Suit::Hearts) => "red",
        None => "indeterminate",
    }
}

fn score_to_str(score: Score) -> &'static str {
    match score {
        Score::Unknown => "unknown",
        _ => "unknown",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
