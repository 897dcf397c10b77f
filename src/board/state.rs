//! The board and its state machine.
//!
//! `Board` owns the foundations, freecells, cascades, cursor, selection and
//! undo history. All mutation goes through a handful of operations:
//!
//! - `deal` / `redeal`: Reset everything and lay out a shuffled deck
//! - `up` / `down` / `left` / `right`: Move the cursor, clamped to the board
//! - `select`: Pick up the card under the cursor, or drop the picked card
//! - `undo`: Put the last moved card back
//!
//! Illegal requests are ignored rather than reported; the board only ever
//! moves between legal states.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::history::{Move, MoveHistory};
use super::selection::Selection;
use crate::cards::{Card, Deck, Rank, Slot, Suit};
use crate::core::command::Command;
use crate::core::config::{BoardConfig, ConfigError};
use crate::core::position::{Address, Position, FOUNDATION_COUNT, TOP_ROW};
use crate::core::rng::SeedSource;
use crate::rules::{can_place_on_foundation, can_stack};

/// Cards a cascade holds before spilling to the heap.
pub const CASCADE_INLINE: usize = 20;

/// A cascade, bottom card first.
pub type Cascade = SmallVec<[Card; CASCADE_INLINE]>;

/// Size of the renderer's viewport. The engine only stores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// FreeCell board.
///
/// ## Example
///
/// ```
/// use freecell_engine::{Board, Position, Slot};
///
/// let mut board = Board::new(1);
/// assert_eq!(board.cursor(), Position::new(0, 6));
///
/// // Pick up the top card of the first cascade and drop it in a freecell.
/// let card = board.card_at(board.cursor());
/// board.select();
/// for _ in 0..7 {
///     board.up();
/// }
/// for _ in 0..4 {
///     board.right();
/// }
/// board.select();
/// assert_eq!(board.card_at(Position::freecell(0)), card);
///
/// board.undo();
/// assert_eq!(board.card_at(Position::freecell(0)), Slot::Empty);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    game_number: u32,
    foundations: [Slot; FOUNDATION_COUNT],
    freecells: Vec<Slot>,
    cascades: Vec<Cascade>,
    cursor: Position,
    selection: Selection,
    history: MoveHistory,
    viewport: Viewport,
}

impl Board {
    /// Deal a standard FreeCell board for a game number.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut board = Self::empty(BoardConfig::default());
        board.deal(seed);
        board
    }

    /// Deal a board with a custom layout.
    pub fn with_config(config: BoardConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Self::empty(config);
        board.deal(seed);
        Ok(board)
    }

    fn empty(config: BoardConfig) -> Self {
        Self {
            game_number: 0,
            foundations: Suit::ALL.map(Slot::Placeholder),
            freecells: vec![Slot::Empty; config.freecells],
            cascades: vec![Cascade::new(); config.cascades],
            config,
            cursor: Position::default(),
            selection: Selection::Idle,
            history: MoveHistory::new(),
            viewport: Viewport::default(),
        }
    }

    // === Dealing ===

    /// Clear the board and deal game `seed`.
    ///
    /// Card `i` of the shuffled deck goes to cascade `i % cascades` at depth
    /// `i / cascades`. The cursor starts on the top card of cascade 0.
    pub fn deal(&mut self, seed: u32) {
        self.game_number = seed;
        self.foundations = Suit::ALL.map(Slot::Placeholder);
        self.freecells = vec![Slot::Empty; self.config.freecells];
        self.cascades = vec![Cascade::new(); self.config.cascades];
        self.selection = Selection::Idle;
        self.history.clear();

        let cascade_count = self.cascades.len();
        for (i, card) in Deck::new().shuffled(seed).into_iter().enumerate() {
            self.cascades[i % cascade_count].push(card);
        }

        self.cursor = Position::cascade(0, self.top_row_of(0));

        debug!("dealt game #{}", seed);
        self.debug_check();
    }

    /// Deal the current game number again.
    pub fn redeal(&mut self) {
        self.deal(self.game_number);
    }

    /// Deal a game number drawn from `seeds` and return it.
    pub fn deal_random(&mut self, seeds: &mut SeedSource) -> u32 {
        let seed = seeds.next_game_number();
        self.deal(seed);
        seed
    }

    // === Navigation ===

    /// Move the cursor up one row, stopping at the foundation/freecell row.
    pub fn up(&mut self) {
        let row = (self.cursor.row - 1).max(TOP_ROW);
        let column = self.cursor.column.min(self.row_width(row) - 1);
        self.cursor = Position::new(column, row);
    }

    /// Move the cursor down one row, stopping at the cascade's top card.
    pub fn down(&mut self) {
        let row = self.cursor.row + 1;
        let column = self.cursor.column.min(self.row_width(row) - 1);
        self.cursor = Position::new(column, self.clamp_row(column, row));
    }

    pub fn left(&mut self) {
        let column = self.cursor.column.saturating_sub(1);
        self.cursor = Position::new(column, self.clamp_row(column, self.cursor.row));
    }

    pub fn right(&mut self) {
        let column = (self.cursor.column + 1).min(self.row_width(self.cursor.row) - 1);
        self.cursor = Position::new(column, self.clamp_row(column, self.cursor.row));
    }

    /// Number of columns addressable in `row`.
    fn row_width(&self, row: i32) -> usize {
        if row < 0 {
            FOUNDATION_COUNT + self.config.freecells
        } else {
            self.config.cascades
        }
    }

    /// Pull a cascade row down to that cascade's top card.
    fn clamp_row(&self, column: usize, row: i32) -> i32 {
        if row < 0 {
            row
        } else {
            row.min(self.top_row_of(column) as i32)
        }
    }

    fn clamp_cursor(&mut self) {
        let Position { column, row } = self.cursor;
        self.cursor = Position::new(column, self.clamp_row(column, row));
    }

    // === Selection and moves ===

    /// Select the cursor position, clear the selection, or move the
    /// selected card to the cursor.
    ///
    /// - Nothing selected: select the cursor if it holds a movable card.
    /// - Cursor on the selection: clear it.
    /// - Cursor elsewhere: try the move, then clear the selection.
    pub fn select(&mut self) {
        let cursor = self.cursor;
        match self.selection {
            Selection::Idle => {
                if self.is_selectable(cursor) {
                    self.selection = Selection::PendingMove(cursor);
                    debug!("selected {}", cursor);
                }
            }
            Selection::PendingMove(at) if at == cursor => {
                self.selection = Selection::Idle;
                debug!("selection cleared");
            }
            Selection::PendingMove(at) => {
                self.try_move(at, cursor);
                self.selection = Selection::Idle;
            }
        }
    }

    /// Can the card at `pos` be picked up?
    ///
    /// Foundations never; freecells when occupied; cascades only at the
    /// top card.
    #[must_use]
    pub fn is_selectable(&self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        match pos.address() {
            Address::Foundation(_) => false,
            Address::Freecell(i) => self.freecells[i].is_occupied(),
            Address::Cascade { index, depth } => {
                let cascade = &self.cascades[index];
                !cascade.is_empty() && depth + 1 == cascade.len()
            }
        }
    }

    /// Is moving the card at `from` onto `to` legal?
    ///
    /// For a cascade target only the column matters: the card is checked
    /// against, and lands on, that cascade's top card.
    #[must_use]
    pub fn can_move(&self, from: Position, to: Position) -> bool {
        if from == to || from.is_foundation() || !self.contains(to) {
            return false;
        }
        if !self.is_selectable(from) {
            return false;
        }
        let Some(card) = self.card_at(from).card() else {
            return false;
        };

        match to.address() {
            Address::Freecell(i) => self.freecells[i].is_empty(),
            Address::Foundation(i) => can_place_on_foundation(card, self.foundations[i]),
            Address::Cascade { index, .. } => match self.cascades[index].last() {
                None => true,
                Some(&top) => can_stack(self.config.stack_rule, card, top),
            },
        }
    }

    /// Move the card at `from` onto `to` if legal and record it.
    ///
    /// Returns whether the move happened.
    pub fn try_move(&mut self, from: Position, to: Position) -> bool {
        if !self.can_move(from, to) {
            trace!("rejected move {} -> {}", from, to);
            return false;
        }
        match self.relocate(from, to) {
            Some(landed) => {
                self.history.push(Move::new(from, landed));
                self.debug_check();
                true
            }
            None => false,
        }
    }

    /// Put the most recently moved card back where it came from.
    ///
    /// Skips the legality check, so a card can come back off a foundation.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        debug!("undo {}", mv);

        let back = mv.reversed();
        let landed = self.relocate(back.from, back.to);
        debug_assert_eq!(landed, Some(mv.from));
        self.debug_check();
    }

    /// Move a card without checking legality. Returns where it landed.
    fn relocate(&mut self, from: Position, to: Position) -> Option<Position> {
        let card = self.take(from)?;
        let landed = self.place(card, to);
        debug!("moving {} from {} to {}", card, from, landed);

        self.selection = Selection::Idle;
        self.clamp_cursor();
        Some(landed)
    }

    fn take(&mut self, from: Position) -> Option<Card> {
        match from.address() {
            Address::Foundation(i) => {
                let card = self.foundations[i].card()?;
                self.foundations[i] = match card.rank.prev() {
                    Some(rank) => Slot::Occupied(Card::new(rank, card.suit)),
                    None => Slot::Placeholder(card.suit),
                };
                Some(card)
            }
            Address::Freecell(i) => {
                let card = self.freecells[i].card()?;
                self.freecells[i] = Slot::Empty;
                Some(card)
            }
            Address::Cascade { index, depth } => {
                let cascade = &mut self.cascades[index];
                debug_assert_eq!(depth + 1, cascade.len(), "only a cascade's top card moves");
                cascade.pop()
            }
        }
    }

    fn place(&mut self, card: Card, to: Position) -> Position {
        match to.address() {
            Address::Foundation(i) => {
                self.foundations[i] = Slot::Occupied(card);
                to
            }
            Address::Freecell(i) => {
                self.freecells[i] = Slot::Occupied(card);
                to
            }
            Address::Cascade { index, .. } => {
                let cascade = &mut self.cascades[index];
                cascade.push(card);
                Position::cascade(index, cascade.len() - 1)
            }
        }
    }

    // === Other commands ===

    /// Record the renderer's viewport size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }

    /// Run a single command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Deal(seed) => self.deal(seed),
            Command::Redeal => self.redeal(),
            Command::Up => self.up(),
            Command::Down => self.down(),
            Command::Left => self.left(),
            Command::Right => self.right(),
            Command::Select => self.select(),
            Command::Undo => self.undo(),
            Command::Resize { width, height } => self.resize(width, height),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Game number (seed) of the current deal.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected position, if a move is pending.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selection.position()
    }

    /// Foundation slots, indexed by suit.
    #[must_use]
    pub fn foundations(&self) -> &[Slot] {
        &self.foundations
    }

    #[must_use]
    pub fn freecells(&self) -> &[Slot] {
        &self.freecells
    }

    #[must_use]
    pub fn cascades(&self) -> &[Cascade] {
        &self.cascades
    }

    /// Cards of one cascade, bottom first.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cascade of this board.
    #[must_use]
    pub fn cascade(&self, index: usize) -> &[Card] {
        &self.cascades[index]
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Row of the top card of a cascade, or 0 if it is empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cascade of this board.
    #[must_use]
    pub fn top_row_of(&self, index: usize) -> usize {
        self.cascades[index].len().saturating_sub(1)
    }

    /// Is `pos` a slot of this board?
    ///
    /// Cascade positions above the top card count as on the board; they
    /// read as empty.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= TOP_ROW && pos.column < self.row_width(pos.row)
    }

    /// Contents of a slot.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on this board (see `contains`).
    #[must_use]
    pub fn card_at(&self, pos: Position) -> Slot {
        match pos.address() {
            Address::Foundation(i) => self.foundations[i],
            Address::Freecell(i) => self.freecells[i],
            Address::Cascade { index, depth } => self.cascades[index].get(depth).copied().into(),
        }
    }

    /// Have all four foundations been built up to the King?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.foundations
            .iter()
            .all(|slot| slot.card().is_some_and(|card| card.rank == Rank::King))
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.check_invariants(), Ok(()));
    }
}
