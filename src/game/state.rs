use super::{
    action::Direction,
    geometry::{Playfield, Rect},
};

/// The snake in the game.
///
/// Segments live in a fixed-capacity slice, head first. Slots past the
/// current length hold `Rect::EMPTY`; the slice itself never grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub segments: Box<[Rect]>,
    /// Current direction of movement
    pub direction: Direction,
    /// Pixels travelled per step
    pub cell: u32,
}

impl Snake {
    /// Lay out a snake of `length` segments with its body trailing behind
    /// `head`, in a slice of `capacity` slots
    pub fn spawn(capacity: usize, head: Rect, direction: Direction, length: usize) -> Self {
        let capacity = capacity.max(1);
        let length = length.clamp(1, capacity);
        let mut segments = vec![Rect::EMPTY; capacity].into_boxed_slice();

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx * head.w as i32, -dy * head.h as i32);

        segments[0] = head;
        for i in 1..length {
            segments[i] = segments[i - 1].offset(back_dx, back_dy);
        }

        Self {
            segments,
            direction,
            cell: head.w,
        }
    }

    pub fn head(&self) -> Rect {
        self.segments[0]
    }

    pub fn tail(&self) -> Rect {
        self.segments[self.len() - 1]
    }

    /// Occupied segments, head first
    pub fn active(&self) -> &[Rect] {
        &self.segments[..self.len()]
    }

    /// Occupied segments excluding the head
    pub fn body_segments(&self) -> &[Rect] {
        &self.active()[1..]
    }

    /// Number of occupied segments
    pub fn len(&self) -> usize {
        self.segments.iter().take_while(|s| !s.is_empty()).count()
    }

    /// Never true for a spawned snake; the head always has area
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Segment slots, used or not
    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    /// Movement per step in pixels as (dx, dy)
    pub fn velocity(&self) -> (i32, i32) {
        let (dx, dy) = self.direction.delta();
        (dx * self.cell as i32, dy * self.cell as i32)
    }

    /// Where the head lands on the next step
    pub fn next_head(&self) -> Rect {
        let (dx, dy) = self.velocity();
        self.head().offset(dx, dy)
    }

    /// True if `direction` would send the head back into the neck
    pub fn is_reversal(&self, direction: Direction) -> bool {
        self.len() > 1 && self.direction.is_opposite(direction)
    }

    /// Check if the rectangle overlaps the body (head excluded)
    pub fn collides_with_body(&self, rect: &Rect) -> bool {
        self.body_segments().iter().any(|s| s.intersects(rect))
    }

    /// Check if the rectangle overlaps any occupied segment
    pub fn occupies(&self, rect: &Rect) -> bool {
        self.active().iter().any(|s| s.intersects(rect))
    }

    /// Would the head crash into the body when moved onto `next`?
    ///
    /// Unless the snake is growing, the tail leaves its cell on the same
    /// step, so that cell counts as free.
    pub fn blocks(&self, next: &Rect, growing: bool) -> bool {
        let tail_moves = !growing || self.len() == self.capacity();
        if tail_moves && self.len() > 1 && *next == self.tail() {
            return false;
        }
        self.collides_with_body(next)
    }

    /// Advance one cell in the current direction.
    ///
    /// Each segment takes the place of the one ahead of it. When growing
    /// and a free slot remains, the old tail position is kept as a new
    /// last segment.
    pub fn shift(&mut self, grow: bool) {
        let len = self.len();
        let next = self.next_head();
        let old_tail = self.tail();

        for i in (1..len).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = next;

        if grow && len < self.capacity() {
            self.segments[len] = old_tail;
        }
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// How the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Playing,
    Crashed(CollisionType),
    /// Every playable cell is covered by the snake
    Cleared,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Cleared when the player quits
    pub running: bool,
    pub game_over: bool,
    pub outcome: GameOutcome,
    pub snake: Snake,
    pub food: Rect,
    pub playfield: Playfield,
    pub score: u32,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Rect, playfield: Playfield) -> Self {
        Self {
            running: true,
            game_over: false,
            outcome: GameOutcome::Playing,
            snake,
            food,
            playfield,
            score: 0,
            steps: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.game_over
    }

    pub fn end(&mut self, outcome: GameOutcome) {
        self.game_over = true;
        self.outcome = outcome;
    }
}
