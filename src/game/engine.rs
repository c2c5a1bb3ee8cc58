use super::{
    action::{Action, Direction},
    config::GameConfig,
    geometry::Rect,
    state::{CollisionType, GameOutcome, GameState, Snake},
};
use log::debug;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake filled the whole field
    pub cleared: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle() -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision_type: None,
                cleared: false,
            },
        }
    }

    fn crashed(collision: CollisionType) -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision_type: Some(collision),
                cleared: false,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let playfield = self.config.playfield();

        let snake = Snake::spawn(
            playfield.capacity(),
            playfield.center_cell(),
            Direction::Right,
            self.config.initial_length,
        );

        match self.spawn_food(&snake) {
            Some(food) => GameState::new(snake, food, playfield),
            None => {
                let mut state = GameState::new(snake, Rect::EMPTY, playfield);
                state.end(GameOutcome::Cleared);
                state
            }
        }
    }

    /// Change heading unless it would fold the snake back onto itself.
    ///
    /// Returns whether the direction was applied.
    pub fn turn(&self, state: &mut GameState, direction: Direction) -> bool {
        if state.game_over || state.snake.is_reversal(direction) {
            return false;
        }

        state.snake.direction = direction;
        true
    }

    /// Execute one fixed step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if state.game_over || !state.running {
            return StepResult::idle();
        }

        if let Action::Move(direction) = action {
            self.turn(state, direction);
        }

        let next = state.snake.next_head();
        let ate_food = next.intersects(&state.food);

        if let Some(collision) = self.check_collision(state, &next, ate_food) {
            state.end(GameOutcome::Crashed(collision));
            state.steps += 1;
            debug!(
                "game over after {} steps: {:?}, score {}",
                state.steps, collision, state.score
            );
            return StepResult::crashed(collision);
        }

        state.snake.shift(ate_food);
        state.steps += 1;

        let mut cleared = false;
        if ate_food {
            state.score += 1;
            debug!("food eaten, score {}", state.score);

            match self.spawn_food(&state.snake) {
                Some(food) => state.food = food,
                None => {
                    state.food = Rect::EMPTY;
                    state.end(GameOutcome::Cleared);
                    cleared = true;
                    debug!("field cleared with score {}", state.score);
                }
            }
        }

        StepResult {
            terminated: cleared,
            info: StepInfo {
                ate_food,
                collision_type: None,
                cleared,
            },
        }
    }

    /// Check if moving the head onto `next` causes a collision
    fn check_collision(
        &self,
        state: &GameState,
        next: &Rect,
        growing: bool,
    ) -> Option<CollisionType> {
        if state.playfield.hits_wall(next) {
            return Some(CollisionType::Wall);
        }

        if state.snake.blocks(next, growing) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a random playable cell the snake does not cover
    pub fn spawn_food(&mut self, snake: &Snake) -> Option<Rect> {
        let playfield = self.config.playfield();
        let free: Vec<Rect> = playfield
            .interior_cells()
            .filter(|cell| !snake.occupies(cell))
            .collect();

        free.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Playfield;

    fn seeded(config: GameConfig) -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(42),
            ..config
        })
    }

    fn state_with(field: Playfield, snake: Snake, food: Rect) -> GameState {
        GameState::new(snake, food, field)
    }

    #[test]
    fn test_reset() {
        let mut engine = seeded(GameConfig::default());
        let state = engine.reset();

        assert!(state.running);
        assert!(state.is_alive());
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.capacity(), 576);
        assert_eq!(state.snake.head(), state.playfield.cell_rect(17, 10));
        assert_eq!(state.snake.direction, Direction::Right);
        assert!(!state.snake.occupies(&state.food));
        assert!(!state.playfield.hits_wall(&state.food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = seeded(GameConfig::small());
        let mut state = engine.reset();
        state.food = state.playfield.cell_rect(1, 1);
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, Action::Continue);

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), initial_head.offset(20, 0));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = seeded(GameConfig::small());
        let mut state = engine.reset();

        // Place food directly in front of snake
        state.food = state.snake.next_head();
        let initial_length = state.snake.len();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert!(!state.snake.occupies(&state.food));
        assert!(!state.food.is_empty());
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = seeded(GameConfig::small());
        let field = engine.config().playfield();
        let snake = Snake::spawn(field.capacity(), field.cell_rect(1, 5), Direction::Left, 1);
        let mut state = state_with(field, snake, field.cell_rect(5, 5));

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.terminated);
        assert!(!state.is_alive());
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(state.outcome, GameOutcome::Crashed(CollisionType::Wall));
        // Head stays where it was
        assert_eq!(state.snake.head(), field.cell_rect(1, 5));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = seeded(GameConfig::small());
        let field = engine.config().playfield();

        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = Snake::spawn(field.capacity(), field.cell_rect(5, 5), Direction::Right, 5);
        let mut state = state_with(field, snake, field.cell_rect(8, 8));

        // Right: (6,5), (5,5), (4,5), (3,5), (2,5)
        engine.step(&mut state, Action::Continue);
        // Down: (6,6), (6,5), (5,5), (4,5), (3,5)
        engine.step(&mut state, Action::Move(Direction::Down));
        // Left: (5,6), (6,6), (6,5), (5,5), (4,5)
        engine.step(&mut state, Action::Move(Direction::Left));
        // Up onto (5,5), still part of the body
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_chasing_the_tail_is_safe() {
        let mut engine = seeded(GameConfig::small());
        let field = engine.config().playfield();

        // A 2x2 loop: head (3,3) heading down, tail at (3,4) after the turn
        let mut snake = Snake::spawn(field.capacity(), field.cell_rect(3, 3), Direction::Right, 4);
        snake.segments[1] = field.cell_rect(2, 3);
        snake.segments[2] = field.cell_rect(2, 4);
        snake.segments[3] = field.cell_rect(3, 4);
        let mut state = state_with(field, snake, field.cell_rect(7, 7));

        let result = engine.step(&mut state, Action::Move(Direction::Down));

        assert!(!result.terminated);
        assert_eq!(state.snake.head(), field.cell_rect(3, 4));
    }

    #[test]
    fn test_prevent_reversal_with_body() {
        let mut engine = seeded(GameConfig::small());
        let field = engine.config().playfield();
        let snake = Snake::spawn(field.capacity(), field.cell_rect(5, 5), Direction::Right, 2);
        let mut state = state_with(field, snake, field.cell_rect(1, 1));

        engine.step(&mut state, Action::Move(Direction::Left));

        assert_eq!(state.snake.direction, Direction::Right);
        assert!(state.is_alive());
        assert_eq!(state.snake.head(), field.cell_rect(6, 5));
    }

    #[test]
    fn test_single_segment_may_reverse() {
        let mut engine = seeded(GameConfig::small());
        let mut state = engine.reset();
        state.food = state.playfield.cell_rect(1, 1);
        let start = state.snake.head();

        assert!(engine.turn(&mut state, Direction::Left));
        engine.step(&mut state, Action::Continue);

        assert_eq!(state.snake.head(), start.offset(-20, 0));
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = seeded(GameConfig::small());
        let mut state = engine.reset();
        state.end(GameOutcome::Crashed(CollisionType::Wall));
        let steps_before = state.steps;
        let head_before = state.snake.head();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.terminated);
        assert_eq!(state.steps, steps_before);
        assert_eq!(state.snake.head(), head_before);
        assert!(!engine.turn(&mut state, Direction::Up));
    }

    #[test]
    fn test_capacity_is_fixed() {
        let mut engine = seeded(GameConfig::small());
        let mut state = engine.reset();
        let capacity = state.snake.capacity();

        for _ in 0..3 {
            state.food = state.snake.next_head();
            engine.step(&mut state, Action::Continue);
        }

        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.capacity(), capacity);
    }

    #[test]
    fn test_filling_the_field_clears_the_game() {
        // 3x1 playable strip
        let mut engine = seeded(GameConfig::new(100, 60));
        let field = engine.config().playfield();
        let snake = Snake::spawn(field.capacity(), field.cell_rect(2, 1), Direction::Right, 2);
        let mut state = state_with(field, snake, field.cell_rect(3, 1));

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert!(result.info.cleared);
        assert!(result.terminated);
        assert_eq!(state.outcome, GameOutcome::Cleared);
        assert!(state.food.is_empty());
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_food_never_lands_on_snake() {
        let mut engine = seeded(GameConfig::new(120, 100)); // 4x3 playable
        let field = engine.config().playfield();
        let snake = Snake::spawn(field.capacity(), field.cell_rect(4, 2), Direction::Right, 4);

        for _ in 0..50 {
            let food = engine.spawn_food(&snake).unwrap();
            assert!(!snake.occupies(&food));
            assert!(!field.hits_wall(&food));
        }
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = seeded(GameConfig::default());
        let mut b = seeded(GameConfig::default());
        assert_eq!(a.reset().food, b.reset().food);
    }
}
