use grid_snake::control::{Controller, GameObserver, ManualScheduler, Phase};
use grid_snake::game::{Direction, GameConfig, GameEngine, GameState, Position, ScriptedFood};

#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<Vec<Position>>,
    scores: Vec<u32>,
    game_overs: Vec<u32>,
}

impl GameObserver for Recorder {
    fn render(&mut self, state: &GameState) {
        self.frames.push(state.snake.body.clone());
    }

    fn score_changed(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn game_over(&mut self, score: u32) {
        self.game_overs.push(score);
    }
}

type TestController = Controller<ScriptedFood, ManualScheduler>;

fn controller(food: Vec<Position>) -> TestController {
    let engine = GameEngine::new(GameConfig::default(), ScriptedFood::new(food));
    Controller::new(engine, ManualScheduler::new())
}

fn fire(controller: &mut TestController, observer: &mut Recorder) -> bool {
    match controller.scheduler_mut().fire_next() {
        Some(token) => {
            controller.on_tick(token, observer);
            true
        }
        None => false,
    }
}

#[test]
fn announce_sends_initial_frame_and_score() {
    let controller = controller(vec![Position::new(0, 0)]);
    let mut recorder = Recorder::default();

    controller.announce(&mut recorder);

    assert_eq!(recorder.scores, vec![0]);
    assert_eq!(recorder.frames, vec![vec![Position::new(10, 10)]]);
}

#[test]
fn ticks_wait_for_first_direction() {
    let mut controller = controller(vec![Position::new(0, 0)]);
    let mut recorder = Recorder::default();
    controller.start();

    for _ in 0..3 {
        assert!(fire(&mut controller, &mut recorder));
    }

    assert_eq!(controller.state().snake.head(), Position::new(10, 10));
    assert_eq!(recorder.frames.len(), 3);
    assert!(controller.is_running());
}

#[test]
fn eating_notifies_score() {
    // Reset places food at (12,10); the next spawn goes to (0,0)
    let mut controller = controller(vec![Position::new(12, 10), Position::new(0, 0)]);
    let mut recorder = Recorder::default();
    controller.start();
    controller.request_direction(Direction::Right);

    fire(&mut controller, &mut recorder);
    fire(&mut controller, &mut recorder);

    assert_eq!(recorder.scores, vec![1]);
    assert_eq!(controller.state().score, 1);
    assert_eq!(controller.state().food, Position::new(0, 0));
    assert_eq!(
        recorder.frames.last().unwrap(),
        &vec![Position::new(12, 10), Position::new(11, 10)]
    );
}

#[test]
fn collision_signals_game_over_once_and_stops() {
    let mut controller = controller(vec![Position::new(0, 0)]);
    let mut recorder = Recorder::default();
    controller.start();
    controller.request_direction(Direction::Left);

    while fire(&mut controller, &mut recorder) {}

    assert_eq!(controller.phase(), Phase::GameOver);
    assert_eq!(controller.state().snake.head(), Position::new(0, 10));
    assert_eq!(recorder.game_overs, vec![0]);
    assert!(controller.scheduler().pending().is_empty());

    // Nothing revives the loop except a restart
    assert!(!controller.start());
    assert!(!controller.toggle_pause());
    assert!(!fire(&mut controller, &mut recorder));
    assert_eq!(recorder.game_overs.len(), 1);
}

#[test]
fn pause_toggle_retains_state() {
    let mut controller = controller(vec![Position::new(0, 0)]);
    let mut recorder = Recorder::default();
    controller.start();
    controller.request_direction(Direction::Down);
    fire(&mut controller, &mut recorder);

    assert!(controller.toggle_pause());
    assert!(!fire(&mut controller, &mut recorder));
    assert_eq!(controller.state().snake.head(), Position::new(10, 11));

    assert!(controller.toggle_pause());
    fire(&mut controller, &mut recorder);
    assert_eq!(controller.state().snake.head(), Position::new(10, 12));
}

#[test]
fn restart_cancels_in_flight_tick() {
    let mut controller = controller(vec![Position::new(0, 0)]);
    let mut recorder = Recorder::default();
    controller.start();
    controller.request_direction(Direction::Up);
    let stale = controller.scheduler().pending()[0];

    controller.restart(&mut recorder);
    controller.on_tick(stale, &mut recorder);

    assert_eq!(controller.scheduler().pending().len(), 1);
    assert_ne!(controller.scheduler().pending()[0], stale);
    assert_eq!(controller.state().snake.head(), Position::new(10, 10));
    assert!(controller.state().velocity.is_still());
}

#[test]
fn repeated_resets_restore_initial_state() {
    let mut controller = controller(vec![Position::new(11, 10), Position::new(3, 3)]);
    let mut recorder = Recorder::default();

    for _ in 0..3 {
        controller.start();
        controller.request_direction(Direction::Right);
        fire(&mut controller, &mut recorder);

        controller.reset(&mut recorder);

        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_running());
        assert_eq!(controller.state().score, 0);
        assert_eq!(controller.state().snake.body, vec![Position::new(10, 10)]);
        assert!(controller.scheduler().pending().is_empty());
        assert_eq!(recorder.scores.last(), Some(&0));
    }
}

#[test]
fn score_never_decreases_across_ticks() {
    let food: Vec<Position> = (11..20).map(|x| Position::new(x, 10)).collect();
    let mut controller = controller(food);
    let mut recorder = Recorder::default();
    controller.start();
    controller.request_direction(Direction::Right);

    while fire(&mut controller, &mut recorder) {}

    assert!(recorder.scores.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(controller.state().score, 9);
    assert_eq!(controller.state().snake.len(), 10);
}
