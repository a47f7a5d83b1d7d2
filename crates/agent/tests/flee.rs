mod common;

use cavern_agent::{Agent, AgentError};
use cavern_core::{
    AgentConfig, Cavern, CavernError, ErrorSeverity, FleeState, Graph, MoveError, NodeId, Phase,
    Position, distance,
};
use common::{Maze, MazeGen, init_tracing, maze_of};

const S: NodeId = NodeId(1);
const X: NodeId = NodeId(2);
const E: NodeId = NodeId(3);
const R: NodeId = NodeId(4);

/// Four-node cycle. The direct route S-X-E costs 3; the gold at R sits on
/// the other side, S-R-E, costing 4.
fn cycle() -> Cavern {
    let graph = Graph::from_parts(
        [
            (S, Position::new(0, 0), 0),
            (X, Position::new(1, 0), 0),
            (E, Position::new(1, 1), 0),
            (R, Position::new(0, 1), 5),
        ],
        [(S, X, 1), (X, E, 2), (S, R, 2), (R, E, 2)],
    )
    .unwrap();
    Cavern::new(graph, S, S, E).unwrap()
}

#[test]
fn detours_for_gold_with_slack() {
    init_tracing();
    let mut cavern = cycle();
    cavern.begin_flee(3 + 3);

    let report = Agent::default().flee(&mut cavern).unwrap();

    assert_eq!(report.moves, vec![R, E]);
    assert_eq!(report.rewards_reached, 1);
    assert_eq!(report.steps_left, 2);
    assert_eq!(cavern.gold_collected(), 5);
    assert!(cavern.is_on_exit());
}

#[test]
fn no_slack_goes_straight_out() {
    let mut cavern = cycle();
    cavern.begin_flee(3);

    let report = Agent::default().flee(&mut cavern).unwrap();

    assert_eq!(report.moves, vec![X, E]);
    assert_eq!(report.rewards_reached, 0);
    assert_eq!(report.detours_abandoned, 1);
    assert_eq!(report.steps_left, 0);
    assert_eq!(cavern.gold_collected(), 0);
    assert!(cavern.is_on_exit());
}

#[test]
fn direct_config_skips_gold() {
    let mut cavern = cycle();
    cavern.begin_flee(10);

    let report = Agent::new(AgentConfig::direct()).flee(&mut cavern).unwrap();

    assert_eq!(report.moves, vec![X, E]);
    assert_eq!(report.detours_abandoned, 0);
    assert_eq!(report.steps_left, 7);
}

#[test]
fn reserve_keeps_extra_steps() {
    let mut cavern = cycle();
    cavern.begin_flee(6);
    let report = Agent::new(AgentConfig::default().with_reserve(2))
        .flee(&mut cavern)
        .unwrap();
    assert_eq!(report.moves, vec![R, E]);

    let mut cavern = cycle();
    cavern.begin_flee(6);
    let report = Agent::new(AgentConfig::default().with_reserve(3))
        .flee(&mut cavern)
        .unwrap();
    assert_eq!(report.moves, vec![X, E]);
    assert_eq!(report.detours_abandoned, 1);
}

//  S - A - B - E
//      |
//      R1 - R2 (gold)
fn spur() -> Maze {
    Maze::parse(&[
        "S..E", //
        "#.##", //
        "#9##", //
    ])
}

#[test]
fn walks_off_the_route_and_back() {
    let maze = spur();
    let mut cavern = maze.cavern();
    cavern.begin_flee(3 + 4);

    let report = Agent::default().flee(&mut cavern).unwrap();

    let (a, r1, r2) = (maze.at(1, 0), maze.at(1, 1), maze.at(1, 2));
    assert_eq!(report.moves, vec![a, r1, r2, r1, a, maze.at(2, 0), maze.exit]);
    assert_eq!(report.steps_left, 0);
    assert_eq!(cavern.gold_collected(), 9);
}

#[test]
fn abandons_detour_midway() {
    let maze = spur();
    let mut cavern = maze.cavern();
    cavern.begin_flee(3 + 3);

    let report = Agent::default().flee(&mut cavern).unwrap();

    let (a, r1) = (maze.at(1, 0), maze.at(1, 1));
    assert_eq!(report.moves, vec![a, r1, a, maze.at(2, 0), maze.exit]);
    assert_eq!(report.detours_abandoned, 1);
    assert_eq!(report.rewards_reached, 0);
    assert_eq!(report.steps_left, 1);
    assert_eq!(cavern.gold_collected(), 0);
    assert!(cavern.is_on_exit());
}

#[test]
fn gold_on_exit_is_taken_once() {
    let maze = Maze::parse(&["S.4"]);
    let exit = maze.at(2, 0);
    let mut cavern = Cavern::new(maze.graph.clone(), maze.start, maze.start, exit).unwrap();
    cavern.begin_flee(10);

    let report = Agent::default().flee(&mut cavern).unwrap();

    assert_eq!(report.moves, vec![maze.at(1, 0), exit]);
    assert_eq!(report.rewards_reached, 1);
    assert_eq!(report.steps_left, 8);
    assert_eq!(cavern.gold_collected(), 4);
}

/// Cavern that never removes gold from its tiles.
struct StickyGold {
    graph: Graph,
    position: NodeId,
    exit: NodeId,
    steps_left: u64,
}

impl FleeState for StickyGold {
    fn current_node(&self) -> NodeId {
        self.position
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn exit(&self) -> NodeId {
        self.exit
    }

    fn steps_left(&self) -> u64 {
        self.steps_left
    }

    fn move_to(&mut self, id: NodeId) -> Result<(), MoveError> {
        let cost = self
            .graph
            .weight(self.position, id)
            .ok_or(MoveError::NotAdjacent {
                from: self.position,
                to: id,
            })?;
        self.steps_left -= u64::from(cost);
        self.position = id;
        Ok(())
    }
}

#[test]
fn unconsumed_gold_does_not_loop() {
    let maze = Maze::parse(&["S1E2"]);
    let mut state = StickyGold {
        graph: maze.graph.clone(),
        position: maze.start,
        exit: maze.exit,
        steps_left: 20,
    };

    let report = Agent::default().flee(&mut state).unwrap();

    // Collects both tiles once, then walks back to the exit.
    assert_eq!(
        report.moves,
        vec![maze.at(1, 0), maze.at(2, 0), maze.at(3, 0), maze.at(2, 0)]
    );
    assert_eq!(report.rewards_reached, 2);
    assert_eq!(state.current_node(), maze.exit);
}

#[test]
fn short_budget_is_reported_without_moving() {
    let mut cavern = cycle();
    cavern.begin_flee(2);

    let err = Agent::default().flee(&mut cavern).unwrap_err();

    assert_eq!(
        err,
        AgentError::BudgetExceeded {
            at: S,
            steps_left: 2,
            required: 3
        }
    );
    assert_eq!(err.error_code(), "AGENT_BUDGET_EXCEEDED");
    assert!(cavern.history().is_empty());
}

#[test]
fn unreachable_exit_is_reported() {
    let maze = Maze::parse(&["S.#E"]);
    let mut cavern = maze.cavern();
    cavern.begin_flee(100);

    let err = Agent::default().flee(&mut cavern).unwrap_err();

    assert_eq!(
        err,
        AgentError::Unreachable {
            phase: Phase::Flee,
            from: maze.start
        }
    );
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
    assert!(cavern.history().is_empty());
}

/// Checks the way-out invariant after every move the planner issues.
struct Probe<'a> {
    inner: &'a mut Cavern,
    moves: usize,
}

impl FleeState for Probe<'_> {
    fn current_node(&self) -> NodeId {
        self.inner.current_node()
    }

    fn graph(&self) -> &Graph {
        self.inner.graph()
    }

    fn exit(&self) -> NodeId {
        self.inner.exit()
    }

    fn steps_left(&self) -> u64 {
        self.inner.steps_left()
    }

    fn move_to(&mut self, id: NodeId) -> Result<(), MoveError> {
        self.inner.move_to(id)?;
        self.moves += 1;
        let out = distance(self.inner.graph(), id, self.inner.exit())
            .unwrap()
            .unwrap();
        assert!(
            self.inner.steps_left() >= out,
            "{} steps left at {id} but exit is {out} away",
            self.inner.steps_left()
        );
        Ok(())
    }
}

#[test]
fn sweep_keeps_way_out_covered() {
    init_tracing();
    let mut generator = MazeGen::new(42);
    let mut escapes = 0;
    for round in 0..80 {
        let (width, height) = (3 + round % 7, 3 + round % 4);
        let rows = generator.rows(width, height, 20);
        let maze = maze_of(&rows);
        let Some(direct) = distance(&maze.graph, maze.start, maze.exit).unwrap() else {
            continue;
        };
        let slack = (round as u64 * 3) % 11;
        let reserve = round as u64 % 3;
        let config = AgentConfig::default().with_reserve(reserve);

        let mut cavern = maze.cavern();
        cavern.begin_flee(direct + slack);
        let mut probe = Probe {
            inner: &mut cavern,
            moves: 0,
        };
        let report = Agent::new(config)
            .flee(&mut probe)
            .unwrap_or_else(|e| panic!("{e} in maze {rows:#?}"));

        assert_eq!(probe.moves, report.moves.len());
        assert!(cavern.is_on_exit());
        assert_eq!(report.steps_left, cavern.steps_left());
        assert_eq!(cavern.steps_taken() + cavern.steps_left(), direct + slack);
        if slack == 0 {
            // Any gold taken lay on a shortest route.
            assert_eq!(report.moves.len() as u64, direct);
        }
        escapes += 1;
    }
    assert!(escapes > 0);
}
