#![allow(dead_code)]

use cavern_core::{Cavern, Graph, NodeId, Position};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Cavern drawn as text, one row per line.
///
/// - `#` wall (no node)
/// - `.` floor
/// - `S` start, `O` orb, `E` exit (floor)
/// - `1`..`9` floor with that much gold
///
/// Node ids are `y * width + x`; orthogonal neighbors are joined with weight 1.
/// The orb and the exit default to the start tile when not drawn.
pub struct Maze {
    pub graph: Graph,
    pub start: NodeId,
    pub orb: NodeId,
    pub exit: NodeId,
    pub width: usize,
}

impl Maze {
    pub fn parse(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let tile = |x: usize, y: usize| -> Option<char> {
            rows.get(y)
                .and_then(|row| row.as_bytes().get(x))
                .map(|&b| b as char)
                .filter(|&c| c != '#')
        };

        let mut graph = Graph::new();
        let mut start = None;
        let mut orb = None;
        let mut exit = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    continue;
                }
                let id = NodeId((y * width + x) as u64);
                let gold = c.to_digit(10).unwrap_or(0);
                graph
                    .add_node(id, Position::new(x as i32, y as i32), gold)
                    .unwrap();
                match c {
                    'S' => start = Some(id),
                    'O' => orb = Some(id),
                    'E' => exit = Some(id),
                    _ => {}
                }
            }
        }
        for y in 0..rows.len() {
            for x in 0..width {
                if tile(x, y).is_none() {
                    continue;
                }
                let id = NodeId((y * width + x) as u64);
                if tile(x + 1, y).is_some() {
                    graph.add_edge(id, NodeId(id.0 + 1), 1).unwrap();
                }
                if tile(x, y + 1).is_some() {
                    graph.add_edge(id, NodeId(id.0 + width as u64), 1).unwrap();
                }
            }
        }

        let start = start.expect("maze needs an S tile");
        Self {
            graph,
            start,
            orb: orb.unwrap_or(start),
            exit: exit.unwrap_or(start),
            width,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> NodeId {
        NodeId((y * self.width + x) as u64)
    }

    pub fn cavern(&self) -> Cavern {
        Cavern::new(self.graph.clone(), self.start, self.orb, self.exit).unwrap()
    }
}

/// Deterministic pseudo-random mazes for sweep tests.
pub struct MazeGen {
    seed: u64,
}

impl MazeGen {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn next(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.seed >> 33
    }

    /// A `width` x `height` maze with roughly `wall_pct`% walls and some gold.
    /// The start is the top-left tile, the orb the bottom-right one, and the
    /// exit the top-right one; those three are never walls.
    pub fn rows(&mut self, width: usize, height: usize, wall_pct: u64) -> Vec<String> {
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| match (x, y) {
                        (0, 0) => 'S',
                        (x, y) if x == width - 1 && y == height - 1 => 'O',
                        (x, 0) if x == width - 1 => 'E',
                        _ => match self.next() % 100 {
                            n if n < wall_pct => '#',
                            n if n < wall_pct + 8 => char::from(b'1' + (n % 9) as u8),
                            _ => '.',
                        },
                    })
                    .collect()
            })
            .collect()
    }
}

pub fn maze_of(rows: &[String]) -> Maze {
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Maze::parse(&rows)
}
