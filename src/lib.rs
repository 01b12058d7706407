#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use anyhow::anyhow;
use lazy_static::lazy_static;
use thiserror::Error;

use std::collections::HashMap;

pub mod dot;
pub mod jugs;

use jugs::{JugProblem, JugState};
use pathfind::{Outcome, Report, SearchOptions, SearchResult};

type Error = anyhow::Error;

/// The three interchangeable ways the engine can explore the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Breadth,
    Greedy,
    AStar,
}

pub const ALL_STRATEGIES: [Strategy; 3] = [Strategy::Breadth, Strategy::Greedy, Strategy::AStar];

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Breadth => "breadth-first",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }

    /// Run this strategy over a puzzle instance.
    ///
    /// Each invocation owns its frontier, registry, and trace, so the
    /// three strategies can be run back to back on one problem.
    pub fn run(self, problem: &JugProblem, options: SearchOptions) -> SearchResult<Report<JugState>> {
        match self {
            Strategy::Breadth => pathfind::engine::breadth::build(problem)
                .with_options(options)
                .run(),
            Strategy::Greedy => pathfind::engine::greedy::build(problem)
                .with_options(options)
                .run(),
            Strategy::AStar => pathfind::engine::astar::build(problem)
                .with_options(options)
                .run(),
        }
    }
}

lazy_static! {
    static ref STRATEGIES: HashMap<&'static str, Strategy> = {
        let mut s = HashMap::new();
        s.insert("bfs", Strategy::Breadth);
        s.insert("breadth", Strategy::Breadth);
        s.insert("breadth-first", Strategy::Breadth);
        s.insert("greedy", Strategy::Greedy);
        s.insert("best-first", Strategy::Greedy);
        s.insert("astar", Strategy::AStar);
        s.insert("a*", Strategy::AStar);
        s
    };
}

pub fn lookup(name: &str) -> Result<Strategy, JugError> {
    STRATEGIES
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| JugError::UnknownStrategy(name.to_string()))
}

pub fn solver() -> Result<(), Error> {
    let matches = App::new("Water Jug Search")
        .version("1.0")
        .about("Solve the water pouring puzzle with interchangeable search strategies")
        .arg(
            Arg::with_name("capacities")
                .long("capacities")
                .short("c")
                .value_name("A,B,C")
                .default_value("8,5,3")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("initial")
                .long("initial")
                .short("i")
                .value_name("A,B,C")
                .default_value("8,0,0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("target")
                .long("target")
                .short("t")
                .value_name("A,B")
                .default_value("4,4")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .value_name("STRATEGY")
                .help("bfs, greedy, astar, or all")
                .default_value("all")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("N")
                .help("Abort a run after N expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .value_name("N")
                .help("Report progress every N expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("dot")
                .long("dot")
                .help("Emit the search tree as Graphviz DOT"),
        )
        .get_matches();

    let capacities = parse_quantities(matches.value_of("capacities").unwrap(), 3)?;
    let initial = parse_quantities(matches.value_of("initial").unwrap(), 3)?;
    let target = parse_quantities(matches.value_of("target").unwrap(), 2)?;

    for (jug, (&held, &capacity)) in initial.iter().zip(capacities.iter()).enumerate() {
        if held > capacity {
            return Err(anyhow!(
                "jug {} starts with {} but only holds {}",
                jug,
                held,
                capacity
            ));
        }
    }

    let problem = JugProblem::new(
        [capacities[0], capacities[1], capacities[2]],
        [initial[0], initial[1], initial[2]],
        (target[0], target[1]),
    );

    let options = SearchOptions {
        limit: if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        },
        verbose: if matches.is_present("verbose") {
            Some(value_t!(matches, "verbose", usize)?)
        } else {
            None
        },
    };

    let selected = match matches.value_of("strategy") {
        None | Some("all") => ALL_STRATEGIES.to_vec(),
        Some(name) => vec![lookup(name)?],
    };

    for strategy in selected {
        let report = strategy.run(&problem, options.clone())?;
        print_report(strategy, &report);

        if matches.is_present("dot") {
            println!("{}", dot::render(strategy.name(), &report));
        }
    }

    Ok(())
}

fn print_report(strategy: Strategy, report: &Report<JugState>) {
    match &report.outcome {
        Outcome::Solved(path) => {
            println!(
                "{}: solved in {} pours ({} edges expanded)",
                strategy.name(),
                path.len() - 1,
                report.trace.len()
            );
            for (n, state) in path.iter().enumerate() {
                println!("  {:2}: {}", n, state);
            }
        }
        Outcome::Exhausted => {
            println!(
                "{}: no solution, frontier exhausted after {} edges",
                strategy.name(),
                report.trace.len()
            );
        }
    }
}

fn parse_quantities(text: &str, expected: usize) -> Result<Vec<u32>, Error> {
    let quantities = text
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<u32>, _>>()
        .map_err(|e| anyhow!("invalid quantity in {:?}: {}", text, e))?;

    if quantities.len() != expected {
        return Err(JugError::WrongQuantityCount(expected, text.to_string()).into());
    }

    Ok(quantities)
}

#[derive(Debug, Error)]
pub enum JugError {
    #[error("Unknown strategy: {0} (expected bfs, greedy, or astar)")]
    UnknownStrategy(String),

    #[error("Expected {0} comma-separated quantities, got {1:?}")]
    WrongQuantityCount(usize, String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strategy_names_resolve_with_aliases() {
        assert_eq!(lookup("bfs").unwrap(), Strategy::Breadth);
        assert_eq!(lookup("BFS").unwrap(), Strategy::Breadth);
        assert_eq!(lookup("a*").unwrap(), Strategy::AStar);
        assert!(lookup("dfs").is_err());
    }

    #[test]
    fn quantity_lists_parse_and_validate() {
        assert_eq!(parse_quantities("8,5,3", 3).unwrap(), vec![8, 5, 3]);
        assert_eq!(parse_quantities("4, 4", 2).unwrap(), vec![4, 4]);
        assert!(parse_quantities("8,5", 3).is_err());
        assert!(parse_quantities("8,five,3", 3).is_err());
    }

    #[test]
    fn strategies_share_one_problem_instance() {
        let problem = JugProblem::default();

        for strategy in ALL_STRATEGIES.iter() {
            let report = strategy.run(&problem, SearchOptions::default()).unwrap();
            assert!(report.outcome.is_solved());
        }
    }
}
