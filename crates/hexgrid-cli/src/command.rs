//! Command parsing and execution.

use std::fmt;

use hexgrid_core::{
    hexagon_by_three_points, path_between_hexes, Direction, HexCoord, HexSegment, Hexagon,
    MinEnclosingSolver,
};
use serde::Serialize;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{Error, Result};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Distance { a: HexCoord, b: HexCoord },
    Move { point: HexCoord, direction: Direction, steps: i64 },
    Turn { direction: Direction },
    Segment { begin: HexCoord, end: HexCoord },
    Contains { hexagon: Hexagon, point: HexCoord },
    Gap { first: Hexagon, second: Hexagon },
    Ring { hexagon: Hexagon },
    Path { from: HexCoord, to: HexCoord },
    Circumscribe { a: HexCoord, b: HexCoord, c: HexCoord },
    Enclose { points: Vec<HexCoord> },
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Distance { distance: u64 },
    Point { point: HexCoord },
    Turn {
        direction: Direction,
        opposite: Direction,
        next: Option<Direction>,
    },
    Segment {
        valid: bool,
        direction: Direction,
        length: u64,
    },
    Contains { contains: bool },
    Points { points: Vec<HexCoord> },
    Hexagon { hexagon: Option<Hexagon> },
}

pub fn print_usage() {
    eprintln!("hexgrid - Exact geometry on a hexagonal grid");
    eprintln!();
    eprintln!("Points are written y.x, or yx for single digits (13 is row 1, column 3).");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  hexgrid distance <a> <b>                  Steps between two points");
    eprintln!("  hexgrid move <point> <direction> <steps>  Move along a direction");
    eprintln!("  hexgrid turn <direction>                  Opposite and next direction");
    eprintln!("  hexgrid segment <begin> <end>             Alignment of a segment");
    eprintln!("  hexgrid contains <center> <radius> <point>");
    eprintln!("  hexgrid gap <center> <radius> <center> <radius>");
    eprintln!("  hexgrid ring <center> <radius>            Boundary points in walk order");
    eprintln!("  hexgrid path <from> <to>                  One shortest path");
    eprintln!("  hexgrid circumscribe <a> <b> <c>          Smallest hexagon through three points");
    eprintln!("  hexgrid enclose <point>...                Smallest hexagon holding all points");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HEXGRID_OUTPUT  text (default) or json");
    eprintln!("  HEXGRID_SEARCH  bisect (default) or linear");
    eprintln!("  RUST_LOG        log filter (default: hexgrid=info,hexgrid_core=info)");
}

fn coord(arg: &str) -> Result<HexCoord> {
    Ok(arg.parse()?)
}

fn direction(arg: &str) -> Result<Direction> {
    Ok(arg.parse()?)
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T> {
    arg.trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(arg.to_string()))
}

fn hexagon(center: &str, radius: &str) -> Result<Hexagon> {
    Ok(Hexagon::new(coord(center)?, number(radius)?))
}

impl Command {
    /// Parse everything after the program name.
    pub fn parse(args: &[&str]) -> Result<Self> {
        let command = match args {
            ["distance", a, b] => Self::Distance {
                a: coord(a)?,
                b: coord(b)?,
            },
            ["move", point, dir, steps] => Self::Move {
                point: coord(point)?,
                direction: direction(dir)?,
                steps: number(steps)?,
            },
            ["turn", dir] => Self::Turn {
                direction: direction(dir)?,
            },
            ["segment", begin, end] => Self::Segment {
                begin: coord(begin)?,
                end: coord(end)?,
            },
            ["contains", center, radius, point] => Self::Contains {
                hexagon: hexagon(center, radius)?,
                point: coord(point)?,
            },
            ["gap", c1, r1, c2, r2] => Self::Gap {
                first: hexagon(c1, r1)?,
                second: hexagon(c2, r2)?,
            },
            ["ring", center, radius] => Self::Ring {
                hexagon: hexagon(center, radius)?,
            },
            ["path", from, to] => Self::Path {
                from: coord(from)?,
                to: coord(to)?,
            },
            ["circumscribe", a, b, c] => Self::Circumscribe {
                a: coord(a)?,
                b: coord(b)?,
                c: coord(c)?,
            },
            ["enclose", points @ ..] => Self::Enclose {
                points: points.iter().map(|p| coord(p)).collect::<Result<_>>()?,
            },
            [] => return Err(Error::Usage("no command given".into())),
            [name, ..] => {
                return Err(Error::Usage(format!(
                    "unknown command or wrong arguments for {name:?}"
                )))
            }
        };
        Ok(command)
    }

    pub fn run(&self, config: &CliConfig) -> Result<Report> {
        debug!(command = ?self, "running");
        let report = match self {
            Self::Distance { a, b } => Report::Distance {
                distance: a.distance(b),
            },
            Self::Move {
                point,
                direction,
                steps,
            } => Report::Point {
                point: point.shift(*direction, *steps)?,
            },
            Self::Turn { direction } => Report::Turn {
                direction: *direction,
                opposite: direction.opposite(),
                next: direction.next().ok(),
            },
            Self::Segment { begin, end } => {
                let segment = HexSegment::new(*begin, *end);
                Report::Segment {
                    valid: segment.is_valid(),
                    direction: segment.direction(),
                    length: segment.length(),
                }
            }
            Self::Contains { hexagon, point } => Report::Contains {
                contains: hexagon.contains(*point),
            },
            Self::Gap { first, second } => Report::Distance {
                distance: first.distance(second),
            },
            Self::Ring { hexagon } => Report::Points {
                points: hexagon.ring().collect(),
            },
            Self::Path { from, to } => Report::Points {
                points: path_between_hexes(*from, *to),
            },
            Self::Circumscribe { a, b, c } => Report::Hexagon {
                hexagon: hexagon_by_three_points(*a, *b, *c),
            },
            Self::Enclose { points } => Report::Hexagon {
                hexagon: Some(MinEnclosingSolver::new(config.search).solve(points.iter().copied())?),
            },
        };
        Ok(report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance { distance } => write!(f, "{distance}"),
            Self::Point { point } => write!(f, "{point}"),
            Self::Turn {
                direction,
                opposite,
                next,
            } => {
                write!(f, "{direction}: opposite {opposite}, next ")?;
                match next {
                    Some(next) => write!(f, "{next}"),
                    None => f.write_str("none"),
                }
            }
            Self::Segment {
                valid,
                direction,
                length,
            } => {
                let alignment = if *valid { "valid" } else { "invalid" };
                write!(f, "{alignment} {direction}, length {length}")
            }
            Self::Contains { contains } => write!(f, "{contains}"),
            Self::Points { points } => {
                let labels: Vec<String> = points.iter().map(ToString::to_string).collect();
                f.write_str(&labels.join(" "))
            }
            Self::Hexagon { hexagon } => match hexagon {
                Some(hexagon) => write!(f, "{hexagon}"),
                None => f.write_str("none"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgrid_core::EnclosingSearch;

    fn run(args: &[&str]) -> Result<Report> {
        Command::parse(args)?.run(&CliConfig::default())
    }

    #[test]
    fn parse_distance() {
        assert_eq!(
            Command::parse(&["distance", "16", "4.1"]).unwrap(),
            Command::Distance {
                a: HexCoord::new(6, 1),
                b: HexCoord::new(1, 4),
            }
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(Command::parse(&[]), Err(Error::Usage(_))));
        assert!(matches!(Command::parse(&["fly", "13"]), Err(Error::Usage(_))));
        assert!(matches!(Command::parse(&["distance", "13"]), Err(Error::Usage(_))));
        assert!(matches!(
            Command::parse(&["ring", "13", "-1"]),
            Err(Error::InvalidNumber(_))
        ));
        assert!(matches!(
            Command::parse(&["move", "13", "NORTH", "1"]),
            Err(Error::Geometry(hexgrid_core::Error::ParseDirection(_)))
        ));
    }

    #[test]
    fn runs_each_command() {
        assert_eq!(run(&["distance", "16", "41"]).unwrap().to_string(), "5");
        assert_eq!(run(&["move", "45", "down_left", "4"]).unwrap().to_string(), "0.5");
        assert_eq!(
            run(&["turn", "LEFT"]).unwrap().to_string(),
            "LEFT: opposite RIGHT, next DOWN_LEFT"
        );
        assert_eq!(
            run(&["turn", "INCORRECT"]).unwrap().to_string(),
            "INCORRECT: opposite INCORRECT, next none"
        );
        assert_eq!(
            run(&["segment", "30", "34"]).unwrap().to_string(),
            "valid RIGHT, length 4"
        );
        assert_eq!(run(&["contains", "33", "1", "42"]).unwrap().to_string(), "true");
        assert_eq!(run(&["gap", "31", "1", "26", "2"]).unwrap().to_string(), "2");
        assert_eq!(
            run(&["ring", "33", "1"]).unwrap().to_string(),
            "2.4 3.4 4.3 4.2 3.2 2.3"
        );
        assert_eq!(
            run(&["path", "22", "53"]).unwrap().to_string(),
            "2.2 2.3 3.3 4.3 5.3"
        );
        assert_eq!(run(&["circumscribe", "13", "32", "44"]).unwrap().to_string(), "2.4/2");
        assert_eq!(run(&["circumscribe", "13", "32", "45"]).unwrap().to_string(), "none");
    }

    #[test]
    fn enclose_uses_configured_search() {
        let command = Command::parse(&["enclose", "13", "32", "45", "18"]).unwrap();
        for search in [EnclosingSearch::Bisect, EnclosingSearch::Linear] {
            let config = CliConfig {
                search,
                ..CliConfig::default()
            };
            match command.run(&config).unwrap() {
                Report::Hexagon { hexagon: Some(h) } => assert_eq!(h.radius, 3),
                other => panic!("unexpected report {other:?}"),
            }
        }
    }

    #[test]
    fn geometry_errors_surface() {
        assert!(matches!(
            run(&["move", "13", "INCORRECT", "1"]),
            Err(Error::Geometry(hexgrid_core::Error::IncorrectDirection { .. }))
        ));
        assert!(matches!(
            run(&["move", "0.2147483647", "RIGHT", "1"]),
            Err(Error::Geometry(hexgrid_core::Error::OutOfRange { .. }))
        ));
        assert!(matches!(
            run(&["enclose"]),
            Err(Error::Geometry(hexgrid_core::Error::EmptyPointSet))
        ));
    }

    #[test]
    fn report_json_shape() {
        let report = run(&["circumscribe", "13", "32", "44"]).unwrap();
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"kind":"hexagon","hexagon":{"center":{"x":4,"y":2},"radius":2}}"#
        );
    }
}
