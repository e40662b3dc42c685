//! ASCII mesh parser.
//!
//! ```text
//! facet normal ni nj nk
//!     outer loop
//!         vertex v1x v1y v1z
//!         vertex v2x v2y v2z
//!         vertex v3x v3y v3z
//!     endloop
//! ```
//!
//! A facet block that closes with anything other than exactly three vertices
//! is dropped and counted, not reported as an error; slightly malformed
//! exports are common enough that dying on them would be useless. Lines that
//! match no record at all are ignored. The only hard failure is an
//! unreadable source.

use std::io::{BufRead, BufReader, Read};

use tracing::{debug, warn};

use crate::{
    error::Result,
    geometry::Point,
    mesh::{Facet, Mesh},
    Pos,
};

/// Parser position within the record stream. Each state carries the partial
/// facet collected so far, so the transition function stays pure.
#[derive(Debug)]
enum State {
    WaitingNormal,
    WaitingPoint { normal: Pos },
    ReadingPoint { normal: Pos, vertices: Vec<Point> },
}

#[derive(Debug)]
enum Outcome {
    Nothing,
    Emitted(Facet),
    Dropped,
}

/// Parse a textual mesh into facets. Fails only on I/O errors; malformed
/// facet blocks are dropped and surfaced via [`Mesh::dropped_facets`].
pub fn parse<T: Read>(reader: T) -> Result<Mesh> {
    let mut state = State::WaitingNormal;
    let mut facets = Vec::new();
    let mut dropped = 0;

    for line in BufReader::new(reader).lines() {
        let line = line?;

        let (next, outcome) = step(state, &line);
        state = next;

        match outcome {
            Outcome::Nothing => {}
            Outcome::Emitted(facet) => facets.push(facet),
            Outcome::Dropped => dropped += 1,
        }
    }

    debug!("parsed {} facet(s)", facets.len());
    if dropped > 0 {
        warn!("dropped {dropped} malformed facet(s)");
    }

    Ok(Mesh::with_dropped(facets, dropped))
}

/// Advance the state machine by one line.
fn step(state: State, line: &str) -> (State, Outcome) {
    match state {
        State::WaitingNormal => match triplet(line, "facet normal") {
            Some(normal) => (State::WaitingPoint { normal }, Outcome::Nothing),
            None => (State::WaitingNormal, Outcome::Nothing),
        },
        State::WaitingPoint { normal } => {
            if line.contains("outer loop") {
                (
                    State::ReadingPoint {
                        normal,
                        vertices: Vec::new(),
                    },
                    Outcome::Nothing,
                )
            } else {
                (State::WaitingPoint { normal }, Outcome::Nothing)
            }
        }
        State::ReadingPoint {
            normal,
            mut vertices,
        } => {
            if let Some(vertex) = triplet(line, "vertex") {
                vertices.push(Point::from_pos(vertex));
                return (State::ReadingPoint { normal, vertices }, Outcome::Nothing);
            }

            if line.contains("endloop") {
                let outcome = match <[Point; 3]>::try_from(vertices) {
                    Ok(corners) => Outcome::Emitted(Facet::new(corners, normal)),
                    Err(_) => Outcome::Dropped,
                };
                return (State::WaitingNormal, outcome);
            }

            (State::ReadingPoint { normal, vertices }, Outcome::Nothing)
        }
    }
}

/// Extract the three numbers following `keyword`, if the line carries that
/// record. Accepts anything finite `f64::from_str` does, which is looser
/// than the `-?\d+\.\d+` some exporters stick to (plain integers,
/// exponents). `nan`/`inf` literals would break downstream coordinate
/// equality, so they disqualify the line.
fn triplet(line: &str, keyword: &str) -> Option<Pos> {
    let rest = line.split_once(keyword)?.1;
    let mut parts = rest
        .split_whitespace()
        .map(|part| part.parse::<f64>().ok().filter(|value| value.is_finite()));

    let x = parts.next()??;
    let y = parts.next()??;
    let z = parts.next()??;
    Some(Pos::new(x, y, z))
}
